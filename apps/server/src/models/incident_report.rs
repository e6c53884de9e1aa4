//! Incident report models.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use super::investigation::{CorrectiveActionResponse, InvestigationParticipantResponse};
use super::validation::{optional_text, required, required_text, unique_ids};
use crate::entity::involved_person;
use crate::error::AppResult;

/// Person injured or otherwise involved in the incident.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct InvolvedPersonRequest {
    pub name: Option<String>,
    pub position: Option<String>,
    pub contact: Option<String>,
    pub injury_description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvolvedPersonInput {
    pub name: String,
    pub position: Option<String>,
    pub contact: Option<String>,
    pub injury_description: Option<String>,
}

impl InvolvedPersonRequest {
    pub fn validate(self) -> AppResult<InvolvedPersonInput> {
        Ok(InvolvedPersonInput {
            name: required_text("involved_person.name", self.name)?,
            position: optional_text(self.position),
            contact: optional_text(self.contact),
            injury_description: optional_text(self.injury_description),
        })
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct InvolvedPersonResponse {
    pub id: Uuid,
    pub name: String,
    pub position: Option<String>,
    pub contact: Option<String>,
    pub injury_description: Option<String>,
}

impl From<involved_person::Model> for InvolvedPersonResponse {
    fn from(m: involved_person::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            position: m.position,
            contact: m.contact,
            injury_description: m.injury_description,
        }
    }
}

/// Create/update payload for an incident report.
///
/// On update the relation id lists replace the existing associations.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct IncidentReportRequest {
    /// Name of the person filing the report
    pub name: Option<String>,
    /// Role of the person filing the report
    pub role: Option<String>,
    pub incident_date: Option<NaiveDate>,
    pub incident_time: Option<NaiveTime>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub immediate_cause: Option<String>,
    pub root_cause: Option<String>,
    pub department_id: Option<Uuid>,
    pub subproject_id: Option<Uuid>,
    pub involved_person: Option<InvolvedPersonRequest>,
    #[serde(default)]
    pub investigation_participant_ids: Vec<Uuid>,
    #[serde(default)]
    pub corrective_action_ids: Vec<Uuid>,
}

#[derive(Debug, Clone)]
pub struct IncidentReportInput {
    pub name: String,
    pub role: String,
    pub incident_date: NaiveDate,
    pub incident_time: Option<NaiveTime>,
    pub location: String,
    pub description: String,
    pub immediate_cause: Option<String>,
    pub root_cause: Option<String>,
    pub department_id: Option<Uuid>,
    pub subproject_id: Option<Uuid>,
    pub involved_person: Option<InvolvedPersonInput>,
    pub investigation_participant_ids: Vec<Uuid>,
    pub corrective_action_ids: Vec<Uuid>,
}

impl IncidentReportRequest {
    pub fn validate(self) -> AppResult<IncidentReportInput> {
        Ok(IncidentReportInput {
            name: required_text("name", self.name)?,
            role: required_text("role", self.role)?,
            incident_date: required("incident_date", self.incident_date)?,
            incident_time: self.incident_time,
            location: required_text("location", self.location)?,
            description: required_text("description", self.description)?,
            immediate_cause: optional_text(self.immediate_cause),
            root_cause: optional_text(self.root_cause),
            department_id: self.department_id,
            subproject_id: self.subproject_id,
            involved_person: self
                .involved_person
                .map(InvolvedPersonRequest::validate)
                .transpose()?,
            investigation_participant_ids: unique_ids(self.investigation_participant_ids),
            corrective_action_ids: unique_ids(self.corrective_action_ids),
        })
    }
}

/// Incident report with its relations flattened in.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct IncidentReportResponse {
    pub id: Uuid,
    pub name: String,
    pub role: String,
    pub incident_date: NaiveDate,
    pub incident_time: Option<NaiveTime>,
    pub location: String,
    pub description: String,
    pub immediate_cause: Option<String>,
    pub root_cause: Option<String>,
    pub department_id: Option<Uuid>,
    pub department_name: Option<String>,
    pub subproject_id: Option<Uuid>,
    pub subproject_name: Option<String>,
    pub involved_person: Option<InvolvedPersonResponse>,
    pub investigation_participants: Vec<InvestigationParticipantResponse>,
    pub corrective_actions: Vec<CorrectiveActionResponse>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Filters for listing incident reports.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct IncidentReportListQuery {
    pub department_id: Option<Uuid>,
    pub subproject_id: Option<Uuid>,
}
