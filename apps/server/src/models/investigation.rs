//! Investigation participant and corrective action models.

use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::validation::{optional_text, required_text};
use crate::entity::{corrective_action, investigation_participant};
use crate::error::AppResult;

/// Corrective action progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum CorrectiveActionStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
}

impl CorrectiveActionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(Self::Pending),
            "in_progress" => Some(Self::InProgress),
            "completed" => Some(Self::Completed),
            _ => None,
        }
    }
}

/// Create/update payload for an investigation participant.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct InvestigationParticipantRequest {
    pub name: Option<String>,
    pub role: Option<String>,
    /// Id of a position reference record
    pub position_id: Option<Uuid>,
}

#[derive(Debug, Clone)]
pub struct InvestigationParticipantInput {
    pub name: String,
    pub role: Option<String>,
    pub position_id: Option<Uuid>,
}

impl InvestigationParticipantRequest {
    pub fn validate(self) -> AppResult<InvestigationParticipantInput> {
        Ok(InvestigationParticipantInput {
            name: required_text("name", self.name)?,
            role: optional_text(self.role),
            position_id: self.position_id,
        })
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct InvestigationParticipantResponse {
    pub id: Uuid,
    pub name: String,
    pub role: Option<String>,
    pub position_id: Option<Uuid>,
    pub position_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl InvestigationParticipantResponse {
    /// Build the response, resolving the position name from `names`.
    pub fn from_model(m: investigation_participant::Model, names: &HashMap<Uuid, String>) -> Self {
        Self {
            id: m.id,
            position_name: m.position_id.and_then(|id| names.get(&id).cloned()),
            name: m.name,
            role: m.role,
            position_id: m.position_id,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

/// Create/update payload for a corrective action.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct CorrectiveActionRequest {
    pub description: Option<String>,
    pub responsible: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub status: Option<CorrectiveActionStatus>,
}

#[derive(Debug, Clone)]
pub struct CorrectiveActionInput {
    pub description: String,
    pub responsible: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub status: CorrectiveActionStatus,
}

impl CorrectiveActionRequest {
    pub fn validate(self) -> AppResult<CorrectiveActionInput> {
        Ok(CorrectiveActionInput {
            description: required_text("description", self.description)?,
            responsible: optional_text(self.responsible),
            due_date: self.due_date,
            status: self.status.unwrap_or_default(),
        })
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CorrectiveActionResponse {
    pub id: Uuid,
    pub description: String,
    pub responsible: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub status: CorrectiveActionStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<corrective_action::Model> for CorrectiveActionResponse {
    fn from(m: corrective_action::Model) -> Self {
        Self {
            id: m.id,
            description: m.description,
            responsible: m.responsible,
            due_date: m.due_date,
            status: CorrectiveActionStatus::parse(&m.status).unwrap_or_default(),
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}
