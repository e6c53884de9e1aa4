//! Non-compliance control models.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use super::validation::{optional_text, required, required_text};
use crate::entity::non_compliance_control;
use crate::error::AppResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum NonComplianceStatus {
    #[default]
    Open,
    InProgress,
    Closed,
}

impl NonComplianceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::InProgress => "in_progress",
            Self::Closed => "closed",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "open" => Some(Self::Open),
            "in_progress" => Some(Self::InProgress),
            "closed" => Some(Self::Closed),
            _ => None,
        }
    }
}

/// Outcome of the effectiveness review of a corrective measure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Effectiveness {
    #[default]
    Pending,
    Effective,
    NotEffective,
}

impl Effectiveness {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Effective => "effective",
            Self::NotEffective => "not_effective",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(Self::Pending),
            "effective" => Some(Self::Effective),
            "not_effective" => Some(Self::NotEffective),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct NonComplianceControlRequest {
    pub number: Option<String>,
    pub description: Option<String>,
    pub detected_date: Option<NaiveDate>,
    pub corrective_measure: Option<String>,
    pub responsible: Option<String>,
    pub status: Option<NonComplianceStatus>,
    pub effectiveness: Option<Effectiveness>,
    pub department_id: Option<Uuid>,
    pub subproject_id: Option<Uuid>,
}

#[derive(Debug, Clone)]
pub struct NonComplianceControlInput {
    pub number: String,
    pub description: String,
    pub detected_date: NaiveDate,
    pub corrective_measure: Option<String>,
    pub responsible: Option<String>,
    pub status: NonComplianceStatus,
    pub effectiveness: Effectiveness,
    pub department_id: Option<Uuid>,
    pub subproject_id: Option<Uuid>,
}

impl NonComplianceControlRequest {
    pub fn validate(self) -> AppResult<NonComplianceControlInput> {
        Ok(NonComplianceControlInput {
            number: required_text("number", self.number)?,
            description: required_text("description", self.description)?,
            detected_date: required("detected_date", self.detected_date)?,
            corrective_measure: optional_text(self.corrective_measure),
            responsible: optional_text(self.responsible),
            status: self.status.unwrap_or_default(),
            effectiveness: self.effectiveness.unwrap_or_default(),
            department_id: self.department_id,
            subproject_id: self.subproject_id,
        })
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct NonComplianceControlResponse {
    pub id: Uuid,
    pub number: String,
    pub description: String,
    pub detected_date: NaiveDate,
    pub corrective_measure: Option<String>,
    pub responsible: Option<String>,
    pub status: NonComplianceStatus,
    pub effectiveness: Effectiveness,
    pub department_id: Option<Uuid>,
    pub department_name: Option<String>,
    pub subproject_id: Option<Uuid>,
    pub subproject_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl NonComplianceControlResponse {
    pub fn from_model(
        m: non_compliance_control::Model,
        names: &std::collections::HashMap<Uuid, String>,
    ) -> Self {
        Self {
            id: m.id,
            department_name: m.department_id.and_then(|id| names.get(&id).cloned()),
            subproject_name: m.subproject_id.and_then(|id| names.get(&id).cloned()),
            number: m.number,
            description: m.description,
            detected_date: m.detected_date,
            corrective_measure: m.corrective_measure,
            responsible: m.responsible,
            status: NonComplianceStatus::parse(&m.status).unwrap_or_default(),
            effectiveness: Effectiveness::parse(&m.effectiveness).unwrap_or_default(),
            department_id: m.department_id,
            subproject_id: m.subproject_id,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

/// Filters for listing non-compliance controls.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct NonComplianceListQuery {
    pub status: Option<NonComplianceStatus>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_defaults_open_and_pending() {
        let req: NonComplianceControlRequest = serde_json::from_value(json!({
            "number": "NC-7",
            "description": "Missing fire extinguisher inspection tags",
            "detected_date": "2026-10-02"
        }))
        .unwrap();
        let input = req.validate().unwrap();
        assert_eq!(input.status, NonComplianceStatus::Open);
        assert_eq!(input.effectiveness, Effectiveness::Pending);
    }

    #[test]
    fn test_detected_date_is_required() {
        let req = NonComplianceControlRequest {
            number: Some("NC-8".to_string()),
            description: Some("Blocked exit".to_string()),
            ..Default::default()
        };
        let err = req.validate().unwrap_err();
        assert!(err.to_string().contains("detected_date"));
    }

    #[test]
    fn test_effectiveness_serializes_snake_case() {
        assert_eq!(
            serde_json::to_value(Effectiveness::NotEffective).unwrap(),
            json!("not_effective")
        );
    }
}
