//! Legal requirement register models.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::validation::{optional_text, required, required_text};
use crate::entity::legal_requirement;
use crate::error::AppResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum LegalRequirementStatus {
    #[default]
    InForce,
    Amended,
    Repealed,
}

impl LegalRequirementStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InForce => "in_force",
            Self::Amended => "amended",
            Self::Repealed => "repealed",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "in_force" => Some(Self::InForce),
            "amended" => Some(Self::Amended),
            "repealed" => Some(Self::Repealed),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct LegalRequirementRequest {
    /// Official number of the regulation
    pub number: Option<String>,
    pub title: Option<String>,
    pub issuing_body: Option<String>,
    pub effective_date: Option<NaiveDate>,
    pub status: Option<LegalRequirementStatus>,
    pub file_url: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone)]
pub struct LegalRequirementInput {
    pub number: String,
    pub title: String,
    pub issuing_body: Option<String>,
    pub effective_date: NaiveDate,
    pub status: LegalRequirementStatus,
    pub file_url: Option<String>,
    pub description: Option<String>,
}

impl LegalRequirementRequest {
    pub fn validate(self) -> AppResult<LegalRequirementInput> {
        Ok(LegalRequirementInput {
            number: required_text("number", self.number)?,
            title: required_text("title", self.title)?,
            issuing_body: optional_text(self.issuing_body),
            effective_date: required("effective_date", self.effective_date)?,
            status: self.status.unwrap_or_default(),
            file_url: optional_text(self.file_url),
            description: optional_text(self.description),
        })
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LegalRequirementResponse {
    pub id: Uuid,
    pub number: String,
    pub title: String,
    pub issuing_body: Option<String>,
    pub effective_date: NaiveDate,
    pub status: LegalRequirementStatus,
    pub file_url: Option<String>,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<legal_requirement::Model> for LegalRequirementResponse {
    fn from(m: legal_requirement::Model) -> Self {
        Self {
            id: m.id,
            number: m.number,
            title: m.title,
            issuing_body: m.issuing_body,
            effective_date: m.effective_date,
            status: LegalRequirementStatus::parse(&m.status).unwrap_or_default(),
            file_url: m.file_url,
            description: m.description,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requires_title_and_effective_date() {
        let missing_title = LegalRequirementRequest {
            number: Some("Decree 1072".to_string()),
            effective_date: NaiveDate::from_ymd_opt(2015, 5, 26),
            ..Default::default()
        };
        assert!(missing_title.validate().is_err());

        let missing_date = LegalRequirementRequest {
            number: Some("Decree 1072".to_string()),
            title: Some("Single regulatory decree for labour".to_string()),
            ..Default::default()
        };
        assert!(missing_date.validate().is_err());
    }

    #[test]
    fn test_status_defaults_to_in_force() {
        let input = LegalRequirementRequest {
            number: Some("Res. 0312".to_string()),
            title: Some("Minimum OHS standards".to_string()),
            effective_date: NaiveDate::from_ymd_opt(2019, 2, 13),
            file_url: Some("  ".to_string()),
            ..Default::default()
        }
        .validate()
        .unwrap();
        assert_eq!(input.status, LegalRequirementStatus::InForce);
        assert_eq!(input.file_url, None);
    }
}
