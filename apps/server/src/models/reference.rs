//! Reference data models shared by departments, positions, subprojects and
//! the other lookup lists.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::validation::{optional_text, required_text};
use crate::entity::reference_record;
use crate::error::AppResult;

/// Kind of reference record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ReferenceKind {
    Department,
    Position,
    Subproject,
    ToolboxTalk,
    EnvironmentalFactor,
    RisksAndImpact,
    AcceptanceConfirmation,
}

impl ReferenceKind {
    pub const ALL: [ReferenceKind; 7] = [
        Self::Department,
        Self::Position,
        Self::Subproject,
        Self::ToolboxTalk,
        Self::EnvironmentalFactor,
        Self::RisksAndImpact,
        Self::AcceptanceConfirmation,
    ];

    /// Value stored in the `kind` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Department => "department",
            Self::Position => "position",
            Self::Subproject => "subproject",
            Self::ToolboxTalk => "toolbox_talk",
            Self::EnvironmentalFactor => "environmental_factor",
            Self::RisksAndImpact => "risks_and_impact",
            Self::AcceptanceConfirmation => "acceptance_confirmation",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == s)
    }

    /// Path segment under `/api`.
    pub fn route_segment(&self) -> &'static str {
        match self {
            Self::Department => "departments",
            Self::Position => "positions",
            Self::Subproject => "subprojects",
            Self::ToolboxTalk => "toolbox-talks",
            Self::EnvironmentalFactor => "environmental-factors",
            Self::RisksAndImpact => "risks-and-impacts",
            Self::AcceptanceConfirmation => "acceptance-confirmations",
        }
    }

    /// Human readable label used in error messages.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Department => "Department",
            Self::Position => "Position",
            Self::Subproject => "Subproject",
            Self::ToolboxTalk => "Toolbox talk",
            Self::EnvironmentalFactor => "Environmental factor",
            Self::RisksAndImpact => "Risks and impact",
            Self::AcceptanceConfirmation => "Acceptance confirmation",
        }
    }
}

impl std::fmt::Display for ReferenceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Create/update payload for a reference record.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct ReferenceRecordRequest {
    pub name: Option<String>,
    pub code: Option<String>,
    pub description: Option<String>,
}

/// Validated reference record fields.
#[derive(Debug, Clone)]
pub struct ReferenceRecordInput {
    pub name: String,
    pub code: Option<String>,
    pub description: Option<String>,
}

impl ReferenceRecordRequest {
    pub fn validate(self) -> AppResult<ReferenceRecordInput> {
        Ok(ReferenceRecordInput {
            name: required_text("name", self.name)?,
            code: optional_text(self.code),
            description: optional_text(self.description),
        })
    }
}

/// Reference record as returned by the API.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ReferenceRecordResponse {
    pub id: Uuid,
    pub kind: ReferenceKind,
    pub name: String,
    pub code: Option<String>,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ReferenceRecordResponse {
    pub fn from_model(kind: ReferenceKind, m: reference_record::Model) -> Self {
        Self {
            id: m.id,
            kind,
            name: m.name,
            code: m.code,
            description: m.description,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}
