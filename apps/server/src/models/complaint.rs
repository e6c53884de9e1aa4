//! Complaint/claim register and the photo or document proofs attached to it.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::validation::{optional_text, required, required_text, unique_ids};
use crate::entity::{complaint_record, photo_document_proof};
use crate::error::AppResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ComplaintCategory {
    #[default]
    Complaint,
    Claim,
}

impl ComplaintCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Complaint => "complaint",
            Self::Claim => "claim",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "complaint" => Some(Self::Complaint),
            "claim" => Some(Self::Claim),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ComplaintStatus {
    #[default]
    Open,
    InProgress,
    Resolved,
    Closed,
}

impl ComplaintStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::InProgress => "in_progress",
            Self::Resolved => "resolved",
            Self::Closed => "closed",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "open" => Some(Self::Open),
            "in_progress" => Some(Self::InProgress),
            "resolved" => Some(Self::Resolved),
            "closed" => Some(Self::Closed),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ProofType {
    #[default]
    Photo,
    Document,
}

impl ProofType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Photo => "photo",
            Self::Document => "document",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "photo" => Some(Self::Photo),
            "document" => Some(Self::Document),
            _ => None,
        }
    }
}

/// Create/update payload for a photo or document proof.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct PhotoDocumentProofRequest {
    pub title: Option<String>,
    pub proof_type: Option<ProofType>,
    /// URL of the already uploaded file
    pub file_url: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone)]
pub struct PhotoDocumentProofInput {
    pub title: String,
    pub proof_type: ProofType,
    pub file_url: String,
    pub description: Option<String>,
}

impl PhotoDocumentProofRequest {
    pub fn validate(self) -> AppResult<PhotoDocumentProofInput> {
        Ok(PhotoDocumentProofInput {
            title: required_text("title", self.title)?,
            proof_type: self.proof_type.unwrap_or_default(),
            file_url: required_text("file_url", self.file_url)?,
            description: optional_text(self.description),
        })
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PhotoDocumentProofResponse {
    pub id: Uuid,
    pub title: String,
    pub proof_type: ProofType,
    pub file_url: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<photo_document_proof::Model> for PhotoDocumentProofResponse {
    fn from(m: photo_document_proof::Model) -> Self {
        Self {
            id: m.id,
            title: m.title,
            proof_type: ProofType::parse(&m.proof_type).unwrap_or_default(),
            file_url: m.file_url,
            description: m.description,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

/// Create/update payload for a complaint or claim.
///
/// On update `photo_document_proof_ids` replaces the attached proofs.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct ComplaintRecordRequest {
    /// Business number, unique across the register
    pub number: Option<String>,
    pub category: Option<ComplaintCategory>,
    pub complainant_name: Option<String>,
    pub received_date: Option<NaiveDate>,
    pub description: Option<String>,
    pub resolution_description: Option<String>,
    pub resolution_date: Option<NaiveDate>,
    pub status: Option<ComplaintStatus>,
    #[serde(default)]
    pub photo_document_proof_ids: Vec<Uuid>,
}

#[derive(Debug, Clone)]
pub struct ComplaintRecordInput {
    pub number: String,
    pub category: ComplaintCategory,
    pub complainant_name: String,
    pub received_date: NaiveDate,
    pub description: String,
    pub resolution_description: Option<String>,
    pub resolution_date: Option<NaiveDate>,
    pub status: ComplaintStatus,
    pub photo_document_proof_ids: Vec<Uuid>,
}

impl ComplaintRecordRequest {
    pub fn validate(self) -> AppResult<ComplaintRecordInput> {
        Ok(ComplaintRecordInput {
            number: required_text("number", self.number)?,
            category: self.category.unwrap_or_default(),
            complainant_name: required_text("complainant_name", self.complainant_name)?,
            received_date: required("received_date", self.received_date)?,
            description: required_text("description", self.description)?,
            resolution_description: optional_text(self.resolution_description),
            resolution_date: self.resolution_date,
            status: self.status.unwrap_or_default(),
            photo_document_proof_ids: unique_ids(self.photo_document_proof_ids),
        })
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ComplaintRecordResponse {
    pub id: Uuid,
    pub number: String,
    pub category: ComplaintCategory,
    pub complainant_name: String,
    pub received_date: NaiveDate,
    pub description: String,
    pub resolution_description: Option<String>,
    pub resolution_date: Option<NaiveDate>,
    pub status: ComplaintStatus,
    pub photo_document_proofs: Vec<PhotoDocumentProofResponse>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ComplaintRecordResponse {
    pub fn from_model(m: complaint_record::Model, proofs: Vec<PhotoDocumentProofResponse>) -> Self {
        Self {
            id: m.id,
            number: m.number,
            category: ComplaintCategory::parse(&m.category).unwrap_or_default(),
            complainant_name: m.complainant_name,
            received_date: m.received_date,
            description: m.description,
            resolution_description: m.resolution_description,
            resolution_date: m.resolution_date,
            status: ComplaintStatus::parse(&m.status).unwrap_or_default(),
            photo_document_proofs: proofs,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_complaint_defaults() {
        let req: ComplaintRecordRequest = serde_json::from_value(json!({
            "number": " CR-001 ",
            "complainant_name": "Neighbour association",
            "received_date": "2026-09-30",
            "description": "Dust from excavation"
        }))
        .unwrap();
        let input = req.validate().unwrap();
        assert_eq!(input.number, "CR-001");
        assert_eq!(input.category, ComplaintCategory::Complaint);
        assert_eq!(input.status, ComplaintStatus::Open);
        assert!(input.photo_document_proof_ids.is_empty());
    }

    #[test]
    fn test_complaint_requires_number() {
        let req: ComplaintRecordRequest = serde_json::from_value(json!({
            "number": "",
            "complainant_name": "A",
            "received_date": "2026-09-30",
            "description": "B"
        }))
        .unwrap();
        let err = req.validate().unwrap_err();
        assert_eq!(err.to_string(), "Invalid input: number is required");
    }

    #[test]
    fn test_unknown_category_fails_to_deserialize() {
        let result: Result<ComplaintRecordRequest, _> =
            serde_json::from_value(json!({ "category": "grievance" }));
        assert!(result.is_err());
    }

    #[test]
    fn test_proof_requires_file_url() {
        let req = PhotoDocumentProofRequest {
            title: Some("Site photo".to_string()),
            proof_type: Some(ProofType::Photo),
            ..Default::default()
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_status_round_trips_through_storage_value() {
        for status in [
            ComplaintStatus::Open,
            ComplaintStatus::InProgress,
            ComplaintStatus::Resolved,
            ComplaintStatus::Closed,
        ] {
            assert_eq!(ComplaintStatus::parse(status.as_str()), Some(status));
        }
    }
}
