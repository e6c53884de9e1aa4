//! OpenAPI documentation configuration.

use utoipa::OpenApi;

use crate::{api, error, models};

/// OpenAPI documentation.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "OHS Compliance Server",
        version = "0.1.0",
        description = "API for occupational health and safety compliance records: incident reports, complaints, non-compliance controls, legal requirements, training plans and reference data"
    ),
    servers(
        (url = "/", description = "Local server")
    ),
    paths(
        // Health endpoints
        api::health::health,
        api::health::ready,
        // Reference data
        api::reference_data::list_reference_records,
        api::reference_data::get_reference_record,
        api::reference_data::create_reference_record,
        api::reference_data::update_reference_record,
        api::reference_data::delete_reference_record,
        // Incident reports
        api::incident_reports::list_incident_reports,
        api::incident_reports::get_incident_report,
        api::incident_reports::create_incident_report,
        api::incident_reports::update_incident_report,
        api::incident_reports::delete_incident_report,
        api::investigation_participants::list_investigation_participants,
        api::investigation_participants::get_investigation_participant,
        api::investigation_participants::create_investigation_participant,
        api::investigation_participants::update_investigation_participant,
        api::investigation_participants::delete_investigation_participant,
        api::corrective_actions::list_corrective_actions,
        api::corrective_actions::get_corrective_action,
        api::corrective_actions::create_corrective_action,
        api::corrective_actions::update_corrective_action,
        api::corrective_actions::delete_corrective_action,
        // Complaints
        api::complaints::list_complaint_records,
        api::complaints::get_complaint_record,
        api::complaints::create_complaint_record,
        api::complaints::update_complaint_record,
        api::complaints::delete_complaint_record,
        api::photo_document_proofs::list_photo_document_proofs,
        api::photo_document_proofs::get_photo_document_proof,
        api::photo_document_proofs::create_photo_document_proof,
        api::photo_document_proofs::update_photo_document_proof,
        api::photo_document_proofs::delete_photo_document_proof,
        // Registers
        api::non_compliance_controls::list_non_compliance_controls,
        api::non_compliance_controls::get_non_compliance_control,
        api::non_compliance_controls::create_non_compliance_control,
        api::non_compliance_controls::update_non_compliance_control,
        api::non_compliance_controls::delete_non_compliance_control,
        api::legal_requirements::list_legal_requirements,
        api::legal_requirements::get_legal_requirement,
        api::legal_requirements::create_legal_requirement,
        api::legal_requirements::update_legal_requirement,
        api::legal_requirements::delete_legal_requirement,
        api::training_plans::list_training_plans,
        api::training_plans::get_training_plan,
        api::training_plans::create_training_plan,
        api::training_plans::update_training_plan,
        api::training_plans::delete_training_plan,
    ),
    components(
        schemas(
            // Common
            error::ErrorResponse,
            models::DeleteResponse,
            // Health
            api::health::HealthResponse,
            api::health::ReadyResponse,
            // Reference data
            models::ReferenceKind,
            models::ReferenceRecordRequest,
            models::ReferenceRecordResponse,
            // Incident reports
            models::InvolvedPersonRequest,
            models::InvolvedPersonResponse,
            models::IncidentReportRequest,
            models::IncidentReportResponse,
            models::InvestigationParticipantRequest,
            models::InvestigationParticipantResponse,
            models::CorrectiveActionStatus,
            models::CorrectiveActionRequest,
            models::CorrectiveActionResponse,
            // Complaints
            models::ComplaintCategory,
            models::ComplaintStatus,
            models::ComplaintRecordRequest,
            models::ComplaintRecordResponse,
            models::ProofType,
            models::PhotoDocumentProofRequest,
            models::PhotoDocumentProofResponse,
            // Registers
            models::NonComplianceStatus,
            models::Effectiveness,
            models::NonComplianceControlRequest,
            models::NonComplianceControlResponse,
            models::LegalRequirementStatus,
            models::LegalRequirementRequest,
            models::LegalRequirementResponse,
            models::TrainingPlanStatus,
            models::TrainingPlanRequest,
            models::TrainingPlanResponse,
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Reference Data", description = "Departments, positions, subprojects and other lookup lists"),
        (name = "Incident Reports", description = "Incident reports with involved person and investigation"),
        (name = "Investigation Participants", description = "People taking part in incident investigations"),
        (name = "Corrective Actions", description = "Actions raised by incident investigations"),
        (name = "Complaints", description = "Complaint and claim register with photo/document proofs"),
        (name = "Non-compliance", description = "Non-compliance control register"),
        (name = "Legal Requirements", description = "Applicable legal requirements register"),
        (name = "Training Plans", description = "Scheduled OHS training")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_every_resource() {
        let doc = ApiDoc::openapi();
        for path in [
            "/api/health",
            "/api/{reference_type}/{id}",
            "/api/incident-reports/{id}",
            "/api/complaints-registration",
            "/api/non-compliance-controls",
            "/api/legal-requirements/{id}",
            "/api/training-plans",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {}", path);
        }
    }
}
