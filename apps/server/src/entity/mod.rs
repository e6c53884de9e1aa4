//! SeaORM entity definitions.

pub mod complaint_record;
pub mod complaint_record_proof;
pub mod corrective_action;
pub mod incident_report;
pub mod incident_report_corrective_action;
pub mod incident_report_participant;
pub mod investigation_participant;
pub mod involved_person;
pub mod legal_requirement;
pub mod non_compliance_control;
pub mod photo_document_proof;
pub mod reference_record;
pub mod training_plan;
