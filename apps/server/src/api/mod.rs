//! API endpoint modules.

pub mod complaints;
pub mod corrective_actions;
pub mod health;
pub mod incident_reports;
pub mod investigation_participants;
pub mod legal_requirements;
pub mod non_compliance_controls;
pub mod openapi;
pub mod photo_document_proofs;
pub mod reference_data;
pub mod training_plans;

use actix_web::web;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::error::AppError;

pub use openapi::ApiDoc;

/// Register every `/api` route plus the Swagger UI.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .app_data(json_config())
            .app_data(path_config())
            .app_data(query_config())
            .configure(health::configure_routes)
            .configure(reference_data::configure_routes)
            .configure(incident_reports::configure_routes)
            .configure(investigation_participants::configure_routes)
            .configure(corrective_actions::configure_routes)
            .configure(complaints::configure_routes)
            .configure(photo_document_proofs::configure_routes)
            .configure(non_compliance_controls::configure_routes)
            .configure(legal_requirements::configure_routes)
            .configure(training_plans::configure_routes),
    )
    .service(
        SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
    );
}

/// Malformed or mistyped JSON bodies become 400 responses.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| AppError::InvalidInput(err.to_string()).into())
}

/// Path ids that are not UUIDs cannot match a record.
fn path_config() -> web::PathConfig {
    web::PathConfig::default()
        .error_handler(|_err, req| AppError::NotFound(format!("Record at {}", req.path())).into())
}

fn query_config() -> web::QueryConfig {
    web::QueryConfig::default()
        .error_handler(|err, _req| AppError::InvalidInput(err.to_string()).into())
}
