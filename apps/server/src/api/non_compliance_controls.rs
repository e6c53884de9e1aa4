//! Non-compliance control handlers.

use actix_web::{HttpResponse, web};
use tracing::info;
use uuid::Uuid;

use crate::db::DbPool;
use crate::error::{AppError, AppResult};
use crate::models::{
    DeleteResponse, NonComplianceControlRequest, NonComplianceControlResponse,
    NonComplianceListQuery,
};

/// List non-compliance controls, newest first, optionally by status.
#[utoipa::path(
    get,
    path = "/api/non-compliance-controls",
    tag = "Non-compliance",
    params(NonComplianceListQuery),
    responses(
        (status = 200, description = "Non-compliance controls", body = Vec<NonComplianceControlResponse>),
        (status = 400, description = "Unknown status filter", body = crate::error::ErrorResponse),
    )
)]
pub async fn list_non_compliance_controls(
    pool: web::Data<DbPool>,
    query: web::Query<NonComplianceListQuery>,
) -> AppResult<HttpResponse> {
    let records = pool.list_non_compliance_controls(&query).await?;
    Ok(HttpResponse::Ok().json(records))
}

/// Get a non-compliance control by id.
#[utoipa::path(
    get,
    path = "/api/non-compliance-controls/{id}",
    tag = "Non-compliance",
    params(
        ("id" = Uuid, Path, description = "Non-compliance control UUID")
    ),
    responses(
        (status = 200, description = "Non-compliance control", body = NonComplianceControlResponse),
        (status = 404, description = "Non-compliance control not found", body = crate::error::ErrorResponse),
    )
)]
pub async fn get_non_compliance_control(
    pool: web::Data<DbPool>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let record = pool
        .get_non_compliance_control(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Non-compliance control {}", id)))?;

    Ok(HttpResponse::Ok().json(record))
}

/// Register a non-compliance.
#[utoipa::path(
    post,
    path = "/api/non-compliance-controls",
    tag = "Non-compliance",
    request_body = NonComplianceControlRequest,
    responses(
        (status = 201, description = "Non-compliance control created", body = NonComplianceControlResponse),
        (status = 400, description = "Validation failed, duplicate number or wrong reference kind", body = crate::error::ErrorResponse),
    )
)]
pub async fn create_non_compliance_control(
    pool: web::Data<DbPool>,
    body: web::Json<NonComplianceControlRequest>,
) -> AppResult<HttpResponse> {
    let input = body.into_inner().validate()?;

    let record = pool.create_non_compliance_control(input).await?;
    info!(id = %record.id, "Non-compliance control created");

    Ok(HttpResponse::Created().json(record))
}

/// Replace a non-compliance control.
#[utoipa::path(
    put,
    path = "/api/non-compliance-controls/{id}",
    tag = "Non-compliance",
    params(
        ("id" = Uuid, Path, description = "Non-compliance control UUID")
    ),
    request_body = NonComplianceControlRequest,
    responses(
        (status = 200, description = "Non-compliance control updated", body = NonComplianceControlResponse),
        (status = 400, description = "Validation failed, duplicate number or wrong reference kind", body = crate::error::ErrorResponse),
        (status = 404, description = "Non-compliance control not found", body = crate::error::ErrorResponse),
    )
)]
pub async fn update_non_compliance_control(
    pool: web::Data<DbPool>,
    path: web::Path<Uuid>,
    body: web::Json<NonComplianceControlRequest>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let input = body.into_inner().validate()?;

    let record = pool.update_non_compliance_control(id, input).await?;
    info!(id = %id, "Non-compliance control updated");

    Ok(HttpResponse::Ok().json(record))
}

/// Delete a non-compliance control.
#[utoipa::path(
    delete,
    path = "/api/non-compliance-controls/{id}",
    tag = "Non-compliance",
    params(
        ("id" = Uuid, Path, description = "Non-compliance control UUID")
    ),
    responses(
        (status = 200, description = "Non-compliance control deleted", body = DeleteResponse),
        (status = 404, description = "Non-compliance control not found", body = crate::error::ErrorResponse),
    )
)]
pub async fn delete_non_compliance_control(
    pool: web::Data<DbPool>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    pool.delete_non_compliance_control(id).await?;
    info!(id = %id, "Non-compliance control deleted");

    Ok(HttpResponse::Ok().json(DeleteResponse::ok()))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/non-compliance-controls")
            .route(web::get().to(list_non_compliance_controls))
            .route(web::post().to(create_non_compliance_control)),
    )
    .service(
        web::resource("/non-compliance-controls/{id}")
            .route(web::get().to(get_non_compliance_control))
            .route(web::put().to(update_non_compliance_control))
            .route(web::delete().to(delete_non_compliance_control)),
    );
}
