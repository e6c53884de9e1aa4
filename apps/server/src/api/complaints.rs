//! Complaint and claim registration handlers.

use actix_web::{HttpResponse, web};
use tracing::info;
use uuid::Uuid;

use crate::db::DbPool;
use crate::error::{AppError, AppResult};
use crate::models::{ComplaintRecordRequest, ComplaintRecordResponse, DeleteResponse};

/// List complaint and claim records with their proofs, newest first.
#[utoipa::path(
    get,
    path = "/api/complaints-registration",
    tag = "Complaints",
    responses(
        (status = 200, description = "Complaint records", body = Vec<ComplaintRecordResponse>),
    )
)]
pub async fn list_complaint_records(pool: web::Data<DbPool>) -> AppResult<HttpResponse> {
    let records = pool.list_complaint_records().await?;
    Ok(HttpResponse::Ok().json(records))
}

/// Get a complaint record by id.
#[utoipa::path(
    get,
    path = "/api/complaints-registration/{id}",
    tag = "Complaints",
    params(
        ("id" = Uuid, Path, description = "Complaint record UUID")
    ),
    responses(
        (status = 200, description = "Complaint record", body = ComplaintRecordResponse),
        (status = 404, description = "Complaint record not found", body = crate::error::ErrorResponse),
    )
)]
pub async fn get_complaint_record(
    pool: web::Data<DbPool>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let record = pool
        .get_complaint_record(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Complaint record {}", id)))?;

    Ok(HttpResponse::Ok().json(record))
}

/// Register a complaint or claim.
///
/// The `number` must not be used by any other record.
#[utoipa::path(
    post,
    path = "/api/complaints-registration",
    tag = "Complaints",
    request_body = ComplaintRecordRequest,
    responses(
        (status = 201, description = "Complaint record created", body = ComplaintRecordResponse),
        (status = 400, description = "Validation failed, duplicate number or unknown proof ids", body = crate::error::ErrorResponse),
    )
)]
pub async fn create_complaint_record(
    pool: web::Data<DbPool>,
    body: web::Json<ComplaintRecordRequest>,
) -> AppResult<HttpResponse> {
    let input = body.into_inner().validate()?;

    let record = pool.create_complaint_record(input).await?;
    info!(id = %record.id, "Complaint record created");

    Ok(HttpResponse::Created().json(record))
}

/// Replace a complaint record and its attached proofs.
#[utoipa::path(
    put,
    path = "/api/complaints-registration/{id}",
    tag = "Complaints",
    params(
        ("id" = Uuid, Path, description = "Complaint record UUID")
    ),
    request_body = ComplaintRecordRequest,
    responses(
        (status = 200, description = "Complaint record updated", body = ComplaintRecordResponse),
        (status = 400, description = "Validation failed, duplicate number or unknown proof ids", body = crate::error::ErrorResponse),
        (status = 404, description = "Complaint record not found", body = crate::error::ErrorResponse),
    )
)]
pub async fn update_complaint_record(
    pool: web::Data<DbPool>,
    path: web::Path<Uuid>,
    body: web::Json<ComplaintRecordRequest>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let input = body.into_inner().validate()?;

    let record = pool.update_complaint_record(id, input).await?;
    info!(id = %id, "Complaint record updated");

    Ok(HttpResponse::Ok().json(record))
}

/// Delete a complaint record. Attached proofs are kept.
#[utoipa::path(
    delete,
    path = "/api/complaints-registration/{id}",
    tag = "Complaints",
    params(
        ("id" = Uuid, Path, description = "Complaint record UUID")
    ),
    responses(
        (status = 200, description = "Complaint record deleted", body = DeleteResponse),
        (status = 404, description = "Complaint record not found", body = crate::error::ErrorResponse),
    )
)]
pub async fn delete_complaint_record(
    pool: web::Data<DbPool>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    pool.delete_complaint_record(id).await?;
    info!(id = %id, "Complaint record deleted");

    Ok(HttpResponse::Ok().json(DeleteResponse::ok()))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/complaints-registration")
            .route(web::get().to(list_complaint_records))
            .route(web::post().to(create_complaint_record)),
    )
    .service(
        web::resource("/complaints-registration/{id}")
            .route(web::get().to(get_complaint_record))
            .route(web::put().to(update_complaint_record))
            .route(web::delete().to(delete_complaint_record)),
    );
}
