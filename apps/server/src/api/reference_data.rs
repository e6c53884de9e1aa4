//! Reference data handlers.
//!
//! Every reference kind gets its own scope (`/departments`, `/positions`,
//! ...) carrying the kind as app data, and all scopes share these handlers.

use actix_web::{HttpResponse, web};
use tracing::info;
use uuid::Uuid;

use crate::db::DbPool;
use crate::error::{AppError, AppResult};
use crate::models::{
    DeleteResponse, ReferenceKind, ReferenceRecordRequest, ReferenceRecordResponse,
};

/// List reference records of one kind, newest first.
#[utoipa::path(
    get,
    path = "/api/{reference_type}",
    tag = "Reference Data",
    params(
        ("reference_type" = String, Path, description = "departments, positions, subprojects, toolbox-talks, environmental-factors, risks-and-impacts or acceptance-confirmations")
    ),
    responses(
        (status = 200, description = "Reference records", body = Vec<ReferenceRecordResponse>),
        (status = 500, description = "Database error", body = crate::error::ErrorResponse),
    )
)]
pub async fn list_reference_records(
    pool: web::Data<DbPool>,
    kind: web::Data<ReferenceKind>,
) -> AppResult<HttpResponse> {
    let kind = *kind.get_ref();
    let records: Vec<ReferenceRecordResponse> = pool
        .list_reference_records(kind)
        .await?
        .into_iter()
        .map(|m| ReferenceRecordResponse::from_model(kind, m))
        .collect();

    Ok(HttpResponse::Ok().json(records))
}

/// Get a reference record by id.
#[utoipa::path(
    get,
    path = "/api/{reference_type}/{id}",
    tag = "Reference Data",
    params(
        ("reference_type" = String, Path, description = "Reference data route segment"),
        ("id" = Uuid, Path, description = "Record UUID")
    ),
    responses(
        (status = 200, description = "Reference record", body = ReferenceRecordResponse),
        (status = 404, description = "Record not found", body = crate::error::ErrorResponse),
    )
)]
pub async fn get_reference_record(
    pool: web::Data<DbPool>,
    kind: web::Data<ReferenceKind>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let kind = *kind.get_ref();
    let id = path.into_inner();

    let record = pool
        .get_reference_record(kind, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("{} {}", kind.label(), id)))?;

    Ok(HttpResponse::Ok().json(ReferenceRecordResponse::from_model(kind, record)))
}

/// Create a reference record.
#[utoipa::path(
    post,
    path = "/api/{reference_type}",
    tag = "Reference Data",
    params(
        ("reference_type" = String, Path, description = "Reference data route segment")
    ),
    request_body = ReferenceRecordRequest,
    responses(
        (status = 201, description = "Record created", body = ReferenceRecordResponse),
        (status = 400, description = "Missing name", body = crate::error::ErrorResponse),
    )
)]
pub async fn create_reference_record(
    pool: web::Data<DbPool>,
    kind: web::Data<ReferenceKind>,
    body: web::Json<ReferenceRecordRequest>,
) -> AppResult<HttpResponse> {
    let kind = *kind.get_ref();
    let input = body.into_inner().validate()?;

    let record = pool.create_reference_record(kind, input).await?;
    info!(kind = %kind, id = %record.id, "Reference record created");

    Ok(HttpResponse::Created().json(ReferenceRecordResponse::from_model(kind, record)))
}

/// Replace a reference record.
#[utoipa::path(
    put,
    path = "/api/{reference_type}/{id}",
    tag = "Reference Data",
    params(
        ("reference_type" = String, Path, description = "Reference data route segment"),
        ("id" = Uuid, Path, description = "Record UUID")
    ),
    request_body = ReferenceRecordRequest,
    responses(
        (status = 200, description = "Record updated", body = ReferenceRecordResponse),
        (status = 400, description = "Missing name", body = crate::error::ErrorResponse),
        (status = 404, description = "Record not found", body = crate::error::ErrorResponse),
    )
)]
pub async fn update_reference_record(
    pool: web::Data<DbPool>,
    kind: web::Data<ReferenceKind>,
    path: web::Path<Uuid>,
    body: web::Json<ReferenceRecordRequest>,
) -> AppResult<HttpResponse> {
    let kind = *kind.get_ref();
    let id = path.into_inner();
    let input = body.into_inner().validate()?;

    let record = pool.update_reference_record(kind, id, input).await?;
    info!(kind = %kind, id = %id, "Reference record updated");

    Ok(HttpResponse::Ok().json(ReferenceRecordResponse::from_model(kind, record)))
}

/// Delete a reference record; records pointing at it keep a null reference.
#[utoipa::path(
    delete,
    path = "/api/{reference_type}/{id}",
    tag = "Reference Data",
    params(
        ("reference_type" = String, Path, description = "Reference data route segment"),
        ("id" = Uuid, Path, description = "Record UUID")
    ),
    responses(
        (status = 200, description = "Record deleted", body = DeleteResponse),
        (status = 404, description = "Record not found", body = crate::error::ErrorResponse),
    )
)]
pub async fn delete_reference_record(
    pool: web::Data<DbPool>,
    kind: web::Data<ReferenceKind>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let kind = *kind.get_ref();
    let id = path.into_inner();

    pool.delete_reference_record(kind, id).await?;
    info!(kind = %kind, id = %id, "Reference record deleted");

    Ok(HttpResponse::Ok().json(DeleteResponse::ok()))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    for kind in ReferenceKind::ALL {
        cfg.service(
            web::scope(&format!("/{}", kind.route_segment()))
                .app_data(web::Data::new(kind))
                .service(
                    web::resource("")
                        .route(web::get().to(list_reference_records))
                        .route(web::post().to(create_reference_record)),
                )
                .service(
                    web::resource("/{id}")
                        .route(web::get().to(get_reference_record))
                        .route(web::put().to(update_reference_record))
                        .route(web::delete().to(delete_reference_record)),
                ),
        );
    }
}
