//! Legal requirement register handlers.

use actix_web::{HttpResponse, web};
use tracing::info;
use uuid::Uuid;

use crate::db::DbPool;
use crate::error::{AppError, AppResult};
use crate::models::{DeleteResponse, LegalRequirementRequest, LegalRequirementResponse};

/// List legal requirements, newest first.
#[utoipa::path(
    get,
    path = "/api/legal-requirements",
    tag = "Legal Requirements",
    responses(
        (status = 200, description = "Legal requirements", body = Vec<LegalRequirementResponse>),
    )
)]
pub async fn list_legal_requirements(pool: web::Data<DbPool>) -> AppResult<HttpResponse> {
    let records: Vec<LegalRequirementResponse> = pool
        .list_legal_requirements()
        .await?
        .into_iter()
        .map(LegalRequirementResponse::from)
        .collect();
    Ok(HttpResponse::Ok().json(records))
}

/// Get a legal requirement by id.
#[utoipa::path(
    get,
    path = "/api/legal-requirements/{id}",
    tag = "Legal Requirements",
    params(
        ("id" = Uuid, Path, description = "Legal requirement UUID")
    ),
    responses(
        (status = 200, description = "Legal requirement", body = LegalRequirementResponse),
        (status = 404, description = "Legal requirement not found", body = crate::error::ErrorResponse),
    )
)]
pub async fn get_legal_requirement(
    pool: web::Data<DbPool>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let record = pool
        .get_legal_requirement(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Legal requirement {}", id)))?;

    Ok(HttpResponse::Ok().json(LegalRequirementResponse::from(record)))
}

/// Register a legal requirement.
#[utoipa::path(
    post,
    path = "/api/legal-requirements",
    tag = "Legal Requirements",
    request_body = LegalRequirementRequest,
    responses(
        (status = 201, description = "Legal requirement created", body = LegalRequirementResponse),
        (status = 400, description = "Validation failed or duplicate number", body = crate::error::ErrorResponse),
    )
)]
pub async fn create_legal_requirement(
    pool: web::Data<DbPool>,
    body: web::Json<LegalRequirementRequest>,
) -> AppResult<HttpResponse> {
    let input = body.into_inner().validate()?;

    let record = pool.create_legal_requirement(input).await?;
    info!(id = %record.id, "Legal requirement created");

    Ok(HttpResponse::Created().json(LegalRequirementResponse::from(record)))
}

/// Replace a legal requirement.
#[utoipa::path(
    put,
    path = "/api/legal-requirements/{id}",
    tag = "Legal Requirements",
    params(
        ("id" = Uuid, Path, description = "Legal requirement UUID")
    ),
    request_body = LegalRequirementRequest,
    responses(
        (status = 200, description = "Legal requirement updated", body = LegalRequirementResponse),
        (status = 400, description = "Validation failed or duplicate number", body = crate::error::ErrorResponse),
        (status = 404, description = "Legal requirement not found", body = crate::error::ErrorResponse),
    )
)]
pub async fn update_legal_requirement(
    pool: web::Data<DbPool>,
    path: web::Path<Uuid>,
    body: web::Json<LegalRequirementRequest>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let input = body.into_inner().validate()?;

    let record = pool.update_legal_requirement(id, input).await?;
    info!(id = %id, "Legal requirement updated");

    Ok(HttpResponse::Ok().json(LegalRequirementResponse::from(record)))
}

/// Delete a legal requirement.
#[utoipa::path(
    delete,
    path = "/api/legal-requirements/{id}",
    tag = "Legal Requirements",
    params(
        ("id" = Uuid, Path, description = "Legal requirement UUID")
    ),
    responses(
        (status = 200, description = "Legal requirement deleted", body = DeleteResponse),
        (status = 404, description = "Legal requirement not found", body = crate::error::ErrorResponse),
    )
)]
pub async fn delete_legal_requirement(
    pool: web::Data<DbPool>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    pool.delete_legal_requirement(id).await?;
    info!(id = %id, "Legal requirement deleted");

    Ok(HttpResponse::Ok().json(DeleteResponse::ok()))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/legal-requirements")
            .route(web::get().to(list_legal_requirements))
            .route(web::post().to(create_legal_requirement)),
    )
    .service(
        web::resource("/legal-requirements/{id}")
            .route(web::get().to(get_legal_requirement))
            .route(web::put().to(update_legal_requirement))
            .route(web::delete().to(delete_legal_requirement)),
    );
}
