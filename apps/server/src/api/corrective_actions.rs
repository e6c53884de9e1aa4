//! Corrective action handlers.

use actix_web::{HttpResponse, web};
use tracing::info;
use uuid::Uuid;

use crate::db::DbPool;
use crate::error::{AppError, AppResult};
use crate::models::{CorrectiveActionRequest, CorrectiveActionResponse, DeleteResponse};

/// List corrective actions, newest first.
#[utoipa::path(
    get,
    path = "/api/corrective-actions",
    tag = "Corrective Actions",
    responses(
        (status = 200, description = "Corrective actions", body = Vec<CorrectiveActionResponse>),
    )
)]
pub async fn list_corrective_actions(pool: web::Data<DbPool>) -> AppResult<HttpResponse> {
    let records: Vec<CorrectiveActionResponse> = pool
        .list_corrective_actions()
        .await?
        .into_iter()
        .map(CorrectiveActionResponse::from)
        .collect();
    Ok(HttpResponse::Ok().json(records))
}

/// Get a corrective action by id.
#[utoipa::path(
    get,
    path = "/api/corrective-actions/{id}",
    tag = "Corrective Actions",
    params(
        ("id" = Uuid, Path, description = "Corrective action UUID")
    ),
    responses(
        (status = 200, description = "Corrective action", body = CorrectiveActionResponse),
        (status = 404, description = "Corrective action not found", body = crate::error::ErrorResponse),
    )
)]
pub async fn get_corrective_action(
    pool: web::Data<DbPool>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let record = pool
        .get_corrective_action(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Corrective action {}", id)))?;

    Ok(HttpResponse::Ok().json(CorrectiveActionResponse::from(record)))
}

/// Create a corrective action.
#[utoipa::path(
    post,
    path = "/api/corrective-actions",
    tag = "Corrective Actions",
    request_body = CorrectiveActionRequest,
    responses(
        (status = 201, description = "Corrective action created", body = CorrectiveActionResponse),
        (status = 400, description = "Missing description or invalid status", body = crate::error::ErrorResponse),
    )
)]
pub async fn create_corrective_action(
    pool: web::Data<DbPool>,
    body: web::Json<CorrectiveActionRequest>,
) -> AppResult<HttpResponse> {
    let input = body.into_inner().validate()?;

    let record = pool.create_corrective_action(input).await?;
    info!(id = %record.id, "Corrective action created");

    Ok(HttpResponse::Created().json(CorrectiveActionResponse::from(record)))
}

/// Replace a corrective action.
#[utoipa::path(
    put,
    path = "/api/corrective-actions/{id}",
    tag = "Corrective Actions",
    params(
        ("id" = Uuid, Path, description = "Corrective action UUID")
    ),
    request_body = CorrectiveActionRequest,
    responses(
        (status = 200, description = "Corrective action updated", body = CorrectiveActionResponse),
        (status = 400, description = "Missing description or invalid status", body = crate::error::ErrorResponse),
        (status = 404, description = "Corrective action not found", body = crate::error::ErrorResponse),
    )
)]
pub async fn update_corrective_action(
    pool: web::Data<DbPool>,
    path: web::Path<Uuid>,
    body: web::Json<CorrectiveActionRequest>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let input = body.into_inner().validate()?;

    let record = pool.update_corrective_action(id, input).await?;
    info!(id = %id, "Corrective action updated");

    Ok(HttpResponse::Ok().json(CorrectiveActionResponse::from(record)))
}

/// Delete a corrective action, detaching it from incident reports first.
#[utoipa::path(
    delete,
    path = "/api/corrective-actions/{id}",
    tag = "Corrective Actions",
    params(
        ("id" = Uuid, Path, description = "Corrective action UUID")
    ),
    responses(
        (status = 200, description = "Corrective action deleted", body = DeleteResponse),
        (status = 404, description = "Corrective action not found", body = crate::error::ErrorResponse),
    )
)]
pub async fn delete_corrective_action(
    pool: web::Data<DbPool>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    pool.delete_corrective_action(id).await?;
    info!(id = %id, "Corrective action deleted");

    Ok(HttpResponse::Ok().json(DeleteResponse::ok()))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/corrective-actions")
            .route(web::get().to(list_corrective_actions))
            .route(web::post().to(create_corrective_action)),
    )
    .service(
        web::resource("/corrective-actions/{id}")
            .route(web::get().to(get_corrective_action))
            .route(web::put().to(update_corrective_action))
            .route(web::delete().to(delete_corrective_action)),
    );
}
