//! Investigation participant handlers.

use actix_web::{HttpResponse, web};
use tracing::info;
use uuid::Uuid;

use crate::db::DbPool;
use crate::error::{AppError, AppResult};
use crate::models::{
    DeleteResponse, InvestigationParticipantRequest, InvestigationParticipantResponse,
};

/// List investigation participants, newest first.
#[utoipa::path(
    get,
    path = "/api/investigation-participants",
    tag = "Investigation Participants",
    responses(
        (status = 200, description = "Investigation participants", body = Vec<InvestigationParticipantResponse>),
    )
)]
pub async fn list_investigation_participants(
    pool: web::Data<DbPool>,
) -> AppResult<HttpResponse> {
    let records = pool.list_investigation_participants().await?;
    Ok(HttpResponse::Ok().json(records))
}

/// Get an investigation participant by id.
#[utoipa::path(
    get,
    path = "/api/investigation-participants/{id}",
    tag = "Investigation Participants",
    params(
        ("id" = Uuid, Path, description = "Investigation participant UUID")
    ),
    responses(
        (status = 200, description = "Investigation participant", body = InvestigationParticipantResponse),
        (status = 404, description = "Investigation participant not found", body = crate::error::ErrorResponse),
    )
)]
pub async fn get_investigation_participant(
    pool: web::Data<DbPool>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let record = pool
        .get_investigation_participant(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Investigation participant {}", id)))?;

    Ok(HttpResponse::Ok().json(record))
}

/// Create an investigation participant.
#[utoipa::path(
    post,
    path = "/api/investigation-participants",
    tag = "Investigation Participants",
    request_body = InvestigationParticipantRequest,
    responses(
        (status = 201, description = "Investigation participant created", body = InvestigationParticipantResponse),
        (status = 400, description = "Missing name or unknown position", body = crate::error::ErrorResponse),
    )
)]
pub async fn create_investigation_participant(
    pool: web::Data<DbPool>,
    body: web::Json<InvestigationParticipantRequest>,
) -> AppResult<HttpResponse> {
    let input = body.into_inner().validate()?;

    let record = pool.create_investigation_participant(input).await?;
    info!(id = %record.id, "Investigation participant created");

    Ok(HttpResponse::Created().json(record))
}

/// Replace an investigation participant.
#[utoipa::path(
    put,
    path = "/api/investigation-participants/{id}",
    tag = "Investigation Participants",
    params(
        ("id" = Uuid, Path, description = "Investigation participant UUID")
    ),
    request_body = InvestigationParticipantRequest,
    responses(
        (status = 200, description = "Investigation participant updated", body = InvestigationParticipantResponse),
        (status = 400, description = "Missing name or unknown position", body = crate::error::ErrorResponse),
        (status = 404, description = "Investigation participant not found", body = crate::error::ErrorResponse),
    )
)]
pub async fn update_investigation_participant(
    pool: web::Data<DbPool>,
    path: web::Path<Uuid>,
    body: web::Json<InvestigationParticipantRequest>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let input = body.into_inner().validate()?;

    let record = pool.update_investigation_participant(id, input).await?;
    info!(id = %id, "Investigation participant updated");

    Ok(HttpResponse::Ok().json(record))
}

/// Delete a participant, detaching it from incident reports first.
#[utoipa::path(
    delete,
    path = "/api/investigation-participants/{id}",
    tag = "Investigation Participants",
    params(
        ("id" = Uuid, Path, description = "Investigation participant UUID")
    ),
    responses(
        (status = 200, description = "Investigation participant deleted", body = DeleteResponse),
        (status = 404, description = "Investigation participant not found", body = crate::error::ErrorResponse),
    )
)]
pub async fn delete_investigation_participant(
    pool: web::Data<DbPool>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    pool.delete_investigation_participant(id).await?;
    info!(id = %id, "Investigation participant deleted");

    Ok(HttpResponse::Ok().json(DeleteResponse::ok()))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/investigation-participants")
            .route(web::get().to(list_investigation_participants))
            .route(web::post().to(create_investigation_participant)),
    )
    .service(
        web::resource("/investigation-participants/{id}")
            .route(web::get().to(get_investigation_participant))
            .route(web::put().to(update_investigation_participant))
            .route(web::delete().to(delete_investigation_participant)),
    );
}
