//! Photo and document proof handlers.

use actix_web::{HttpResponse, web};
use tracing::info;
use uuid::Uuid;

use crate::db::DbPool;
use crate::error::{AppError, AppResult};
use crate::models::{DeleteResponse, PhotoDocumentProofRequest, PhotoDocumentProofResponse};

/// List proofs, newest first.
#[utoipa::path(
    get,
    path = "/api/photo-document-proofs",
    tag = "Complaints",
    responses(
        (status = 200, description = "Photo and document proofs", body = Vec<PhotoDocumentProofResponse>),
    )
)]
pub async fn list_photo_document_proofs(
    pool: web::Data<DbPool>,
) -> AppResult<HttpResponse> {
    let records: Vec<PhotoDocumentProofResponse> = pool
        .list_photo_document_proofs()
        .await?
        .into_iter()
        .map(PhotoDocumentProofResponse::from)
        .collect();
    Ok(HttpResponse::Ok().json(records))
}

/// Get a photo/document proof by id.
#[utoipa::path(
    get,
    path = "/api/photo-document-proofs/{id}",
    tag = "Complaints",
    params(
        ("id" = Uuid, Path, description = "Photo/document proof UUID")
    ),
    responses(
        (status = 200, description = "Photo/document proof", body = PhotoDocumentProofResponse),
        (status = 404, description = "Photo/document proof not found", body = crate::error::ErrorResponse),
    )
)]
pub async fn get_photo_document_proof(
    pool: web::Data<DbPool>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let record = pool
        .get_photo_document_proof(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Photo/document proof {}", id)))?;

    Ok(HttpResponse::Ok().json(PhotoDocumentProofResponse::from(record)))
}

/// Create a proof from an already uploaded file URL.
#[utoipa::path(
    post,
    path = "/api/photo-document-proofs",
    tag = "Complaints",
    request_body = PhotoDocumentProofRequest,
    responses(
        (status = 201, description = "Photo/document proof created", body = PhotoDocumentProofResponse),
        (status = 400, description = "Missing title or file URL", body = crate::error::ErrorResponse),
    )
)]
pub async fn create_photo_document_proof(
    pool: web::Data<DbPool>,
    body: web::Json<PhotoDocumentProofRequest>,
) -> AppResult<HttpResponse> {
    let input = body.into_inner().validate()?;

    let record = pool.create_photo_document_proof(input).await?;
    info!(id = %record.id, "Photo/document proof created");

    Ok(HttpResponse::Created().json(PhotoDocumentProofResponse::from(record)))
}

/// Replace a proof.
#[utoipa::path(
    put,
    path = "/api/photo-document-proofs/{id}",
    tag = "Complaints",
    params(
        ("id" = Uuid, Path, description = "Photo/document proof UUID")
    ),
    request_body = PhotoDocumentProofRequest,
    responses(
        (status = 200, description = "Photo/document proof updated", body = PhotoDocumentProofResponse),
        (status = 400, description = "Missing title or file URL", body = crate::error::ErrorResponse),
        (status = 404, description = "Photo/document proof not found", body = crate::error::ErrorResponse),
    )
)]
pub async fn update_photo_document_proof(
    pool: web::Data<DbPool>,
    path: web::Path<Uuid>,
    body: web::Json<PhotoDocumentProofRequest>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let input = body.into_inner().validate()?;

    let record = pool.update_photo_document_proof(id, input).await?;
    info!(id = %id, "Photo/document proof updated");

    Ok(HttpResponse::Ok().json(PhotoDocumentProofResponse::from(record)))
}

/// Delete a proof, detaching it from complaint records first.
#[utoipa::path(
    delete,
    path = "/api/photo-document-proofs/{id}",
    tag = "Complaints",
    params(
        ("id" = Uuid, Path, description = "Photo/document proof UUID")
    ),
    responses(
        (status = 200, description = "Photo/document proof deleted", body = DeleteResponse),
        (status = 404, description = "Photo/document proof not found", body = crate::error::ErrorResponse),
    )
)]
pub async fn delete_photo_document_proof(
    pool: web::Data<DbPool>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    pool.delete_photo_document_proof(id).await?;
    info!(id = %id, "Photo/document proof deleted");

    Ok(HttpResponse::Ok().json(DeleteResponse::ok()))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/photo-document-proofs")
            .route(web::get().to(list_photo_document_proofs))
            .route(web::post().to(create_photo_document_proof)),
    )
    .service(
        web::resource("/photo-document-proofs/{id}")
            .route(web::get().to(get_photo_document_proof))
            .route(web::put().to(update_photo_document_proof))
            .route(web::delete().to(delete_photo_document_proof)),
    );
}
