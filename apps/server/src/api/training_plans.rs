//! Training plan handlers.

use actix_web::{HttpResponse, web};
use tracing::info;
use uuid::Uuid;

use crate::db::DbPool;
use crate::error::{AppError, AppResult};
use crate::models::{DeleteResponse, TrainingPlanRequest, TrainingPlanResponse};

/// List training plans, newest first.
#[utoipa::path(
    get,
    path = "/api/training-plans",
    tag = "Training Plans",
    responses(
        (status = 200, description = "Training plans", body = Vec<TrainingPlanResponse>),
    )
)]
pub async fn list_training_plans(pool: web::Data<DbPool>) -> AppResult<HttpResponse> {
    let records = pool.list_training_plans().await?;
    Ok(HttpResponse::Ok().json(records))
}

/// Get a training plan by id.
#[utoipa::path(
    get,
    path = "/api/training-plans/{id}",
    tag = "Training Plans",
    params(
        ("id" = Uuid, Path, description = "Training plan UUID")
    ),
    responses(
        (status = 200, description = "Training plan", body = TrainingPlanResponse),
        (status = 404, description = "Training plan not found", body = crate::error::ErrorResponse),
    )
)]
pub async fn get_training_plan(
    pool: web::Data<DbPool>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let record = pool
        .get_training_plan(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Training plan {}", id)))?;

    Ok(HttpResponse::Ok().json(record))
}

/// Schedule a training.
#[utoipa::path(
    post,
    path = "/api/training-plans",
    tag = "Training Plans",
    request_body = TrainingPlanRequest,
    responses(
        (status = 201, description = "Training plan created", body = TrainingPlanResponse),
        (status = 400, description = "Validation failed or wrong reference kind", body = crate::error::ErrorResponse),
    )
)]
pub async fn create_training_plan(
    pool: web::Data<DbPool>,
    body: web::Json<TrainingPlanRequest>,
) -> AppResult<HttpResponse> {
    let input = body.into_inner().validate()?;

    let record = pool.create_training_plan(input).await?;
    info!(id = %record.id, "Training plan created");

    Ok(HttpResponse::Created().json(record))
}

/// Replace a training plan.
#[utoipa::path(
    put,
    path = "/api/training-plans/{id}",
    tag = "Training Plans",
    params(
        ("id" = Uuid, Path, description = "Training plan UUID")
    ),
    request_body = TrainingPlanRequest,
    responses(
        (status = 200, description = "Training plan updated", body = TrainingPlanResponse),
        (status = 400, description = "Validation failed or wrong reference kind", body = crate::error::ErrorResponse),
        (status = 404, description = "Training plan not found", body = crate::error::ErrorResponse),
    )
)]
pub async fn update_training_plan(
    pool: web::Data<DbPool>,
    path: web::Path<Uuid>,
    body: web::Json<TrainingPlanRequest>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let input = body.into_inner().validate()?;

    let record = pool.update_training_plan(id, input).await?;
    info!(id = %id, "Training plan updated");

    Ok(HttpResponse::Ok().json(record))
}

/// Delete a training plan.
#[utoipa::path(
    delete,
    path = "/api/training-plans/{id}",
    tag = "Training Plans",
    params(
        ("id" = Uuid, Path, description = "Training plan UUID")
    ),
    responses(
        (status = 200, description = "Training plan deleted", body = DeleteResponse),
        (status = 404, description = "Training plan not found", body = crate::error::ErrorResponse),
    )
)]
pub async fn delete_training_plan(
    pool: web::Data<DbPool>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    pool.delete_training_plan(id).await?;
    info!(id = %id, "Training plan deleted");

    Ok(HttpResponse::Ok().json(DeleteResponse::ok()))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/training-plans")
            .route(web::get().to(list_training_plans))
            .route(web::post().to(create_training_plan)),
    )
    .service(
        web::resource("/training-plans/{id}")
            .route(web::get().to(get_training_plan))
            .route(web::put().to(update_training_plan))
            .route(web::delete().to(delete_training_plan)),
    );
}
