//! Incident report handlers.

use actix_web::{HttpResponse, web};
use tracing::info;
use uuid::Uuid;

use crate::db::DbPool;
use crate::error::{AppError, AppResult};
use crate::models::{
    DeleteResponse, IncidentReportListQuery, IncidentReportRequest, IncidentReportResponse,
};

/// List incident reports with their relations, newest first.
#[utoipa::path(
    get,
    path = "/api/incident-reports",
    tag = "Incident Reports",
    params(IncidentReportListQuery),
    responses(
        (status = 200, description = "Incident reports", body = Vec<IncidentReportResponse>),
        (status = 400, description = "Invalid filter", body = crate::error::ErrorResponse),
    )
)]
pub async fn list_incident_reports(
    pool: web::Data<DbPool>,
    query: web::Query<IncidentReportListQuery>,
) -> AppResult<HttpResponse> {
    let reports = pool.list_incident_reports(&query).await?;
    Ok(HttpResponse::Ok().json(reports))
}

/// Get an incident report by id.
#[utoipa::path(
    get,
    path = "/api/incident-reports/{id}",
    tag = "Incident Reports",
    params(
        ("id" = Uuid, Path, description = "Incident report UUID")
    ),
    responses(
        (status = 200, description = "Incident report", body = IncidentReportResponse),
        (status = 404, description = "Incident report not found", body = crate::error::ErrorResponse),
    )
)]
pub async fn get_incident_report(
    pool: web::Data<DbPool>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let report = pool
        .get_incident_report(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Incident report {}", id)))?;

    Ok(HttpResponse::Ok().json(report))
}

/// Create an incident report together with its involved person and links.
#[utoipa::path(
    post,
    path = "/api/incident-reports",
    tag = "Incident Reports",
    request_body = IncidentReportRequest,
    responses(
        (status = 201, description = "Incident report created", body = IncidentReportResponse),
        (status = 400, description = "Validation failed or unknown related ids", body = crate::error::ErrorResponse),
    )
)]
pub async fn create_incident_report(
    pool: web::Data<DbPool>,
    body: web::Json<IncidentReportRequest>,
) -> AppResult<HttpResponse> {
    let input = body.into_inner().validate()?;

    let report = pool.create_incident_report(input).await?;
    info!(
        id = %report.id,
        participants = report.investigation_participants.len(),
        corrective_actions = report.corrective_actions.len(),
        "Incident report created"
    );

    Ok(HttpResponse::Created().json(report))
}

/// Replace an incident report, including its relation lists.
#[utoipa::path(
    put,
    path = "/api/incident-reports/{id}",
    tag = "Incident Reports",
    params(
        ("id" = Uuid, Path, description = "Incident report UUID")
    ),
    request_body = IncidentReportRequest,
    responses(
        (status = 200, description = "Incident report updated", body = IncidentReportResponse),
        (status = 400, description = "Validation failed or unknown related ids", body = crate::error::ErrorResponse),
        (status = 404, description = "Incident report not found", body = crate::error::ErrorResponse),
    )
)]
pub async fn update_incident_report(
    pool: web::Data<DbPool>,
    path: web::Path<Uuid>,
    body: web::Json<IncidentReportRequest>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let input = body.into_inner().validate()?;

    let report = pool.update_incident_report(id, input).await?;
    info!(id = %id, "Incident report updated");

    Ok(HttpResponse::Ok().json(report))
}

/// Delete an incident report. Linked participants and actions are kept.
#[utoipa::path(
    delete,
    path = "/api/incident-reports/{id}",
    tag = "Incident Reports",
    params(
        ("id" = Uuid, Path, description = "Incident report UUID")
    ),
    responses(
        (status = 200, description = "Incident report deleted", body = DeleteResponse),
        (status = 404, description = "Incident report not found", body = crate::error::ErrorResponse),
    )
)]
pub async fn delete_incident_report(
    pool: web::Data<DbPool>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    pool.delete_incident_report(id).await?;
    info!(id = %id, "Incident report deleted");

    Ok(HttpResponse::Ok().json(DeleteResponse::ok()))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/incident-reports")
            .route(web::get().to(list_incident_reports))
            .route(web::post().to(create_incident_report)),
    )
    .service(
        web::resource("/incident-reports/{id}")
            .route(web::get().to(get_incident_report))
            .route(web::put().to(update_incident_report))
            .route(web::delete().to(delete_incident_report)),
    );
}
