//! Health, readiness, request id and API documentation endpoints.

use actix_web::{App, test, web};
use ohs_compliance_lib::api;
use ohs_compliance_lib::middleware::{REQUEST_ID_HEADER, RequestLogger};

use super::helpers::*;

#[actix_rt::test]
async fn test_health_and_ready() {
    let db = create_test_db().await;
    let app = create_test_app(&db.pool).await;

    let (status, body) = get(&app, "/api/health").await;
    assert_eq!(status, 200);
    assert_eq!(body["status"], "healthy");
    assert!(body["timestamp"].is_string());

    let (status, body) = get(&app, "/api/ready").await;
    assert_eq!(status, 200);
    assert_eq!(body["database"], "connected");
}

#[actix_rt::test]
async fn test_responses_carry_request_id() {
    let db = create_test_db().await;
    let app = test::init_service(
        App::new()
            .wrap(RequestLogger)
            .app_data(web::Data::new(db.pool.clone()))
            .configure(api::configure),
    )
    .await;

    let req = test::TestRequest::get().uri("/api/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let request_id = resp
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .expect("missing request id header");
    assert!(uuid::Uuid::parse_str(request_id).is_ok());
}

#[actix_rt::test]
async fn test_openapi_document_is_served() {
    let db = create_test_db().await;
    let app = create_test_app(&db.pool).await;

    let (status, doc) = get(&app, "/api-docs/openapi.json").await;
    assert_eq!(status, 200);
    assert_eq!(doc["info"]["title"], "OHS Compliance Server");
    assert!(doc["paths"]["/api/incident-reports"].is_object());
}
