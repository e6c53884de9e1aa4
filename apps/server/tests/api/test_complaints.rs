//! Complaint/claim register and photo/document proofs.

use actix_web::dev::{Service, ServiceResponse};
use serde_json::{Value, json};
use uuid::Uuid;

use super::helpers::*;

fn complaint_body(number: &str) -> Value {
    json!({
        "number": number,
        "category": "complaint",
        "complainant_name": "Neighbourhood association",
        "received_date": "2026-09-30",
        "description": "Dust from excavation reaches nearby houses"
    })
}

async fn create_proof<S>(app: &S, title: &str) -> String
where
    S: Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>,
{
    let proof = create(
        app,
        "/api/photo-document-proofs",
        json!({
            "title": title,
            "proof_type": "photo",
            "file_url": format!("https://files.example.com/{}.jpg", title)
        }),
    )
    .await;
    id_of(&proof)
}

#[actix_rt::test]
async fn test_duplicate_number_is_rejected() {
    let db = create_test_db().await;
    let app = create_test_app(&db.pool).await;

    let first = create(&app, "/api/complaints-registration", complaint_body("CR-001")).await;
    assert_eq!(first["status"], "open");
    assert_eq!(first["category"], "complaint");

    let (status, error) = post(&app, "/api/complaints-registration", complaint_body("CR-001")).await;
    assert_eq!(status, 400);
    assert_eq!(error["code"], "DUPLICATE_NUMBER");

    // Surrounding whitespace does not make a number distinct
    let (status, _) = post(&app, "/api/complaints-registration", complaint_body(" CR-001 ")).await;
    assert_eq!(status, 400);

    let (_, list) = get(&app, "/api/complaints-registration").await;
    assert_eq!(list.as_array().unwrap().len(), 1);
}

#[actix_rt::test]
async fn test_update_checks_number_against_other_records() {
    let db = create_test_db().await;
    let app = create_test_app(&db.pool).await;

    let first = create(&app, "/api/complaints-registration", complaint_body("CR-010")).await;
    create(&app, "/api/complaints-registration", complaint_body("CR-011")).await;
    let uri = format!("/api/complaints-registration/{}", id_of(&first));

    // Keeping its own number is fine
    let mut body = complaint_body("CR-010");
    body["status"] = json!("resolved");
    body["resolution_description"] = json!("Water trucks scheduled twice a day");
    body["resolution_date"] = json!("2026-10-05");
    let (status, updated) = put(&app, &uri, body).await;
    assert_eq!(status, 200);
    assert_eq!(updated["status"], "resolved");
    assert_eq!(updated["resolution_date"], "2026-10-05");

    let (status, error) = put(&app, &uri, complaint_body("CR-011")).await;
    assert_eq!(status, 400);
    assert_eq!(error["code"], "DUPLICATE_NUMBER");
}

#[actix_rt::test]
async fn test_proofs_are_attached_and_replaced() {
    let db = create_test_db().await;
    let app = create_test_app(&db.pool).await;

    let p1 = create_proof(&app, "front-gate").await;
    let p2 = create_proof(&app, "side-street").await;

    let mut body = complaint_body("CR-020");
    body["category"] = json!("claim");
    body["photo_document_proof_ids"] = json!([p1, p2]);
    let created = create(&app, "/api/complaints-registration", body.clone()).await;
    assert_eq!(created["category"], "claim");
    assert_eq!(ids_in(&created["photo_document_proofs"]), vec![p1.clone(), p2.clone()]);

    let uri = format!("/api/complaints-registration/{}", id_of(&created));
    let (_, fetched) = get(&app, &uri).await;
    assert_eq!(fetched, created);

    body["photo_document_proof_ids"] = json!([p2]);
    let (status, updated) = put(&app, &uri, body).await;
    assert_eq!(status, 200);
    assert_eq!(ids_in(&updated["photo_document_proofs"]), vec![p2]);

    let (status, _) = get(&app, &format!("/api/photo-document-proofs/{}", p1)).await;
    assert_eq!(status, 200);
}

#[actix_rt::test]
async fn test_unknown_proof_ids_are_rejected() {
    let db = create_test_db().await;
    let app = create_test_app(&db.pool).await;

    let mut body = complaint_body("CR-030");
    body["photo_document_proof_ids"] = json!([Uuid::now_v7()]);
    let (status, error) = post(&app, "/api/complaints-registration", body).await;
    assert_eq!(status, 400);
    assert_eq!(error["code"], "INVALID_INPUT");
}

#[actix_rt::test]
async fn test_delete_complaint_keeps_proofs() {
    let db = create_test_db().await;
    let app = create_test_app(&db.pool).await;

    let proof = create_proof(&app, "evidence").await;
    let mut body = complaint_body("CR-040");
    body["photo_document_proof_ids"] = json!([proof]);
    let created = create(&app, "/api/complaints-registration", body).await;

    let (status, result) =
        delete(&app, &format!("/api/complaints-registration/{}", id_of(&created))).await;
    assert_eq!(status, 200);
    assert_eq!(result["success"], true);

    let (status, _) = get(&app, &format!("/api/photo-document-proofs/{}", proof)).await;
    assert_eq!(status, 200);

    // The number is free again
    create(&app, "/api/complaints-registration", complaint_body("CR-040")).await;
}

#[actix_rt::test]
async fn test_delete_proof_detaches_it() {
    let db = create_test_db().await;
    let app = create_test_app(&db.pool).await;

    let keep = create_proof(&app, "keep").await;
    let removed = create_proof(&app, "removed").await;
    let mut body = complaint_body("CR-050");
    body["photo_document_proof_ids"] = json!([keep, removed]);
    let created = create(&app, "/api/complaints-registration", body).await;

    let (status, _) = delete(&app, &format!("/api/photo-document-proofs/{}", removed)).await;
    assert_eq!(status, 200);

    let (_, record) = get(
        &app,
        &format!("/api/complaints-registration/{}", id_of(&created)),
    )
    .await;
    assert_eq!(ids_in(&record["photo_document_proofs"]), vec![keep]);
}

#[actix_rt::test]
async fn test_validation_and_not_found() {
    let db = create_test_db().await;
    let app = create_test_app(&db.pool).await;

    for field in ["number", "complainant_name", "received_date", "description"] {
        let mut body = complaint_body("CR-060");
        body[field] = Value::Null;
        let (status, _) = post(&app, "/api/complaints-registration", body).await;
        assert_eq!(status, 400, "missing {} should be rejected", field);
    }

    let (status, _) = post(
        &app,
        "/api/photo-document-proofs",
        json!({ "title": "No file", "proof_type": "document" }),
    )
    .await;
    assert_eq!(status, 400);

    for path in ["/api/complaints-registration", "/api/photo-document-proofs"] {
        let uri = format!("{}/{}", path, Uuid::now_v7());
        let (status, _) = get(&app, &uri).await;
        assert_eq!(status, 404);
        let (status, _) = delete(&app, &uri).await;
        assert_eq!(status, 404);
    }
}
