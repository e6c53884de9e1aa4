//! Non-compliance controls, legal requirements and training plans.

use serde_json::{Value, json};
use uuid::Uuid;

use super::helpers::*;

fn non_compliance_body(number: &str) -> Value {
    json!({
        "number": number,
        "description": "Fire extinguishers without inspection tags",
        "detected_date": "2026-10-02",
        "responsible": "Maintenance lead"
    })
}

fn legal_requirement_body(number: &str) -> Value {
    json!({
        "number": number,
        "title": "Minimum standards of the OHS management system",
        "issuing_body": "Ministry of Labour",
        "effective_date": "2019-02-13"
    })
}

#[actix_rt::test]
async fn test_non_compliance_defaults_and_names() {
    let db = create_test_db().await;
    let app = create_test_app(&db.pool).await;

    let department = create(&app, "/api/departments", json!({ "name": "Operations" })).await;
    let subproject = create(&app, "/api/subprojects", json!({ "name": "Tunnel 2" })).await;

    let mut body = non_compliance_body("NC-1");
    body["department_id"] = json!(id_of(&department));
    body["subproject_id"] = json!(id_of(&subproject));
    let created = create(&app, "/api/non-compliance-controls", body).await;
    assert_eq!(created["status"], "open");
    assert_eq!(created["effectiveness"], "pending");
    assert_eq!(created["department_name"], "Operations");
    assert_eq!(created["subproject_name"], "Tunnel 2");

    let (status, fetched) = get(
        &app,
        &format!("/api/non-compliance-controls/{}", id_of(&created)),
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(fetched, created);

    let mut wrong_kind = non_compliance_body("NC-2");
    wrong_kind["subproject_id"] = json!(id_of(&department));
    let (status, _) = post(&app, "/api/non-compliance-controls", wrong_kind).await;
    assert_eq!(status, 400);
}

#[actix_rt::test]
async fn test_non_compliance_duplicate_number_and_update() {
    let db = create_test_db().await;
    let app = create_test_app(&db.pool).await;

    let created = create(&app, "/api/non-compliance-controls", non_compliance_body("NC-7")).await;
    let (status, error) = post(&app, "/api/non-compliance-controls", non_compliance_body("NC-7")).await;
    assert_eq!(status, 400);
    assert_eq!(error["code"], "DUPLICATE_NUMBER");

    let mut body = non_compliance_body("NC-7");
    body["status"] = json!("closed");
    body["effectiveness"] = json!("effective");
    body["corrective_measure"] = json!("Tags replaced and inspection calendar set");
    let (status, updated) = put(
        &app,
        &format!("/api/non-compliance-controls/{}", id_of(&created)),
        body,
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(updated["status"], "closed");
    assert_eq!(updated["effectiveness"], "effective");
}

#[actix_rt::test]
async fn test_non_compliance_status_filter() {
    let db = create_test_db().await;
    let app = create_test_app(&db.pool).await;

    let open = create(&app, "/api/non-compliance-controls", non_compliance_body("NC-10")).await;
    let mut closed_body = non_compliance_body("NC-11");
    closed_body["status"] = json!("closed");
    let closed = create(&app, "/api/non-compliance-controls", closed_body).await;

    let (status, list) = get(&app, "/api/non-compliance-controls?status=closed").await;
    assert_eq!(status, 200);
    assert_eq!(ids_in(&list), vec![id_of(&closed)]);

    let (_, list) = get(&app, "/api/non-compliance-controls?status=open").await;
    assert_eq!(ids_in(&list), vec![id_of(&open)]);

    let (_, list) = get(&app, "/api/non-compliance-controls").await;
    assert_eq!(ids_in(&list), vec![id_of(&closed), id_of(&open)]);

    let (status, _) = get(&app, "/api/non-compliance-controls?status=archived").await;
    assert_eq!(status, 400);
}

#[actix_rt::test]
async fn test_legal_requirement_lifecycle() {
    let db = create_test_db().await;
    let app = create_test_app(&db.pool).await;

    let created = create(&app, "/api/legal-requirements", legal_requirement_body("Res. 0312")).await;
    assert_eq!(created["status"], "in_force");
    assert!(created["file_url"].is_null());

    let (status, error) = post(&app, "/api/legal-requirements", legal_requirement_body("Res. 0312")).await;
    assert_eq!(status, 400);
    assert_eq!(error["code"], "DUPLICATE_NUMBER");

    let uri = format!("/api/legal-requirements/{}", id_of(&created));
    let mut body = legal_requirement_body("Res. 0312");
    body["status"] = json!("amended");
    body["file_url"] = json!("https://files.example.com/res-0312.pdf");
    let (status, updated) = put(&app, &uri, body).await;
    assert_eq!(status, 200);
    assert_eq!(updated["status"], "amended");
    assert_eq!(updated["file_url"], "https://files.example.com/res-0312.pdf");

    let (status, _) = delete(&app, &uri).await;
    assert_eq!(status, 200);
    let (status, _) = get(&app, &uri).await;
    assert_eq!(status, 404);

    let (status, _) = post(
        &app,
        "/api/legal-requirements",
        json!({ "number": "Decree 1072", "title": "No date" }),
    )
    .await;
    assert_eq!(status, 400);
}

#[actix_rt::test]
async fn test_training_plan_lifecycle() {
    let db = create_test_db().await;
    let app = create_test_app(&db.pool).await;

    let department = create(&app, "/api/departments", json!({ "name": "Civil works" })).await;
    let position = create(&app, "/api/positions", json!({ "name": "Scaffolder" })).await;

    let created = create(
        &app,
        "/api/training-plans",
        json!({
            "title": "Working at heights",
            "trainer": "External provider",
            "planned_date": "2026-11-15",
            "department_id": id_of(&department),
            "position_id": id_of(&position)
        }),
    )
    .await;
    assert_eq!(created["status"], "planned");
    assert_eq!(created["department_name"], "Civil works");
    assert_eq!(created["position_name"], "Scaffolder");

    let uri = format!("/api/training-plans/{}", id_of(&created));
    let (status, updated) = put(
        &app,
        &uri,
        json!({
            "title": "Working at heights",
            "planned_date": "2026-11-15",
            "completed_date": "2026-11-16",
            "status": "completed",
            "position_id": id_of(&position)
        }),
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(updated["status"], "completed");
    assert!(updated["department_id"].is_null());

    let (status, _) = post(
        &app,
        "/api/training-plans",
        json!({
            "title": "Wrong kind",
            "planned_date": "2026-12-01",
            "position_id": id_of(&department)
        }),
    )
    .await;
    assert_eq!(status, 400);

    let (status, result) = delete(&app, &uri).await;
    assert_eq!(status, 200);
    assert_eq!(result, json!({ "success": true }));
}

#[actix_rt::test]
async fn test_registers_return_404_for_missing_records() {
    let db = create_test_db().await;
    let app = create_test_app(&db.pool).await;

    for path in [
        "/api/non-compliance-controls",
        "/api/legal-requirements",
        "/api/training-plans",
    ] {
        let uri = format!("{}/{}", path, Uuid::now_v7());
        let (status, body) = get(&app, &uri).await;
        assert_eq!(status, 404, "GET {}", uri);
        assert_eq!(body["code"], "NOT_FOUND");
        let (status, _) = delete(&app, &uri).await;
        assert_eq!(status, 404, "DELETE {}", uri);
    }
}

#[actix_rt::test]
async fn test_update_to_a_number_held_by_another_record_is_rejected() {
    let db = create_test_db().await;
    let app = create_test_app(&db.pool).await;

    let registers: [(&str, fn(&str) -> Value); 2] = [
        ("/api/non-compliance-controls", non_compliance_body),
        ("/api/legal-requirements", legal_requirement_body),
    ];
    for (path, body) in registers {
        create(&app, path, body("A-1")).await;
        let second = create(&app, path, body("A-2")).await;
        let uri = format!("{}/{}", path, id_of(&second));

        let (status, error) = put(&app, &uri, body("A-1")).await;
        assert_eq!(status, 400, "PUT {}", uri);
        assert_eq!(error["code"], "DUPLICATE_NUMBER");
        assert_eq!(error["error"], "A record with number 'A-1' already exists");

        let (status, _) = put(&app, &uri, body("A-2")).await;
        assert_eq!(status, 200, "PUT {} keeping its own number", uri);

        let (status, _) = delete(&app, &uri).await;
        assert_eq!(status, 200);
        let (status, _) = delete(&app, &uri).await;
        assert_eq!(status, 404, "second DELETE {}", uri);
    }
}
