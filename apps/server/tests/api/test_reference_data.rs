//! Reference data endpoints: departments, positions, subprojects and the
//! other lookup lists.

use actix_web::test;
use serde_json::json;
use uuid::Uuid;

use super::helpers::*;

const REFERENCE_PATHS: [&str; 7] = [
    "/api/departments",
    "/api/positions",
    "/api/subprojects",
    "/api/toolbox-talks",
    "/api/environmental-factors",
    "/api/risks-and-impacts",
    "/api/acceptance-confirmations",
];

#[actix_rt::test]
async fn test_create_position_and_list_it() {
    let db = create_test_db().await;
    let app = create_test_app(&db.pool).await;

    let created = create(&app, "/api/positions", json!({ "name": "Safety Officer" })).await;
    assert_eq!(created["name"], "Safety Officer");
    assert_eq!(created["kind"], "position");
    assert!(Uuid::parse_str(&id_of(&created)).is_ok());

    let (status, list) = get(&app, "/api/positions").await;
    assert_eq!(status, 200);
    assert!(ids_in(&list).contains(&id_of(&created)));

    // Names are not unique
    let again = create(&app, "/api/positions", json!({ "name": "Safety Officer" })).await;
    assert_ne!(id_of(&again), id_of(&created));
}

#[actix_rt::test]
async fn test_get_returns_created_record_for_every_kind() {
    let db = create_test_db().await;
    let app = create_test_app(&db.pool).await;

    for path in REFERENCE_PATHS {
        let created = create(
            &app,
            path,
            json!({ "name": "Entry", "code": "E-1", "description": "First entry" }),
        )
        .await;

        let (status, fetched) = get(&app, &format!("{}/{}", path, id_of(&created))).await;
        assert_eq!(status, 200, "GET failed for {}", path);
        assert_eq!(fetched, created);
    }
}

#[actix_rt::test]
async fn test_missing_or_blank_name_is_rejected() {
    let db = create_test_db().await;
    let app = create_test_app(&db.pool).await;

    for body in [json!({}), json!({ "name": null }), json!({ "name": "   " })] {
        let (status, error) = post(&app, "/api/departments", body).await;
        assert_eq!(status, 400);
        assert_eq!(error["code"], "INVALID_INPUT");
    }

    let (_, list) = get(&app, "/api/departments").await;
    assert!(list.as_array().unwrap().is_empty());
}

#[actix_rt::test]
async fn test_malformed_json_is_rejected() {
    let db = create_test_db().await;
    let app = create_test_app(&db.pool).await;

    let req = test::TestRequest::post()
        .uri("/api/subprojects")
        .insert_header(("content-type", "application/json"))
        .set_payload("{ not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 400);
}

#[actix_rt::test]
async fn test_unknown_ids_return_404_for_every_kind() {
    let db = create_test_db().await;
    let app = create_test_app(&db.pool).await;
    let missing = Uuid::now_v7();

    for path in REFERENCE_PATHS {
        let (status, body) = get(&app, &format!("{}/{}", path, missing)).await;
        assert_eq!(status, 404, "GET {} should be 404", path);
        assert_eq!(body["code"], "NOT_FOUND");

        let (status, _) = put(&app, &format!("{}/{}", path, missing), json!({ "name": "x" })).await;
        assert_eq!(status, 404);

        let (status, _) = delete(&app, &format!("{}/{}", path, missing)).await;
        assert_eq!(status, 404);
    }

    let (status, _) = get(&app, "/api/departments/not-a-uuid").await;
    assert_eq!(status, 404);
}

#[actix_rt::test]
async fn test_records_are_scoped_to_their_kind() {
    let db = create_test_db().await;
    let app = create_test_app(&db.pool).await;

    let position = create(&app, "/api/positions", json!({ "name": "Electrician" })).await;

    let (status, _) = get(&app, &format!("/api/departments/{}", id_of(&position))).await;
    assert_eq!(status, 404);

    let (_, departments) = get(&app, "/api/departments").await;
    assert!(departments.as_array().unwrap().is_empty());
}

#[actix_rt::test]
async fn test_update_and_delete() {
    let db = create_test_db().await;
    let app = create_test_app(&db.pool).await;

    let created = create(&app, "/api/toolbox-talks", json!({ "name": "Ladder safety" })).await;
    let uri = format!("/api/toolbox-talks/{}", id_of(&created));

    let (status, updated) = put(
        &app,
        &uri,
        json!({ "name": "Ladder and scaffold safety", "code": "TT-02" }),
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(updated["name"], "Ladder and scaffold safety");
    assert_eq!(updated["code"], "TT-02");
    assert_eq!(updated["created_at"], created["created_at"]);

    let (status, _) = put(&app, &uri, json!({ "code": "TT-03" })).await;
    assert_eq!(status, 400);

    let (status, body) = delete(&app, &uri).await;
    assert_eq!(status, 200);
    assert_eq!(body, json!({ "success": true }));

    let (status, _) = get(&app, &uri).await;
    assert_eq!(status, 404);
}

#[actix_rt::test]
async fn test_list_is_newest_first() {
    let db = create_test_db().await;
    let app = create_test_app(&db.pool).await;

    let first = create(&app, "/api/risks-and-impacts", json!({ "name": "Noise" })).await;
    let second = create(&app, "/api/risks-and-impacts", json!({ "name": "Dust" })).await;

    let (_, list) = get(&app, "/api/risks-and-impacts").await;
    assert_eq!(ids_in(&list), vec![id_of(&second), id_of(&first)]);
}
