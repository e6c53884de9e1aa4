//! Incident reports with involved person, investigation participants and
//! corrective actions.

use actix_web::dev::{Service, ServiceResponse};
use serde_json::{Value, json};
use uuid::Uuid;

use super::helpers::*;

fn report_body() -> Value {
    json!({
        "name": "Maria Lopez",
        "role": "Site supervisor",
        "incident_date": "2026-10-01",
        "incident_time": "08:30:00",
        "location": "Warehouse B",
        "description": "Worker slipped on a wet floor near the loading dock",
        "immediate_cause": "Water leak from roof"
    })
}

async fn create_participant<S>(app: &S, name: &str) -> String
where
    S: Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>,
{
    id_of(&create(app, "/api/investigation-participants", json!({ "name": name })).await)
}

async fn create_action<S>(app: &S, description: &str) -> String
where
    S: Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>,
{
    id_of(&create(app, "/api/corrective-actions", json!({ "description": description })).await)
}

#[actix_rt::test]
async fn test_create_with_relations_and_fetch() {
    let db = create_test_db().await;
    let app = create_test_app(&db.pool).await;

    let department = create(&app, "/api/departments", json!({ "name": "Logistics" })).await;
    let subproject = create(&app, "/api/subprojects", json!({ "name": "North plant" })).await;
    let participant = create_participant(&app, "Carlos Ruiz").await;
    let action = create_action(&app, "Repair roof leak").await;

    let mut body = report_body();
    body["department_id"] = json!(id_of(&department));
    body["subproject_id"] = json!(id_of(&subproject));
    body["involved_person"] = json!({
        "name": "Juan Perez",
        "position": "Forklift operator",
        "injury_description": "Sprained wrist"
    });
    body["investigation_participant_ids"] = json!([participant, participant]);
    body["corrective_action_ids"] = json!([action]);

    let created = create(&app, "/api/incident-reports", body).await;
    assert_eq!(created["department_name"], "Logistics");
    assert_eq!(created["subproject_name"], "North plant");
    assert_eq!(created["incident_time"], "08:30:00");
    assert_eq!(created["involved_person"]["name"], "Juan Perez");
    assert_eq!(ids_in(&created["investigation_participants"]), vec![participant]);
    assert_eq!(ids_in(&created["corrective_actions"]), vec![action]);
    assert_eq!(created["corrective_actions"][0]["status"], "pending");

    let (status, fetched) = get(&app, &format!("/api/incident-reports/{}", id_of(&created))).await;
    assert_eq!(status, 200);
    assert_eq!(fetched, created);

    let (_, list) = get(&app, "/api/incident-reports").await;
    assert_eq!(list.as_array().unwrap().len(), 1);
    assert_eq!(list[0], created);
}

#[actix_rt::test]
async fn test_required_fields() {
    let db = create_test_db().await;
    let app = create_test_app(&db.pool).await;

    for field in ["name", "role", "incident_date", "location", "description"] {
        let mut body = report_body();
        body[field] = Value::Null;
        let (status, error) = post(&app, "/api/incident-reports", body).await;
        assert_eq!(status, 400, "missing {} should be rejected", field);
        assert!(error["error"].as_str().unwrap().contains(field));
    }

    let mut body = report_body();
    body["location"] = json!("");
    let (status, _) = post(&app, "/api/incident-reports", body).await;
    assert_eq!(status, 400);
}

#[actix_rt::test]
async fn test_unknown_related_ids_are_rejected() {
    let db = create_test_db().await;
    let app = create_test_app(&db.pool).await;

    let known = create_participant(&app, "Ana Gomez").await;
    let unknown = Uuid::now_v7().to_string();

    let mut body = report_body();
    body["investigation_participant_ids"] = json!([known, unknown]);
    let (status, error) = post(&app, "/api/incident-reports", body).await;
    assert_eq!(status, 400);
    assert!(error["error"].as_str().unwrap().contains(&unknown));

    let (_, list) = get(&app, "/api/incident-reports").await;
    assert!(list.as_array().unwrap().is_empty());
}

#[actix_rt::test]
async fn test_reference_kind_is_checked() {
    let db = create_test_db().await;
    let app = create_test_app(&db.pool).await;

    let position = create(&app, "/api/positions", json!({ "name": "Welder" })).await;

    let mut body = report_body();
    body["department_id"] = json!(id_of(&position));
    let (status, error) = post(&app, "/api/incident-reports", body).await;
    assert_eq!(status, 400);
    assert_eq!(error["code"], "INVALID_INPUT");

    let mut body = report_body();
    body["subproject_id"] = json!(Uuid::now_v7());
    let (status, _) = post(&app, "/api/incident-reports", body).await;
    assert_eq!(status, 400);
}

#[actix_rt::test]
async fn test_update_to_subset_keeps_remaining_relations() {
    let db = create_test_db().await;
    let app = create_test_app(&db.pool).await;

    let p1 = create_participant(&app, "P1").await;
    let p2 = create_participant(&app, "P2").await;
    let p3 = create_participant(&app, "P3").await;
    let a1 = create_action(&app, "A1").await;
    let a2 = create_action(&app, "A2").await;

    let mut body = report_body();
    body["investigation_participant_ids"] = json!([p1, p2, p3]);
    body["corrective_action_ids"] = json!([a1, a2]);
    let created = create(&app, "/api/incident-reports", body.clone()).await;
    let uri = format!("/api/incident-reports/{}", id_of(&created));

    body["investigation_participant_ids"] = json!([p1, p3]);
    body["corrective_action_ids"] = json!([a2]);
    body["location"] = json!("Warehouse C");
    let (status, updated) = put(&app, &uri, body).await;
    assert_eq!(status, 200);
    assert_eq!(updated["location"], "Warehouse C");
    assert_eq!(updated["created_at"], created["created_at"]);

    let mut participants = ids_in(&updated["investigation_participants"]);
    participants.sort();
    let mut expected = vec![p1.clone(), p3.clone()];
    expected.sort();
    assert_eq!(participants, expected);
    assert_eq!(ids_in(&updated["corrective_actions"]), vec![a2]);

    // The dropped participant still exists on its own
    let (status, _) = get(&app, &format!("/api/investigation-participants/{}", p2)).await;
    assert_eq!(status, 200);

    let (_, fetched) = get(&app, &uri).await;
    assert_eq!(fetched, updated);
}

#[actix_rt::test]
async fn test_update_replaces_involved_person() {
    let db = create_test_db().await;
    let app = create_test_app(&db.pool).await;

    let mut body = report_body();
    body["involved_person"] = json!({ "name": "First Person" });
    let created = create(&app, "/api/incident-reports", body.clone()).await;
    let uri = format!("/api/incident-reports/{}", id_of(&created));

    body["involved_person"] = json!({ "name": "Second Person", "contact": "555-0101" });
    let (status, updated) = put(&app, &uri, body.clone()).await;
    assert_eq!(status, 200);
    assert_eq!(updated["involved_person"]["name"], "Second Person");
    assert_eq!(updated["involved_person"]["contact"], "555-0101");

    body["involved_person"] = Value::Null;
    let (status, cleared) = put(&app, &uri, body).await;
    assert_eq!(status, 200);
    assert!(cleared["involved_person"].is_null());
}

#[actix_rt::test]
async fn test_delete_report_keeps_participants_and_actions() {
    let db = create_test_db().await;
    let app = create_test_app(&db.pool).await;

    let participant = create_participant(&app, "Luis Diaz").await;
    let action = create_action(&app, "Install anti-slip mats").await;

    let mut body = report_body();
    body["involved_person"] = json!({ "name": "Injured Worker" });
    body["investigation_participant_ids"] = json!([participant]);
    body["corrective_action_ids"] = json!([action]);
    let created = create(&app, "/api/incident-reports", body).await;
    let uri = format!("/api/incident-reports/{}", id_of(&created));

    let (status, result) = delete(&app, &uri).await;
    assert_eq!(status, 200);
    assert_eq!(result, json!({ "success": true }));

    let (status, _) = get(&app, &uri).await;
    assert_eq!(status, 404);

    let (status, _) = get(&app, &format!("/api/investigation-participants/{}", participant)).await;
    assert_eq!(status, 200);
    let (status, _) = get(&app, &format!("/api/corrective-actions/{}", action)).await;
    assert_eq!(status, 200);
}

#[actix_rt::test]
async fn test_deleting_participant_detaches_it_from_reports() {
    let db = create_test_db().await;
    let app = create_test_app(&db.pool).await;

    let keep = create_participant(&app, "Stays").await;
    let removed = create_participant(&app, "Leaves").await;
    let action = create_action(&app, "Goes away").await;

    let mut body = report_body();
    body["investigation_participant_ids"] = json!([keep, removed]);
    body["corrective_action_ids"] = json!([action]);
    let created = create(&app, "/api/incident-reports", body).await;

    let (status, _) = delete(&app, &format!("/api/investigation-participants/{}", removed)).await;
    assert_eq!(status, 200);
    let (status, _) = delete(&app, &format!("/api/corrective-actions/{}", action)).await;
    assert_eq!(status, 200);

    let (_, report) = get(&app, &format!("/api/incident-reports/{}", id_of(&created))).await;
    assert_eq!(ids_in(&report["investigation_participants"]), vec![keep]);
    assert!(report["corrective_actions"].as_array().unwrap().is_empty());
}

#[actix_rt::test]
async fn test_deleting_department_clears_reference() {
    let db = create_test_db().await;
    let app = create_test_app(&db.pool).await;

    let department = create(&app, "/api/departments", json!({ "name": "Maintenance" })).await;
    let mut body = report_body();
    body["department_id"] = json!(id_of(&department));
    let created = create(&app, "/api/incident-reports", body).await;

    let (status, _) = delete(&app, &format!("/api/departments/{}", id_of(&department))).await;
    assert_eq!(status, 200);

    let (status, report) = get(&app, &format!("/api/incident-reports/{}", id_of(&created))).await;
    assert_eq!(status, 200);
    assert!(report["department_id"].is_null());
    assert!(report["department_name"].is_null());
}

#[actix_rt::test]
async fn test_list_filters_by_subproject() {
    let db = create_test_db().await;
    let app = create_test_app(&db.pool).await;

    let north = create(&app, "/api/subprojects", json!({ "name": "North" })).await;
    let south = create(&app, "/api/subprojects", json!({ "name": "South" })).await;

    let mut body = report_body();
    body["subproject_id"] = json!(id_of(&north));
    let in_north = create(&app, "/api/incident-reports", body.clone()).await;
    body["subproject_id"] = json!(id_of(&south));
    create(&app, "/api/incident-reports", body).await;

    let (status, list) = get(
        &app,
        &format!("/api/incident-reports?subproject_id={}", id_of(&north)),
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(ids_in(&list), vec![id_of(&in_north)]);

    let (_, all) = get(&app, "/api/incident-reports").await;
    assert_eq!(all.as_array().unwrap().len(), 2);
}

#[actix_rt::test]
async fn test_missing_report_returns_404() {
    let db = create_test_db().await;
    let app = create_test_app(&db.pool).await;
    let uri = format!("/api/incident-reports/{}", Uuid::now_v7());

    let (status, _) = get(&app, &uri).await;
    assert_eq!(status, 404);
    let (status, _) = put(&app, &uri, report_body()).await;
    assert_eq!(status, 404);
    let (status, _) = delete(&app, &uri).await;
    assert_eq!(status, 404);

    for path in ["/api/investigation-participants", "/api/corrective-actions"] {
        let (status, _) = get(&app, &format!("{}/{}", path, Uuid::now_v7())).await;
        assert_eq!(status, 404);
    }
}

#[actix_rt::test]
async fn test_participant_position_and_action_status() {
    let db = create_test_db().await;
    let app = create_test_app(&db.pool).await;

    let position = create(&app, "/api/positions", json!({ "name": "HSE Inspector" })).await;
    let participant = create(
        &app,
        "/api/investigation-participants",
        json!({ "name": "Sofia Torres", "role": "Lead investigator", "position_id": id_of(&position) }),
    )
    .await;
    assert_eq!(participant["position_name"], "HSE Inspector");

    let department = create(&app, "/api/departments", json!({ "name": "Quality" })).await;
    let (status, _) = post(
        &app,
        "/api/investigation-participants",
        json!({ "name": "Wrong kind", "position_id": id_of(&department) }),
    )
    .await;
    assert_eq!(status, 400);

    let (status, _) = post(
        &app,
        "/api/corrective-actions",
        json!({ "description": "Retrain crew", "status": "finished" }),
    )
    .await;
    assert_eq!(status, 400);

    let action = create(
        &app,
        "/api/corrective-actions",
        json!({ "description": "Retrain crew", "status": "in_progress", "due_date": "2026-11-30" }),
    )
    .await;
    let (status, updated) = put(
        &app,
        &format!("/api/corrective-actions/{}", id_of(&action)),
        json!({ "description": "Retrain crew", "status": "completed", "due_date": "2026-11-30" }),
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(updated["status"], "completed");
    assert_eq!(updated["due_date"], "2026-11-30");
}
