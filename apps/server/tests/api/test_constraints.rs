//! Unique index violations raised by the database itself, past the pre-checks.

use actix_web::ResponseError;
use actix_web::http::StatusCode;
use chrono::{NaiveDate, Utc};
use ohs_compliance_lib::entity::{complaint_record, incident_report, involved_person};
use ohs_compliance_lib::error::AppError;
use sea_orm::{ActiveModelTrait, DbErr, Set};
use uuid::Uuid;

use super::helpers::*;

async fn insert_complaint(db: &TestDb, number: &str) -> Result<complaint_record::Model, DbErr> {
    let now = Utc::now();
    complaint_record::ActiveModel {
        id: Set(Uuid::now_v7()),
        number: Set(number.to_string()),
        category: Set("complaint".to_string()),
        complainant_name: Set("Site neighbour".to_string()),
        received_date: Set(NaiveDate::from_ymd_opt(2026, 10, 1).unwrap()),
        description: Set("Noise after hours".to_string()),
        resolution_description: Set(None),
        resolution_date: Set(None),
        status: Set("open".to_string()),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(db.pool.connection())
    .await
}

async fn insert_involved_person(
    db: &TestDb,
    report_id: Uuid,
    name: &str,
) -> Result<involved_person::Model, DbErr> {
    involved_person::ActiveModel {
        id: Set(Uuid::now_v7()),
        incident_report_id: Set(report_id),
        name: Set(name.to_string()),
        position: Set(None),
        contact: Set(None),
        injury_description: Set(None),
        created_at: Set(Utc::now()),
    }
    .insert(db.pool.connection())
    .await
}

#[actix_rt::test]
async fn test_number_index_violation_reports_the_number() {
    let db = create_test_db().await;
    insert_complaint(&db, "CR-RACE").await.unwrap();

    let err = insert_complaint(&db, "CR-RACE").await.unwrap_err();
    match AppError::from_numbered_write(err, "CR-RACE") {
        AppError::DuplicateNumber(number) => assert_eq!(number, "CR-RACE"),
        other => panic!("expected duplicate number, got {:?}", other),
    }
}

#[actix_rt::test]
async fn test_number_index_violation_without_context_is_not_a_duplicate_number() {
    let db = create_test_db().await;
    insert_complaint(&db, "CR-7").await.unwrap();

    let err: AppError = insert_complaint(&db, "CR-7").await.unwrap_err().into();
    assert!(matches!(err, AppError::Database(_)));
}

#[actix_rt::test]
async fn test_second_involved_person_is_a_database_error() {
    let db = create_test_db().await;
    let now = Utc::now();
    let report = incident_report::ActiveModel {
        id: Set(Uuid::now_v7()),
        name: Set("Maria Lopez".to_string()),
        role: Set("Site supervisor".to_string()),
        incident_date: Set(NaiveDate::from_ymd_opt(2026, 10, 2).unwrap()),
        incident_time: Set(None),
        location: Set("Warehouse B".to_string()),
        description: Set("Pallet fell from rack".to_string()),
        immediate_cause: Set(None),
        root_cause: Set(None),
        department_id: Set(None),
        subproject_id: Set(None),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(db.pool.connection())
    .await
    .unwrap();

    insert_involved_person(&db, report.id, "First responder")
        .await
        .unwrap();
    let err = insert_involved_person(&db, report.id, "Second responder")
        .await
        .unwrap_err();

    // Even a write that carries a number must not blame it for an unrelated key.
    let err = AppError::from_numbered_write(err, "IR-1");
    assert!(matches!(err, AppError::Database(_)));
    assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
}
