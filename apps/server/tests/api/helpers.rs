//! Shared test helpers for API integration tests.

use actix_web::{App, dev::ServiceResponse, test, web};
use ohs_compliance_lib::api;
use ohs_compliance_lib::config::DatabaseSettings;
use ohs_compliance_lib::db::DbPool;
use serde_json::Value;
use tempfile::TempDir;

/// Database pool bound to a temporary directory that lives as long as it does.
pub struct TestDb {
    pub pool: DbPool,
    _dir: TempDir,
}

/// Create a fresh, migrated SQLite database.
pub async fn create_test_db() -> TestDb {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let settings = DatabaseSettings::sqlite(&dir.path().join("ohs.db"));

    let pool = DbPool::connect(&settings)
        .await
        .expect("Failed to open SQLite database");
    pool.run_migrations()
        .await
        .expect("Failed to run migrations");

    TestDb { pool, _dir: dir }
}

/// Create a test app serving every API route.
pub async fn create_test_app(
    pool: &DbPool,
) -> impl actix_web::dev::Service<
    actix_http::Request,
    Response = ServiceResponse,
    Error = actix_web::Error,
> {
    test::init_service(
        App::new()
            .app_data(web::Data::new(pool.clone()))
            .configure(api::configure),
    )
    .await
}

async fn send<S>(app: &S, req: test::TestRequest) -> (u16, Value)
where
    S: actix_web::dev::Service<
            actix_http::Request,
            Response = ServiceResponse,
            Error = actix_web::Error,
        >,
{
    let resp = test::call_service(app, req.to_request()).await;
    let status = resp.status().as_u16();
    let body: Value = test::read_body_json(resp).await;
    (status, body)
}

pub async fn get<S>(app: &S, uri: &str) -> (u16, Value)
where
    S: actix_web::dev::Service<
            actix_http::Request,
            Response = ServiceResponse,
            Error = actix_web::Error,
        >,
{
    send(app, test::TestRequest::get().uri(uri)).await
}

pub async fn post<S>(app: &S, uri: &str, body: Value) -> (u16, Value)
where
    S: actix_web::dev::Service<
            actix_http::Request,
            Response = ServiceResponse,
            Error = actix_web::Error,
        >,
{
    send(app, test::TestRequest::post().uri(uri).set_json(body)).await
}

pub async fn put<S>(app: &S, uri: &str, body: Value) -> (u16, Value)
where
    S: actix_web::dev::Service<
            actix_http::Request,
            Response = ServiceResponse,
            Error = actix_web::Error,
        >,
{
    send(app, test::TestRequest::put().uri(uri).set_json(body)).await
}

pub async fn delete<S>(app: &S, uri: &str) -> (u16, Value)
where
    S: actix_web::dev::Service<
            actix_http::Request,
            Response = ServiceResponse,
            Error = actix_web::Error,
        >,
{
    send(app, test::TestRequest::delete().uri(uri)).await
}

/// POST and assert 201, returning the created record.
pub async fn create<S>(app: &S, uri: &str, body: Value) -> Value
where
    S: actix_web::dev::Service<
            actix_http::Request,
            Response = ServiceResponse,
            Error = actix_web::Error,
        >,
{
    let (status, created) = post(app, uri, body).await;
    assert_eq!(status, 201, "POST {} failed: {}", uri, created);
    created
}

/// Id of a JSON record as a string.
pub fn id_of(record: &Value) -> String {
    record["id"]
        .as_str()
        .expect("record has no string id")
        .to_string()
}

/// Ids of every element of a JSON array.
pub fn ids_in(records: &Value) -> Vec<String> {
    records
        .as_array()
        .expect("expected a JSON array")
        .iter()
        .map(id_of)
        .collect()
}
