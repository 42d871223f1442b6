#![allow(dead_code)]

use actix_web::{test, web, App};
use qna_api::api::AppState;
use qna_api::config::DatabaseConfig;
use qna_api::database::Database;
use qna_api::routes::configure_routes;
use serde_json::{json, Value};
use tempfile::TempDir;

pub struct TestApp<S> {
    pub database: Database,
    pub app: S,
    _dir: TempDir,
}

pub async fn setup_test_db() -> anyhow::Result<(TempDir, Database)> {
    let dir = tempfile::tempdir()?;
    let config = DatabaseConfig {
        url: format!("sqlite://{}", dir.path().join("qna-test.db").display()),
        max_connections: 4,
        acquire_timeout_secs: 5,
        log_statements: false,
    };

    let database = Database::connect(&config).await?;
    database.init().await?;

    Ok((dir, database))
}

pub async fn setup_test_app() -> anyhow::Result<
    TestApp<
        impl actix_web::dev::Service<
            actix_http::Request,
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
        >,
    >,
> {
    let (dir, database) = setup_test_db().await?;

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(AppState {
                database: database.clone(),
            }))
            .configure(configure_routes),
    )
    .await;

    Ok(TestApp {
        database,
        app,
        _dir: dir,
    })
}

pub fn sample_question() -> Value {
    json!({"text": "What is Python?"})
}

pub fn sample_answer() -> Value {
    json!({"text": "Python is a programming language", "user_id": "user-123"})
}

pub async fn count_rows(database: &Database, table: &str) -> i64 {
    sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(database.pool())
        .await
        .unwrap()
}
