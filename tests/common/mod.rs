use std::net::SocketAddr;

use reqwest::{Client, StatusCode};
use serde_json::{json, Value};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use uuid::Uuid;

use projects_api::config::Config;

/// A running test server instance with a dedicated test database.
pub struct TestApp {
    pub addr: SocketAddr,
    pub pool: PgPool,
    pub client: Client,
    pub db_name: String,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// Create a project, asserting success, and return its JSON.
    pub async fn create_project(&self, name: &str, url: &str, info: &str) -> Value {
        let (body, status) = self
            .post("/project/", &json!({ "name": name, "url": url, "info": info }))
            .await;
        assert_eq!(status, StatusCode::CREATED, "create project failed: {body}");
        body
    }

    pub async fn get(&self, path: &str) -> (Value, StatusCode) {
        let resp = self
            .client
            .get(self.url(path))
            .send()
            .await
            .expect("get request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    pub async fn post(&self, path: &str, body: &Value) -> (Value, StatusCode) {
        let resp = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .expect("post request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    pub async fn put(&self, path: &str, body: &Value) -> (Value, StatusCode) {
        let resp = self
            .client
            .put(self.url(path))
            .json(body)
            .send()
            .await
            .expect("put request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    pub async fn delete(&self, path: &str) -> (Value, StatusCode) {
        let resp = self
            .client
            .delete(self.url(path))
            .send()
            .await
            .expect("delete request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }
}

/// Point `base_url` at another database on the same server.
fn with_database(base_url: &str, db_name: &str) -> String {
    base_url
        .rsplit_once('/')
        .map(|(base, _)| format!("{base}/{db_name}"))
        .unwrap_or_else(|| base_url.to_string())
}

fn admin_url(base_url: &str) -> String {
    with_database(base_url, "postgres")
}

/// Spawn a test app with a fresh temporary database.
pub async fn spawn_app() -> TestApp {
    let _ = dotenvy::dotenv();

    let base_url = std::env::var("DATABASE_URL")
        .expect("DATABASE_URL must be set for tests");

    let db_name = format!("projects_test_{}", Uuid::now_v7().simple());

    let admin_pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&admin_url(&base_url))
        .await
        .expect("Failed to connect to postgres for test DB creation");

    sqlx::query(&format!("CREATE DATABASE \"{db_name}\""))
        .execute(&admin_pool)
        .await
        .expect("Failed to create test database");

    admin_pool.close().await;

    let test_url = with_database(&base_url, &db_name);

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&test_url)
        .await
        .expect("Failed to connect to test database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations on test database");

    let config = Config {
        database_url: test_url,
        host: "127.0.0.1".parse().unwrap(),
        port: 0,
        max_connections: 5,
        max_body_size: 1_048_576,
        log_level: "warn".to_string(),
    };

    let app = projects_api::build_app(pool.clone(), &config);

    // The listener picks its own port; `config.port` is not consulted.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server failed");
    });

    TestApp {
        addr,
        pool,
        client: Client::new(),
        db_name,
    }
}

/// Drop the test database after tests complete.
pub async fn cleanup(app: TestApp) {
    let db_name = app.db_name.clone();
    app.pool.close().await;

    let base_url = std::env::var("DATABASE_URL")
        .expect("DATABASE_URL must be set for tests");

    let admin_pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&admin_url(&base_url))
        .await
        .expect("Failed to connect for cleanup");

    let _ = sqlx::query(&format!("DROP DATABASE IF EXISTS \"{db_name}\" WITH (FORCE)"))
        .execute(&admin_pool)
        .await;

    admin_pool.close().await;
}
