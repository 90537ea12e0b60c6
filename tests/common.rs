// Harness compartilhado pelos testes de integração: sobe o router completo
// sobre um banco SQLite exclusivo do teste, já migrado.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    SqlitePool,
};
use std::str::FromStr;
use tower::ServiceExt; // for `oneshot`
use uuid::Uuid;

use backend::{config::AppState, create_router};

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub pool: SqlitePool,
}

#[allow(dead_code)]
impl TestApp {
    pub async fn new() -> Self {
        let db_path = std::env::temp_dir().join(format!("quotes_test_{}.db", Uuid::new_v4()));
        let db_url = format!("sqlite://{}?mode=rwc", db_path.display());

        let connection_options = SqliteConnectOptions::from_str(&db_url)
            .unwrap()
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .connect_with(connection_options)
            .await
            .expect("Failed to connect to test db");

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .expect("Failed to migrate test db");

        let state = AppState::from_pool(
            pool.clone(),
            "segredo-de-teste".to_string(),
            "test".to_string(),
            "http://localhost:3000".to_string(),
        );

        Self {
            router: create_router(state),
            pool,
        }
    }

    // Dispara uma requisição contra o router e devolve (status, corpo JSON).
    pub async fn send(
        &self,
        method: &str,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }

        let request = match body {
            Some(json_body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(serde_json::to_vec(&json_body).unwrap()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    pub async fn get(&self, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
        self.send("GET", uri, token, None).await
    }

    pub async fn post(&self, uri: &str, token: Option<&str>, body: Value) -> (StatusCode, Value) {
        self.send("POST", uri, token, Some(body)).await
    }

    pub async fn put(&self, uri: &str, token: Option<&str>, body: Value) -> (StatusCode, Value) {
        self.send("PUT", uri, token, Some(body)).await
    }

    pub async fn delete(&self, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
        self.send("DELETE", uri, token, None).await
    }

    // Registra um usuário e devolve (token, usuário).
    pub async fn register(&self, email: &str, name: &str, role: &str) -> (String, Value) {
        let (status, body) = self
            .post(
                "/auth/register",
                None,
                json!({
                    "email": email,
                    "password": "senha123",
                    "name": name,
                    "role": role,
                }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "registro falhou: {body}");
        (
            body["token"].as_str().unwrap().to_string(),
            body["user"].clone(),
        )
    }
}
