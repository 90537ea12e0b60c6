mod common;

use axum::http::StatusCode;
use common::TestApp;
use serde_json::json;

#[tokio::test]
async fn health_responde_sem_autenticacao() {
    let app = TestApp::new().await;

    let (status, body) = app.get("/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["environment"], "test");
    assert!(body["uptime"].is_u64());
    assert!(body["timestamp"].as_str().unwrap().contains('T'));
}

#[tokio::test]
async fn seed_cria_os_dados_de_demonstracao() {
    let app = TestApp::new().await;

    let (status, body) = app.post("/seed", None, json!({})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["customer"], "customer@test.com");
    assert_eq!(body["provider"], "provider@test.com");

    // O cliente semeado consegue logar e ver os seus registros
    let (status, login) = app
        .post(
            "/auth/login",
            None,
            json!({ "email": "customer@test.com", "password": "password123" }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    let token = login["token"].as_str().unwrap();

    let (_, quotations) = app.get("/quotations", Some(token)).await;
    let quotations = quotations.as_array().unwrap();
    assert_eq!(quotations.len(), 2);
    assert!(quotations.iter().all(|q| q["status"] == "pending"));

    let (_, consultations) = app.get("/consultations", Some(token)).await;
    let consultations = consultations.as_array().unwrap();
    assert_eq!(consultations.len(), 2);
    assert!(consultations.iter().all(|c| !c["scheduledAt"].is_null()));

    // O prestador semeado não é dono de nada
    let (_, login) = app
        .post(
            "/auth/login",
            None,
            json!({ "email": "provider@test.com", "password": "password123" }),
        )
        .await;
    let provider_token = login["token"].as_str().unwrap();
    let (_, list) = app.get("/quotations", Some(provider_token)).await;
    assert!(list.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn seed_repetido_aborta_e_reporta_o_erro() {
    let app = TestApp::new().await;

    let (status, _) = app.post("/seed", None, json!({})).await;
    assert_eq!(status, StatusCode::OK);

    // Sem rollback e sem tratamento especial: os e-mails já existem,
    // a sequência aborta e o erro sobe como está.
    let (status, body) = app.post("/seed", None, json!({})).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert!(body["error"].as_str().is_some());
}

#[tokio::test]
async fn openapi_e_servido() {
    let app = TestApp::new().await;

    let (status, body) = app.get("/api-docs/openapi.json", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/quotations"].is_object());
    assert!(body["paths"]["/consultations/{id}"].is_object());
}
