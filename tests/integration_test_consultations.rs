mod common;

use axum::http::StatusCode;
use chrono::{DateTime, Duration, Utc};
use common::TestApp;
use serde_json::json;

#[tokio::test]
async fn criar_consulta_com_agendamento_sem_deriva_de_fuso() {
    let app = TestApp::new().await;
    let (token, _) = app.register("agenda@test.com", "Cliente", "customer").await;

    let scheduled = Utc::now() + Duration::days(7);

    let (status, created) = app
        .post(
            "/consultations",
            Some(&token),
            json!({
                "title": "Consulta de dedetização",
                "description": "Apartamento de 60m2",
                "scheduledAt": scheduled.to_rfc3339(),
            }),
        )
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["status"], "pending");

    let id = created["id"].as_i64().unwrap();
    let (_, fetched) = app.get(&format!("/consultations/{id}"), Some(&token)).await;

    // O instante volta exatamente como foi enviado
    let returned: DateTime<Utc> = fetched["scheduledAt"]
        .as_str()
        .unwrap()
        .parse()
        .unwrap();
    assert_eq!(returned, scheduled);
}

#[tokio::test]
async fn consulta_sem_agendamento_e_valida() {
    let app = TestApp::new().await;
    let (token, _) = app.register("semdata@test.com", "Cliente", "customer").await;

    let (status, created) = app
        .post(
            "/consultations",
            Some(&token),
            json!({ "title": "Sem data", "description": "A combinar" }),
        )
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert!(created["scheduledAt"].is_null());
}

#[tokio::test]
async fn transicoes_de_status_da_consulta() {
    let app = TestApp::new().await;
    let (token, _) = app.register("fluxo@test.com", "Cliente", "customer").await;

    let (_, created) = app
        .post(
            "/consultations",
            Some(&token),
            json!({ "title": "Fluxo", "description": "d" }),
        )
        .await;
    let id = created["id"].as_i64().unwrap();

    // pending -> completed não é permitido
    let (status, _) = app
        .put(&format!("/consultations/{id}"), Some(&token), json!({ "status": "completed" }))
        .await;
    assert_eq!(status, StatusCode::CONFLICT);

    // pending -> in-progress -> completed
    let (status, body) = app
        .put(&format!("/consultations/{id}"), Some(&token), json!({ "status": "in-progress" }))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "in-progress");

    let (status, body) = app
        .put(&format!("/consultations/{id}"), Some(&token), json!({ "status": "completed" }))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "completed");

    // 'completed' é terminal
    let (status, _) = app
        .put(&format!("/consultations/{id}"), Some(&token), json!({ "status": "in-progress" }))
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn consulta_pode_ser_cancelada_antes_de_comecar() {
    let app = TestApp::new().await;
    let (token, _) = app.register("cancela@test.com", "Cliente", "customer").await;

    let (_, created) = app
        .post(
            "/consultations",
            Some(&token),
            json!({ "title": "Cancelável", "description": "d" }),
        )
        .await;
    let id = created["id"].as_i64().unwrap();

    let (status, body) = app
        .put(&format!("/consultations/{id}"), Some(&token), json!({ "status": "cancelled" }))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "cancelled");

    // Cancelada é terminal
    let (status, _) = app
        .put(&format!("/consultations/{id}"), Some(&token), json!({ "status": "in-progress" }))
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn atualizacao_parcial_preserva_o_agendamento() {
    let app = TestApp::new().await;
    let (token, _) = app.register("preserva@test.com", "Cliente", "customer").await;

    let scheduled = Utc::now() + Duration::days(3);
    let (_, created) = app
        .post(
            "/consultations",
            Some(&token),
            json!({
                "title": "Original",
                "description": "d",
                "scheduledAt": scheduled.to_rfc3339(),
            }),
        )
        .await;
    let id = created["id"].as_i64().unwrap();

    let (status, updated) = app
        .put(&format!("/consultations/{id}"), Some(&token), json!({ "title": "Renomeada" }))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["title"], "Renomeada");
    let returned: DateTime<Utc> = updated["scheduledAt"].as_str().unwrap().parse().unwrap();
    assert_eq!(returned, scheduled);
}

#[tokio::test]
async fn consultas_de_outro_usuario_sao_invisiveis() {
    let app = TestApp::new().await;
    let (token_a, _) = app.register("ca@test.com", "Usuária A", "customer").await;
    let (token_b, _) = app.register("cb@test.com", "Usuário B", "customer").await;

    let (_, created) = app
        .post(
            "/consultations",
            Some(&token_a),
            json!({ "title": "Da A", "description": "d" }),
        )
        .await;
    let id = created["id"].as_i64().unwrap();

    let (status, _) = app.get(&format!("/consultations/{id}"), Some(&token_b)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app.delete(&format!("/consultations/{id}"), Some(&token_b)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, list) = app.get("/consultations", Some(&token_b)).await;
    assert!(list.as_array().unwrap().is_empty());
}
