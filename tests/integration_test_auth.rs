mod common;

use axum::http::StatusCode;
use common::TestApp;
use serde_json::json;

#[tokio::test]
async fn registro_devolve_usuario_e_token() {
    let app = TestApp::new().await;

    let (status, body) = app
        .post(
            "/auth/register",
            None,
            json!({
                "email": "cliente@teste.com",
                "password": "senha123",
                "name": "Cliente",
            }),
        )
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert!(!body["token"].as_str().unwrap().is_empty());
    assert_eq!(body["user"]["email"], "cliente@teste.com");
    // Sem papel explícito, assume 'customer'
    assert_eq!(body["user"]["role"], "customer");
    assert_eq!(body["user"]["isActive"], true);
    // O hash de senha nunca sai na resposta
    assert!(body["user"].get("passwordHash").is_none());
    assert!(body["user"].get("password").is_none());
}

#[tokio::test]
async fn registro_com_email_duplicado_conflita() {
    let app = TestApp::new().await;
    app.register("repetido@teste.com", "Primeiro", "customer").await;

    let (status, body) = app
        .post(
            "/auth/register",
            None,
            json!({
                "email": "repetido@teste.com",
                "password": "outrasenha",
                "name": "Segundo",
            }),
        )
        .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert!(body["error"].as_str().unwrap().contains("e-mail"));
}

#[tokio::test]
async fn registro_com_campos_invalidos_devolve_detalhes() {
    let app = TestApp::new().await;

    let (status, body) = app
        .post(
            "/auth/register",
            None,
            json!({
                "email": "nao-e-email",
                "password": "123",
                "name": "X",
            }),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let details = body["details"].as_object().unwrap();
    assert!(details.contains_key("email"));
    assert!(details.contains_key("password"));
    assert!(details.contains_key("name"));
}

#[tokio::test]
async fn login_com_credenciais_corretas() {
    let app = TestApp::new().await;
    app.register("login@teste.com", "Cliente", "customer").await;

    let (status, body) = app
        .post(
            "/auth/login",
            None,
            json!({ "email": "login@teste.com", "password": "senha123" }),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert!(!body["token"].as_str().unwrap().is_empty());
    assert_eq!(body["user"]["email"], "login@teste.com");
}

#[tokio::test]
async fn login_falha_de_forma_uniforme() {
    let app = TestApp::new().await;
    app.register("existe@teste.com", "Cliente", "customer").await;

    // Senha errada de um e-mail existente
    let (status_wrong_pass, body_wrong_pass) = app
        .post(
            "/auth/login",
            None,
            json!({ "email": "existe@teste.com", "password": "senhaerrada" }),
        )
        .await;

    // E-mail que não existe
    let (status_unknown, body_unknown) = app
        .post(
            "/auth/login",
            None,
            json!({ "email": "naoexiste@teste.com", "password": "senha123" }),
        )
        .await;

    // Nenhum sinal distingue os dois casos
    assert_eq!(status_wrong_pass, StatusCode::UNAUTHORIZED);
    assert_eq!(status_unknown, StatusCode::UNAUTHORIZED);
    assert_eq!(body_wrong_pass, body_unknown);
}

#[tokio::test]
async fn rotas_protegidas_rejeitam_sem_token() {
    let app = TestApp::new().await;

    let (status, _) = app.get("/users/profile", None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = app.get("/quotations", Some("token-invalido")).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = app.get("/consultations", None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn perfil_devolve_e_atualiza_somente_nome_e_telefone() {
    let app = TestApp::new().await;
    let (token, user) = app.register("perfil@teste.com", "Nome Original", "customer").await;

    let (status, body) = app.get("/users/profile", Some(&token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["email"], "perfil@teste.com");
    assert_eq!(body["name"], "Nome Original");

    // Atualiza nome e telefone; tenta mudar o e-mail junto (deve ser ignorado)
    let (status, body) = app
        .put(
            "/users/profile",
            Some(&token),
            json!({
                "name": "Nome Novo",
                "phone": "11999990000",
                "email": "hacker@teste.com",
            }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Nome Novo");
    assert_eq!(body["phone"], "11999990000");
    assert_eq!(body["email"], "perfil@teste.com");
    assert_eq!(body["id"], user["id"]);

    // Atualização parcial: só o telefone, o nome fica como está
    let (status, body) = app
        .put("/users/profile", Some(&token), json!({ "phone": "11888880000" }))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Nome Novo");
    assert_eq!(body["phone"], "11888880000");
}
