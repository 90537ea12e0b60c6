// src/lib.rs

use axum::{
    http::{header, HeaderValue, Method},
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub mod common;
pub mod config;
pub mod db;
pub mod docs;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;

use crate::config::AppState;
use crate::middleware::auth::auth_guard;

// Monta o router completo da aplicação. Exposto aqui (e não no main)
// para os testes de integração poderem dirigir o app inteiro.
pub fn create_router(app_state: AppState) -> Router {
    // Define as rotas de autenticação (públicas)
    let auth_routes = Router::new()
        .route("/register", post(handlers::auth::register))
        .route("/login", post(handlers::auth::login));

    // Rotas de perfil (protegidas pelo middleware)
    let user_routes = Router::new()
        .route(
            "/profile",
            get(handlers::users::get_profile).put(handlers::users::update_profile),
        )
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_guard,
        ));

    let quotation_routes = Router::new()
        .route(
            "/",
            get(handlers::quotations::list_quotations)
                .post(handlers::quotations::create_quotation),
        )
        .route(
            "/{id}",
            get(handlers::quotations::get_quotation)
                .put(handlers::quotations::update_quotation)
                .delete(handlers::quotations::delete_quotation),
        )
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_guard,
        ));

    let consultation_routes = Router::new()
        .route(
            "/",
            get(handlers::consultations::list_consultations)
                .post(handlers::consultations::create_consultation),
        )
        .route(
            "/{id}",
            get(handlers::consultations::get_consultation)
                .put(handlers::consultations::update_consultation)
                .delete(handlers::consultations::delete_consultation),
        )
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_guard,
        ));

    // CORS liberado somente para a origem do frontend
    let cors = CorsLayer::new()
        .allow_origin(
            app_state
                .frontend_url
                .parse::<HeaderValue>()
                .expect("FRONTEND_URL inválida"),
        )
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .allow_credentials(true);

    // Combina tudo no router principal
    Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/seed", post(handlers::seed::seed))
        .nest("/auth", auth_routes)
        .nest("/users", user_routes)
        .nest("/quotations", quotation_routes)
        .nest("/consultations", consultation_routes)
        .merge(
            SwaggerUi::new("/docs").url("/api-docs/openapi.json", docs::ApiDoc::openapi()),
        )
        .layer(cors)
        .with_state(app_state)
}
