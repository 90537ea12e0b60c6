// src/handlers/health.rs

use axum::{extract::State, Json};
use chrono::Utc;
use serde::Serialize;
use utoipa::ToSchema;

use crate::config::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    // Segundos desde a inicialização do processo
    pub uptime: u64,
    pub environment: String,
}

// GET /health
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Status do serviço", body = HealthResponse)
    )
)]
pub async fn health_check(State(app_state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        timestamp: Utc::now().to_rfc3339(),
        uptime: app_state.started_at.elapsed().as_secs(),
        environment: app_state.environment.clone(),
    })
}
