// src/handlers/seed.rs

use axum::{extract::State, Json};

use crate::{
    common::error::AppError,
    config::AppState,
    services::seed::{run_seed, SeedSummary},
};

// POST /seed
#[utoipa::path(
    post,
    path = "/seed",
    tag = "Seed",
    responses(
        (status = 200, description = "Dados de demonstração criados", body = SeedSummary),
        (status = 409, description = "Dados de demonstração já existem")
    )
)]
pub async fn seed(State(app_state): State<AppState>) -> Result<Json<SeedSummary>, AppError> {
    let summary = run_seed(&app_state).await?;
    Ok(Json(summary))
}
