// src/handlers/quotations.rs

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::auth::AuthenticatedUser,
    models::quotation::{CreateQuotationPayload, Quotation, UpdateQuotationPayload},
};

// GET /quotations
#[utoipa::path(
    get,
    path = "/quotations",
    tag = "Quotations",
    responses(
        (status = 200, description = "Orçamentos do usuário, mais recentes primeiro", body = Vec<Quotation>),
        (status = 401, description = "Não autenticado")
    ),
    security(("api_jwt" = []))
)]
pub async fn list_quotations(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
) -> Result<Json<Vec<Quotation>>, AppError> {
    let quotations = app_state.quotation_service.list_for_user(user.id).await?;
    Ok(Json(quotations))
}

// GET /quotations/{id}
#[utoipa::path(
    get,
    path = "/quotations/{id}",
    tag = "Quotations",
    params(("id" = i64, Path, description = "ID do orçamento")),
    responses(
        (status = 200, description = "Detalhes do orçamento", body = Quotation),
        (status = 404, description = "Orçamento não encontrado"),
        (status = 401, description = "Não autenticado")
    ),
    security(("api_jwt" = []))
)]
pub async fn get_quotation(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(id): Path<i64>,
) -> Result<Json<Quotation>, AppError> {
    let quotation = app_state.quotation_service.find_for_user(id, user.id).await?;
    Ok(Json(quotation))
}

// POST /quotations
#[utoipa::path(
    post,
    path = "/quotations",
    tag = "Quotations",
    request_body = CreateQuotationPayload,
    responses(
        (status = 201, description = "Orçamento criado", body = Quotation),
        (status = 400, description = "Dados inválidos"),
        (status = 401, description = "Não autenticado")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_quotation(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Json(payload): Json<CreateQuotationPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let quotation = app_state
        .quotation_service
        .create_for_user(user.id, payload)
        .await?;

    Ok((StatusCode::CREATED, Json(quotation)))
}

// PUT /quotations/{id}
#[utoipa::path(
    put,
    path = "/quotations/{id}",
    tag = "Quotations",
    params(("id" = i64, Path, description = "ID do orçamento")),
    request_body = UpdateQuotationPayload,
    responses(
        (status = 200, description = "Orçamento atualizado", body = Quotation),
        (status = 404, description = "Orçamento não encontrado"),
        (status = 409, description = "Transição de status não permitida"),
        (status = 401, description = "Não autenticado")
    ),
    security(("api_jwt" = []))
)]
pub async fn update_quotation(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateQuotationPayload>,
) -> Result<Json<Quotation>, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let quotation = app_state
        .quotation_service
        .update_for_user(id, user.id, payload)
        .await?;

    Ok(Json(quotation))
}

// DELETE /quotations/{id}
#[utoipa::path(
    delete,
    path = "/quotations/{id}",
    tag = "Quotations",
    params(("id" = i64, Path, description = "ID do orçamento")),
    responses(
        (status = 204, description = "Orçamento removido"),
        (status = 404, description = "Orçamento não encontrado"),
        (status = 401, description = "Não autenticado")
    ),
    security(("api_jwt" = []))
)]
pub async fn delete_quotation(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    app_state.quotation_service.delete_for_user(id, user.id).await?;
    Ok(StatusCode::NO_CONTENT)
}
