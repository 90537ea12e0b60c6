// src/handlers/consultations.rs

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
    models::consultation::{
        Consultation, CreateConsultationPayload, UpdateConsultationPayload,
    },
};

// GET /consultations
#[utoipa::path(
    get,
    path = "/consultations",
    tag = "Consultations",
    responses(
        (status = 200, description = "Consultas do usuário, mais recentes primeiro", body = Vec<Consultation>),
        (status = 401, description = "Não autenticado")
    ),
    security(("api_jwt" = []))
)]
pub async fn list_consultations(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
) -> Result<Json<Vec<Consultation>>, AppError> {
    let consultations = app_state.consultation_service.list_for_user(user.id).await?;
    Ok(Json(consultations))
}

// GET /consultations/{id}
#[utoipa::path(
    get,
    path = "/consultations/{id}",
    tag = "Consultations",
    params(("id" = i64, Path, description = "ID da consulta")),
    responses(
        (status = 200, description = "Detalhes da consulta", body = Consultation),
        (status = 404, description = "Consulta não encontrada"),
        (status = 401, description = "Não autenticado")
    ),
    security(("api_jwt" = []))
)]
pub async fn get_consultation(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(id): Path<i64>,
) -> Result<Json<Consultation>, AppError> {
    let consultation = app_state
        .consultation_service
        .find_for_user(id, user.id)
        .await?;
    Ok(Json(consultation))
}

// POST /consultations
#[utoipa::path(
    post,
    path = "/consultations",
    tag = "Consultations",
    request_body = CreateConsultationPayload,
    responses(
        (status = 201, description = "Consulta criada", body = Consultation),
        (status = 400, description = "Dados inválidos"),
        (status = 401, description = "Não autenticado")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_consultation(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Json(payload): Json<CreateConsultationPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let consultation = app_state
        .consultation_service
        .create_for_user(user.id, payload)
        .await?;

    Ok((StatusCode::CREATED, Json(consultation)))
}

// PUT /consultations/{id}
#[utoipa::path(
    put,
    path = "/consultations/{id}",
    tag = "Consultations",
    params(("id" = i64, Path, description = "ID da consulta")),
    request_body = UpdateConsultationPayload,
    responses(
        (status = 200, description = "Consulta atualizada", body = Consultation),
        (status = 404, description = "Consulta não encontrada"),
        (status = 409, description = "Transição de status não permitida"),
        (status = 401, description = "Não autenticado")
    ),
    security(("api_jwt" = []))
)]
pub async fn update_consultation(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateConsultationPayload>,
) -> Result<Json<Consultation>, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let consultation = app_state
        .consultation_service
        .update_for_user(id, user.id, payload)
        .await?;

    Ok(Json(consultation))
}

// DELETE /consultations/{id}
#[utoipa::path(
    delete,
    path = "/consultations/{id}",
    tag = "Consultations",
    params(("id" = i64, Path, description = "ID da consulta")),
    responses(
        (status = 204, description = "Consulta removida"),
        (status = 404, description = "Consulta não encontrada"),
        (status = 401, description = "Não autenticado")
    ),
    security(("api_jwt" = []))
)]
pub async fn delete_consultation(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    app_state
        .consultation_service
        .delete_for_user(id, user.id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
