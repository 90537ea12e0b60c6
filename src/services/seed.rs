// src/services/seed.rs

use chrono::{Duration, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    common::error::AppError,
    config::AppState,
    models::{
        auth::UserRole,
        consultation::CreateConsultationPayload,
        quotation::CreateQuotationPayload,
    },
};

#[derive(Debug, Serialize, ToSchema)]
pub struct SeedSummary {
    pub message: String,
    pub customer: String,
    pub provider: String,
}

// Cria dados de demonstração passando pelos serviços normais.
// Sequência de escritas independentes, sem transação: se algo falhar no
// meio (ex.: e-mails já cadastrados), aborta e devolve o erro como está.
pub async fn run_seed(app_state: &AppState) -> Result<SeedSummary, AppError> {
    tracing::info!("Criando usuários de teste...");

    let (customer, _) = app_state
        .auth_service
        .register_user(
            "customer@test.com",
            "password123",
            "Cliente de Teste",
            Some(UserRole::Customer),
        )
        .await?;

    let (provider, _) = app_state
        .auth_service
        .register_user(
            "provider@test.com",
            "password123",
            "Prestador de Teste",
            Some(UserRole::Provider),
        )
        .await?;

    tracing::info!("Criando orçamentos de teste...");

    app_state
        .quotation_service
        .create_for_user(
            customer.id,
            CreateQuotationPayload {
                title: "Orçamento de desenvolvimento de site".to_string(),
                description: "Pedido de orçamento para o site da empresa.".to_string(),
                amount: Decimal::from(5_000_000_i64),
            },
        )
        .await?;

    app_state
        .quotation_service
        .create_for_user(
            customer.id,
            CreateQuotationPayload {
                title: "Orçamento de aplicativo móvel".to_string(),
                description: "Pedido de orçamento para app iOS/Android.".to_string(),
                amount: Decimal::from(8_000_000_i64),
            },
        )
        .await?;

    tracing::info!("Criando consultas de teste...");

    app_state
        .consultation_service
        .create_for_user(
            customer.id,
            CreateConsultationPayload {
                title: "Consulta sobre desenvolvimento de site".to_string(),
                description: "Gostaria de uma consulta sobre o desenvolvimento do site.".to_string(),
                scheduled_at: Some(Utc::now() + Duration::days(7)),
            },
        )
        .await?;

    app_state
        .consultation_service
        .create_for_user(
            customer.id,
            CreateConsultationPayload {
                title: "Consulta sobre aplicativo móvel".to_string(),
                description: "Gostaria de uma consulta sobre o desenvolvimento do app.".to_string(),
                scheduled_at: Some(Utc::now() + Duration::days(14)),
            },
        )
        .await?;

    tracing::info!("✅ Dados de demonstração criados com sucesso!");

    Ok(SeedSummary {
        message: "Dados de demonstração criados com sucesso!".to_string(),
        customer: customer.email,
        provider: provider.email,
    })
}
