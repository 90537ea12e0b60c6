// src/models/quotation.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::models::auth::UserSummary;

// Ciclo de vida de um orçamento.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum QuotationStatus {
    Pending,
    Accepted,
    Rejected,
    Completed,
}

impl QuotationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuotationStatus::Pending => "pending",
            QuotationStatus::Accepted => "accepted",
            QuotationStatus::Rejected => "rejected",
            QuotationStatus::Completed => "completed",
        }
    }

    // Tabela de transições permitidas. 'rejected' e 'completed' são estados
    // terminais; repetir o status atual é sempre permitido (no-op).
    pub fn can_transition_to(&self, next: QuotationStatus) -> bool {
        use QuotationStatus::*;
        if *self == next {
            return true;
        }
        matches!(
            (*self, next),
            (Pending, Accepted) | (Pending, Rejected) | (Accepted, Completed)
        )
    }
}

// Um orçamento como devolvido pela API, com as identidades do cliente
// e do prestador já desnormalizadas.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Quotation {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub amount: Decimal,
    pub status: QuotationStatus,
    pub user_id: i64,
    pub provider_id: Option<i64>,
    pub user: UserSummary,
    pub provider: Option<UserSummary>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

fn validate_amount(amount: &Decimal) -> Result<(), ValidationError> {
    if amount.is_sign_negative() {
        let mut err = ValidationError::new("range");
        err.message = Some("O valor não pode ser negativo.".into());
        return Err(err);
    }
    Ok(())
}

// Dados para criação de um orçamento. O dono e o status inicial são
// definidos pelo servidor, nunca pelo payload.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateQuotationPayload {
    #[validate(length(min = 2, message = "O título deve ter no mínimo 2 caracteres."))]
    #[schema(example = "Remoção de entulho")]
    pub title: String,
    #[validate(length(min = 2, message = "A descrição deve ter no mínimo 2 caracteres."))]
    pub description: String,
    #[validate(custom(function = "validate_amount"))]
    pub amount: Decimal,
}

// Lista explícita dos campos mutáveis de um orçamento. Qualquer outro campo
// enviado no JSON (userId, createdAt...) é simplesmente ignorado.
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateQuotationPayload {
    #[validate(length(min = 2, message = "O título deve ter no mínimo 2 caracteres."))]
    pub title: Option<String>,
    #[validate(length(min = 2, message = "A descrição deve ter no mínimo 2 caracteres."))]
    pub description: Option<String>,
    #[validate(custom(function = "validate_amount"))]
    pub amount: Option<Decimal>,
    pub status: Option<QuotationStatus>,
    pub provider_id: Option<i64>,
}
