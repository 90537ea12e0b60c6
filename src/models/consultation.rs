// src/models/consultation.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::auth::UserSummary;

// Ciclo de vida de uma consulta.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum ConsultationStatus {
    Pending,
    #[serde(rename = "in-progress")]
    #[sqlx(rename = "in-progress")]
    InProgress,
    Completed,
    Cancelled,
}

impl ConsultationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConsultationStatus::Pending => "pending",
            ConsultationStatus::InProgress => "in-progress",
            ConsultationStatus::Completed => "completed",
            ConsultationStatus::Cancelled => "cancelled",
        }
    }

    // 'completed' e 'cancelled' são terminais; repetir o status atual
    // é sempre permitido (no-op).
    pub fn can_transition_to(&self, next: ConsultationStatus) -> bool {
        use ConsultationStatus::*;
        if *self == next {
            return true;
        }
        matches!(
            (*self, next),
            (Pending, InProgress)
                | (Pending, Cancelled)
                | (InProgress, Completed)
                | (InProgress, Cancelled)
        )
    }
}

// Uma consulta como devolvida pela API, com as identidades do cliente
// e do prestador já desnormalizadas.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Consultation {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub status: ConsultationStatus,
    pub user_id: i64,
    pub provider_id: Option<i64>,
    pub user: UserSummary,
    pub provider: Option<UserSummary>,
    pub scheduled_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// Dados para criação de uma consulta.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateConsultationPayload {
    #[validate(length(min = 2, message = "O título deve ter no mínimo 2 caracteres."))]
    #[schema(example = "Consulta sobre dedetização")]
    pub title: String,
    #[validate(length(min = 2, message = "A descrição deve ter no mínimo 2 caracteres."))]
    pub description: String,
    pub scheduled_at: Option<DateTime<Utc>>,
}

// Lista explícita dos campos mutáveis de uma consulta.
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateConsultationPayload {
    #[validate(length(min = 2, message = "O título deve ter no mínimo 2 caracteres."))]
    pub title: Option<String>,
    #[validate(length(min = 2, message = "A descrição deve ter no mínimo 2 caracteres."))]
    pub description: Option<String>,
    pub status: Option<ConsultationStatus>,
    pub provider_id: Option<i64>,
    pub scheduled_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transicoes_validas_de_consulta() {
        use ConsultationStatus::*;
        assert!(Pending.can_transition_to(InProgress));
        assert!(Pending.can_transition_to(Cancelled));
        assert!(InProgress.can_transition_to(Completed));
        assert!(InProgress.can_transition_to(Cancelled));
        assert!(Pending.can_transition_to(Pending));
    }

    #[test]
    fn transicoes_invalidas_de_consulta() {
        use ConsultationStatus::*;
        assert!(!Pending.can_transition_to(Completed));
        assert!(!Completed.can_transition_to(InProgress));
        assert!(!Cancelled.can_transition_to(Pending));
    }
}
