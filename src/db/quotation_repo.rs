// src/db/quotation_repo.rs

use std::str::FromStr;

use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};

use crate::{
    common::error::AppError,
    db::record_repo::OwnedRecordRepository,
    models::{
        auth::UserSummary,
        quotation::{CreateQuotationPayload, Quotation, QuotationStatus, UpdateQuotationPayload},
    },
};

// SELECT base com as identidades do cliente e do prestador já juntadas.
// O prestador é LEFT JOIN porque a atribuição é opcional.
const QUOTATION_SELECT: &str = r#"
    SELECT q.id, q.title, q.description, q.amount, q.status,
           q.user_id, q.provider_id, q.created_at, q.updated_at,
           u.name  AS owner_name,  u.email AS owner_email,
           u.phone AS owner_phone, u.role  AS owner_role,
           p.id    AS provider_uid,  p.name  AS provider_name,
           p.email AS provider_email, p.phone AS provider_phone,
           p.role  AS provider_role
    FROM quotations q
    JOIN users u ON u.id = q.user_id
    LEFT JOIN users p ON p.id = q.provider_id
"#;

fn quotation_from_row(row: &SqliteRow) -> Result<Quotation, AppError> {
    let amount_raw: String = row.try_get("amount")?;
    let amount = Decimal::from_str(&amount_raw)
        .map_err(|e| anyhow::anyhow!("Valor monetário inválido no banco: {e}"))?;

    let user = UserSummary {
        id: row.try_get("user_id")?,
        name: row.try_get("owner_name")?,
        email: row.try_get("owner_email")?,
        phone: row.try_get("owner_phone")?,
        role: row.try_get("owner_role")?,
    };

    let provider = match row.try_get::<Option<i64>, _>("provider_uid")? {
        Some(id) => Some(UserSummary {
            id,
            name: row.try_get("provider_name")?,
            email: row.try_get("provider_email")?,
            phone: row.try_get("provider_phone")?,
            role: row.try_get("provider_role")?,
        }),
        None => None,
    };

    Ok(Quotation {
        id: row.try_get("id")?,
        title: row.try_get("title")?,
        description: row.try_get("description")?,
        amount,
        status: row.try_get("status")?,
        user_id: row.try_get("user_id")?,
        provider_id: row.try_get("provider_id")?,
        user,
        provider,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}

#[derive(Clone)]
pub struct QuotationRepository {
    pool: SqlitePool,
}

impl QuotationRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OwnedRecordRepository for QuotationRepository {
    type Record = Quotation;
    type NewRecord = CreateQuotationPayload;
    type Changes = UpdateQuotationPayload;

    fn not_found() -> AppError {
        AppError::NotFound("Orçamento não encontrado.")
    }

    fn record_id(record: &Quotation) -> i64 {
        record.id
    }

    async fn list_by_owner(&self, owner_id: i64) -> Result<Vec<Quotation>, AppError> {
        let sql = format!(
            "{QUOTATION_SELECT} WHERE q.user_id = ?1 ORDER BY q.created_at DESC, q.id DESC"
        );
        let rows = sqlx::query(&sql).bind(owner_id).fetch_all(&self.pool).await?;
        rows.iter().map(quotation_from_row).collect()
    }

    async fn find_by_id_and_owner(
        &self,
        id: i64,
        owner_id: i64,
    ) -> Result<Option<Quotation>, AppError> {
        let sql = format!("{QUOTATION_SELECT} WHERE q.id = ?1 AND q.user_id = ?2");
        let maybe_row = sqlx::query(&sql)
            .bind(id)
            .bind(owner_id)
            .fetch_optional(&self.pool)
            .await?;
        maybe_row.as_ref().map(quotation_from_row).transpose()
    }

    async fn insert(
        &self,
        owner_id: i64,
        data: CreateQuotationPayload,
    ) -> Result<Quotation, AppError> {
        let now = Utc::now();
        let result = sqlx::query(
            r#"
            INSERT INTO quotations (title, description, amount, status, user_id, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?6)
            "#,
        )
        .bind(&data.title)
        .bind(&data.description)
        .bind(data.amount.round_dp(2).to_string())
        .bind(QuotationStatus::Pending)
        .bind(owner_id)
        .bind(now)
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_rowid();
        self.find_by_id_and_owner(id, owner_id)
            .await?
            .ok_or_else(|| anyhow::anyhow!("Orçamento recém-criado não foi encontrado.").into())
    }

    async fn save(&self, record: &Quotation) -> Result<(), AppError> {
        sqlx::query(
            r#"
            UPDATE quotations
            SET title = ?1, description = ?2, amount = ?3, status = ?4,
                provider_id = ?5, updated_at = ?6
            WHERE id = ?7
            "#,
        )
        .bind(&record.title)
        .bind(&record.description)
        .bind(record.amount.round_dp(2).to_string())
        .bind(record.status)
        .bind(record.provider_id)
        .bind(record.updated_at)
        .bind(record.id)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        sqlx::query("DELETE FROM quotations WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    fn apply_changes(
        record: &mut Quotation,
        changes: UpdateQuotationPayload,
    ) -> Result<(), AppError> {
        if let Some(title) = changes.title {
            record.title = title;
        }
        if let Some(description) = changes.description {
            record.description = description;
        }
        if let Some(amount) = changes.amount {
            record.amount = amount.round_dp(2);
        }
        if let Some(status) = changes.status {
            if !record.status.can_transition_to(status) {
                return Err(AppError::InvalidStatusTransition {
                    from: record.status.as_str(),
                    to: status.as_str(),
                });
            }
            record.status = status;
        }
        if let Some(provider_id) = changes.provider_id {
            record.provider_id = Some(provider_id);
        }
        record.updated_at = Utc::now();
        Ok(())
    }
}
