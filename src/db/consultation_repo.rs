// src/db/consultation_repo.rs

use async_trait::async_trait;
use chrono::Utc;
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};

use crate::{
    common::error::AppError,
    db::record_repo::OwnedRecordRepository,
    models::{
        auth::UserSummary,
        consultation::{
            Consultation, ConsultationStatus, CreateConsultationPayload,
            UpdateConsultationPayload,
        },
    },
};

const CONSULTATION_SELECT: &str = r#"
    SELECT c.id, c.title, c.description, c.status,
           c.user_id, c.provider_id, c.scheduled_at, c.created_at, c.updated_at,
           u.name  AS owner_name,  u.email AS owner_email,
           u.phone AS owner_phone, u.role  AS owner_role,
           p.id    AS provider_uid,  p.name  AS provider_name,
           p.email AS provider_email, p.phone AS provider_phone,
           p.role  AS provider_role
    FROM consultations c
    JOIN users u ON u.id = c.user_id
    LEFT JOIN users p ON p.id = c.provider_id
"#;

fn consultation_from_row(row: &SqliteRow) -> Result<Consultation, AppError> {
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

    Ok(Consultation {
        id: row.try_get("id")?,
        title: row.try_get("title")?,
        description: row.try_get("description")?,
        status: row.try_get("status")?,
        user_id: row.try_get("user_id")?,
        provider_id: row.try_get("provider_id")?,
        user,
        provider,
        scheduled_at: row.try_get("scheduled_at")?,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}

#[derive(Clone)]
pub struct ConsultationRepository {
    pool: SqlitePool,
}

impl ConsultationRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OwnedRecordRepository for ConsultationRepository {
    type Record = Consultation;
    type NewRecord = CreateConsultationPayload;
    type Changes = UpdateConsultationPayload;

    fn not_found() -> AppError {
        AppError::NotFound("Consulta não encontrada.")
    }

    fn record_id(record: &Consultation) -> i64 {
        record.id
    }

    async fn list_by_owner(&self, owner_id: i64) -> Result<Vec<Consultation>, AppError> {
        let sql = format!(
            "{CONSULTATION_SELECT} WHERE c.user_id = ?1 ORDER BY c.created_at DESC, c.id DESC"
        );
        let rows = sqlx::query(&sql).bind(owner_id).fetch_all(&self.pool).await?;
        rows.iter().map(consultation_from_row).collect()
    }

    async fn find_by_id_and_owner(
        &self,
        id: i64,
        owner_id: i64,
    ) -> Result<Option<Consultation>, AppError> {
        let sql = format!("{CONSULTATION_SELECT} WHERE c.id = ?1 AND c.user_id = ?2");
        let maybe_row = sqlx::query(&sql)
            .bind(id)
            .bind(owner_id)
            .fetch_optional(&self.pool)
            .await?;
        maybe_row.as_ref().map(consultation_from_row).transpose()
    }

    async fn insert(
        &self,
        owner_id: i64,
        data: CreateConsultationPayload,
    ) -> Result<Consultation, AppError> {
        let now = Utc::now();
        let result = sqlx::query(
            r#"
            INSERT INTO consultations (title, description, status, user_id, scheduled_at, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?6)
            "#,
        )
        .bind(&data.title)
        .bind(&data.description)
        .bind(ConsultationStatus::Pending)
        .bind(owner_id)
        .bind(data.scheduled_at)
        .bind(now)
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_rowid();
        self.find_by_id_and_owner(id, owner_id)
            .await?
            .ok_or_else(|| anyhow::anyhow!("Consulta recém-criada não foi encontrada.").into())
    }

    async fn save(&self, record: &Consultation) -> Result<(), AppError> {
        sqlx::query(
            r#"
            UPDATE consultations
            SET title = ?1, description = ?2, status = ?3,
                provider_id = ?4, scheduled_at = ?5, updated_at = ?6
            WHERE id = ?7
            "#,
        )
        .bind(&record.title)
        .bind(&record.description)
        .bind(record.status)
        .bind(record.provider_id)
        .bind(record.scheduled_at)
        .bind(record.updated_at)
        .bind(record.id)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        sqlx::query("DELETE FROM consultations WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    fn apply_changes(
        record: &mut Consultation,
        changes: UpdateConsultationPayload,
    ) -> Result<(), AppError> {
        if let Some(title) = changes.title {
            record.title = title;
        }
        if let Some(description) = changes.description {
            record.description = description;
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
        if let Some(scheduled_at) = changes.scheduled_at {
            record.scheduled_at = Some(scheduled_at);
        }
        record.updated_at = Utc::now();
        Ok(())
    }
}
