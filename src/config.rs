// src/config.rs

use std::{env, str::FromStr, time::Instant};

use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    SqlitePool,
};

use crate::{
    db::{ConsultationRepository, QuotationRepository, UserRepository},
    services::{AuthService, RecordService, UserService},
};

// O estado compartilhado que será acessível em toda a aplicação
#[derive(Clone)]
pub struct AppState {
    pub db_pool: SqlitePool,
    pub jwt_secret: String,
    pub environment: String,
    pub frontend_url: String,
    // Para o uptime do /health
    pub started_at: Instant,

    pub auth_service: AuthService,
    pub user_service: UserService,
    pub quotation_service: RecordService<QuotationRepository>,
    pub consultation_service: RecordService<ConsultationRepository>,
}

impl AppState {
    pub async fn new() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL").expect("DATABASE_URL deve ser definida");
        let jwt_secret = env::var("JWT_SECRET").expect("JWT_SECRET deve ser definido");
        let environment = env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());
        let frontend_url =
            env::var("FRONTEND_URL").unwrap_or_else(|_| "http://localhost:3000".to_string());

        let connect_options =
            SqliteConnectOptions::from_str(&database_url)?.create_if_missing(true);

        let db_pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(connect_options)
            .await?;

        tracing::info!("✅ Conexão com o banco de dados estabelecida com sucesso!");

        Ok(Self::from_pool(db_pool, jwt_secret, environment, frontend_url))
    }

    // Monta o gráfico de dependências a partir de um pool já aberto.
    // Também é o ponto de entrada dos testes de integração.
    pub fn from_pool(
        db_pool: SqlitePool,
        jwt_secret: String,
        environment: String,
        frontend_url: String,
    ) -> Self {
        let user_repo = UserRepository::new(db_pool.clone());
        let auth_service = AuthService::new(user_repo.clone(), jwt_secret.clone());
        let user_service = UserService::new(user_repo);
        let quotation_service = RecordService::new(QuotationRepository::new(db_pool.clone()));
        let consultation_service =
            RecordService::new(ConsultationRepository::new(db_pool.clone()));

        Self {
            db_pool,
            jwt_secret,
            environment,
            frontend_url,
            started_at: Instant::now(),
            auth_service,
            user_service,
            quotation_service,
            consultation_service,
        }
    }
}
