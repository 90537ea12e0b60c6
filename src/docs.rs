// src/docs.rs

use utoipa::openapi::security::{Http, HttpAuthScheme, SecurityScheme};
use utoipa::OpenApi;

use crate::handlers;
use crate::models;
use crate::services;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Auth ---
        handlers::auth::register,
        handlers::auth::login,

        // --- Users ---
        handlers::users::get_profile,
        handlers::users::update_profile,

        // --- Quotations ---
        handlers::quotations::list_quotations,
        handlers::quotations::get_quotation,
        handlers::quotations::create_quotation,
        handlers::quotations::update_quotation,
        handlers::quotations::delete_quotation,

        // --- Consultations ---
        handlers::consultations::list_consultations,
        handlers::consultations::get_consultation,
        handlers::consultations::create_consultation,
        handlers::consultations::update_consultation,
        handlers::consultations::delete_consultation,

        // --- Infra ---
        handlers::health::health_check,
        handlers::seed::seed,
    ),
    components(
        schemas(
            // --- Auth ---
            models::auth::User,
            models::auth::UserRole,
            models::auth::UserSummary,
            models::auth::RegisterUserPayload,
            models::auth::LoginUserPayload,
            models::auth::UpdateProfilePayload,
            models::auth::AuthResponse,

            // --- Quotations ---
            models::quotation::Quotation,
            models::quotation::QuotationStatus,
            models::quotation::CreateQuotationPayload,
            models::quotation::UpdateQuotationPayload,

            // --- Consultations ---
            models::consultation::Consultation,
            models::consultation::ConsultationStatus,
            models::consultation::CreateConsultationPayload,
            models::consultation::UpdateConsultationPayload,

            // --- Infra ---
            handlers::health::HealthResponse,
            services::seed::SeedSummary,
        )
    ),
    tags(
        (name = "Auth", description = "Autenticação e Registro"),
        (name = "Users", description = "Dados do Usuário e Perfil"),
        (name = "Quotations", description = "Orçamentos do Usuário"),
        (name = "Consultations", description = "Consultas do Usuário"),
        (name = "Health", description = "Status do Serviço"),
        (name = "Seed", description = "Dados de Demonstração")
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "api_jwt",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        );
    }
}
