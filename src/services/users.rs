// src/services/users.rs

use crate::{
    common::error::AppError,
    db::UserRepository,
    models::auth::{UpdateProfilePayload, User},
};

// Gestão do perfil do próprio usuário. Somente nome e telefone são
// editáveis; e-mail, senha e papel não passam por aqui.
#[derive(Clone)]
pub struct UserService {
    user_repo: UserRepository,
}

impl UserService {
    pub fn new(user_repo: UserRepository) -> Self {
        Self { user_repo }
    }

    pub async fn update_profile(
        &self,
        user_id: i64,
        payload: UpdateProfilePayload,
    ) -> Result<User, AppError> {
        self.user_repo
            .update_profile(user_id, payload.name.as_deref(), payload.phone.as_deref())
            .await
    }
}
