// src/services/record_service.rs

use crate::{common::error::AppError, db::record_repo::OwnedRecordRepository};

// O serviço genérico de registros com dono, instanciado uma vez para
// orçamentos e uma vez para consultas. Toda a lógica de decisão do ciclo
// CRUD mora aqui: filtro por dono, sinalização de não-encontrado e a
// mescla dos campos mutáveis.
#[derive(Clone)]
pub struct RecordService<R: OwnedRecordRepository> {
    repo: R,
}

impl<R: OwnedRecordRepository> RecordService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    // Nunca falha; lista vazia se o usuário não tem registros.
    pub async fn list_for_user(&self, user_id: i64) -> Result<Vec<R::Record>, AppError> {
        self.repo.list_by_owner(user_id).await
    }

    // NotFound tanto para id inexistente quanto para registro de outro
    // usuário: as duas situações são indistinguíveis de fora.
    pub async fn find_for_user(&self, id: i64, user_id: i64) -> Result<R::Record, AppError> {
        self.repo
            .find_by_id_and_owner(id, user_id)
            .await?
            .ok_or_else(R::not_found)
    }

    pub async fn create_for_user(
        &self,
        user_id: i64,
        data: R::NewRecord,
    ) -> Result<R::Record, AppError> {
        self.repo.insert(user_id, data).await
    }

    // Busca com checagem de dono, mescla somente os campos permitidos e
    // persiste. Último escritor vence: não há campo de versão.
    pub async fn update_for_user(
        &self,
        id: i64,
        user_id: i64,
        changes: R::Changes,
    ) -> Result<R::Record, AppError> {
        let mut record = self.find_for_user(id, user_id).await?;
        R::apply_changes(&mut record, changes)?;
        self.repo.save(&record).await?;

        // Relê para devolver as identidades desnormalizadas atualizadas
        // (o prestador pode ter acabado de ser atribuído).
        self.repo
            .find_by_id_and_owner(R::record_id(&record), user_id)
            .await?
            .ok_or_else(R::not_found)
    }

    // Não é idempotente de propósito: apagar de novo devolve NotFound.
    pub async fn delete_for_user(&self, id: i64, user_id: i64) -> Result<(), AppError> {
        let record = self.find_for_user(id, user_id).await?;
        self.repo.delete(R::record_id(&record)).await
    }
}
