// src/db/record_repo.rs

use async_trait::async_trait;

use crate::common::error::AppError;

// Contrato comum dos registros que pertencem a um usuário (orçamentos e
// consultas). Toda leitura e escrita é filtrada pelo dono; um registro de
// outro usuário é indistinguível de um registro inexistente.
#[async_trait]
pub trait OwnedRecordRepository: Clone + Send + Sync {
    type Record: Send + Sync;
    type NewRecord: Send + 'static;
    type Changes: Send + 'static;

    // Erro devolvido quando o registro não existe (ou não é do chamador).
    fn not_found() -> AppError;

    fn record_id(record: &Self::Record) -> i64;

    // Todos os registros do dono, mais recentes primeiro.
    async fn list_by_owner(&self, owner_id: i64) -> Result<Vec<Self::Record>, AppError>;

    async fn find_by_id_and_owner(
        &self,
        id: i64,
        owner_id: i64,
    ) -> Result<Option<Self::Record>, AppError>;

    // Insere um novo registro já com o dono e o status padrão da entidade.
    async fn insert(&self, owner_id: i64, data: Self::NewRecord)
        -> Result<Self::Record, AppError>;

    // Persiste os campos mutáveis de um registro já carregado.
    async fn save(&self, record: &Self::Record) -> Result<(), AppError>;

    async fn delete(&self, id: i64) -> Result<(), AppError>;

    // Aplica em memória somente os campos da lista de permissão, validando a
    // transição de status. Dono, id e timestamps de criação ficam intocados.
    fn apply_changes(record: &mut Self::Record, changes: Self::Changes)
        -> Result<(), AppError>;
}
