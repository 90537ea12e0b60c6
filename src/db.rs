pub mod user_repo;
pub use user_repo::UserRepository;
pub mod record_repo;
pub use record_repo::OwnedRecordRepository;
pub mod quotation_repo;
pub use quotation_repo::QuotationRepository;
pub mod consultation_repo;
pub use consultation_repo::ConsultationRepository;
