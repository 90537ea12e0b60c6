pub mod auth;
pub use auth::AuthService;
pub mod record_service;
pub use record_service::RecordService;
pub mod users;
pub use users::UserService;
pub mod seed;
