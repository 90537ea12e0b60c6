pub mod auth;
pub mod consultation;
pub mod quotation;
