pub mod auth;
pub mod consultations;
pub mod health;
pub mod quotations;
pub mod seed;
pub mod users;
