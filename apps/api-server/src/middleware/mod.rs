//! Middleware and extractors.

pub mod admin;
pub mod auth;
pub mod error;

pub use admin::AdminGate;
pub use auth::Caller;
pub use error::{AppError, AppResult};
