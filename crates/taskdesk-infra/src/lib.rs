//! # Taskdesk Infrastructure
//!
//! Concrete implementations of the ports defined in `taskdesk-core`.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external dependencies, in-memory only
//! - `postgres` - PostgreSQL database support via SeaORM
//! - `auth` - JWT + Argon2 authentication
//! - `weather` - HTTP weather client via reqwest

pub mod audit;
pub mod database;
pub mod memory;
pub mod weather;

#[cfg(feature = "auth")]
pub mod auth;

// Re-exports - In-Memory
pub use audit::TracingAuditSink;
pub use memory::{
    InMemoryCommentRepository, InMemoryDatabase, InMemoryIdentityRepository,
    InMemoryManagerRepository, InMemoryTodoRepository,
};
pub use weather::FixedWeatherClient;

#[cfg(feature = "auth")]
pub use auth::{Argon2PasswordService, JwtConfig, JwtTokenService};

#[cfg(feature = "weather")]
pub use weather::HttpWeatherClient;
