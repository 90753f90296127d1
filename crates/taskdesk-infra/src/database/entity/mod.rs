//! SeaORM entities.

pub mod comment;
pub mod manager;
pub mod todo;
pub mod user;
