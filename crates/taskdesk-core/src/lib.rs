//! # Taskdesk Core
//!
//! The domain layer of the Taskdesk backend.
//! This crate contains the access-control and assignment rules with zero
//! infrastructure dependencies; storage, hashing, tokens and weather lookup
//! are reached through the traits in [`ports`].

pub mod audit;
pub mod domain;
pub mod error;
pub mod ports;
pub mod services;

pub use error::DomainError;
