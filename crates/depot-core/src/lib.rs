//! # depot-core
//!
//! Domain layer containing the user and item entities and the domain error type.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;

// Re-export commonly used types at crate root
pub use entities::{Item, NewItem, NewUser, User};
pub use error::DomainError;
