//! # Postboard Core
//!
//! The domain layer of the Postboard API.
//! Posts, identifiers, query shaping and the repository ports live here,
//! with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;

pub use error::{DomainError, RepoError};
