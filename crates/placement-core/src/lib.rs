//! # Placement Core
//!
//! Domain entities, repository traits, and services for the placement drive
//! tracker: live company records, staged company revisions, and the approval
//! step that merges a revision into its company.

pub mod domain;
pub mod error;
pub mod repositories;
pub mod services;

// Re-export domain entities
pub use domain::*;
pub use error::DomainError;
