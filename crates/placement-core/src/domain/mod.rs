//! # Placement Core - Domain Module
//!
//! Domain entities for the placement drive tracker.

pub mod company;
pub mod company_revision;
pub mod event;
pub mod user;

// Re-export all entities and enums
pub use company::{Company, CompanyAttributes};
pub use company_revision::{CompanyRevision, RevisionStatus};
pub use event::{Event, NewEvent};
pub use user::{NewUser, User, UserRole};
