//! Database module (PostgreSQL and in-memory adapters)

pub mod connection;
pub mod memory;
pub mod postgres;

pub use connection::{connect_with_retry, create_pool, run_migrations};
pub use memory::{ApprovalStep, MemoryStore};
pub use postgres::{
    PgApprovalStore, PgCompanyRepository, PgEventRepository, PgRevisionRepository,
    PgUserRepository,
};
