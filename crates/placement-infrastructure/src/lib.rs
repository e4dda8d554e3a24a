//! # Placement Infrastructure
//!
//! Storage adapters for the placement core: PostgreSQL via sqlx, plus an
//! in-memory store with the same transactional behaviour.

pub mod database;

pub use database::{
    connect_with_retry, create_pool, run_migrations, ApprovalStep, MemoryStore, PgApprovalStore, PgCompanyRepository,
    PgEventRepository, PgRevisionRepository, PgUserRepository,
};
