//! # Placement Shared
//!
//! Configuration, telemetry, and small helpers shared by every placement crate.

pub mod constants;
pub mod config;
pub mod error;
pub mod telemetry;
pub mod types;
pub mod utils;

pub use error::AppError;
pub use types::*;
