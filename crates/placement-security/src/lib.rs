//! # Placement Security
//!
//! Credential hashing for the user store.

pub mod password;

pub use password::{PasswordError, PasswordService, MIN_PASSWORD_LENGTH};
