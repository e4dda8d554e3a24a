//! Credential hashing for the user store.
//!
//! Stored credentials are argon2 PHC strings; the salt and parameters travel
//! inside the string, so `verify` needs nothing but the stored value.

use argon2::{
    password_hash::{
        rand_core::OsRng, Error as PhcError, PasswordHash, PasswordHasher, PasswordVerifier,
        SaltString,
    },
    Argon2,
};
use thiserror::Error;

pub const MIN_PASSWORD_LENGTH: usize = 6;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PasswordError {
    #[error("Password must be at least {0} characters")]
    TooShort(usize),

    #[error("Stored credential is not a valid hash: {0}")]
    MalformedHash(String),

    #[error("Hash error: {0}")]
    HashError(String),
}

pub struct PasswordService;

impl PasswordService {
    /// Length is counted in characters, and whitespace-only input is refused.
    pub fn check_strength(password: &str) -> Result<(), PasswordError> {
        if password.trim().is_empty() || password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(PasswordError::TooShort(MIN_PASSWORD_LENGTH));
        }
        Ok(())
    }

    pub fn hash(password: &str) -> Result<String, PasswordError> {
        Self::check_strength(password)?;
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|h| h.to_string())
            .map_err(|e| PasswordError::HashError(e.to_string()))
    }

    /// `Ok(false)` on a mismatch. Errors only when the stored value cannot be
    /// parsed or checked at all.
    pub fn verify(password: &str, stored: &str) -> Result<bool, PasswordError> {
        let parsed =
            PasswordHash::new(stored).map_err(|e| PasswordError::MalformedHash(e.to_string()))?;
        match Argon2::default().verify_password(password.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(PhcError::Password) => Ok(false),
            Err(e) => Err(PasswordError::HashError(e.to_string())),
        }
    }
}
