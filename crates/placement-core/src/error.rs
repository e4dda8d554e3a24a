//! Domain errors

use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Company not found: {0}")]
    CompanyNotFound(Uuid),

    #[error("Company revision not found: {0}")]
    RevisionNotFound(Uuid),

    #[error("User not found: {0}")]
    UserNotFound(Uuid),

    #[error("Username already exists: {0}")]
    UsernameAlreadyExists(String),

    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Cannot move revision from '{from}' to '{to}'")]
    InvalidStatusTransition { from: String, to: String },

    #[error("Password hash error: {0}")]
    PasswordHashError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl DomainError {
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            DomainError::CompanyNotFound(_)
                | DomainError::RevisionNotFound(_)
                | DomainError::UserNotFound(_)
        )
    }
}

impl From<validator::ValidationErrors> for DomainError {
    fn from(errors: validator::ValidationErrors) -> Self {
        DomainError::ValidationError(errors.to_string())
    }
}
