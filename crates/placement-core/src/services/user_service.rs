//! User store and credential check

use std::sync::Arc;

use tracing::{error, info, warn};
use uuid::Uuid;
use validator::Validate;

use placement_security::{PasswordError, PasswordService};

use crate::domain::{NewUser, User, UserRole};
use crate::error::DomainError;
use crate::repositories::UserRepository;

/// Input for [`UserService::create`]; the password is still in clear text.
#[derive(Debug, Clone)]
pub struct CreateUserInput {
    pub username: String,
    pub password: String,
    pub email: String,
    pub role: UserRole,
}

pub struct UserService<R: UserRepository + ?Sized> {
    user_repo: Arc<R>,
}

impl<R: UserRepository + ?Sized> UserService<R> {
    pub fn new(user_repo: Arc<R>) -> Self {
        Self { user_repo }
    }

    pub async fn create(&self, input: CreateUserInput) -> Result<User, DomainError> {
        let username = input.username.trim().to_string();
        PasswordService::check_strength(&input.password)
            .map_err(|e| DomainError::ValidationError(e.to_string()))?;

        if self.user_repo.find_by_username(&username).await?.is_some() {
            warn!("User creation rejected, username taken: {}", username);
            return Err(DomainError::UsernameAlreadyExists(username));
        }

        let password_hash = PasswordService::hash(&input.password).map_err(|e| match e {
            PasswordError::TooShort(_) => DomainError::ValidationError(e.to_string()),
            other => DomainError::PasswordHashError(other.to_string()),
        })?;

        let new_user = NewUser {
            username,
            email: input.email.trim().to_string(),
            role: input.role,
            password_hash,
        };
        new_user.validate()?;

        let user = self.user_repo.create(&new_user).await?;
        info!("User created: {} ({})", user.username, user.role.as_str());
        Ok(user)
    }

    /// Unknown username and wrong password both report `InvalidCredentials`.
    pub async fn login(&self, username: &str, password: &str) -> Result<User, DomainError> {
        info!("Login attempt for username: {}", username);

        let user = self
            .user_repo
            .find_by_username(username.trim())
            .await?
            .ok_or_else(|| {
                warn!("Login failed: unknown username: {}", username);
                DomainError::InvalidCredentials
            })?;

        let valid = PasswordService::verify(password, &user.password_hash).map_err(|e| {
            error!("Stored credential for {} is unusable: {}", username, e);
            DomainError::InvalidCredentials
        })?;
        if !valid {
            warn!("Login failed: invalid password for: {}", username);
            return Err(DomainError::InvalidCredentials);
        }

        info!("Login successful for: {}", username);
        Ok(user)
    }

    pub async fn list(&self) -> Result<Vec<User>, DomainError> {
        self.user_repo.list().await
    }

    pub async fn delete(&self, id: &Uuid) -> Result<(), DomainError> {
        self.user_repo.delete(id).await?;
        info!("User deleted: {}", id);
        Ok(())
    }
}
