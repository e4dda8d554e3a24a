//! User repository trait (port)

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use uuid::Uuid;

use crate::domain::{NewUser, User};
use crate::error::DomainError;

#[cfg_attr(test, automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError>;
    async fn list(&self) -> Result<Vec<User>, DomainError>;
    /// Fails with `UsernameAlreadyExists` on a duplicate username.
    async fn create(&self, user: &NewUser) -> Result<User, DomainError>;
    /// Fails with `UserNotFound` when no row has this id.
    async fn delete(&self, id: &Uuid) -> Result<(), DomainError>;
}
