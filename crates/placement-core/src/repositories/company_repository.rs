//! Company repository trait (port)

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use uuid::Uuid;

use crate::domain::{Company, CompanyAttributes};
use crate::error::DomainError;

/// Live company table.
///
/// Every write that changes attributes also moves `updated_at` forward in
/// the same statement.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait CompanyRepository: Send + Sync {
    async fn create(&self, attributes: &CompanyAttributes) -> Result<Company, DomainError>;
    async fn list(&self) -> Result<Vec<Company>, DomainError>;
    /// Companies whose assigned-officer set contains `officer`.
    async fn list_by_officer(&self, officer: &str) -> Result<Vec<Company>, DomainError>;
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Company>, DomainError>;
    /// Fails with `CompanyNotFound` when no row has this id.
    async fn update(&self, id: &Uuid, attributes: &CompanyAttributes) -> Result<Company, DomainError>;
    /// Fails with `CompanyNotFound` when no row has this id.
    async fn delete(&self, id: &Uuid) -> Result<(), DomainError>;
}
