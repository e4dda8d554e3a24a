//! Company revision repository trait (port)

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use uuid::Uuid;

use crate::domain::{CompanyAttributes, CompanyRevision, RevisionStatus};
use crate::error::DomainError;

#[cfg_attr(test, automock)]
#[async_trait]
pub trait RevisionRepository: Send + Sync {
    /// Stores a new revision in status `pending`.
    async fn create(
        &self,
        company_id: Option<Uuid>,
        attributes: &CompanyAttributes,
        created_by: &str,
    ) -> Result<CompanyRevision, DomainError>;
    /// All revisions, newest `created_at` first.
    async fn list(&self) -> Result<Vec<CompanyRevision>, DomainError>;
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<CompanyRevision>, DomainError>;
    /// Overwrites the status only. Fails with `RevisionNotFound` when absent.
    async fn set_status(
        &self,
        id: &Uuid,
        status: &RevisionStatus,
    ) -> Result<CompanyRevision, DomainError>;
    async fn delete(&self, id: &Uuid) -> Result<(), DomainError>;
}
