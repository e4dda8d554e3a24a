//! Transactional port used by the approval step.
//!
//! Approving a revision touches both the company table and the revision
//! table. Adapters expose a transaction spanning the two; the approval
//! service drives it step by step and either commits or drops it. Dropping a
//! transaction without calling [`ApprovalTransaction::commit`] rolls back
//! every write made through it.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Company, CompanyAttributes, CompanyRevision};
use crate::error::DomainError;

#[async_trait]
pub trait ApprovalStore: Send + Sync {
    async fn begin(&self) -> Result<Box<dyn ApprovalTransaction>, DomainError>;
}

#[async_trait]
pub trait ApprovalTransaction: Send {
    /// Reads the revision and holds it until the transaction ends, so a
    /// concurrent approval of the same id waits and then sees it gone.
    async fn lock_revision(&mut self, id: &Uuid) -> Result<Option<CompanyRevision>, DomainError>;

    /// Overwrites every mutable attribute and bumps `updated_at`.
    /// `Ok(None)` when no company has this id.
    async fn overwrite_company(
        &mut self,
        id: &Uuid,
        attributes: &CompanyAttributes,
    ) -> Result<Option<Company>, DomainError>;

    async fn insert_company(&mut self, attributes: &CompanyAttributes) -> Result<Company, DomainError>;

    /// `Ok(false)` when nothing was deleted.
    async fn delete_revision(&mut self, id: &Uuid) -> Result<bool, DomainError>;

    async fn commit(self: Box<Self>) -> Result<(), DomainError>;
}
