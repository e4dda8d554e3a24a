use async_trait::async_trait;
use tokio::sync::OwnedMutexGuard;
use tracing::{debug, warn};
use uuid::Uuid;

use placement_core::domain::{Company, CompanyAttributes, CompanyRevision};
use placement_core::error::DomainError;
use placement_core::repositories::{ApprovalStore, ApprovalTransaction};
use placement_shared::new_id;

use super::{MemoryStore, Tables};

/// Points in an approval transaction where a failure can be injected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApprovalStep {
    Begin,
    LockRevision,
    WriteCompany,
    DeleteRevision,
    Commit,
}

fn injected(step: ApprovalStep) -> DomainError {
    warn!("Injected approval failure at {:?}", step);
    DomainError::DatabaseError(format!("injected failure at {:?}", step))
}

#[async_trait]
impl ApprovalStore for MemoryStore {
    async fn begin(&self) -> Result<Box<dyn ApprovalTransaction>, DomainError> {
        let fail_at = self.take_fail_point();
        if fail_at == Some(ApprovalStep::Begin) {
            return Err(injected(ApprovalStep::Begin));
        }

        let tables = self.tables.clone().lock_owned().await;
        Ok(Box::new(MemoryApprovalTransaction {
            tables,
            fail_at,
            staged_company: None,
            staged_delete: None,
        }))
    }
}

/// Holds the store lock for its whole life. Writes are staged and only
/// reach the tables in `commit`.
struct MemoryApprovalTransaction {
    tables: OwnedMutexGuard<Tables>,
    fail_at: Option<ApprovalStep>,
    staged_company: Option<Company>,
    staged_delete: Option<Uuid>,
}

impl MemoryApprovalTransaction {
    fn check(&self, step: ApprovalStep) -> Result<(), DomainError> {
        if self.fail_at == Some(step) {
            return Err(injected(step));
        }
        Ok(())
    }

    fn visible_company(&self, id: &Uuid) -> Option<&Company> {
        match &self.staged_company {
            Some(c) if c.id == *id => Some(c),
            _ => self.tables.companies.get(id),
        }
    }
}

#[async_trait]
impl ApprovalTransaction for MemoryApprovalTransaction {
    async fn lock_revision(&mut self, id: &Uuid) -> Result<Option<CompanyRevision>, DomainError> {
        self.check(ApprovalStep::LockRevision)?;
        if self.staged_delete == Some(*id) {
            return Ok(None);
        }
        Ok(self.tables.revisions.get(id).cloned())
    }

    async fn overwrite_company(
        &mut self,
        id: &Uuid,
        attributes: &CompanyAttributes,
    ) -> Result<Option<Company>, DomainError> {
        self.check(ApprovalStep::WriteCompany)?;
        let Some(current) = self.visible_company(id).cloned() else {
            return Ok(None);
        };

        let now = self.tables.tick();
        let updated = Company {
            attributes: attributes.clone(),
            updated_at: now,
            ..current
        };
        self.staged_company = Some(updated.clone());
        Ok(Some(updated))
    }

    async fn insert_company(&mut self, attributes: &CompanyAttributes) -> Result<Company, DomainError> {
        self.check(ApprovalStep::WriteCompany)?;
        let now = self.tables.tick();
        let company = Company {
            id: new_id(),
            attributes: attributes.clone(),
            created_at: now,
            updated_at: now,
        };
        self.staged_company = Some(company.clone());
        Ok(company)
    }

    async fn delete_revision(&mut self, id: &Uuid) -> Result<bool, DomainError> {
        self.check(ApprovalStep::DeleteRevision)?;
        if self.staged_delete == Some(*id) || !self.tables.revisions.contains_key(id) {
            return Ok(false);
        }
        self.staged_delete = Some(*id);
        Ok(true)
    }

    async fn commit(self: Box<Self>) -> Result<(), DomainError> {
        self.check(ApprovalStep::Commit)?;
        let MemoryApprovalTransaction {
            mut tables,
            staged_company,
            staged_delete,
            ..
        } = *self;

        if let Some(company) = staged_company {
            tables.companies.insert(company.id, company);
        }
        if let Some(id) = staged_delete {
            tables.revisions.remove(&id);
        }
        debug!("Memory approval transaction committed");
        Ok(())
    }
}
