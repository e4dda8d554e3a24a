// ============================================================================
// Placement Core - Approval Service
// File: crates/placement-core/src/services/approval_service.rs
// ============================================================================
//! Applies a staged revision to its company.
//!
//! The merge runs inside one storage transaction:
//!
//! 1. lock-read the revision (missing: `RevisionNotFound`)
//! 2. overwrite the target company with the revision's snapshot, or insert a
//!    new company when the revision has no target
//! 3. delete the revision
//! 4. commit
//!
//! Any error before the commit drops the transaction, so callers see either
//! the whole merge or none of it.

use std::sync::Arc;

use tracing::{error, info, warn};
use uuid::Uuid;

use crate::domain::Company;
use crate::error::DomainError;
use crate::repositories::ApprovalStore;

pub struct ApprovalService<S: ApprovalStore + ?Sized> {
    store: Arc<S>,
}

impl<S: ApprovalStore + ?Sized> ApprovalService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Merge revision `revision_id` into the live company table and remove
    /// it. Returns the company as it now stands.
    pub async fn approve(&self, revision_id: &Uuid) -> Result<Company, DomainError> {
        let mut tx = self.store.begin().await?;

        let revision = tx.lock_revision(revision_id).await?.ok_or_else(|| {
            warn!("Approval rejected, revision not found: {}", revision_id);
            DomainError::RevisionNotFound(*revision_id)
        })?;

        let company = match revision.company_id {
            Some(company_id) => tx
                .overwrite_company(&company_id, &revision.attributes)
                .await?
                .ok_or_else(|| {
                    warn!(
                        "Approval of {} rolled back, target company {} no longer exists",
                        revision_id, company_id
                    );
                    DomainError::CompanyNotFound(company_id)
                })?,
            None => tx.insert_company(&revision.attributes).await?,
        };

        if !tx.delete_revision(revision_id).await? {
            // the row lock should make this unreachable
            error!("Revision {} vanished while locked", revision_id);
            return Err(DomainError::RevisionNotFound(*revision_id));
        }

        tx.commit().await?;

        info!(
            "Revision {} approved (status was {}), company {} updated",
            revision_id, revision.status, company.id
        );
        Ok(company)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CompanyAttributes, CompanyRevision, RevisionStatus};
    use crate::repositories::ApprovalTransaction;
    use async_trait::async_trait;
    use chrono::Utc;
    use std::sync::Mutex;

    /// Records what a transaction did and whether it committed.
    #[derive(Default)]
    struct Journal {
        steps: Vec<&'static str>,
        committed: bool,
    }

    struct FakeStore {
        revision: Option<CompanyRevision>,
        company_exists: bool,
        journal: Arc<Mutex<Journal>>,
    }

    struct FakeTx {
        revision: Option<CompanyRevision>,
        company_exists: bool,
        journal: Arc<Mutex<Journal>>,
    }

    #[async_trait]
    impl ApprovalStore for FakeStore {
        async fn begin(&self) -> Result<Box<dyn ApprovalTransaction>, DomainError> {
            Ok(Box::new(FakeTx {
                revision: self.revision.clone(),
                company_exists: self.company_exists,
                journal: self.journal.clone(),
            }))
        }
    }

    #[async_trait]
    impl ApprovalTransaction for FakeTx {
        async fn lock_revision(
            &mut self,
            _id: &Uuid,
        ) -> Result<Option<CompanyRevision>, DomainError> {
            self.journal.lock().unwrap().steps.push("lock");
            Ok(self.revision.clone())
        }

        async fn overwrite_company(
            &mut self,
            id: &Uuid,
            attributes: &CompanyAttributes,
        ) -> Result<Option<Company>, DomainError> {
            self.journal.lock().unwrap().steps.push("overwrite");
            Ok(self.company_exists.then(|| Company {
                id: *id,
                attributes: attributes.clone(),
                created_at: Utc::now(),
                updated_at: Utc::now(),
            }))
        }

        async fn insert_company(
            &mut self,
            attributes: &CompanyAttributes,
        ) -> Result<Company, DomainError> {
            self.journal.lock().unwrap().steps.push("insert");
            Ok(Company {
                id: Uuid::new_v4(),
                attributes: attributes.clone(),
                created_at: Utc::now(),
                updated_at: Utc::now(),
            })
        }

        async fn delete_revision(&mut self, _id: &Uuid) -> Result<bool, DomainError> {
            self.journal.lock().unwrap().steps.push("delete");
            Ok(true)
        }

        async fn commit(self: Box<Self>) -> Result<(), DomainError> {
            self.journal.lock().unwrap().committed = true;
            Ok(())
        }
    }

    fn revision(company_id: Option<Uuid>) -> CompanyRevision {
        CompanyRevision {
            id: Uuid::new_v4(),
            company_id,
            attributes: CompanyAttributes {
                company_name: "Acme".to_string(),
                package: "10 LPA".to_string(),
                ..Default::default()
            },
            status: RevisionStatus::Pending,
            created_by: "alice".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn service(
        revision: Option<CompanyRevision>,
        company_exists: bool,
    ) -> (ApprovalService<FakeStore>, Arc<Mutex<Journal>>) {
        let journal = Arc::new(Mutex::new(Journal::default()));
        let store = FakeStore {
            revision,
            company_exists,
            journal: journal.clone(),
        };
        (ApprovalService::new(Arc::new(store)), journal)
    }

    #[tokio::test]
    async fn test_approve_runs_steps_in_order_and_commits() {
        let target = Uuid::new_v4();
        let rev = revision(Some(target));
        let rev_id = rev.id;
        let (service, journal) = service(Some(rev), true);

        let company = service.approve(&rev_id).await.unwrap();

        assert_eq!(company.id, target);
        assert_eq!(company.attributes.package, "10 LPA");
        let journal = journal.lock().unwrap();
        assert_eq!(journal.steps, vec!["lock", "overwrite", "delete"]);
        assert!(journal.committed);
    }

    #[tokio::test]
    async fn test_missing_revision_writes_nothing() {
        let (service, journal) = service(None, true);
        let id = Uuid::new_v4();

        let result = service.approve(&id).await;

        assert!(matches!(result, Err(DomainError::RevisionNotFound(missing)) if missing == id));
        let journal = journal.lock().unwrap();
        assert_eq!(journal.steps, vec!["lock"]);
        assert!(!journal.committed);
    }

    #[tokio::test]
    async fn test_dangling_target_is_not_committed() {
        let target = Uuid::new_v4();
        let rev = revision(Some(target));
        let rev_id = rev.id;
        let (service, journal) = service(Some(rev), false);

        let result = service.approve(&rev_id).await;

        assert!(matches!(result, Err(DomainError::CompanyNotFound(missing)) if missing == target));
        let journal = journal.lock().unwrap();
        assert_eq!(journal.steps, vec!["lock", "overwrite"]);
        assert!(!journal.committed);
    }

    #[tokio::test]
    async fn test_untargeted_revision_inserts_company() {
        let rev = revision(None);
        let rev_id = rev.id;
        let (service, journal) = service(Some(rev), false);

        let company = service.approve(&rev_id).await.unwrap();

        assert_eq!(company.attributes.company_name, "Acme");
        let journal = journal.lock().unwrap();
        assert_eq!(journal.steps, vec!["lock", "insert", "delete"]);
        assert!(journal.committed);
    }
}
