// ============================================================================
// Placement Core - Revision Service
// File: crates/placement-core/src/services/revision_service.rs
// ============================================================================
//! Lifecycle of staged company edits: submit, list, relabel.
//!
//! Changing a revision's status never applies it. Applying is the separate
//! [`ApprovalService::approve`](super::ApprovalService::approve) call.

use std::sync::Arc;

use tracing::{info, warn};
use uuid::Uuid;

use crate::domain::{CompanyAttributes, CompanyRevision, RevisionStatus};
use crate::error::DomainError;
use crate::repositories::RevisionRepository;

pub struct RevisionService<R: RevisionRepository + ?Sized> {
    revision_repo: Arc<R>,
}

impl<R: RevisionRepository + ?Sized> RevisionService<R> {
    pub fn new(revision_repo: Arc<R>) -> Self {
        Self { revision_repo }
    }

    /// Stage an edit. The target company is not looked up here; a missing
    /// target surfaces when the revision is approved.
    pub async fn submit(
        &self,
        company_id: Option<Uuid>,
        attributes: CompanyAttributes,
        created_by: &str,
    ) -> Result<CompanyRevision, DomainError> {
        let created_by = created_by.trim();
        if created_by.is_empty() {
            return Err(DomainError::ValidationError("created_by is required".to_string()));
        }
        let attributes = attributes.normalized()?;

        let revision = self
            .revision_repo
            .create(company_id, &attributes, created_by)
            .await?;

        match revision.company_id {
            Some(target) => info!(
                "Revision {} submitted by {} for company {}",
                revision.id, created_by, target
            ),
            None => info!(
                "Revision {} submitted by {} proposing new company {}",
                revision.id, created_by, revision.attributes.company_name
            ),
        }
        Ok(revision)
    }

    pub async fn list(&self) -> Result<Vec<CompanyRevision>, DomainError> {
        self.revision_repo.list().await
    }

    pub async fn get(&self, id: &Uuid) -> Result<CompanyRevision, DomainError> {
        self.revision_repo
            .find_by_id(id)
            .await?
            .ok_or(DomainError::RevisionNotFound(*id))
    }

    pub async fn set_status(
        &self,
        id: &Uuid,
        status: RevisionStatus,
    ) -> Result<CompanyRevision, DomainError> {
        let current = self.get(id).await.map_err(|e| {
            warn!("Status change rejected, revision not found: {}", id);
            e
        })?;

        if !current.status.can_transition_to(&status) {
            warn!("Refused status change {} -> {} on {}", current.status, status, id);
            return Err(DomainError::InvalidStatusTransition {
                from: current.status.to_string(),
                to: status.to_string(),
            });
        }

        let updated = self.revision_repo.set_status(id, &status).await?;
        info!("Revision {} status {} -> {}", id, current.status, updated.status);
        Ok(updated)
    }
}
