//! Direct company operations: create, list, update, delete.
//!
//! These bypass staging entirely; staged edits go through
//! [`RevisionService`](super::RevisionService).

use std::sync::Arc;

use tracing::{info, warn};
use uuid::Uuid;

use crate::domain::{Company, CompanyAttributes};
use crate::error::DomainError;
use crate::repositories::CompanyRepository;

pub struct CompanyService<R: CompanyRepository + ?Sized> {
    company_repo: Arc<R>,
}

impl<R: CompanyRepository + ?Sized> CompanyService<R> {
    pub fn new(company_repo: Arc<R>) -> Self {
        Self { company_repo }
    }

    pub async fn create(&self, attributes: CompanyAttributes) -> Result<Company, DomainError> {
        let attributes = attributes.normalized()?;
        let company = self.company_repo.create(&attributes).await?;
        info!("Company created: {} ({})", company.attributes.company_name, company.id);
        Ok(company)
    }

    pub async fn list(&self) -> Result<Vec<Company>, DomainError> {
        self.company_repo.list().await
    }

    pub async fn list_by_officer(&self, officer: &str) -> Result<Vec<Company>, DomainError> {
        let officer = officer.trim();
        if officer.is_empty() {
            return Err(DomainError::ValidationError("Officer identifier is required".to_string()));
        }
        self.company_repo.list_by_officer(officer).await
    }

    pub async fn update(
        &self,
        id: &Uuid,
        attributes: CompanyAttributes,
    ) -> Result<Company, DomainError> {
        let attributes = attributes.normalized()?;
        let company = self.company_repo.update(id, &attributes).await.map_err(|e| {
            if e.is_not_found() {
                warn!("Update rejected, company not found: {}", id);
            }
            e
        })?;
        info!("Company updated directly: {}", id);
        Ok(company)
    }

    pub async fn delete(&self, id: &Uuid) -> Result<(), DomainError> {
        self.company_repo.delete(id).await?;
        info!("Company deleted: {}", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::MockCompanyRepository;
    use chrono::Utc;

    fn company(id: Uuid, attributes: CompanyAttributes) -> Company {
        Company {
            id,
            attributes,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_create_normalizes_before_storing() {
        let mut repo = MockCompanyRepository::new();
        repo.expect_create()
            .withf(|attrs| attrs.company_name == "Acme" && attrs.assigned_officers == vec!["alice"])
            .times(1)
            .returning(|attrs| Ok(company(Uuid::new_v4(), attrs.clone())));

        let service = CompanyService::new(Arc::new(repo));
        let created = service
            .create(CompanyAttributes {
                company_name: " Acme ".to_string(),
                assigned_officers: vec!["alice".to_string(), "alice".to_string()],
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(created.attributes.company_name, "Acme");
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_without_touching_store() {
        let mut repo = MockCompanyRepository::new();
        repo.expect_create().never();

        let service = CompanyService::new(Arc::new(repo));
        let result = service.create(CompanyAttributes::default()).await;

        assert!(matches!(result, Err(DomainError::ValidationError(_))));
    }

    #[tokio::test]
    async fn test_list_by_officer_requires_identifier() {
        let mut repo = MockCompanyRepository::new();
        repo.expect_list_by_officer().never();

        let service = CompanyService::new(Arc::new(repo));
        assert!(service.list_by_officer("  ").await.is_err());
    }

    #[tokio::test]
    async fn test_update_propagates_not_found() {
        let id = Uuid::new_v4();
        let mut repo = MockCompanyRepository::new();
        repo.expect_update()
            .returning(|id, _| Err(DomainError::CompanyNotFound(*id)));

        let service = CompanyService::new(Arc::new(repo));
        let result = service
            .update(
                &id,
                CompanyAttributes {
                    company_name: "Acme".to_string(),
                    ..Default::default()
                },
            )
            .await;

        assert!(matches!(result, Err(DomainError::CompanyNotFound(missing)) if missing == id));
    }
}
