// ============================================================================
// Placement Infrastructure - PostgreSQL Company Revision Repository
// File: crates/placement-infrastructure/src/database/postgres/revision_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use placement_core::domain::{CompanyAttributes, CompanyRevision, RevisionStatus};
use placement_core::error::DomainError;
use placement_core::repositories::RevisionRepository;

use super::{bind_company_attributes, db_error, RevisionRow, INSERT_COMPANY_COLUMNS, REVISION_COLUMNS};

pub struct PgRevisionRepository {
    pool: PgPool,
}

impl PgRevisionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RevisionRepository for PgRevisionRepository {
    async fn create(
        &self,
        company_id: Option<Uuid>,
        attributes: &CompanyAttributes,
        created_by: &str,
    ) -> Result<CompanyRevision, DomainError> {
        let sql = format!(
            "INSERT INTO companies_temp ({}, company_id, created_by, status) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15) \
             RETURNING {}",
            INSERT_COMPANY_COLUMNS, REVISION_COLUMNS
        );

        let row: RevisionRow = bind_company_attributes(sqlx::query_as(&sql), attributes)
            .bind(company_id)
            .bind(created_by)
            .bind(RevisionStatus::Pending.as_str())
            .fetch_one(&self.pool)
            .await
            .map_err(db_error("creating company revision"))?;

        info!("Company revision row inserted: {}", row.id);
        row.try_into()
    }

    async fn list(&self) -> Result<Vec<CompanyRevision>, DomainError> {
        let sql = format!(
            "SELECT {} FROM companies_temp ORDER BY created_at DESC",
            REVISION_COLUMNS
        );

        let rows: Vec<RevisionRow> = sqlx::query_as(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("listing company revisions"))?;

        rows.into_iter().map(CompanyRevision::try_from).collect()
    }

    async fn find_by_id(&self, id: &Uuid) -> Result<Option<CompanyRevision>, DomainError> {
        let sql = format!("SELECT {} FROM companies_temp WHERE id = $1", REVISION_COLUMNS);

        let row: Option<RevisionRow> = sqlx::query_as(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("finding company revision by id"))?;

        row.map(CompanyRevision::try_from).transpose()
    }

    async fn set_status(
        &self,
        id: &Uuid,
        status: &RevisionStatus,
    ) -> Result<CompanyRevision, DomainError> {
        let sql = format!(
            "UPDATE companies_temp \
             SET status = $1, updated_at = GREATEST(NOW(), updated_at + INTERVAL '1 microsecond') \
             WHERE id = $2 \
             RETURNING {}",
            REVISION_COLUMNS
        );

        let row: Option<RevisionRow> = sqlx::query_as(&sql)
            .bind(status.as_str())
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("updating company revision status"))?;

        row.ok_or(DomainError::RevisionNotFound(*id))?.try_into()
    }

    async fn delete(&self, id: &Uuid) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM companies_temp WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(db_error("deleting company revision"))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::RevisionNotFound(*id));
        }
        Ok(())
    }
}
