// ============================================================================
// Placement Infrastructure - PostgreSQL Company Repository
// File: crates/placement-infrastructure/src/database/postgres/company_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use placement_core::domain::{Company, CompanyAttributes};
use placement_core::error::DomainError;
use placement_core::repositories::CompanyRepository;

use super::{
    bind_company_attributes, db_error, CompanyRow, COMPANY_COLUMNS, INSERT_COMPANY_COLUMNS,
    SET_COMPANY_ATTRIBUTES,
};

pub struct PgCompanyRepository {
    pool: PgPool,
}

impl PgCompanyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CompanyRepository for PgCompanyRepository {
    async fn create(&self, attributes: &CompanyAttributes) -> Result<Company, DomainError> {
        let sql = format!(
            "INSERT INTO companies ({}) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12) \
             RETURNING {}",
            INSERT_COMPANY_COLUMNS, COMPANY_COLUMNS
        );

        let row: CompanyRow = bind_company_attributes(sqlx::query_as(&sql), attributes)
            .fetch_one(&self.pool)
            .await
            .map_err(db_error("creating company"))?;

        info!("Company row inserted: {}", row.id);
        Ok(row.into())
    }

    async fn list(&self) -> Result<Vec<Company>, DomainError> {
        let sql = format!("SELECT {} FROM companies ORDER BY created_at", COMPANY_COLUMNS);

        let rows: Vec<CompanyRow> = sqlx::query_as(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("listing companies"))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn list_by_officer(&self, officer: &str) -> Result<Vec<Company>, DomainError> {
        let sql = format!(
            "SELECT {} FROM companies WHERE $1 = ANY(assigned_officer) ORDER BY created_at",
            COMPANY_COLUMNS
        );

        let rows: Vec<CompanyRow> = sqlx::query_as(&sql)
            .bind(officer)
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("listing companies by officer"))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Company>, DomainError> {
        let sql = format!("SELECT {} FROM companies WHERE id = $1", COMPANY_COLUMNS);

        let row: Option<CompanyRow> = sqlx::query_as(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("finding company by id"))?;

        Ok(row.map(Into::into))
    }

    async fn update(&self, id: &Uuid, attributes: &CompanyAttributes) -> Result<Company, DomainError> {
        let sql = format!(
            "UPDATE companies SET {} WHERE id = $13 RETURNING {}",
            SET_COMPANY_ATTRIBUTES, COMPANY_COLUMNS
        );

        let row: Option<CompanyRow> = bind_company_attributes(sqlx::query_as(&sql), attributes)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("updating company"))?;

        row.map(Into::into).ok_or(DomainError::CompanyNotFound(*id))
    }

    async fn delete(&self, id: &Uuid) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM companies WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(db_error("deleting company"))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::CompanyNotFound(*id));
        }
        Ok(())
    }
}
