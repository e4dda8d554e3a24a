// ============================================================================
// Placement Infrastructure - PostgreSQL Approval Store
// File: crates/placement-infrastructure/src/database/postgres/approval_store_impl.rs
// ============================================================================
//! One `sqlx::Transaction` per approval. The revision row is read with
//! `FOR UPDATE`; a second approval of the same id blocks on that lock and,
//! once the first commits, reads no row. Dropping the transaction without
//! committing rolls it back.

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, Transaction};
use tracing::debug;
use uuid::Uuid;

use placement_core::domain::{Company, CompanyAttributes, CompanyRevision};
use placement_core::error::DomainError;
use placement_core::repositories::{ApprovalStore, ApprovalTransaction};

use super::{
    bind_company_attributes, db_error, CompanyRow, RevisionRow, COMPANY_COLUMNS,
    INSERT_COMPANY_COLUMNS, REVISION_COLUMNS, SET_COMPANY_ATTRIBUTES,
};

pub struct PgApprovalStore {
    pool: PgPool,
}

impl PgApprovalStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ApprovalStore for PgApprovalStore {
    async fn begin(&self) -> Result<Box<dyn ApprovalTransaction>, DomainError> {
        let tx = self
            .pool
            .begin()
            .await
            .map_err(db_error("beginning approval transaction"))?;
        Ok(Box::new(PgApprovalTransaction { tx }))
    }
}

struct PgApprovalTransaction {
    tx: Transaction<'static, Postgres>,
}

#[async_trait]
impl ApprovalTransaction for PgApprovalTransaction {
    async fn lock_revision(&mut self, id: &Uuid) -> Result<Option<CompanyRevision>, DomainError> {
        let sql = format!(
            "SELECT {} FROM companies_temp WHERE id = $1 FOR UPDATE",
            REVISION_COLUMNS
        );

        let row: Option<RevisionRow> = sqlx::query_as(&sql)
            .bind(id)
            .fetch_optional(&mut *self.tx)
            .await
            .map_err(db_error("locking company revision"))?;

        row.map(CompanyRevision::try_from).transpose()
    }

    async fn overwrite_company(
        &mut self,
        id: &Uuid,
        attributes: &CompanyAttributes,
    ) -> Result<Option<Company>, DomainError> {
        let sql = format!(
            "UPDATE companies SET {} WHERE id = $13 RETURNING {}",
            SET_COMPANY_ATTRIBUTES, COMPANY_COLUMNS
        );

        let row: Option<CompanyRow> = bind_company_attributes(sqlx::query_as(&sql), attributes)
            .bind(id)
            .fetch_optional(&mut *self.tx)
            .await
            .map_err(db_error("merging revision into company"))?;

        Ok(row.map(Into::into))
    }

    async fn insert_company(&mut self, attributes: &CompanyAttributes) -> Result<Company, DomainError> {
        let sql = format!(
            "INSERT INTO companies ({}) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12) \
             RETURNING {}",
            INSERT_COMPANY_COLUMNS, COMPANY_COLUMNS
        );

        let row: CompanyRow = bind_company_attributes(sqlx::query_as(&sql), attributes)
            .fetch_one(&mut *self.tx)
            .await
            .map_err(db_error("inserting company from revision"))?;

        Ok(row.into())
    }

    async fn delete_revision(&mut self, id: &Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM companies_temp WHERE id = $1")
            .bind(id)
            .execute(&mut *self.tx)
            .await
            .map_err(db_error("deleting approved revision"))?;

        Ok(result.rows_affected() > 0)
    }

    async fn commit(self: Box<Self>) -> Result<(), DomainError> {
        let PgApprovalTransaction { tx } = *self;
        tx.commit()
            .await
            .map_err(db_error("committing approval transaction"))?;
        debug!("Approval transaction committed");
        Ok(())
    }
}
