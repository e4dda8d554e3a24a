//! PostgreSQL repository implementations

pub mod approval_store_impl;
pub mod company_repo_impl;
pub mod event_repo_impl;
pub mod revision_repo_impl;
pub mod user_repo_impl;

pub use approval_store_impl::PgApprovalStore;
pub use company_repo_impl::PgCompanyRepository;
pub use event_repo_impl::PgEventRepository;
pub use revision_repo_impl::PgRevisionRepository;
pub use user_repo_impl::PgUserRepository;

use chrono::{DateTime, Utc};
use sqlx::{postgres::PgArguments, query::QueryAs, FromRow, Postgres};
use tracing::error;
use uuid::Uuid;

use placement_core::domain::{Company, CompanyAttributes, CompanyRevision, RevisionStatus};
use placement_core::error::DomainError;

pub(crate) const COMPANY_COLUMNS: &str = r#"
    id, company_name, company_address, drive, type_of_drive, follow_up,
    is_contacted, remarks, contact_details, hr1_details, hr2_details,
    package, assigned_officer, created_at, updated_at
"#;

pub(crate) const REVISION_COLUMNS: &str = r#"
    id, company_id, company_name, company_address, drive, type_of_drive, follow_up,
    is_contacted, remarks, contact_details, hr1_details, hr2_details,
    package, assigned_officer, status, created_by, created_at, updated_at
"#;

/// Assignment list for the twelve attribute columns, bound as `$1..$12`
/// by [`bind_company_attributes`]. Moves `updated_at` strictly forward even
/// when `NOW()` has not advanced inside a transaction.
pub(crate) const SET_COMPANY_ATTRIBUTES: &str = r#"
    company_name = $1,
    company_address = $2,
    drive = $3,
    type_of_drive = $4,
    follow_up = $5,
    is_contacted = $6,
    remarks = $7,
    contact_details = $8,
    hr1_details = $9,
    hr2_details = $10,
    package = $11,
    assigned_officer = $12,
    updated_at = GREATEST(NOW(), updated_at + INTERVAL '1 microsecond')
"#;

pub(crate) const INSERT_COMPANY_COLUMNS: &str = r#"
    company_name, company_address, drive, type_of_drive, follow_up,
    is_contacted, remarks, contact_details, hr1_details, hr2_details,
    package, assigned_officer
"#;

/// Binds the attribute columns in [`INSERT_COMPANY_COLUMNS`] order.
pub(crate) fn bind_company_attributes<'q, O>(
    query: QueryAs<'q, Postgres, O, PgArguments>,
    attributes: &'q CompanyAttributes,
) -> QueryAs<'q, Postgres, O, PgArguments> {
    query
        .bind(&attributes.company_name)
        .bind(&attributes.company_address)
        .bind(&attributes.drive)
        .bind(&attributes.type_of_drive)
        .bind(&attributes.follow_up)
        .bind(attributes.is_contacted)
        .bind(&attributes.remarks)
        .bind(&attributes.contact_details)
        .bind(&attributes.hr1_details)
        .bind(&attributes.hr2_details)
        .bind(&attributes.package)
        .bind(&attributes.assigned_officers)
}

pub(crate) fn db_error(context: &'static str) -> impl Fn(sqlx::Error) -> DomainError {
    move |e: sqlx::Error| {
        error!("Database error {}: {}", context, e);
        DomainError::DatabaseError(e.to_string())
    }
}

// Internal row types for SQLx mapping
#[derive(Debug, FromRow)]
pub(crate) struct CompanyRow {
    pub id: Uuid,
    pub company_name: String,
    pub company_address: String,
    pub drive: String,
    pub type_of_drive: String,
    pub follow_up: String,
    pub is_contacted: bool,
    pub remarks: String,
    pub contact_details: String,
    pub hr1_details: String,
    pub hr2_details: String,
    pub package: String,
    pub assigned_officer: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<CompanyRow> for Company {
    fn from(row: CompanyRow) -> Self {
        Company {
            id: row.id,
            attributes: CompanyAttributes {
                company_name: row.company_name,
                company_address: row.company_address,
                drive: row.drive,
                type_of_drive: row.type_of_drive,
                follow_up: row.follow_up,
                is_contacted: row.is_contacted,
                remarks: row.remarks,
                contact_details: row.contact_details,
                hr1_details: row.hr1_details,
                hr2_details: row.hr2_details,
                package: row.package,
                assigned_officers: row.assigned_officer,
            },
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(Debug, FromRow)]
pub(crate) struct RevisionRow {
    pub id: Uuid,
    pub company_id: Option<Uuid>,
    pub company_name: String,
    pub company_address: String,
    pub drive: String,
    pub type_of_drive: String,
    pub follow_up: String,
    pub is_contacted: bool,
    pub remarks: String,
    pub contact_details: String,
    pub hr1_details: String,
    pub hr2_details: String,
    pub package: String,
    pub assigned_officer: Vec<String>,
    pub status: String,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A blank `status` cell cannot come from the service layer; it is reported
/// as corrupt data instead of being read back as `pending`.
impl TryFrom<RevisionRow> for CompanyRevision {
    type Error = DomainError;

    fn try_from(row: RevisionRow) -> Result<Self, Self::Error> {
        let status = RevisionStatus::parse(&row.status).ok_or_else(|| {
            error!("Company revision {} has a blank status", row.id);
            DomainError::DatabaseError(format!("company revision {} has a blank status", row.id))
        })?;

        Ok(CompanyRevision {
            id: row.id,
            company_id: row.company_id,
            attributes: CompanyAttributes {
                company_name: row.company_name,
                company_address: row.company_address,
                drive: row.drive,
                type_of_drive: row.type_of_drive,
                follow_up: row.follow_up,
                is_contacted: row.is_contacted,
                remarks: row.remarks,
                contact_details: row.contact_details,
                hr1_details: row.hr1_details,
                hr2_details: row.hr2_details,
                package: row.package,
                assigned_officers: row.assigned_officer,
            },
            status,
            created_by: row.created_by,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}
