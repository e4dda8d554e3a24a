//! Revision payloads. snake_case on the wire.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use placement_core::domain::{CompanyAttributes, CompanyRevision};

use crate::error::{parse_id, ApiResult};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct RevisionRequest {
    /// Target company. Blank or absent proposes a new company.
    pub company_id: Option<String>,
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
    pub created_by: String,
}

impl RevisionRequest {
    pub fn target(&self) -> ApiResult<Option<Uuid>> {
        match self.company_id.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(raw) => parse_id(raw).map(Some),
        }
    }

    pub fn into_parts(self) -> (CompanyAttributes, String) {
        let attributes = CompanyAttributes {
            company_name: self.company_name,
            company_address: self.company_address,
            drive: self.drive,
            type_of_drive: self.type_of_drive,
            follow_up: self.follow_up,
            is_contacted: self.is_contacted,
            remarks: self.remarks,
            contact_details: self.contact_details,
            hr1_details: self.hr1_details,
            hr2_details: self.hr2_details,
            package: self.package,
            assigned_officers: self.assigned_officer,
        };
        (attributes, self.created_by)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatusRequest {
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RevisionResponse {
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
    pub created_by: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<CompanyRevision> for RevisionResponse {
    fn from(revision: CompanyRevision) -> Self {
        let a = revision.attributes;
        RevisionResponse {
            id: revision.id,
            company_id: revision.company_id,
            company_name: a.company_name,
            company_address: a.company_address,
            drive: a.drive,
            type_of_drive: a.type_of_drive,
            follow_up: a.follow_up,
            is_contacted: a.is_contacted,
            remarks: a.remarks,
            contact_details: a.contact_details,
            hr1_details: a.hr1_details,
            hr2_details: a.hr2_details,
            package: a.package,
            assigned_officer: a.assigned_officers,
            created_by: revision.created_by,
            status: revision.status.to_string(),
            created_at: revision.created_at,
            updated_at: revision.updated_at,
        }
    }
}
