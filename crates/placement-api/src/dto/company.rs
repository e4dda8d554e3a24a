//! Company payloads. camelCase on the wire.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use placement_core::domain::{Company, CompanyAttributes};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CompanyRequest {
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
}

impl From<CompanyRequest> for CompanyAttributes {
    fn from(req: CompanyRequest) -> Self {
        CompanyAttributes {
            company_name: req.company_name,
            company_address: req.company_address,
            drive: req.drive,
            type_of_drive: req.type_of_drive,
            follow_up: req.follow_up,
            is_contacted: req.is_contacted,
            remarks: req.remarks,
            contact_details: req.contact_details,
            hr1_details: req.hr1_details,
            hr2_details: req.hr2_details,
            package: req.package,
            assigned_officers: req.assigned_officer,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyResponse {
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

impl From<Company> for CompanyResponse {
    fn from(company: Company) -> Self {
        let a = company.attributes;
        CompanyResponse {
            id: company.id,
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
            created_at: company.created_at,
            updated_at: company.updated_at,
        }
    }
}
