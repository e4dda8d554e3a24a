// ============================================================================
// Placement Core - Company Entity
// File: crates/placement-core/src/domain/company.rs
// Description: Live company record taking part in a recruitment drive
// ============================================================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use placement_shared::utils::normalize_identifiers;

/// Every mutable field of a company.
///
/// A revision carries one of these as a full replacement snapshot, so
/// approving it overwrites all of them at once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct CompanyAttributes {
    #[validate(length(min = 1, max = 255, message = "Company name must be between 1 and 255 characters"))]
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

    /// Officer identifiers. Treated as a set.
    pub assigned_officers: Vec<String>,
}

impl CompanyAttributes {
    /// Trim the name, collapse the officer list into a set, then validate.
    pub fn normalized(mut self) -> Result<Self, validator::ValidationErrors> {
        self.company_name = self.company_name.trim().to_string();
        self.assigned_officers = normalize_identifiers(&self.assigned_officers);
        self.validate()?;
        Ok(self)
    }

    pub fn is_assigned_to(&self, officer: &str) -> bool {
        self.assigned_officers.iter().any(|o| o == officer)
    }
}

/// Company entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub id: Uuid,

    #[serde(flatten)]
    pub attributes: CompanyAttributes,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Company {
    pub fn is_assigned_to(&self, officer: &str) -> bool {
        self.attributes.is_assigned_to(officer)
    }
}
