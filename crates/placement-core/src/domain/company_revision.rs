// ============================================================================
// Placement Core - Company Revision Entity
// File: crates/placement-core/src/domain/company_revision.rs
// Description: Staged edit of a company, waiting for review
// ============================================================================

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use placement_shared::constants::{STATUS_APPROVED, STATUS_PENDING, STATUS_REJECTED};

use super::company::CompanyAttributes;

/// Review status of a revision.
///
/// Reviewers may store any label; the three well-known ones get their own
/// variants. A status is only a label: none of them, `Approved` included,
/// applies the revision to its company.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum RevisionStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
    Custom(String),
}

impl RevisionStatus {
    pub fn as_str(&self) -> &str {
        match self {
            RevisionStatus::Pending => STATUS_PENDING,
            RevisionStatus::Approved => STATUS_APPROVED,
            RevisionStatus::Rejected => STATUS_REJECTED,
            RevisionStatus::Custom(s) => s,
        }
    }

    /// Known labels match case-insensitively; anything else is kept verbatim.
    /// Blank input has no status.
    pub fn parse(s: &str) -> Option<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(match trimmed.to_lowercase().as_str() {
            STATUS_PENDING => RevisionStatus::Pending,
            STATUS_APPROVED => RevisionStatus::Approved,
            STATUS_REJECTED => RevisionStatus::Rejected,
            _ => RevisionStatus::Custom(trimmed.to_string()),
        })
    }

    /// Transitions are reviewer-driven: any state may move to any labelled
    /// state, including itself. Only an empty label is refused.
    pub fn can_transition_to(&self, next: &RevisionStatus) -> bool {
        !next.as_str().trim().is_empty()
    }
}

impl fmt::Display for RevisionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<RevisionStatus> for String {
    fn from(status: RevisionStatus) -> Self {
        status.as_str().to_string()
    }
}

impl TryFrom<String> for RevisionStatus {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        RevisionStatus::parse(&value).ok_or_else(|| "status must not be blank".to_string())
    }
}

/// Company revision ("temp" record)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyRevision {
    pub id: Uuid,

    /// Company this revision rewrites; `None` proposes a new company.
    pub company_id: Option<Uuid>,

    #[serde(flatten)]
    pub attributes: CompanyAttributes,

    pub status: RevisionStatus,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
