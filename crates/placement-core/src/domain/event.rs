//! Calendar event entity

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Calendar event. Append-only: created and listed, never edited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: Uuid,
    pub date: NaiveDate,
    pub event_type: String,
    pub title: String,
    pub description: String,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct NewEvent {
    pub date: NaiveDate,

    #[validate(length(min = 1, max = 50, message = "Event type is required"))]
    pub event_type: String,

    #[validate(length(min = 1, max = 255, message = "Title is required"))]
    pub title: String,

    pub description: String,

    #[validate(length(min = 1, message = "created_by is required"))]
    pub created_by: String,
}

impl NewEvent {
    pub fn new(
        date: NaiveDate,
        event_type: String,
        title: String,
        description: String,
        created_by: String,
    ) -> Result<Self, validator::ValidationErrors> {
        let event = Self {
            date,
            event_type: event_type.trim().to_string(),
            title: title.trim().to_string(),
            description,
            created_by: created_by.trim().to_string(),
        };

        event.validate()?;
        Ok(event)
    }
}
