use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use placement_core::domain::Event;

use crate::error::{ApiError, ApiResult};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CreateEventRequest {
    /// `YYYY-MM-DD`
    pub date: String,
    #[serde(rename = "type")]
    pub event_type: String,
    pub title: String,
    pub description: String,
    pub created_by: String,
}

impl CreateEventRequest {
    pub fn parsed_date(&self) -> ApiResult<NaiveDate> {
        let raw = self.date.trim();
        if raw.is_empty() {
            return Err(ApiError::BadRequest(
                "Missing required fields: date, type, title, and created_by are required"
                    .to_string(),
            ));
        }
        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map_err(|_| ApiError::BadRequest(format!("Invalid date '{}', expected YYYY-MM-DD", raw)))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventResponse {
    pub id: Uuid,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub event_type: String,
    pub title: String,
    pub description: String,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
}

impl From<Event> for EventResponse {
    fn from(event: Event) -> Self {
        EventResponse {
            id: event.id,
            date: event.date,
            event_type: event.event_type,
            title: event.title,
            description: event.description,
            created_by: event.created_by,
            created_at: event.created_at,
        }
    }
}
