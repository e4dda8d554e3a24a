//! PostgreSQL event repository

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use placement_core::domain::{Event, NewEvent};
use placement_core::error::DomainError;
use placement_core::repositories::EventRepository;

use super::db_error;

pub struct PgEventRepository {
    pool: PgPool,
}

impl PgEventRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct EventRow {
    pub id: Uuid,
    pub date: NaiveDate,
    #[sqlx(rename = "type")]
    pub event_type: String,
    pub title: String,
    pub description: String,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
}

impl From<EventRow> for Event {
    fn from(row: EventRow) -> Self {
        Event {
            id: row.id,
            date: row.date,
            event_type: row.event_type,
            title: row.title,
            description: row.description,
            created_by: row.created_by,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl EventRepository for PgEventRepository {
    async fn create(&self, event: &NewEvent) -> Result<Event, DomainError> {
        let row: EventRow = sqlx::query_as(
            r#"
            INSERT INTO events (date, type, title, description, created_by)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, date, type, title, description, created_by, created_at
            "#,
        )
        .bind(event.date)
        .bind(&event.event_type)
        .bind(&event.title)
        .bind(&event.description)
        .bind(&event.created_by)
        .fetch_one(&self.pool)
        .await
        .map_err(db_error("creating event"))?;

        Ok(row.into())
    }

    async fn list(&self) -> Result<Vec<Event>, DomainError> {
        let rows: Vec<EventRow> = sqlx::query_as(
            r#"
            SELECT id, date, type, title, description, created_by, created_at
            FROM events
            ORDER BY date DESC, created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("listing events"))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}
