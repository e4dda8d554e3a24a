//! Calendar events: an append-only log, independent of companies.

use std::sync::Arc;

use tracing::info;

use crate::domain::{Event, NewEvent};
use crate::error::DomainError;
use crate::repositories::EventRepository;

pub struct EventService<R: EventRepository + ?Sized> {
    event_repo: Arc<R>,
}

impl<R: EventRepository + ?Sized> EventService<R> {
    pub fn new(event_repo: Arc<R>) -> Self {
        Self { event_repo }
    }

    pub async fn create(&self, event: NewEvent) -> Result<Event, DomainError> {
        let event = NewEvent::new(
            event.date,
            event.event_type,
            event.title,
            event.description,
            event.created_by,
        )?;
        let created = self.event_repo.create(&event).await?;
        info!("Event {} created for {} by {}", created.id, created.date, created.created_by);
        Ok(created)
    }

    pub async fn list(&self) -> Result<Vec<Event>, DomainError> {
        self.event_repo.list().await
    }
}
