//! Event repository trait (port)

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::domain::{Event, NewEvent};
use crate::error::DomainError;

#[cfg_attr(test, automock)]
#[async_trait]
pub trait EventRepository: Send + Sync {
    async fn create(&self, event: &NewEvent) -> Result<Event, DomainError>;
    /// All events, latest `date` first.
    async fn list(&self) -> Result<Vec<Event>, DomainError>;
}
