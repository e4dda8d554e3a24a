//! In-memory storage backend.
//!
//! Selected with `database.url = "memory://"`, and used by the test suites.
//! All four tables live behind one async mutex: a plain read or write holds
//! it for a single operation, an approval transaction holds it from `begin`
//! until commit or drop. Transactions are therefore serializable, which is
//! what makes a second approval of the same revision see it already gone.

mod approval;

pub use approval::ApprovalStep;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use tokio::sync::Mutex as AsyncMutex;
use tracing::info;
use uuid::Uuid;

use placement_core::domain::{
    Company, CompanyAttributes, CompanyRevision, Event, NewEvent, NewUser, RevisionStatus, User,
};
use placement_core::error::DomainError;
use placement_core::repositories::{
    CompanyRepository, EventRepository, RevisionRepository, UserRepository,
};
use placement_shared::new_id;

#[derive(Debug, Default)]
pub(crate) struct Tables {
    pub companies: HashMap<Uuid, Company>,
    pub revisions: HashMap<Uuid, CompanyRevision>,
    pub events: Vec<Event>,
    pub users: HashMap<Uuid, User>,
    last_timestamp: Option<DateTime<Utc>>,
}

impl Tables {
    /// Store clock. Strictly increasing, so `updated_at` always moves forward
    /// and `created_at` orders rows by insertion.
    pub fn tick(&mut self) -> DateTime<Utc> {
        let now = Utc::now();
        let ts = match self.last_timestamp {
            Some(prev) if now <= prev => prev + Duration::microseconds(1),
            _ => now,
        };
        self.last_timestamp = Some(ts);
        ts
    }
}

#[derive(Clone, Default)]
pub struct MemoryStore {
    tables: Arc<AsyncMutex<Tables>>,
    fail_point: Arc<Mutex<Option<ApprovalStep>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next approval transaction fail with a `DatabaseError` at
    /// `step`. One-shot: later transactions run normally.
    pub fn fail_next_approval_at(&self, step: ApprovalStep) {
        if let Ok(mut slot) = self.fail_point.lock() {
            *slot = Some(step);
        }
    }

    fn take_fail_point(&self) -> Option<ApprovalStep> {
        self.fail_point.lock().ok().and_then(|mut slot| slot.take())
    }
}

fn sorted_by_creation(mut companies: Vec<Company>) -> Vec<Company> {
    companies.sort_by_key(|c| c.created_at);
    companies
}

#[async_trait]
impl CompanyRepository for MemoryStore {
    async fn create(&self, attributes: &CompanyAttributes) -> Result<Company, DomainError> {
        let mut tables = self.tables.lock().await;
        let now = tables.tick();
        let company = Company {
            id: new_id(),
            attributes: attributes.clone(),
            created_at: now,
            updated_at: now,
        };
        tables.companies.insert(company.id, company.clone());
        Ok(company)
    }

    async fn list(&self) -> Result<Vec<Company>, DomainError> {
        let tables = self.tables.lock().await;
        Ok(sorted_by_creation(tables.companies.values().cloned().collect()))
    }

    async fn list_by_officer(&self, officer: &str) -> Result<Vec<Company>, DomainError> {
        let tables = self.tables.lock().await;
        Ok(sorted_by_creation(
            tables
                .companies
                .values()
                .filter(|c| c.is_assigned_to(officer))
                .cloned()
                .collect(),
        ))
    }

    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Company>, DomainError> {
        Ok(self.tables.lock().await.companies.get(id).cloned())
    }

    async fn update(&self, id: &Uuid, attributes: &CompanyAttributes) -> Result<Company, DomainError> {
        let mut tables = self.tables.lock().await;
        let now = tables.tick();
        let company = tables
            .companies
            .get_mut(id)
            .ok_or(DomainError::CompanyNotFound(*id))?;
        company.attributes = attributes.clone();
        company.updated_at = now;
        Ok(company.clone())
    }

    async fn delete(&self, id: &Uuid) -> Result<(), DomainError> {
        self.tables
            .lock()
            .await
            .companies
            .remove(id)
            .map(|_| ())
            .ok_or(DomainError::CompanyNotFound(*id))
    }
}

#[async_trait]
impl RevisionRepository for MemoryStore {
    async fn create(
        &self,
        company_id: Option<Uuid>,
        attributes: &CompanyAttributes,
        created_by: &str,
    ) -> Result<CompanyRevision, DomainError> {
        let mut tables = self.tables.lock().await;
        let now = tables.tick();
        let revision = CompanyRevision {
            id: new_id(),
            company_id,
            attributes: attributes.clone(),
            status: RevisionStatus::Pending,
            created_by: created_by.to_string(),
            created_at: now,
            updated_at: now,
        };
        tables.revisions.insert(revision.id, revision.clone());
        Ok(revision)
    }

    async fn list(&self) -> Result<Vec<CompanyRevision>, DomainError> {
        let tables = self.tables.lock().await;
        let mut revisions: Vec<CompanyRevision> = tables.revisions.values().cloned().collect();
        revisions.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(revisions)
    }

    async fn find_by_id(&self, id: &Uuid) -> Result<Option<CompanyRevision>, DomainError> {
        Ok(self.tables.lock().await.revisions.get(id).cloned())
    }

    async fn set_status(
        &self,
        id: &Uuid,
        status: &RevisionStatus,
    ) -> Result<CompanyRevision, DomainError> {
        let mut tables = self.tables.lock().await;
        let now = tables.tick();
        let revision = tables
            .revisions
            .get_mut(id)
            .ok_or(DomainError::RevisionNotFound(*id))?;
        revision.status = status.clone();
        revision.updated_at = now;
        Ok(revision.clone())
    }

    async fn delete(&self, id: &Uuid) -> Result<(), DomainError> {
        self.tables
            .lock()
            .await
            .revisions
            .remove(id)
            .map(|_| ())
            .ok_or(DomainError::RevisionNotFound(*id))
    }
}

#[async_trait]
impl EventRepository for MemoryStore {
    async fn create(&self, event: &NewEvent) -> Result<Event, DomainError> {
        let mut tables = self.tables.lock().await;
        let now = tables.tick();
        let event = Event {
            id: new_id(),
            date: event.date,
            event_type: event.event_type.clone(),
            title: event.title.clone(),
            description: event.description.clone(),
            created_by: event.created_by.clone(),
            created_at: now,
        };
        tables.events.push(event.clone());
        Ok(event)
    }

    async fn list(&self) -> Result<Vec<Event>, DomainError> {
        let tables = self.tables.lock().await;
        let mut events = tables.events.clone();
        events.sort_by(|a, b| b.date.cmp(&a.date).then(b.created_at.cmp(&a.created_at)));
        Ok(events)
    }
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        let tables = self.tables.lock().await;
        Ok(tables.users.values().find(|u| u.username == username).cloned())
    }

    async fn list(&self) -> Result<Vec<User>, DomainError> {
        let tables = self.tables.lock().await;
        let mut users: Vec<User> = tables.users.values().cloned().collect();
        users.sort_by_key(|u| u.created_at);
        Ok(users)
    }

    async fn create(&self, user: &NewUser) -> Result<User, DomainError> {
        let mut tables = self.tables.lock().await;
        if tables.users.values().any(|u| u.username == user.username) {
            return Err(DomainError::UsernameAlreadyExists(user.username.clone()));
        }
        let now = tables.tick();
        let created = User {
            id: new_id(),
            username: user.username.clone(),
            email: user.email.clone(),
            role: user.role,
            password_hash: user.password_hash.clone(),
            created_at: now,
        };
        tables.users.insert(created.id, created.clone());
        info!("User stored in memory: {}", created.username);
        Ok(created)
    }

    async fn delete(&self, id: &Uuid) -> Result<(), DomainError> {
        self.tables
            .lock()
            .await
            .users
            .remove(id)
            .map(|_| ())
            .ok_or(DomainError::UserNotFound(*id))
    }
}
