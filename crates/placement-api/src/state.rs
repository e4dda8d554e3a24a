use std::sync::Arc;

use sqlx::PgPool;

use placement_core::repositories::{
    ApprovalStore, CompanyRepository, EventRepository, RevisionRepository, UserRepository,
};
use placement_core::services::{
    ApprovalService, CompanyService, EventService, RevisionService, UserService,
};
use placement_infrastructure::{
    MemoryStore, PgApprovalStore, PgCompanyRepository, PgEventRepository, PgRevisionRepository,
    PgUserRepository,
};

/// Services shared by every handler. Built once at startup.
#[derive(Clone)]
pub struct AppState {
    pub companies: Arc<CompanyService<dyn CompanyRepository>>,
    pub revisions: Arc<RevisionService<dyn RevisionRepository>>,
    pub approvals: Arc<ApprovalService<dyn ApprovalStore>>,
    pub events: Arc<EventService<dyn EventRepository>>,
    pub users: Arc<UserService<dyn UserRepository>>,
}

impl AppState {
    pub fn new(
        company_repo: Arc<dyn CompanyRepository>,
        revision_repo: Arc<dyn RevisionRepository>,
        approval_store: Arc<dyn ApprovalStore>,
        event_repo: Arc<dyn EventRepository>,
        user_repo: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            companies: Arc::new(CompanyService::new(company_repo)),
            revisions: Arc::new(RevisionService::new(revision_repo)),
            approvals: Arc::new(ApprovalService::new(approval_store)),
            events: Arc::new(EventService::new(event_repo)),
            users: Arc::new(UserService::new(user_repo)),
        }
    }

    pub fn postgres(pool: PgPool) -> Self {
        Self::new(
            Arc::new(PgCompanyRepository::new(pool.clone())),
            Arc::new(PgRevisionRepository::new(pool.clone())),
            Arc::new(PgApprovalStore::new(pool.clone())),
            Arc::new(PgEventRepository::new(pool.clone())),
            Arc::new(PgUserRepository::new(pool)),
        )
    }

    pub fn in_memory(store: MemoryStore) -> Self {
        let store = Arc::new(store);
        Self::new(
            store.clone(),
            store.clone(),
            store.clone(),
            store.clone(),
            store,
        )
    }
}
