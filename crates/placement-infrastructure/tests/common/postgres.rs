//! PostgreSQL test harness.
//!
//! Uses `DATABASE_URL` when it is set; otherwise starts one throwaway
//! PostgreSQL container for the whole test binary. Migrations run once.
//! Tests share the database, so each one works on rows it created itself.

use std::sync::Arc;

use sqlx::PgPool;
use testcontainers::runners::AsyncRunner;
use testcontainers::{ContainerAsync, ImageExt};
use testcontainers_modules::postgres::Postgres;
use tokio::sync::OnceCell;

use placement_core::services::{ApprovalService, CompanyService, RevisionService, UserService};
use placement_infrastructure::{
    create_pool, run_migrations, PgApprovalStore, PgCompanyRepository, PgRevisionRepository,
    PgUserRepository,
};

struct SharedPostgres {
    url: String,
    // keeps the container alive for the test run
    _container: Option<ContainerAsync<Postgres>>,
}

static SHARED_POSTGRES: OnceCell<SharedPostgres> = OnceCell::const_new();

impl SharedPostgres {
    async fn init() -> Self {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();

        let (url, container) = match std::env::var("DATABASE_URL") {
            Ok(url) => (url, None),
            Err(_) => {
                let container = Postgres::default()
                    .with_tag("16")
                    .start()
                    .await
                    .expect("Failed to start Postgres container");
                let host = container.get_host().await.expect("container host");
                let port = container
                    .get_host_port_ipv4(5432)
                    .await
                    .expect("container port");
                let url = format!("postgresql://postgres:postgres@{}:{}/postgres", host, port);
                (url, Some(container))
            }
        };

        let pool = create_pool(&url, 2)
            .await
            .expect("Failed to connect to Postgres for migrations");
        run_migrations(&pool).await.expect("Failed to run migrations");

        Self {
            url,
            _container: container,
        }
    }

    async fn get() -> &'static Self {
        SHARED_POSTGRES.get_or_init(Self::init).await
    }
}

pub struct PgHarness {
    pub pool: PgPool,
    pub companies: CompanyService<PgCompanyRepository>,
    pub revisions: RevisionService<PgRevisionRepository>,
    pub approvals: ApprovalService<PgApprovalStore>,
    pub users: UserService<PgUserRepository>,
    pub company_repo: Arc<PgCompanyRepository>,
    pub revision_repo: Arc<PgRevisionRepository>,
    pub approval_store: Arc<PgApprovalStore>,
}

impl PgHarness {
    /// Fresh pool per test, over the shared database.
    pub async fn new() -> Self {
        let shared = SharedPostgres::get().await;
        let pool = create_pool(&shared.url, 16)
            .await
            .expect("Failed to connect to test database");

        let company_repo = Arc::new(PgCompanyRepository::new(pool.clone()));
        let revision_repo = Arc::new(PgRevisionRepository::new(pool.clone()));
        let approval_store = Arc::new(PgApprovalStore::new(pool.clone()));
        let user_repo = Arc::new(PgUserRepository::new(pool.clone()));

        Self {
            companies: CompanyService::new(company_repo.clone()),
            revisions: RevisionService::new(revision_repo.clone()),
            approvals: ApprovalService::new(approval_store.clone()),
            users: UserService::new(user_repo),
            company_repo,
            revision_repo,
            approval_store,
            pool,
        }
    }
}
