use std::net::SocketAddr;

use tracing::{error, info};

use placement_api::{build_router, AppState};
use placement_infrastructure::{connect_with_retry, run_migrations, MemoryStore};
use placement_shared::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env
    dotenvy::dotenv().ok();

    placement_shared::telemetry::init_telemetry("info,placement_server=debug,placement_api=debug");

    info!("Placement server starting...");

    let config = match AppConfig::load() {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let state = if config.database.is_memory() {
        info!("Using in-memory store; data is lost on exit");
        AppState::in_memory(MemoryStore::new())
    } else {
        info!("Connecting to PostgreSQL...");
        let pool = connect_with_retry(&config.database).await?;
        if config.database.run_migrations {
            run_migrations(&pool).await?;
        }
        info!("Database connection established.");
        AppState::postgres(pool)
    };

    let app = build_router(state, &config.http.cors_allowed_origins);

    let host: std::net::IpAddr = config.app.host.parse()?;
    let addr = SocketAddr::from((host, config.app.port));
    info!("{} listening on {}", config.app.name, addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
