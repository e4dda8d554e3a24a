//! Telemetry setup

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs the global subscriber. `RUST_LOG` overrides `default_directives`.
///
/// Output is JSON unless `LOG_FORMAT=pretty`, which is meant for local runs.
pub fn init_telemetry(default_directives: &str) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives));
    let registry = tracing_subscriber::registry().with(env_filter);

    match std::env::var("LOG_FORMAT").as_deref() {
        Ok("pretty") => registry.with(fmt::layer().pretty()).init(),
        _ => registry
            .with(fmt::layer().json().with_target(true).with_current_span(true))
            .init(),
    }
}
