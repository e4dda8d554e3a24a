//! Configuration management

use std::time::Duration;

use config::{builder::DefaultState, Config, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;

use crate::constants::{
    DEFAULT_CONNECT_ATTEMPTS, DEFAULT_CONNECT_BACKOFF_MS, DEFAULT_MAX_CONNECTIONS,
    MEMORY_DATABASE_URL,
};
use crate::error::AppError;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub app: AppSettings,
    pub database: DatabaseSettings,
    pub http: HttpSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppSettings {
    pub env: String,
    pub host: String,
    pub port: u16,
    pub name: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: u32,
    pub run_migrations: bool,
    pub connect_attempts: u32,
    pub connect_backoff_ms: u64,
}

impl DatabaseSettings {
    pub fn is_memory(&self) -> bool {
        self.url.starts_with(MEMORY_DATABASE_URL)
    }

    /// Base delay between startup connection attempts.
    pub fn connect_backoff(&self) -> Duration {
        Duration::from_millis(self.connect_backoff_ms)
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct HttpSettings {
    #[serde(default)]
    pub cors_allowed_origins: Vec<String>,
}

impl AppConfig {
    pub fn load() -> Result<Self, AppError> {
        let env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".into());
        let config = Self::defaults()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(
                Environment::default()
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("http.cors_allowed_origins")
                    .try_parsing(true),
            )
            .build()?;
        let config: AppConfig = config.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Storage is either the in-memory store or PostgreSQL.
    pub fn validate(&self) -> Result<(), AppError> {
        let url = self.database.url.as_str();
        if !(self.database.is_memory()
            || url.starts_with("postgres://")
            || url.starts_with("postgresql://"))
        {
            return Err(AppError::invalid(
                "database.url",
                format!("expected {} or a postgres:// url", MEMORY_DATABASE_URL),
            ));
        }
        if self.database.max_connections == 0 {
            return Err(AppError::invalid(
                "database.max_connections",
                "must be at least 1",
            ));
        }
        if self.database.connect_attempts == 0 {
            return Err(AppError::invalid(
                "database.connect_attempts",
                "must be at least 1",
            ));
        }
        Ok(())
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("app.env", "development")?
            .set_default("app.host", "0.0.0.0")?
            .set_default("app.port", 8080)?
            .set_default("app.name", "placement-server")?
            .set_default("database.url", MEMORY_DATABASE_URL)?
            .set_default("database.max_connections", DEFAULT_MAX_CONNECTIONS)?
            .set_default("database.run_migrations", true)?
            .set_default("database.connect_attempts", DEFAULT_CONNECT_ATTEMPTS)?
            .set_default("database.connect_backoff_ms", DEFAULT_CONNECT_BACKOFF_MS)?
            .set_default("http.cors_allowed_origins", Vec::<String>::new())
    }
}
