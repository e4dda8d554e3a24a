//! Startup errors raised while assembling `AppConfig`.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Failed to load settings: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Invalid value for {key}: {reason}")]
    InvalidSetting { key: &'static str, reason: String },
}

impl AppError {
    pub fn invalid(key: &'static str, reason: impl Into<String>) -> Self {
        AppError::InvalidSetting {
            key,
            reason: reason.into(),
        }
    }
}
