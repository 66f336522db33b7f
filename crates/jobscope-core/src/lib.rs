//! Shared configuration and listing types for the jobscope workspace.

pub mod app_config;
pub mod config;
pub mod listing;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use listing::NewListing;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("config validation failed: {0}")]
    Validation(String),
}
