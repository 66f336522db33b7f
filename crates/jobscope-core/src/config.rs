use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every setting has a default, so an empty environment yields the stock
/// RemoteOK configuration.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let database_url = or_default("DATABASE_URL", "sqlite://job_listings_expanded.db");
    let env = parse_environment(&or_default("JOBSCOPE_ENV", "development"));
    let log_level = or_default("JOBSCOPE_LOG_LEVEL", "info");

    let source_url = or_default(
        "JOBSCOPE_SOURCE_URL",
        "https://remoteok.io/remote-dev-jobs",
    );
    let source_label = or_default("JOBSCOPE_SOURCE_LABEL", "RemoteOK");
    let default_location = or_default("JOBSCOPE_DEFAULT_LOCATION", "Remote");
    let user_agent = or_default("JOBSCOPE_USER_AGENT", "Mozilla/5.0");

    let max_pages = parse_usize("JOBSCOPE_MAX_PAGES", "50")?;
    let max_records = parse_usize("JOBSCOPE_MAX_RECORDS", "1000")?;
    let delay_min_ms = parse_u64("JOBSCOPE_DELAY_MIN_MS", "1000")?;
    let delay_max_ms = parse_u64("JOBSCOPE_DELAY_MAX_MS", "2000")?;

    if delay_min_ms > delay_max_ms {
        return Err(ConfigError::Validation(format!(
            "JOBSCOPE_DELAY_MIN_MS ({delay_min_ms}) exceeds JOBSCOPE_DELAY_MAX_MS ({delay_max_ms})"
        )));
    }

    let export_path = PathBuf::from(or_default(
        "JOBSCOPE_EXPORT_PATH",
        "processed_job_listings_from_db.csv",
    ));

    Ok(AppConfig {
        database_url,
        env,
        log_level,
        source_url,
        source_label,
        default_location,
        user_agent,
        max_pages,
        max_records,
        delay_min_ms,
        delay_max_ms,
        export_path,
    })
}

/// Parse a string into an `Environment` variant.
///
/// Unrecognized values default to `Environment::Development`.
fn parse_environment(s: &str) -> Environment {
    match s {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
