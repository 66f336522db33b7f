use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub env: Environment,
    pub log_level: String,
    /// Listing page the collector pages through.
    pub source_url: String,
    /// Value stamped into the `source` column of every collected row.
    pub source_label: String,
    /// Value stamped into the `location` column; the source does not vary it.
    pub default_location: String,
    pub user_agent: String,
    pub max_pages: usize,
    pub max_records: usize,
    /// Lower bound of the randomized pause between page requests.
    pub delay_min_ms: u64,
    /// Upper bound (inclusive) of the randomized pause between page requests.
    pub delay_max_ms: u64,
    pub export_path: PathBuf,
}
