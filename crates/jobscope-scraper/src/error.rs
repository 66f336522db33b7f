use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScraperError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid listing URL \"{url}\": {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("failed to store listings: {0}")]
    Sink(#[source] Box<dyn std::error::Error + Send + Sync>),
}
