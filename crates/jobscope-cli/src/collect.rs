//! The `collect` command: scrape pages and append them to the jobs table.

use jobscope_core::{AppConfig, NewListing};
use jobscope_db::DbError;
use jobscope_scraper::{Collector, CollectorSettings, JobBoardClient, ListingSink, StopReason};
use sqlx::SqlitePool;

/// Writes each page in its own transaction.
pub(crate) struct StoreSink<'a> {
    pool: &'a SqlitePool,
}

impl<'a> StoreSink<'a> {
    pub(crate) fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }
}

impl ListingSink for StoreSink<'_> {
    type Error = DbError;

    async fn store_page(&mut self, listings: &[NewListing]) -> Result<(), DbError> {
        jobscope_db::insert_listings(self.pool, listings).await?;
        Ok(())
    }
}

/// Runs the collector against the configured source.
///
/// A rejected page ends the run normally; rows from earlier pages stay in the
/// store.
///
/// # Errors
///
/// Returns an error if the client cannot be built, a request fails in
/// transport, or a page cannot be inserted.
pub(crate) async fn run_collect(pool: &SqlitePool, config: &AppConfig) -> anyhow::Result<()> {
    let client = JobBoardClient::new(&config.source_url, &config.user_agent)
        .map_err(|e| anyhow::anyhow!("failed to build job board client: {e}"))?;

    let settings = CollectorSettings::from_app_config(config);
    tracing::info!(
        url = %client.base_url(),
        max_pages = settings.max_pages,
        max_records = settings.max_records,
        "collect started"
    );

    let mut sink = StoreSink::new(pool);
    let summary = Collector::new(&client, settings).run(&mut sink).await?;

    let reason = match summary.stop_reason {
        StopReason::PageBudgetExhausted => "page budget exhausted".to_string(),
        StopReason::RecordCapReached => "record cap reached".to_string(),
        StopReason::Rejected { status } => format!("rejected with status {status}"),
    };
    tracing::info!(
        pages = summary.pages_fetched,
        inserted = summary.records_inserted,
        reason = %reason,
        "collect finished"
    );
    println!(
        "Scraping completed: {} records from {} pages ({reason}).",
        summary.records_inserted, summary.pages_fetched
    );

    Ok(())
}
