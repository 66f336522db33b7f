//! The collect loop: fetch, parse, store, throttle, repeat.

use std::future::Future;

use jobscope_core::NewListing;

use crate::client::{JobBoardClient, PageFetch};
use crate::error::ScraperError;
use crate::parse::{parse_listings, ListingParse, ParsedListing};
use crate::rate_limit::pause;

/// Destination for each page's listings.
///
/// Implementations must make a page durable before returning; the collector
/// moves on to the next request as soon as `store_page` resolves.
pub trait ListingSink {
    type Error: std::error::Error + Send + Sync + 'static;

    fn store_page(
        &mut self,
        listings: &[NewListing],
    ) -> impl Future<Output = Result<(), Self::Error>> + Send;
}

#[derive(Debug, Clone)]
pub struct CollectorSettings {
    pub max_pages: usize,
    pub max_records: usize,
    pub source_label: String,
    pub location: String,
    pub delay_min_ms: u64,
    pub delay_max_ms: u64,
}

impl CollectorSettings {
    #[must_use]
    pub fn from_app_config(config: &jobscope_core::AppConfig) -> Self {
        Self {
            max_pages: config.max_pages,
            max_records: config.max_records,
            source_label: config.source_label.clone(),
            location: config.default_location.clone(),
            delay_min_ms: config.delay_min_ms,
            delay_max_ms: config.delay_max_ms,
        }
    }
}

/// Why the loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    PageBudgetExhausted,
    RecordCapReached,
    /// The server answered with a non-success status.
    Rejected { status: u16 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectSummary {
    /// Pages that returned a success status.
    pub pages_fetched: usize,
    pub records_inserted: usize,
    pub stop_reason: StopReason,
}

pub struct Collector<'a> {
    client: &'a JobBoardClient,
    settings: CollectorSettings,
}

impl<'a> Collector<'a> {
    #[must_use]
    pub fn new(client: &'a JobBoardClient, settings: CollectorSettings) -> Self {
        Self { client, settings }
    }

    /// Pages through the listing endpoint until a stop condition is hit.
    ///
    /// Each page's listings are truncated to the remaining record budget, so
    /// the total never exceeds `max_records`. A `max_pages` or `max_records`
    /// of zero performs no requests.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Http`] on a transport failure and
    /// [`ScraperError::Sink`] if a page cannot be stored. Pages stored before
    /// the failure stay stored.
    pub async fn run<S: ListingSink>(&self, sink: &mut S) -> Result<CollectSummary, ScraperError> {
        let settings = &self.settings;
        let mut pages_fetched = 0usize;
        let mut records_inserted = 0usize;

        if settings.max_records == 0 {
            return Ok(CollectSummary {
                pages_fetched,
                records_inserted,
                stop_reason: StopReason::RecordCapReached,
            });
        }

        for page_index in 0..settings.max_pages {
            let body = match self.client.fetch_page(page_index).await? {
                PageFetch::Body(body) => body,
                PageFetch::Rejected { status } => {
                    tracing::warn!(page = page_index + 1, status, "blocked or failed");
                    return Ok(CollectSummary {
                        pages_fetched,
                        records_inserted,
                        stop_reason: StopReason::Rejected { status },
                    });
                }
            };
            pages_fetched += 1;

            let remaining = settings.max_records - records_inserted;
            let batch: Vec<NewListing> = parse_listings(&body)
                .into_iter()
                .filter_map(ListingParse::into_parsed)
                .take(remaining)
                .map(|parsed| self.stamp(parsed))
                .collect();

            sink.store_page(&batch)
                .await
                .map_err(|e| ScraperError::Sink(Box::new(e)))?;
            records_inserted += batch.len();

            tracing::info!(
                page = page_index + 1,
                inserted = batch.len(),
                total = records_inserted,
                "page done"
            );

            pause(settings.delay_min_ms, settings.delay_max_ms).await;

            if records_inserted >= settings.max_records {
                return Ok(CollectSummary {
                    pages_fetched,
                    records_inserted,
                    stop_reason: StopReason::RecordCapReached,
                });
            }
        }

        Ok(CollectSummary {
            pages_fetched,
            records_inserted,
            stop_reason: StopReason::PageBudgetExhausted,
        })
    }

    fn stamp(&self, parsed: ParsedListing) -> NewListing {
        NewListing {
            source: self.settings.source_label.clone(),
            title: parsed.title,
            company: parsed.company,
            location: self.settings.location.clone(),
            tags: parsed.tags,
            date_posted: parsed.date_posted,
        }
    }
}
