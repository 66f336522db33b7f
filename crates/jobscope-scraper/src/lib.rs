//! Listing collector for the RemoteOK job board.
//!
//! Fetches listing pages, extracts `tr.job` rows best-effort, and hands each
//! page's listings to a [`ListingSink`] until a page, record, or HTTP stop
//! condition is hit.

pub mod client;
pub mod collector;
pub mod error;
pub mod parse;
pub mod rate_limit;

pub use client::{JobBoardClient, PageFetch};
pub use collector::{CollectSummary, Collector, CollectorSettings, ListingSink, StopReason};
pub use error::ScraperError;
pub use parse::{parse_listings, ListingParse, ParsedListing, SkipReason};
