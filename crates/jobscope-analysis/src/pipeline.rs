//! Runs every analysis step over one load of the table.

use chrono::NaiveDate;
use jobscope_db::ListingRow;
use jobscope_sentiment::{tally_labels, SentimentLabel};

use crate::clean::{clean_listings, CleanListing};
use crate::derived::{annotate, AnalyzedListing};
use crate::growth::{tag_growth, GrowthAnalysis};
use crate::profile::{missing_values, profile_rows, DataProfile, MissingValues};
use crate::regression::{senior_title_model, LogitFit, RegressionError};
use crate::tags::top_tags;
use crate::trends::{daily_counts, weekly_counts};

/// How many entries the top-tag and top-growth rankings keep.
pub const TOP_N: usize = 10;

#[derive(Debug, Clone)]
pub struct AnalysisReport {
    pub profile: DataProfile,
    pub missing: MissingValues,
    pub daily: Vec<(NaiveDate, usize)>,
    pub weekly: Vec<(NaiveDate, usize)>,
    pub top_tags: Vec<(String, usize)>,
    pub growth: GrowthAnalysis,
    pub sentiment: Vec<(SentimentLabel, usize)>,
    /// A failed fit is reported rather than aborting the run, so the export
    /// still happens.
    pub regression: Result<LogitFit, RegressionError>,
    /// Cleaned rows with their derived columns, ready for export.
    pub listings: Vec<AnalyzedListing>,
}

/// Cleans `rows` and computes every statistic.
#[must_use]
pub fn analyze(rows: Vec<ListingRow>) -> AnalysisReport {
    let profile = profile_rows(&rows);
    let cleaned = clean_listings(rows);
    let missing = missing_values(&cleaned);

    let listings = annotate(cleaned);
    let clean: Vec<&CleanListing> = listings.iter().map(|a| &a.listing).collect();

    let daily = daily_counts(clean.iter().copied());
    let weekly = weekly_counts(clean.iter().copied());
    let top_tags = top_tags(clean.iter().copied(), TOP_N);
    let growth = tag_growth(&clean, TOP_N);
    let sentiment = tally_labels(listings.iter().map(|a| a.sentiment_label));

    let regression = senior_title_model(&listings);
    if let Err(e) = &regression {
        tracing::warn!(error = %e, "seniority regression could not be fitted");
    }

    AnalysisReport {
        profile,
        missing,
        daily,
        weekly,
        top_tags,
        growth,
        sentiment,
        regression,
        listings,
    }
}
