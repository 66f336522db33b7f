//! Flat CSV export of the cleaned, augmented table.

use std::path::Path;

use serde::Serialize;

use crate::derived::AnalyzedListing;
use crate::error::AnalysisError;

/// Timestamp layout used in the `date_posted` column.
pub const EXPORT_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Header row, in the field order of `ExportRow`.
pub const EXPORT_COLUMNS: [&str; 11] = [
    "id",
    "source",
    "title",
    "company",
    "location",
    "tags",
    "date_posted",
    "tags_text",
    "sentiment",
    "sentiment_label",
    "title_length",
];

#[derive(Debug, Serialize)]
struct ExportRow<'a> {
    id: i64,
    source: Option<&'a str>,
    title: &'a str,
    company: &'a str,
    location: Option<&'a str>,
    /// JSON array of the parsed tags.
    tags: String,
    date_posted: String,
    tags_text: &'a str,
    sentiment: f64,
    sentiment_label: &'static str,
    title_length: usize,
}

impl<'a> ExportRow<'a> {
    fn from_listing(row: &'a AnalyzedListing) -> Result<Self, AnalysisError> {
        let l = &row.listing;
        Ok(Self {
            id: l.id,
            source: l.source.as_deref(),
            title: &l.title,
            company: &l.company,
            location: l.location.as_deref(),
            tags: serde_json::to_string(&l.tags)?,
            date_posted: l
                .posted_at
                .map(|d| d.format(EXPORT_DATE_FORMAT).to_string())
                .unwrap_or_default(),
            tags_text: &row.tags_text,
            sentiment: row.sentiment,
            sentiment_label: row.sentiment_label.as_str(),
            title_length: row.title_length,
        })
    }
}

/// Writes `listings` to `path` with a header row, replacing any existing
/// file. Returns the number of data rows written.
///
/// The header is written even when `listings` is empty.
///
/// # Errors
///
/// Returns [`AnalysisError::Export`] if the file cannot be created or
/// written.
pub fn export_csv(path: &Path, listings: &[AnalyzedListing]) -> Result<usize, AnalysisError> {
    let wrap = |source: csv::Error| AnalysisError::Export {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(wrap)?;
    writer.write_record(EXPORT_COLUMNS).map_err(wrap)?;
    for listing in listings {
        writer
            .serialize(ExportRow::from_listing(listing)?)
            .map_err(wrap)?;
    }
    writer.flush().map_err(|e| wrap(e.into()))?;

    tracing::info!(rows = listings.len(), path = %path.display(), "exported cleaned listings");
    Ok(listings.len())
}
