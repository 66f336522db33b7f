//! Load-and-clean: drop unusable rows, parse dates, split tags.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use jobscope_db::ListingRow;

/// A row that survived cleaning.
#[derive(Debug, Clone, PartialEq)]
pub struct CleanListing {
    pub id: i64,
    pub source: Option<String>,
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    /// Trimmed, non-empty tags in stored order.
    pub tags: Vec<String>,
    /// `None` when the stored timestamp could not be parsed.
    pub posted_at: Option<DateTime<Utc>>,
}

/// Naive layouts tried after RFC 3339; all are read as UTC.
const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Offset-carrying layouts that RFC 3339 parsing rejects (e.g. `+0000`).
const OFFSET_DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f%z", "%Y-%m-%d %H:%M:%S%.f%z"];

/// Drops rows missing title, company, tags or `date_posted`, then parses the
/// remainder. A `date_posted` that is present but unparseable is kept as a
/// row with `posted_at = None`.
#[must_use]
pub fn clean_listings(rows: Vec<ListingRow>) -> Vec<CleanListing> {
    let total = rows.len();
    let cleaned: Vec<CleanListing> = rows.into_iter().filter_map(clean_row).collect();
    tracing::info!(
        loaded = total,
        kept = cleaned.len(),
        dropped = total - cleaned.len(),
        "cleaned listings"
    );
    cleaned
}

fn clean_row(row: ListingRow) -> Option<CleanListing> {
    let (Some(title), Some(company), Some(tags), Some(date_posted)) =
        (row.title, row.company, row.tags, row.date_posted)
    else {
        return None;
    };

    Some(CleanListing {
        id: row.id,
        source: row.source,
        title,
        company,
        location: row.location,
        tags: split_tags(&tags),
        posted_at: parse_posted_at(&date_posted),
    })
}

/// Splits a comma-joined tag string into trimmed, non-empty tags.
#[must_use]
pub fn split_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parses a stored timestamp into UTC.
///
/// Accepts RFC 3339, ISO-like date-times with or without an offset, and bare
/// `YYYY-MM-DD` dates (midnight UTC). Anything else yields `None`.
#[must_use]
pub fn parse_posted_at(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in OFFSET_DATETIME_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(raw, fmt) {
            return Some(dt.with_timezone(&Utc));
        }
    }
    for fmt in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
