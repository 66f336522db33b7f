//! Data profile of the raw table and missing-value counts after cleaning.

use std::fmt;

use jobscope_db::ListingRow;

use crate::clean::CleanListing;
use crate::tags::TagCounts;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnProfile {
    pub name: &'static str,
    pub non_null: usize,
    pub unique: usize,
    /// Most frequent value; ties go to the first seen.
    pub top: Option<String>,
    pub freq: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataProfile {
    pub rows: usize,
    pub id_range: Option<(i64, i64)>,
    pub columns: Vec<ColumnProfile>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingValues {
    pub columns: Vec<(&'static str, usize)>,
}

/// Profiles every text column of the raw table.
#[must_use]
pub fn profile_rows(rows: &[ListingRow]) -> DataProfile {
    let id_range = rows
        .iter()
        .map(|r| r.id)
        .fold(None, |acc: Option<(i64, i64)>, id| match acc {
            None => Some((id, id)),
            Some((lo, hi)) => Some((lo.min(id), hi.max(id))),
        });

    let columns = vec![
        column("source", rows.iter().map(|r| r.source.as_deref())),
        column("title", rows.iter().map(|r| r.title.as_deref())),
        column("company", rows.iter().map(|r| r.company.as_deref())),
        column("location", rows.iter().map(|r| r.location.as_deref())),
        column("tags", rows.iter().map(|r| r.tags.as_deref())),
        column("date_posted", rows.iter().map(|r| r.date_posted.as_deref())),
    ];

    DataProfile {
        rows: rows.len(),
        id_range,
        columns,
    }
}

fn column<'a, I>(name: &'static str, values: I) -> ColumnProfile
where
    I: Iterator<Item = Option<&'a str>>,
{
    let counts: TagCounts = values.flatten().collect();
    let non_null: usize = counts.iter().map(|(_, c)| c).sum();
    let (top, freq) = counts
        .top(1)
        .into_iter()
        .next()
        .map_or((None, 0), |(value, freq)| (Some(value), freq));

    ColumnProfile {
        name,
        non_null,
        unique: counts.len(),
        top,
        freq,
    }
}

/// Missing values per column of the cleaned table. Only `source`,
/// `location` and the parsed date can still be missing after cleaning.
#[must_use]
pub fn missing_values(listings: &[CleanListing]) -> MissingValues {
    let count = |pred: fn(&CleanListing) -> bool| listings.iter().filter(|l| pred(l)).count();
    MissingValues {
        columns: vec![
            ("id", 0),
            ("source", count(|l| l.source.is_none())),
            ("title", 0),
            ("company", 0),
            ("location", count(|l| l.location.is_none())),
            ("tags", 0),
            ("date_posted", count(|l| l.posted_at.is_none())),
        ],
    }
}

impl fmt::Display for DataProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "rows: {}", self.rows)?;
        if let Some((lo, hi)) = self.id_range {
            writeln!(f, "id range: {lo}..={hi}")?;
        }
        writeln!(
            f,
            "{:<13}{:>9}{:>9}{:>7}  TOP",
            "COLUMN", "NON-NULL", "UNIQUE", "FREQ"
        )?;
        for c in &self.columns {
            writeln!(
                f,
                "{:<13}{:>9}{:>9}{:>7}  {}",
                c.name,
                c.non_null,
                c.unique,
                c.freq,
                c.top.as_deref().map(truncate).unwrap_or_default()
            )?;
        }
        Ok(())
    }
}

impl fmt::Display for MissingValues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, missing) in &self.columns {
            writeln!(f, "{name:<13}{missing:>6}")?;
        }
        Ok(())
    }
}

fn truncate(value: &str) -> String {
    const MAX: usize = 40;
    if value.chars().count() <= MAX {
        value.to_string()
    } else {
        let head: String = value.chars().take(MAX - 3).collect();
        format!("{head}...")
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn raw(id: i64, title: Option<&str>, tags: Option<&str>) -> ListingRow {
        ListingRow {
            id,
            source: Some("RemoteOK".to_string()),
            title: title.map(str::to_string),
            company: Some("Acme".to_string()),
            location: None,
            tags: tags.map(str::to_string),
            date_posted: Some("2024-01-01".to_string()),
        }
    }

    #[test]
    fn profile_counts_non_null_and_unique() {
        let rows = vec![
            raw(3, Some("Dev"), Some("go")),
            raw(1, Some("Dev"), None),
            raw(2, None, Some("rust")),
        ];
        let profile = profile_rows(&rows);

        assert_eq!(profile.rows, 3);
        assert_eq!(profile.id_range, Some((1, 3)));
        let title = profile.columns.iter().find(|c| c.name == "title").unwrap();
        assert_eq!(title.non_null, 2);
        assert_eq!(title.unique, 1);
        assert_eq!(title.top.as_deref(), Some("Dev"));
        assert_eq!(title.freq, 2);

        let location = profile.columns.iter().find(|c| c.name == "location").unwrap();
        assert_eq!(location.non_null, 0);
        assert!(location.top.is_none());
    }

    #[test]
    fn empty_table_profiles_cleanly() {
        let profile = profile_rows(&[]);
        assert_eq!(profile.rows, 0);
        assert!(profile.id_range.is_none());
        assert!(profile.to_string().contains("rows: 0"));
    }

    #[test]
    fn missing_values_counts_unparsed_dates() {
        let listing = |posted: bool| CleanListing {
            id: 1,
            source: Some("RemoteOK".to_string()),
            title: "t".to_string(),
            company: "c".to_string(),
            location: None,
            tags: Vec::new(),
            posted_at: posted.then(Utc::now),
        };
        let missing = missing_values(&[listing(true), listing(false), listing(false)]);
        let get = |name: &str| missing.columns.iter().find(|(n, _)| *n == name).unwrap().1;
        assert_eq!(get("date_posted"), 2);
        assert_eq!(get("location"), 3);
        assert_eq!(get("title"), 0);
    }
}
