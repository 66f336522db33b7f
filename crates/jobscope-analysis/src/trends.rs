//! Posting counts per calendar day and per calendar week.

use std::collections::BTreeMap;

use chrono::{Datelike, Days, NaiveDate};

use crate::clean::CleanListing;

/// Listings per UTC calendar day, oldest first. Undated rows are skipped.
pub fn daily_counts<'a, I>(listings: I) -> Vec<(NaiveDate, usize)>
where
    I: IntoIterator<Item = &'a CleanListing>,
{
    bucket(listings, |day| day)
}

/// Listings per calendar week, oldest first. Weeks run Monday to Sunday and
/// are keyed by their Monday.
pub fn weekly_counts<'a, I>(listings: I) -> Vec<(NaiveDate, usize)>
where
    I: IntoIterator<Item = &'a CleanListing>,
{
    bucket(listings, week_start)
}

fn week_start(day: NaiveDate) -> NaiveDate {
    let offset = u64::from(day.weekday().num_days_from_monday());
    day.checked_sub_days(Days::new(offset)).unwrap_or(day)
}

fn bucket<'a, I, F>(listings: I, key: F) -> Vec<(NaiveDate, usize)>
where
    I: IntoIterator<Item = &'a CleanListing>,
    F: Fn(NaiveDate) -> NaiveDate,
{
    let mut buckets: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    for posted_at in listings.into_iter().filter_map(|l| l.posted_at) {
        *buckets.entry(key(posted_at.date_naive())).or_insert(0) += 1;
    }
    buckets.into_iter().collect()
}
