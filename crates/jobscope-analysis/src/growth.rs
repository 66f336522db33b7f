//! Early-versus-late tag growth around the median posting date.
//!
//! Growth policy per tag seen in the late half:
//!
//! | early count | rate |
//! |-------------|------|
//! | `>= 5`      | `(late - early) / early` |
//! | `0`         | `+inf` (a new tag) |
//! | `1..=4`     | no entry |
//!
//! Ranking then treats `+inf` as `0.0`, so a brand-new tag sorts below any
//! tag with positive finite growth (see `new_tags_rank_below_finite_growth`).

use chrono::{DateTime, Utc};

use crate::clean::CleanListing;
use crate::tags::{tag_frequency, TagCounts};

/// Minimum early-half count for a finite growth rate.
pub const MIN_EARLY_COUNT: usize = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct GrowthRate {
    pub tag: String,
    pub early_count: usize,
    pub late_count: usize,
    /// Relative change; `f64::INFINITY` for tags absent from the early half
    /// until [`top_growth`] remaps it.
    pub rate: f64,
}

impl GrowthRate {
    /// True when the tag never appeared in the early half.
    #[must_use]
    pub fn is_new(&self) -> bool {
        self.early_count == 0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GrowthAnalysis {
    /// Median posting instant, `None` when no row has a date.
    pub cutoff: Option<DateTime<Utc>>,
    pub early_rows: usize,
    pub late_rows: usize,
    /// Ranked, truncated rates with infinities already remapped to `0.0`.
    pub top: Vec<GrowthRate>,
}

/// Median of the parsed posting instants. With an even count the midpoint of
/// the two middle instants is used.
pub fn median_posted_at<'a, I>(listings: I) -> Option<DateTime<Utc>>
where
    I: IntoIterator<Item = &'a CleanListing>,
{
    let mut dates: Vec<DateTime<Utc>> = listings.into_iter().filter_map(|l| l.posted_at).collect();
    if dates.is_empty() {
        return None;
    }
    dates.sort_unstable();

    let mid = dates.len() / 2;
    if dates.len() % 2 == 1 {
        Some(dates[mid])
    } else {
        let lo = dates[mid - 1];
        let hi = dates[mid];
        Some(lo + (hi - lo) / 2)
    }
}

/// Raw growth rates for every late-half tag that the policy covers, in the
/// late half's first-seen order.
#[must_use]
pub fn growth_rates(early: &TagCounts, late: &TagCounts) -> Vec<GrowthRate> {
    late.iter()
        .filter_map(|(tag, late_count)| {
            let early_count = early.get(tag);
            let rate = match early_count {
                0 => f64::INFINITY,
                n if n >= MIN_EARLY_COUNT => {
                    #[allow(clippy::cast_precision_loss)]
                    let (late_f, early_f) = (late_count as f64, n as f64);
                    (late_f - early_f) / early_f
                }
                _ => return None,
            };
            Some(GrowthRate {
                tag: tag.to_string(),
                early_count,
                late_count,
                rate,
            })
        })
        .collect()
}

/// Remaps infinite rates to `0.0`, sorts descending (stable) and keeps `n`.
#[must_use]
pub fn top_growth(rates: Vec<GrowthRate>, n: usize) -> Vec<GrowthRate> {
    let mut ranked: Vec<GrowthRate> = rates
        .into_iter()
        .map(|mut g| {
            if g.rate.is_infinite() {
                g.rate = 0.0;
            }
            g
        })
        .collect();
    ranked.sort_by(|a, b| b.rate.total_cmp(&a.rate));
    ranked.truncate(n);
    ranked
}

/// Splits dated listings at the median and ranks the top `n` growing tags.
#[must_use]
pub fn tag_growth(listings: &[&CleanListing], n: usize) -> GrowthAnalysis {
    let Some(cutoff) = median_posted_at(listings.iter().copied()) else {
        return GrowthAnalysis {
            cutoff: None,
            early_rows: 0,
            late_rows: 0,
            top: Vec::new(),
        };
    };

    let (early, late): (Vec<&CleanListing>, Vec<&CleanListing>) = listings
        .iter()
        .copied()
        .filter(|l| l.posted_at.is_some())
        .partition(|l| l.posted_at.is_some_and(|d| d <= cutoff));

    let early_tags = tag_frequency(early.iter().copied());
    let late_tags = tag_frequency(late.iter().copied());

    GrowthAnalysis {
        cutoff: Some(cutoff),
        early_rows: early.len(),
        late_rows: late.len(),
        top: top_growth(growth_rates(&early_tags, &late_tags), n),
    }
}
