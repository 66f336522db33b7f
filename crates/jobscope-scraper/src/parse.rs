//! Best-effort extraction of listings from a RemoteOK page.
//!
//! A listing is a `tr.job` row holding an `h2` title, an `h3` company, zero
//! or more `div.tag` labels and a `time[datetime]` stamp. Rows missing any of
//! the required pieces are skipped without error.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

static JOB_ROW: LazyLock<Selector> = LazyLock::new(|| selector("tr.job"));
static TITLE: LazyLock<Selector> = LazyLock::new(|| selector("h2"));
static COMPANY: LazyLock<Selector> = LazyLock::new(|| selector("h3"));
static TAG: LazyLock<Selector> = LazyLock::new(|| selector("div.tag"));
static TIME: LazyLock<Selector> = LazyLock::new(|| selector("time"));

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("valid static selector")
}

/// Fields pulled out of one listing row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedListing {
    pub title: String,
    pub company: String,
    /// Trimmed tag labels joined with `", "`. Empty when the row has no tags.
    pub tags: String,
    /// Raw `datetime` attribute, stored verbatim.
    pub date_posted: String,
}

/// Which required piece a skipped row was missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    MissingTitle,
    MissingCompany,
    MissingTime,
    MissingDatetime,
}

/// Outcome for a single `tr.job` row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListingParse {
    Parsed(ParsedListing),
    Skipped(SkipReason),
}

impl ListingParse {
    #[must_use]
    pub fn into_parsed(self) -> Option<ParsedListing> {
        match self {
            ListingParse::Parsed(listing) => Some(listing),
            ListingParse::Skipped(_) => None,
        }
    }
}

/// Parses every `tr.job` row in `html`, in document order.
#[must_use]
pub fn parse_listings(html: &str) -> Vec<ListingParse> {
    let document = Html::parse_document(html);
    document.select(&JOB_ROW).map(parse_row).collect()
}

fn parse_row(row: ElementRef<'_>) -> ListingParse {
    match extract(row) {
        Ok(listing) => ListingParse::Parsed(listing),
        Err(reason) => ListingParse::Skipped(reason),
    }
}

fn extract(row: ElementRef<'_>) -> Result<ParsedListing, SkipReason> {
    let title = first_text(row, &TITLE).ok_or(SkipReason::MissingTitle)?;
    let company = first_text(row, &COMPANY).ok_or(SkipReason::MissingCompany)?;

    let tags = row
        .select(&TAG)
        .map(element_text)
        .collect::<Vec<_>>()
        .join(", ");

    let time = row.select(&TIME).next().ok_or(SkipReason::MissingTime)?;
    let date_posted = time
        .value()
        .attr("datetime")
        .ok_or(SkipReason::MissingDatetime)?
        .to_string();

    Ok(ParsedListing {
        title,
        company,
        tags,
        date_posted,
    })
}

fn first_text(row: ElementRef<'_>, sel: &Selector) -> Option<String> {
    row.select(sel).next().map(element_text)
}

fn element_text(el: ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}

#[cfg(test)]
#[path = "parse_test.rs"]
mod tests;
