//! Per-row derived columns: tag text, sentiment and title length.

use jobscope_sentiment::{classify_polarity, polarity, SentimentLabel};

use crate::clean::CleanListing;

#[derive(Debug, Clone, PartialEq)]
pub struct AnalyzedListing {
    pub listing: CleanListing,
    /// Tags re-joined with `", "`; the text the sentiment score is taken over.
    pub tags_text: String,
    pub sentiment: f64,
    pub sentiment_label: SentimentLabel,
    /// Title length in characters, not bytes.
    pub title_length: usize,
}

impl AnalyzedListing {
    #[must_use]
    pub fn from_clean(listing: CleanListing) -> Self {
        let tags_text = listing.tags.join(", ");
        let sentiment = polarity(&tags_text);
        let title_length = listing.title.chars().count();
        Self {
            listing,
            tags_text,
            sentiment,
            sentiment_label: classify_polarity(sentiment),
            title_length,
        }
    }

    /// Outcome variable for the regression.
    #[must_use]
    pub fn is_senior(&self) -> bool {
        self.listing.title.to_lowercase().contains("senior")
    }
}

#[must_use]
pub fn annotate(listings: Vec<CleanListing>) -> Vec<AnalyzedListing> {
    listings.into_iter().map(AnalyzedListing::from_clean).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(title: &str, tags: &[&str]) -> CleanListing {
        CleanListing {
            id: 1,
            source: None,
            title: title.to_string(),
            company: "c".to_string(),
            location: None,
            tags: tags.iter().map(|t| (*t).to_string()).collect(),
            posted_at: None,
        }
    }

    #[test]
    fn tags_text_rejoins_with_comma_space() {
        let a = AnalyzedListing::from_clean(listing("Dev", &["python", "sql"]));
        assert_eq!(a.tags_text, "python, sql");
        assert_eq!(a.sentiment_label, SentimentLabel::Neutral);
    }

    #[test]
    fn title_length_counts_chars() {
        let a = AnalyzedListing::from_clean(listing("Développeur", &[]));
        assert_eq!(a.title_length, 11);
    }

    #[test]
    fn senior_match_is_case_insensitive_substring() {
        assert!(AnalyzedListing::from_clean(listing("SENIOR Engineer", &[])).is_senior());
        assert!(AnalyzedListing::from_clean(listing("Engineer (Seniority 3)", &[])).is_senior());
        assert!(!AnalyzedListing::from_clean(listing("Junior Engineer", &[])).is_senior());
    }

    #[test]
    fn positive_tags_label_positive() {
        let a = AnalyzedListing::from_clean(listing("Dev", &["great team"]));
        assert_eq!(a.sentiment_label, SentimentLabel::Positive);
    }
}
