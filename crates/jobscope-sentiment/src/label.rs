use std::collections::HashMap;

/// Score above this is Positive.
pub const POSITIVE_THRESHOLD: f64 = 0.1;
/// Score below this is Negative.
pub const NEGATIVE_THRESHOLD: f64 = -0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SentimentLabel {
    Positive,
    Neutral,
    Negative,
}

impl SentimentLabel {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SentimentLabel::Positive => "Positive",
            SentimentLabel::Neutral => "Neutral",
            SentimentLabel::Negative => "Negative",
        }
    }
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Both thresholds are exclusive: exactly `0.1` and exactly `-0.1` are Neutral.
#[must_use]
pub fn classify_polarity(score: f64) -> SentimentLabel {
    if score > POSITIVE_THRESHOLD {
        SentimentLabel::Positive
    } else if score < NEGATIVE_THRESHOLD {
        SentimentLabel::Negative
    } else {
        SentimentLabel::Neutral
    }
}

/// Counts labels, most frequent first. Equal counts keep first-seen order.
#[must_use]
pub fn tally_labels<I>(labels: I) -> Vec<(SentimentLabel, usize)>
where
    I: IntoIterator<Item = SentimentLabel>,
{
    let mut order: Vec<(SentimentLabel, usize)> = Vec::new();
    let mut index: HashMap<SentimentLabel, usize> = HashMap::new();
    for label in labels {
        if let Some(&i) = index.get(&label) {
            order[i].1 += 1;
        } else {
            index.insert(label, order.len());
            order.push((label, 1));
        }
    }
    order.sort_by(|a, b| b.1.cmp(&a.1));
    order
}
