//! Polarity scoring for listing tag text.
//!
//! Scores free text in `[-1.0, 1.0]` with a small lexicon and buckets the
//! score into Positive / Neutral / Negative.

pub mod label;
pub mod scorer;

pub use label::{classify_polarity, tally_labels, SentimentLabel};
pub use scorer::polarity;
