//! Lexicon polarity scorer.

use std::sync::LazyLock;

use regex::Regex;

/// Word polarities.
///
/// Keys are lowercase single words. The score of a text is the mean over the
/// words that appear here, after modifiers are applied.
pub(crate) const LEXICON: &[(&str, f64)] = &[
    // Positive signals
    ("amazing", 0.6),
    ("awesome", 1.0),
    ("best", 1.0),
    ("creative", 0.5),
    ("excellent", 1.0),
    ("exciting", 0.3),
    ("flexible", 0.25),
    ("free", 0.4),
    ("friendly", 0.375),
    ("full", 0.35),
    ("fun", 0.3),
    ("good", 0.7),
    ("great", 0.8),
    ("happy", 0.8),
    ("high", 0.16),
    ("innovative", 0.5),
    ("interesting", 0.5),
    ("modern", 0.2),
    ("new", 0.136),
    ("passionate", 0.45),
    ("real", 0.2),
    ("smart", 0.2),
    ("strong", 0.43),
    ("top", 0.5),
    ("wonderful", 1.0),
    // Negative signals
    ("bad", -0.7),
    ("boring", -1.0),
    ("difficult", -0.5),
    ("hard", -0.29),
    ("late", -0.3),
    ("legacy", -0.2),
    ("poor", -0.4),
    ("remote", -0.1),
    ("small", -0.25),
    ("stressful", -0.6),
    ("terrible", -1.0),
    ("unpaid", -0.5),
    ("worst", -1.0),
];

/// Words that flip and damp the polarity of the next word.
const NEGATORS: &[&str] = &["not", "no", "never", "non", "without"];

/// Words that scale the polarity of the next word.
const INTENSIFIERS: &[(&str, f64)] = &[
    ("very", 1.3),
    ("really", 1.3),
    ("extremely", 1.5),
    ("super", 1.3),
    ("highly", 1.3),
];

/// Multiplier a negator applies to the word it modifies.
const NEGATION_FACTOR: f64 = -0.5;

static WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-z]+(?:'[a-z]+)?").expect("valid word regex"));

fn lookup(word: &str) -> Option<f64> {
    LEXICON
        .iter()
        .find(|&&(lex_word, _)| lex_word == word)
        .map(|&(_, weight)| weight)
}

fn intensity(word: &str) -> Option<f64> {
    INTENSIFIERS
        .iter()
        .find(|&&(w, _)| w == word)
        .map(|&(_, factor)| factor)
}

/// Score `text` in `[-1.0, 1.0]`.
///
/// A modifier (negator or intensifier) only affects the word immediately
/// after it; any other word in between cancels it. Text with no lexicon
/// words scores `0.0`.
#[must_use]
pub fn polarity(text: &str) -> f64 {
    let lower = text.to_lowercase();
    let mut scores: Vec<f64> = Vec::new();
    let mut factor = 1.0_f64;

    for m in WORD.find_iter(&lower) {
        let word = m.as_str();
        if NEGATORS.contains(&word) {
            factor *= NEGATION_FACTOR;
            continue;
        }
        if let Some(boost) = intensity(word) {
            factor *= boost;
            continue;
        }
        if let Some(weight) = lookup(word) {
            scores.push((weight * factor).clamp(-1.0, 1.0));
        }
        factor = 1.0;
    }

    if scores.is_empty() {
        return 0.0;
    }
    #[allow(clippy::cast_precision_loss)]
    let mean = scores.iter().sum::<f64>() / scores.len() as f64;
    mean.clamp(-1.0, 1.0)
}
