//! Tag multisets with first-seen ordering.

use std::collections::HashMap;

use crate::clean::CleanListing;

/// Tag counter that remembers the order in which tags were first seen, so
/// equal counts rank first-seen-first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagCounts {
    counts: Vec<(String, usize)>,
    index: HashMap<String, usize>,
}

impl TagCounts {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, tag: &str) {
        if let Some(&i) = self.index.get(tag) {
            self.counts[i].1 += 1;
        } else {
            self.index.insert(tag.to_string(), self.counts.len());
            self.counts.push((tag.to_string(), 1));
        }
    }

    /// Count for `tag`, zero if never seen.
    #[must_use]
    pub fn get(&self, tag: &str) -> usize {
        self.index.get(tag).map_or(0, |&i| self.counts[i].1)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// `(tag, count)` pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(t, c)| (t.as_str(), *c))
    }

    /// The `n` most frequent tags, descending. Ties keep first-seen order.
    #[must_use]
    pub fn top(&self, n: usize) -> Vec<(String, usize)> {
        let mut ranked = self.counts.clone();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(n);
        ranked
    }
}

impl<'a> FromIterator<&'a str> for TagCounts {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut counts = TagCounts::new();
        for tag in iter {
            counts.add(tag);
        }
        counts
    }
}

/// Flattens the tags of every listing into one multiset.
pub fn tag_frequency<'a, I>(listings: I) -> TagCounts
where
    I: IntoIterator<Item = &'a CleanListing>,
{
    listings
        .into_iter()
        .flat_map(|l| l.tags.iter().map(String::as_str))
        .collect()
}

/// The `n` most frequent tags across `listings`, ties in first-seen order.
#[must_use]
pub fn top_tags<'a, I>(listings: I, n: usize) -> Vec<(String, usize)>
where
    I: IntoIterator<Item = &'a CleanListing>,
{
    tag_frequency(listings).top(n)
}
