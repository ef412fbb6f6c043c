//! Core types of dajare, a phonetic pun scorer for Japanese.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

pub mod mecab_types;

/// The set of part-of-speech categories that count as content words.
///
/// The set is supplied by the embedding application rather than hardcoded;
/// [`ContentWordSet::default`] covers the IPADIC categories conventionally
/// considered content words.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentWordSet(HashSet<String>);

impl ContentWordSet {
    pub fn new<I, S>(categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(categories.into_iter().map(Into::into).collect())
    }

    /// Checks whether the category belongs to the set.
    ///
    /// Unknown and empty categories are simply not members.
    pub fn contains(&self, pos_category: &str) -> bool {
        self.0.contains(pos_category)
    }
}

impl Default for ContentWordSet {
    fn default() -> Self {
        Self::new(["名詞", "動詞", "形容詞", "副詞"])
    }
}

impl<S: Into<String>> FromIterator<S> for ContentWordSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}
