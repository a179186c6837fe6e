//! Word-frequency keyword extraction for article content.
//!
//! Text is lowercased and split on runs of characters outside ASCII
//! `[A-Za-z0-9_]`. Tokens not in the banned set are tallied and the most
//! frequent ones are returned. Equal counts keep first-occurrence order.

use std::collections::{HashMap, HashSet};

/// Number of keywords stored per article
pub const TOP_KEYWORDS: usize = 3;

/// Banned words used when nothing else is configured
pub const DEFAULT_BANNED_WORDS: &[&str] = &["the", "and", "or"];

/// Return up to three of the most frequent tokens in `text` that are not in `banned`.
///
/// `banned` is matched exactly against lowercased tokens, so callers must
/// supply lowercase words.
pub fn extract_top_keywords(text: &str, banned: &HashSet<String>) -> Vec<String> {
    top_keywords(text, banned, TOP_KEYWORDS)
}

fn top_keywords(text: &str, banned: &HashSet<String>, limit: usize) -> Vec<String> {
    let normalized = text.to_ascii_lowercase();

    // Insertion-ordered tally: `slots` maps a token to its position in `counts`.
    let mut slots: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<(&str, usize)> = Vec::new();

    for token in tokenize(&normalized) {
        if banned.contains(token) {
            continue;
        }
        let slot = *slots.entry(token).or_insert_with(|| {
            counts.push((token, 0));
            counts.len() - 1
        });
        counts[slot].1 += 1;
    }

    // sort_by is stable, ties stay in first-occurrence order
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    counts
        .into_iter()
        .take(limit)
        .map(|(token, _)| token.to_string())
        .collect()
}

fn tokenize(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !is_word_char(c))
        .filter(|token| !token.is_empty())
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Keyword extractor bound to a configured banned-word set
#[derive(Debug, Clone)]
pub struct KeywordExtractor {
    banned: HashSet<String>,
}

impl KeywordExtractor {
    /// Build an extractor; banned words are lowercased so configuration can be written in any case.
    pub fn new<I, S>(banned: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let banned = banned
            .into_iter()
            .map(|word| word.as_ref().trim().to_ascii_lowercase())
            .filter(|word| !word.is_empty())
            .collect();
        Self { banned }
    }

    pub fn banned(&self) -> &HashSet<String> {
        &self.banned
    }

    pub fn extract(&self, text: &str) -> Vec<String> {
        extract_top_keywords(text, &self.banned)
    }
}

impl Default for KeywordExtractor {
    fn default() -> Self {
        Self::new(DEFAULT_BANNED_WORDS)
    }
}
