//! Fuzzy name matching for contact lookups.
//!
//! This module ranks stored names against a query with:
//! - Exact matching (case-insensitive, whitespace-normalized)
//! - Subsequence matching using the nucleo matcher
//! - Levenshtein similarity as a fallback for typos
//! - Confidence scoring (0-100 scale)

use nucleo_matcher::pattern::{CaseMatching, Normalization, Pattern};
use nucleo_matcher::{Config, Matcher, Utf32Str};

/// A match result containing a stored name and its confidence score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    /// The matched contact name
    pub name: String,

    /// Confidence score (0-100, where 100 is an exact match)
    pub confidence: u8,

    /// Type of match that produced this result
    pub match_type: MatchType,
}

/// The type of match that was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchType {
    /// Same name ignoring case and spacing
    Exact,

    /// Query characters appear in order inside the name
    Subsequence,

    /// Close by edit distance
    Typo,
}

/// Name matcher with exact, subsequence and typo-tolerant matching.
pub struct NameMatcher {
    matcher: Matcher,
}

impl NameMatcher {
    /// Create a new NameMatcher.
    pub fn new() -> Self {
        Self {
            matcher: Matcher::new(Config::DEFAULT),
        }
    }

    /// Rank `names` against `query`.
    ///
    /// # Arguments
    /// * `query` - What the user typed
    /// * `names` - Stored contact names
    /// * `max_results` - Maximum number of results to return
    /// * `min_confidence` - Minimum confidence threshold (0-100)
    ///
    /// # Returns
    /// Matches sorted by confidence (highest first), then by name.
    pub fn suggest<'a>(
        &mut self,
        query: &str,
        names: impl IntoIterator<Item = &'a str>,
        max_results: usize,
        min_confidence: u8,
    ) -> Vec<MatchResult> {
        let query_normalized = Self::normalize_name(query);
        if query_normalized.is_empty() {
            return Vec::new();
        }

        let pattern = Pattern::parse(&query_normalized, CaseMatching::Ignore, Normalization::Smart);
        let best_score = self.score(&pattern, &query_normalized).unwrap_or(0);

        let mut results: Vec<MatchResult> = names
            .into_iter()
            .filter_map(|name| {
                let (confidence, match_type) =
                    self.rate(&pattern, best_score, &query_normalized, name)?;
                (confidence >= min_confidence).then(|| MatchResult {
                    name: name.to_string(),
                    confidence,
                    match_type,
                })
            })
            .collect();

        results.sort_by(|a, b| {
            b.confidence
                .cmp(&a.confidence)
                .then_with(|| a.name.cmp(&b.name))
        });
        results.truncate(max_results);

        tracing::debug!(query = %query, matches = results.len(), "Name suggestions computed");
        results
    }

    fn rate(
        &mut self,
        pattern: &Pattern,
        best_score: u32,
        query: &str,
        name: &str,
    ) -> Option<(u8, MatchType)> {
        let name_normalized = Self::normalize_name(name);
        if name_normalized.is_empty() {
            return None;
        }

        if name_normalized == query {
            return Some((100, MatchType::Exact));
        }

        if let Some(score) = self.score(pattern, &name_normalized) {
            if best_score > 0 {
                // Shorter names that still contain the whole query rank higher
                let ratio = (score as f64 / best_score as f64).min(1.0);
                let coverage = query.chars().count() as f64 / name_normalized.chars().count() as f64;
                let confidence = 50.0 + 45.0 * ratio * coverage.min(1.0);
                return Some((confidence as u8, MatchType::Subsequence));
            }
        }

        let similarity = Self::similarity(query, &name_normalized);
        if similarity > 0 {
            Some((similarity, MatchType::Typo))
        } else {
            None
        }
    }

    fn score(&mut self, pattern: &Pattern, haystack: &str) -> Option<u32> {
        let mut buf = Vec::new();
        pattern.score(Utf32Str::new(haystack, &mut buf), &mut self.matcher)
    }

    /// Similarity from Levenshtein distance, scaled to 0-85.
    ///
    /// Returns 0 when more than half of the characters differ.
    fn similarity(query: &str, target: &str) -> u8 {
        let distance = Self::levenshtein_distance(query, target);
        let max_len = query.chars().count().max(target.chars().count());
        if max_len == 0 || distance as f64 / max_len as f64 > 0.5 {
            return 0;
        }

        let similarity = 1.0 - (distance as f64 / max_len as f64);
        (similarity * 85.0) as u8
    }

    /// Calculate Levenshtein distance between two strings.
    fn levenshtein_distance(s1: &str, s2: &str) -> usize {
        let s1_chars: Vec<char> = s1.chars().collect();
        let s2_chars: Vec<char> = s2.chars().collect();

        if s1_chars.is_empty() {
            return s2_chars.len();
        }
        if s2_chars.is_empty() {
            return s1_chars.len();
        }

        // Single rolling row
        let mut row: Vec<usize> = (0..=s2_chars.len()).collect();
        for (i, c1) in s1_chars.iter().enumerate() {
            let mut diagonal = row[0];
            row[0] = i + 1;
            for (j, c2) in s2_chars.iter().enumerate() {
                let cost = if c1 == c2 { 0 } else { 1 };
                let next = (row[j + 1] + 1).min(row[j] + 1).min(diagonal + cost);
                diagonal = row[j + 1];
                row[j + 1] = next;
            }
        }

        row[s2_chars.len()]
    }

    /// Normalize a name for matching.
    ///
    /// Converts to lowercase and collapses whitespace.
    pub fn normalize_name(name: &str) -> String {
        name.trim()
            .to_lowercase()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Default for NameMatcher {
    fn default() -> Self {
        Self::new()
    }
}
