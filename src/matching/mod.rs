//! Fuzzy matching utilities for contact lookups.
//!
//! This module provides exact, subsequence and typo-tolerant matching of
//! contact names, used for "did you mean" suggestions and name search.

pub mod name_matcher;

pub use name_matcher::{MatchResult, MatchType, NameMatcher};
