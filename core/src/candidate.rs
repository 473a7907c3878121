//! Candidate types for suggestion output.
//!
//! This module provides:
//! - `Stage`: which part of the pipeline produced a candidate
//! - `Candidate`: a suggestion text tagged with its stage
//! - `CandidateList`: ordered, deduplicated, capped collection

use ahash::AHashSet;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of suggestion slots shown by default.
pub const DEFAULT_MAX_CANDIDATES: usize = 5;

/// Pipeline stage that produced a candidate, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stage {
    Colloquial,
    Lexicon,
    /// Lexicon hit for the uncorrected input.
    LexiconOriginal,
    Compound,
    Morphology,
    Positional,
    Variant,
    Simple,
    Loanword,
    Prediction,
}

impl Stage {
    pub fn label(&self) -> &'static str {
        match self {
            Stage::Colloquial => "colloquial",
            Stage::Lexicon => "lexicon",
            Stage::LexiconOriginal => "lexicon-original",
            Stage::Compound => "compound",
            Stage::Morphology => "morphology",
            Stage::Positional => "positional",
            Stage::Variant => "variant",
            Stage::Simple => "simple",
            Stage::Loanword => "loanword",
            Stage::Prediction => "prediction",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single suggestion with the stage that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub text: String,
    pub stage: Stage,
}

impl Candidate {
    pub fn new<T: Into<String>>(text: T, stage: Stage) -> Self {
        Candidate {
            text: text.into(),
            stage,
        }
    }
}

/// Ordered candidate collection.
///
/// Keeps first-insertion order, rejects empty strings and values already
/// present, and silently ignores pushes once `capacity` is reached.
#[derive(Debug, Clone)]
pub struct CandidateList {
    candidates: Vec<Candidate>,
    seen: AHashSet<String>,
    capacity: usize,
}

impl CandidateList {
    /// Create an empty list holding at most `DEFAULT_MAX_CANDIDATES`.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_MAX_CANDIDATES)
    }

    /// Create an empty list holding at most `capacity` candidates.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            candidates: Vec::with_capacity(capacity),
            seen: AHashSet::with_capacity(capacity),
            capacity,
        }
    }

    /// Add a candidate. Returns true if it was accepted.
    pub fn push<T: Into<String>>(&mut self, text: T, stage: Stage) -> bool {
        if self.is_full() {
            return false;
        }
        let text = text.into();
        if text.is_empty() || self.seen.contains(&text) {
            return false;
        }
        self.seen.insert(text.clone());
        self.candidates.push(Candidate::new(text, stage));
        true
    }

    /// Add every candidate from `texts` in order, stopping once full.
    pub fn extend<I, T>(&mut self, texts: I, stage: Stage)
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        for t in texts {
            if self.is_full() {
                break;
            }
            self.push(t, stage);
        }
    }

    pub fn contains(&self, text: &str) -> bool {
        self.seen.contains(text)
    }

    pub fn is_full(&self) -> bool {
        self.candidates.len() >= self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Get all candidates.
    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    /// Get the total number of candidates.
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    /// Check if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn into_candidates(self) -> Vec<Candidate> {
        self.candidates
    }

    /// Consume the list, keeping only the texts.
    pub fn into_texts(self) -> Vec<String> {
        self.candidates.into_iter().map(|c| c.text).collect()
    }
}

impl Default for CandidateList {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_insertion_order_and_dedupes() {
        let mut list = CandidateList::new();
        assert!(list.push("سلام", Stage::Lexicon));
        assert!(list.push("صلام", Stage::Variant));
        assert!(!list.push("سلام", Stage::Simple));
        assert_eq!(list.into_texts(), vec!["سلام", "صلام"]);
    }

    #[test]
    fn rejects_empty_strings() {
        let mut list = CandidateList::new();
        assert!(!list.push("", Stage::Simple));
        assert!(list.is_empty());
    }

    #[test]
    fn stops_at_capacity() {
        let mut list = CandidateList::with_capacity(2);
        list.extend(["a", "b", "c"], Stage::Variant);
        assert!(list.is_full());
        assert!(!list.push("d", Stage::Simple));
        assert_eq!(list.len(), 2);
        assert!(!list.contains("c"));
    }

    #[test]
    fn stage_is_preserved() {
        let mut list = CandidateList::new();
        list.push("چطوری", Stage::Compound);
        assert_eq!(list.candidates()[0].stage, Stage::Compound);
        assert_eq!(Stage::Compound.to_string(), "compound");
    }
}
