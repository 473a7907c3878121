//! Input normalization and typo correction.
//!
//! Every stage downstream sees the corrected token. The original is kept so
//! the lexicon can be asked about both spellings.

use finglish_core::utils::normalize;

use crate::tables::TYPO_CORRECTIONS;

/// A normalized input token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized {
    /// Trimmed, lowercased input.
    pub original: String,
    /// Canonical spelling from the typo table, or `original` when none exists.
    pub corrected: String,
}

impl Normalized {
    /// Normalize `raw`, consulting the typo table when `correct` is set.
    pub fn new(raw: &str, correct: bool) -> Self {
        let original = normalize(raw).to_lowercase();
        let corrected = if correct {
            lookup(&original).map(str::to_string).unwrap_or_else(|| original.clone())
        } else {
            original.clone()
        };
        Self {
            original,
            corrected,
        }
    }

    /// True when the typo table replaced the input.
    pub fn was_corrected(&self) -> bool {
        self.original != self.corrected
    }

    pub fn is_empty(&self) -> bool {
        self.original.is_empty()
    }
}

/// Canonical form for an exact misspelling, if the table has one.
pub fn lookup(token: &str) -> Option<&'static str> {
    TYPO_CORRECTIONS.get(token).copied()
}

/// Trim, lowercase and correct `raw`.
///
/// ```
/// use libfinglish::correct;
/// assert_eq!(correct("  SLM "), "salam");
/// assert_eq!(correct("ketab"), "ketab");
/// ```
pub fn correct(raw: &str) -> String {
    Normalized::new(raw, true).corrected
}
