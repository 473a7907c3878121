//! finglish-core
//!
//! Language-neutral pieces shared by the Finglish suggestion engine: the
//! lexicon contract with its in-memory and FST-backed implementations, word
//! bigram predictions, the bounded candidate list and configuration.
//!
//! The lexicon is built with FST for key indexing and bincode for payloads,
//! the same artifact layout the `build_lexicon` tool writes.
//!
//! Public API:
//! - `LexiconClient` - read-only lookup contract consumed by the engine
//! - `Lexicon` - in-memory Latin key → Farsi word dictionary
//! - `FstLexicon` - FST + bincode dictionary loaded from artifacts
//! - `WordBigram` - next-word continuations
//! - `Candidate` / `CandidateList` - ordered, deduplicated, capped results
//! - `Config` - configuration and feature flags
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub mod lexicon;
pub use lexicon::{Lexicon, LexiconClient, PhraseEntry, DEFAULT_PREFIX_LIMIT};

pub mod fst_lexicon;
pub use fst_lexicon::FstLexicon;

pub mod word_bigram;
pub use word_bigram::{BigramEntry, WordBigram};

pub mod candidate;
pub use candidate::{Candidate, CandidateList, Stage, DEFAULT_MAX_CANDIDATES};

/// Generic configuration for the suggestion engine.
///
/// Only language-agnostic fields live here. Finglish specific switches
/// (typo correction, colloquial forms, variant fan-out) belong in
/// `FinglishConfig` in the `libfinglish` crate, which flattens this struct.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Maximum number of suggestions returned for one input.
    pub max_candidates: usize,

    /// Maximum number of next-word predictions returned after a commit.
    pub max_predictions: usize,

    /// Maximum number of prefix matches a lexicon contributes per query.
    /// Exact matches are never capped by this value.
    pub prefix_match_limit: usize,

    /// Render ASCII digits as Persian numerals (۰-۹) in committed text.
    pub persian_numerals: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // The suggestion bar shows five slots
            max_candidates: DEFAULT_MAX_CANDIDATES,
            max_predictions: 5,
            prefix_match_limit: DEFAULT_PREFIX_LIMIT,
            persian_numerals: true,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("parse config {}", path.display()))?;
        Ok(config)
    }

    /// Save configuration to a TOML file.
    pub fn save_toml<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("write config {}", path.display()))?;
        Ok(())
    }

    /// Load configuration from TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Serialize configuration to TOML string.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    // ========== Persian Numerals ==========

    /// Set Persian numeral rendering explicitly.
    pub fn set_persian_numerals(&mut self, enabled: bool) {
        self.persian_numerals = enabled;
    }

    /// Check if Persian numeral rendering is enabled.
    pub fn is_persian_numerals(&self) -> bool {
        self.persian_numerals
    }

    // ========== Limits ==========

    /// Set the suggestion cap. Values below 1 are raised to 1.
    pub fn set_max_candidates(&mut self, max: usize) {
        self.max_candidates = max.max(1);
    }

    /// Set the prediction cap. Values below 1 are raised to 1.
    pub fn set_max_predictions(&mut self, max: usize) {
        self.max_predictions = max.max(1);
    }
}

/// Utility helpers.
pub mod utils {
    /// Normalize input strings (NFC) and trim whitespace.
    pub fn normalize(s: &str) -> String {
        use unicode_normalization::UnicodeNormalization;
        s.nfc().collect::<String>().trim().to_string()
    }

    /// Normalize a lexicon key: NFC, trimmed, lowercased.
    pub fn normalize_key(s: &str) -> String {
        normalize(s).to_lowercase()
    }
}
