//! Finglish-specific configuration that extends the base `Config` from core.
//!
//! This configuration includes:
//! - All generic options from `finglish_core::Config` (flattened via serde)
//! - Switches for the optional pipeline stages
//! - The variant fan-out per ambiguous letter
//!
//! # Example
//!
//! ```rust
//! use libfinglish::FinglishConfig;
//!
//! let config = FinglishConfig::from_toml_str("typo_correction = false\nmax_candidates = 3\n").unwrap();
//! assert!(!config.typo_correction);
//! assert_eq!(config.base().max_candidates, 3);
//! ```

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::variants::DEFAULT_ALTERNATIVES;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct FinglishConfig {
    /// Base configuration fields (limits, numerals)
    #[serde(flatten)]
    pub base: finglish_core::Config,

    /// Replace known misspellings before the other stages run
    pub typo_correction: bool,

    /// Offer the colloquial table entry first when the token is listed
    pub colloquial_forms: bool,

    /// Offer a rendering with a Farsi loanword ending as the last candidate
    pub loanword_endings: bool,

    /// Alternatives tried per ambiguous letter when generating variants
    pub variant_alternatives: usize,
}

impl Default for FinglishConfig {
    fn default() -> Self {
        Self {
            base: finglish_core::Config::default(),
            typo_correction: true,
            colloquial_forms: true,
            loanword_endings: true,
            variant_alternatives: DEFAULT_ALTERNATIVES,
        }
    }
}

impl FinglishConfig {
    /// Convert this config into the base config
    pub fn into_base(self) -> finglish_core::Config {
        self.base
    }

    /// Get a reference to the base config
    pub fn base(&self) -> &finglish_core::Config {
        &self.base
    }

    /// Get a mutable reference to the base config
    pub fn base_mut(&mut self) -> &mut finglish_core::Config {
        &mut self.base
    }

    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Load from a TOML file. Missing keys take their defaults.
    pub fn load_toml<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        Self::from_toml_str(&content).with_context(|| format!("parse config {}", path.display()))
    }

    pub fn save_toml<P: AsRef<Path>>(&self, path: P) -> anyhow::Result<()> {
        let path = path.as_ref();
        std::fs::write(path, self.to_toml_string()?)
            .with_context(|| format!("write config {}", path.display()))
    }
}

impl From<finglish_core::Config> for FinglishConfig {
    fn from(base: finglish_core::Config) -> Self {
        Self {
            base,
            ..Self::default()
        }
    }
}
