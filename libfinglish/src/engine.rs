//! Finglish suggestion engine
//!
//! `Engine` runs the stage cascade over a single token and collects the
//! cleaned, deduplicated, capped candidate list. The lexicon is injected, so
//! the same engine drives the in-memory seed dictionary, an FST artifact set
//! or a test double.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use finglish_core::{Candidate, CandidateList, FstLexicon, LexiconClient, Stage};
use tracing::debug;

use crate::cleanup::cleanup;
use crate::colloquial::colloquial_form;
use crate::compound::match_compound;
use crate::config::FinglishConfig;
use crate::morphology::morphological_transliterate;
use crate::transliterate::{simple_transliterate, transliterate, transliterate_loanword};
use crate::typo::Normalized;
use crate::variants::variants_with_limit;
use crate::zwnj::convert_to_persian_numbers;

/// Suggestion engine over a lexicon `L`.
///
/// The lexicon sits behind an `Arc`, so cloning an engine is cheap and clones
/// share the dictionary. `Engine<L>` is `Send + Sync` whenever `L` is.
#[derive(Debug)]
pub struct Engine<L> {
    lexicon: Arc<L>,
    config: FinglishConfig,
}

impl<L> Clone for Engine<L> {
    fn clone(&self) -> Self {
        Self {
            lexicon: Arc::clone(&self.lexicon),
            config: self.config.clone(),
        }
    }
}

impl Engine<FstLexicon> {
    /// Load an engine from a directory of `build_lexicon` artifacts.
    ///
    /// Expected layout (data-dir):
    ///  - lexicon.fst + lexicon.bincode    (lexicon)
    ///  - bigrams.bincode                  (optional, next-word predictions)
    pub fn from_data_dir<P: AsRef<Path>>(data_dir: P, config: FinglishConfig) -> Result<Self> {
        let data_dir = data_dir.as_ref();
        let mut lexicon = FstLexicon::from_data_dir(data_dir)
            .with_context(|| format!("load lexicon artifacts from {}", data_dir.display()))?;
        lexicon.set_prefix_limit(config.base.prefix_match_limit);
        Ok(Self::with_config(lexicon, config))
    }
}

impl<L: LexiconClient> Engine<L> {
    /// Engine with the default configuration.
    pub fn new(lexicon: L) -> Self {
        Self::with_config(lexicon, FinglishConfig::default())
    }

    pub fn with_config(lexicon: L, config: FinglishConfig) -> Self {
        Self {
            lexicon: Arc::new(lexicon),
            config,
        }
    }

    pub fn lexicon(&self) -> &L {
        &self.lexicon
    }

    pub fn config(&self) -> &FinglishConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: FinglishConfig) {
        self.config = config;
    }

    /// Ranked Farsi suggestions for one Finglish token.
    ///
    /// Never more than `max_candidates`, never duplicates, empty for blank
    /// input.
    pub fn get_suggestions(&self, input: &str) -> Vec<String> {
        self.collect(input).into_texts()
    }

    /// Same as `get_suggestions`, keeping the stage that produced each entry.
    pub fn suggestions(&self, input: &str) -> Vec<Candidate> {
        self.collect(input).into_candidates()
    }

    /// Keyboard entry point: continuations of `previous` while nothing is
    /// typed, suggestions for `current` otherwise.
    pub fn suggest(&self, current: &str, previous: Option<&str>) -> Vec<String> {
        if current.trim().is_empty() {
            return previous
                .map(|word| self.next_word_predictions(word))
                .unwrap_or_default();
        }
        self.get_suggestions(current)
    }

    /// Words likely to follow `previous`, capped at `max_predictions`.
    pub fn next_word_predictions(&self, previous: &str) -> Vec<String> {
        let previous = previous.trim();
        if previous.is_empty() {
            return Vec::new();
        }
        let mut list = CandidateList::with_capacity(self.config.base.max_predictions);
        list.extend(self.lexicon.next_word_predictions(previous), Stage::Prediction);
        list.into_texts()
    }

    /// Persian digits when `persian_numerals` is on, `text` unchanged otherwise.
    pub fn format_digits(&self, text: &str) -> String {
        if self.config.base.is_persian_numerals() {
            convert_to_persian_numbers(text)
        } else {
            text.to_string()
        }
    }

    fn collect(&self, input: &str) -> CandidateList {
        let cfg = &self.config;
        let mut list = CandidateList::with_capacity(cfg.base.max_candidates);
        let normalized = Normalized::new(input, cfg.typo_correction);
        if normalized.is_empty() {
            return list;
        }
        if normalized.was_corrected() {
            debug!(from = %normalized.original, to = %normalized.corrected, "typo corrected");
        }
        let token = normalized.corrected.as_str();

        if cfg.colloquial_forms {
            if let Some(farsi) = colloquial_form(token) {
                offer(&mut list, farsi, Stage::Colloquial);
            }
        }

        for found in self.lexicon.find_matches(token) {
            offer(&mut list, &found, Stage::Lexicon);
        }
        if normalized.was_corrected() {
            for found in self.lexicon.find_matches(&normalized.original) {
                offer(&mut list, &found, Stage::LexiconOriginal);
            }
        }

        if let Some(compound) = match_compound(token) {
            offer(&mut list, &compound, Stage::Compound);
        }

        let morph = morphological_transliterate(token);
        offer(&mut list, &morph, Stage::Morphology);
        let positional = transliterate(token);
        if positional != morph {
            offer(&mut list, &positional, Stage::Positional);
        }

        for variant in variants_with_limit(token, cfg.variant_alternatives) {
            offer(&mut list, &variant, Stage::Variant);
        }

        offer(&mut list, &simple_transliterate(token), Stage::Simple);

        if cfg.loanword_endings {
            if let Some(loan) = transliterate_loanword(token) {
                offer(&mut list, &loan, Stage::Loanword);
            }
        }

        debug!(token, count = list.len(), "suggestions collected");
        list
    }
}

fn offer(list: &mut CandidateList, text: &str, stage: Stage) {
    if list.push(cleanup(text), stage) {
        debug!(stage = %stage, text, "candidate");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use finglish_core::Lexicon;

    fn engine() -> Engine<Lexicon> {
        let mut lx = Lexicon::new();
        lx.insert("salam", "سلام", 10);
        lx.insert("salamati", "سلامتی", 3);
        lx.add_bigram("سلام", "خوبی", 5);
        lx.add_bigram("سلام", "عزیزم", 2);
        Engine::new(lx)
    }

    #[test]
    fn lexicon_hit_comes_first() {
        let out = engine().get_suggestions("salam");
        assert_eq!(out[0], "سلام");
        assert_eq!(out[1], "سلامتی");
        assert!(out.len() <= 5);
    }

    #[test]
    fn blank_input_is_empty() {
        let e = engine();
        assert!(e.get_suggestions("").is_empty());
        assert!(e.get_suggestions(" \t ").is_empty());
    }

    #[test]
    fn colloquial_form_leads() {
        let out = engine().suggestions("mikham");
        assert_eq!(out[0].stage, Stage::Colloquial);
        assert_eq!(out[0].text, "می\u{200C}خوام");
    }

    #[test]
    fn typo_searches_both_spellings() {
        let mut lx = Lexicon::new();
        lx.insert("slm", "اسلم", 1);
        lx.insert("salam", "سلام", 1);
        let out = Engine::new(lx).suggestions("slm");
        assert_eq!(out[0].text, "سلام");
        assert_eq!(out[0].stage, Stage::Lexicon);
        assert_eq!(out[1].text, "اسلم");
        assert_eq!(out[1].stage, Stage::LexiconOriginal);
    }

    #[test]
    fn disabled_typo_correction_keeps_raw_token() {
        let mut cfg = FinglishConfig::default();
        cfg.typo_correction = false;
        let mut lx = Lexicon::new();
        lx.insert("salam", "سلام", 1);
        let out = Engine::with_config(lx, cfg).get_suggestions("slm");
        assert!(!out.contains(&"سلام".to_string()));
    }

    #[test]
    fn candidate_cap_follows_config() {
        let mut cfg = FinglishConfig::default();
        cfg.base.set_max_candidates(2);
        let out = Engine::with_config(Lexicon::new(), cfg).get_suggestions("zaban");
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn suggest_switches_on_current_word() {
        let e = engine();
        assert_eq!(e.suggest("", Some("سلام")), vec!["خوبی", "عزیزم"]);
        assert!(e.suggest(" ", None).is_empty());
        assert_eq!(e.suggest("salam", Some("سلام")), e.get_suggestions("salam"));
    }

    #[test]
    fn predictions_are_capped() {
        let mut lx = Lexicon::new();
        for (i, w) in ["a", "b", "c", "d", "e", "f", "g"].iter().enumerate() {
            lx.add_bigram("x", *w, 10 - i as u32);
        }
        let out = Engine::new(lx).next_word_predictions("x");
        assert_eq!(out, vec!["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn format_digits_respects_config() {
        let mut e = engine();
        assert_eq!(e.format_digits("ساعت 10"), "ساعت ۱۰");
        let mut cfg = e.config().clone();
        cfg.base.set_persian_numerals(false);
        e.set_config(cfg);
        assert_eq!(e.format_digits("ساعت 10"), "ساعت 10");
    }

    #[test]
    fn engine_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Engine<Lexicon>>();
        assert_send_sync::<Engine<FstLexicon>>();
    }
}
