//! Word-structure analysis.
//!
//! Splits a Finglish word into prefix, stem and suffixes using the ordered
//! rule tables, resolves the stem through the verb-stem tables, and
//! reassembles the Farsi word with half-spaces where Persian orthography
//! expects them.
//!
//! The verb/noun and past/present decisions are substring heuristics: a noun
//! containing "ad" is treated as past tense, and any word containing a known
//! stem is treated as a verb.

use tracing::debug;

use crate::tables::{
    IMPERATIVE_MARKERS, NOUN_SUFFIXES, PAST_MARKERS, PAST_STEMS, PAST_SUFFIXES, PERSON_ENDINGS,
    PRESENT_STEMS, PRESENT_SUFFIXES, VERB_PREFIXES, VERB_STEM_KEYS,
};
use crate::transliterate::transliterate;
use crate::zwnj::ZWNJ;

/// Prefixes followed by a half-space.
const JOINED_PREFIXES: [&str; 2] = ["می", "نمی"];
/// Suffixes starting with this are preceded by a half-space.
const PLURAL_MARKER: &str = "ها";
/// Noun suffixes are stripped only while the word is longer than this.
const MIN_NOUN_STEM: usize = 2;

/// What the analyzer decided the word is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordForm {
    VerbWithPrefix,
    Imperative,
    PastTense,
    NounOrAdjective,
    BareStem,
}

/// Result of `analyze`. Prefix and suffixes are already in Farsi.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis {
    pub prefix: Option<&'static str>,
    /// Latin stem left after stripping.
    pub stem: String,
    /// Farsi rendering of `stem`.
    pub stem_farsi: String,
    /// Innermost first.
    pub suffixes: Vec<&'static str>,
    pub form: WordForm,
}

impl Analysis {
    /// Reassemble prefix, stem and suffixes.
    pub fn render(&self) -> String {
        let mut out = String::new();
        if let Some(prefix) = self.prefix {
            out.push_str(prefix);
            if JOINED_PREFIXES.contains(&prefix) {
                out.push(ZWNJ);
            }
        }
        out.push_str(&self.stem_farsi);
        for suffix in &self.suffixes {
            if suffix.starts_with(PLURAL_MARKER) {
                out.push(ZWNJ);
            }
            out.push_str(suffix);
        }
        out
    }
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

fn imperative_marker(word: &str) -> Option<(&'static str, &'static str)> {
    IMPERATIVE_MARKERS.iter().copied().find(|&(marker, _)| {
        word.strip_prefix(marker).is_some_and(|rest| {
            char_len(rest) >= 2
                && PRESENT_STEMS
                    .keys()
                    .any(|stem| stem.len() >= 2 && rest.starts_with(stem))
        })
    })
}

fn verb_prefix(word: &str) -> Option<(&'static str, &'static str)> {
    VERB_PREFIXES
        .iter()
        .copied()
        .find(|&(prefix, _)| word.starts_with(prefix) && char_len(word) > prefix.len() + 1)
}

fn is_past_tense(word: &str) -> bool {
    PAST_STEMS.keys().any(|stem| word.starts_with(stem))
        || PAST_MARKERS.iter().any(|marker| word.contains(marker))
}

fn looks_like_verb(word: &str) -> bool {
    PERSON_ENDINGS.iter().any(|ending| word.ends_with(ending))
        || VERB_STEM_KEYS.iter().any(|stem| word.contains(stem))
}

/// First entry of `table` that `word` ends with, leaving a non-empty rest.
fn strip_suffix<'w>(
    word: &'w str,
    table: &[(&'static str, &'static str)],
) -> Option<(&'w str, &'static str)> {
    table.iter().find_map(|&(latin, farsi)| {
        word.strip_suffix(latin)
            .filter(|rest| !rest.is_empty())
            .map(|rest| (rest, farsi))
    })
}

fn resolve_stem(stem: &str) -> String {
    PAST_STEMS
        .get(stem)
        .or_else(|| PRESENT_STEMS.get(stem))
        .map(|farsi| farsi.to_string())
        .unwrap_or_else(|| transliterate(stem))
}

/// Analyze a lowercase Finglish word.
pub fn analyze(word: &str) -> Analysis {
    let mut rest = word;
    let mut prefix = None;
    let mut form = WordForm::BareStem;

    if let Some((marker, farsi)) = imperative_marker(rest) {
        rest = &rest[marker.len()..];
        prefix = Some(farsi);
        form = WordForm::Imperative;
    } else if let Some((latin, farsi)) = verb_prefix(rest) {
        rest = &rest[latin.len()..];
        prefix = Some(farsi);
        form = WordForm::VerbWithPrefix;
    }

    let past = prefix.is_none() && is_past_tense(rest);
    if past {
        form = WordForm::PastTense;
    }

    let mut suffixes = Vec::new();
    if prefix.is_some() || past || looks_like_verb(rest) {
        let stripped = strip_suffix(rest, PRESENT_SUFFIXES)
            .or_else(|| past.then(|| strip_suffix(rest, PAST_SUFFIXES)).flatten());
        if let Some((stem, farsi)) = stripped {
            rest = stem;
            suffixes.push(farsi);
        }
    } else {
        while char_len(rest) > MIN_NOUN_STEM {
            let Some((stem, farsi)) = strip_suffix(rest, NOUN_SUFFIXES) else {
                break;
            };
            rest = stem;
            suffixes.push(farsi);
        }
        if !suffixes.is_empty() {
            form = WordForm::NounOrAdjective;
        }
        suffixes.reverse();
    }

    debug!(word, stem = rest, ?form, "morphology");
    Analysis {
        prefix,
        stem: rest.to_string(),
        stem_farsi: resolve_stem(rest),
        suffixes,
        form,
    }
}

/// Morphology-aware rendering of `word`. Output is not yet cleaned up.
pub fn morphological_transliterate(word: &str) -> String {
    analyze(word).render()
}
