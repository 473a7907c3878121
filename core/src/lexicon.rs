//! Lexicon abstraction for finglish-core
//!
//! A lexicon maps a lowercase Latin-script key (eg. `salam`) to the Farsi
//! words it can be written as. The suggestion pipeline only ever reads it,
//! through the `LexiconClient` trait, so the storage behind it is swappable:
//! this module provides the in-memory `Lexicon`; `fst_lexicon` provides the
//! compact artifact-backed one.
//!
//! Public API:
//! - `LexiconClient` - `find_matches` / `next_word_predictions` contract
//! - `PhraseEntry` - Farsi text plus frequency
//! - `Lexicon` - insert/lookup API, TSV / JSON / bincode loaders
//!
//! Match order returned by `find_matches`: entries stored under the exact key
//! first (highest frequency first), then entries whose key merely starts with
//! the token (highest frequency first, key order breaking ties), capped by the
//! lexicon's prefix limit.

use ahash::AHashSet;
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;
use std::sync::Arc;

use crate::utils::normalize_key;
use crate::word_bigram::WordBigram;

/// Default number of prefix matches a lexicon contributes per query.
pub const DEFAULT_PREFIX_LIMIT: usize = 8;

/// Read-only lookup contract consumed by the suggestion engine.
///
/// Implementations must be safe to call from several threads at once when
/// shared behind an `Arc`; neither method mutates the lexicon.
pub trait LexiconClient {
    /// Farsi words registered for `token`: exact key first, then prefix matches.
    fn find_matches(&self, token: &str) -> Vec<String>;

    /// Farsi words likely to follow `after_word`, most frequent first.
    fn next_word_predictions(&self, after_word: &str) -> Vec<String>;
}

impl<T: LexiconClient + ?Sized> LexiconClient for &T {
    fn find_matches(&self, token: &str) -> Vec<String> {
        (**self).find_matches(token)
    }

    fn next_word_predictions(&self, after_word: &str) -> Vec<String> {
        (**self).next_word_predictions(after_word)
    }
}

impl<T: LexiconClient + ?Sized> LexiconClient for Box<T> {
    fn find_matches(&self, token: &str) -> Vec<String> {
        (**self).find_matches(token)
    }

    fn next_word_predictions(&self, after_word: &str) -> Vec<String> {
        (**self).next_word_predictions(after_word)
    }
}

impl<T: LexiconClient + ?Sized> LexiconClient for Arc<T> {
    fn find_matches(&self, token: &str) -> Vec<String> {
        (**self).find_matches(token)
    }

    fn next_word_predictions(&self, after_word: &str) -> Vec<String> {
        (**self).next_word_predictions(after_word)
    }
}

/// A single lexicon entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhraseEntry {
    pub text: String,
    /// Simple frequency / weight. Higher means more frequent.
    pub freq: u64,
}

impl PhraseEntry {
    pub fn new<T: Into<String>>(text: T, freq: u64) -> Self {
        Self {
            text: text.into(),
            freq,
        }
    }
}

/// Merge exact and prefix entries into the ordered, deduplicated match list.
///
/// `prefixed` must be yielded in key order; the sort below is stable so key
/// order breaks frequency ties.
pub(crate) fn rank_matches<'a, I>(exact: &'a [PhraseEntry], prefixed: I, limit: usize) -> Vec<String>
where
    I: IntoIterator<Item = &'a PhraseEntry>,
{
    let mut exact: Vec<&PhraseEntry> = exact.iter().collect();
    exact.sort_by(|a, b| b.freq.cmp(&a.freq));

    let mut prefixed: Vec<&PhraseEntry> = prefixed.into_iter().collect();
    prefixed.sort_by(|a, b| b.freq.cmp(&a.freq));

    let mut seen = AHashSet::new();
    let mut out = Vec::new();
    for e in exact {
        if seen.insert(e.text.as_str()) {
            out.push(e.text.clone());
        }
    }
    let mut taken = 0;
    for e in prefixed {
        if taken >= limit {
            break;
        }
        if seen.insert(e.text.as_str()) {
            out.push(e.text.clone());
            taken += 1;
        }
    }
    out
}

#[derive(Deserialize)]
struct JsonEntry {
    latin: String,
    farsi: String,
    #[serde(default = "default_freq")]
    freq: u64,
}

fn default_freq() -> u64 {
    1
}

/// In-memory lexicon mapping a Latin key -> Vec<PhraseEntry>, plus the bigram
/// table used for next-word predictions.
///
/// Keys are kept in a `BTreeMap` so prefix search is a range scan and
/// iteration order matches what an FST builder expects.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lexicon {
    map: BTreeMap<String, Vec<PhraseEntry>>,
    bigrams: WordBigram,
    prefix_limit: usize,
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::new()
    }
}

impl Lexicon {
    /// Create an empty lexicon.
    pub fn new() -> Self {
        Self {
            map: BTreeMap::new(),
            bigrams: WordBigram::new(),
            prefix_limit: DEFAULT_PREFIX_LIMIT,
        }
    }

    /// Set how many prefix matches `find_matches` contributes.
    pub fn set_prefix_limit(&mut self, limit: usize) {
        self.prefix_limit = limit;
    }

    pub fn prefix_limit(&self) -> usize {
        self.prefix_limit
    }

    /// Insert a phrase for a given key.
    ///
    /// The key is normalized (trimmed, lowercased). If the same phrase already
    /// exists for the key, its frequency is incremented by `freq`, otherwise
    /// it is pushed as a new entry.
    pub fn insert<K: AsRef<str>, T: Into<String>>(&mut self, key: K, phrase: T, freq: u64) {
        let key = normalize_key(key.as_ref());
        let phrase = phrase.into();
        if key.is_empty() || phrase.is_empty() {
            return;
        }
        let bucket = self.map.entry(key).or_default();
        if let Some(e) = bucket.iter_mut().find(|e| e.text == phrase) {
            e.freq = e.freq.saturating_add(freq);
        } else {
            bucket.push(PhraseEntry::new(phrase, freq));
        }
    }

    /// Lookup phrases stored under exactly `key`, in insertion order.
    pub fn lookup(&self, key: &str) -> Vec<String> {
        self.map
            .get(key)
            .map(|v| v.iter().map(|e| e.text.clone()).collect())
            .unwrap_or_default()
    }

    /// Lookup full phrase entries (with frequency metadata).
    pub fn lookup_entries(&self, key: &str) -> Vec<PhraseEntry> {
        self.map.get(key).cloned().unwrap_or_default()
    }

    /// Record that `next` followed `word` `count` times.
    pub fn add_bigram<A: Into<String>, B: Into<String>>(&mut self, word: A, next: B, count: u32) {
        self.bigrams.add_bigram(word.into(), next.into(), count);
    }

    pub fn bigrams(&self) -> &WordBigram {
        &self.bigrams
    }

    /// Replace the bigram table, eg. with one loaded from `bigrams.bincode`.
    pub fn set_bigrams(&mut self, bigrams: WordBigram) {
        self.bigrams = bigrams;
    }

    /// Iterate `(key, entries)` in byte-lexicographic key order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &[PhraseEntry])> {
        self.map.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Parse a tab separated word list: `latin<TAB>farsi[<TAB>freq]`.
    ///
    /// Blank lines and lines starting with `#` are skipped. A missing
    /// frequency counts as 1.
    pub fn from_tsv_str(content: &str) -> Result<Self> {
        let mut lx = Self::new();
        for (lineno, line) in content.lines().enumerate() {
            let line = line.trim_end();
            if line.trim().is_empty() || line.trim_start().starts_with('#') {
                continue;
            }
            let parts: Vec<&str> = line.split('\t').collect();
            if parts.len() < 2 {
                bail!("line {}: expected `latin<TAB>farsi[<TAB>freq]`", lineno + 1);
            }
            let freq = match parts.get(2) {
                Some(f) => f
                    .trim()
                    .parse::<u64>()
                    .with_context(|| format!("line {}: bad frequency {:?}", lineno + 1, f))?,
                None => 1,
            };
            lx.insert(parts[0], parts[1].trim(), freq);
        }
        Ok(lx)
    }

    /// Parse a JSON array of `{"latin": .., "farsi": .., "freq": ..}` objects.
    pub fn from_json_str(content: &str) -> Result<Self> {
        let rows: Vec<JsonEntry> =
            serde_json::from_str(content).context("parse JSON word list")?;
        let mut lx = Self::new();
        for row in rows {
            lx.insert(&row.latin, row.farsi, row.freq);
        }
        Ok(lx)
    }

    /// Load a word list from disk, choosing JSON or TSV by file extension.
    pub fn load_words_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("read word list {}", path.display()))?;
        let is_json = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("json"))
            .unwrap_or(false);
        let lx = if is_json {
            Self::from_json_str(&content)
        } else {
            Self::from_tsv_str(&content)
        }
        .with_context(|| format!("load word list {}", path.display()))?;
        tracing::info!(path = %path.display(), keys = lx.len(), "loaded word list");
        Ok(lx)
    }

    /// Save the lexicon to a file using bincode serialization.
    pub fn save_bincode<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let file =
            File::create(path).with_context(|| format!("create {}", path.display()))?;
        bincode::serialize_into(BufWriter::new(file), self)
            .with_context(|| format!("serialize lexicon to {}", path.display()))?;
        Ok(())
    }

    /// Load the lexicon from a bincode file produced by `save_bincode`.
    pub fn load_bincode<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).with_context(|| format!("open {}", path.display()))?;
        let lx: Self = bincode::deserialize_from(BufReader::new(file))
            .with_context(|| format!("deserialize lexicon from {}", path.display()))?;
        Ok(lx)
    }

    /// Return the number of keys in the lexicon.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Return true if the lexicon is empty.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl LexiconClient for Lexicon {
    fn find_matches(&self, token: &str) -> Vec<String> {
        if token.is_empty() {
            return Vec::new();
        }
        let exact = self.map.get(token).map(Vec::as_slice).unwrap_or(&[]);
        let prefixed = self
            .map
            .range::<str, _>((std::ops::Bound::Excluded(token), std::ops::Bound::Unbounded))
            .take_while(|(k, _)| k.starts_with(token))
            .flat_map(|(_, v)| v.iter());
        rank_matches(exact, prefixed, self.prefix_limit)
    }

    fn next_word_predictions(&self, after_word: &str) -> Vec<String> {
        self.bigrams.predictions(after_word.trim())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_lookup() {
        let mut lx = Lexicon::new();
        lx.insert("salam", "سلام", 10);
        lx.insert("salam", "صلام", 1);
        let res = lx.lookup("salam");
        assert_eq!(res.len(), 2);
        assert!(res.contains(&"سلام".to_string()));
    }

    #[test]
    fn duplicate_insert_increments_freq() {
        let mut lx = Lexicon::new();
        lx.insert("k", "x", 1);
        lx.insert("K ", "x", 3);
        let entries = lx.lookup_entries("k");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].freq, 4);
    }

    #[test]
    fn exact_matches_precede_prefix_matches() {
        let mut lx = Lexicon::new();
        lx.insert("khub", "خوبه", 100);
        lx.insert("khu", "خو", 1);
        lx.insert("khune", "خونه", 50);
        assert_eq!(lx.find_matches("khu"), vec!["خو", "خوبه", "خونه"]);
    }

    #[test]
    fn prefix_matches_respect_limit_and_dedupe() {
        let mut lx = Lexicon::new();
        lx.set_prefix_limit(2);
        lx.insert("ab", "آب", 5);
        lx.insert("abad", "آباد", 3);
        lx.insert("abi", "آبی", 9);
        lx.insert("abru", "آب", 100);
        // "آب" already came from the exact key, so the duplicate is skipped
        assert_eq!(lx.find_matches("ab"), vec!["آب", "آبی", "آباد"]);
    }

    #[test]
    fn empty_token_matches_nothing() {
        let mut lx = Lexicon::new();
        lx.insert("a", "ا", 1);
        assert!(lx.find_matches("").is_empty());
    }

    #[test]
    fn tsv_parsing() {
        let tsv = "# comment\nsalam\tسلام\t20\n\nmerci\tمرسی\n";
        let lx = Lexicon::from_tsv_str(tsv).unwrap();
        assert_eq!(lx.len(), 2);
        assert_eq!(lx.lookup_entries("merci")[0].freq, 1);
        assert_eq!(lx.lookup_entries("salam")[0].freq, 20);
    }

    #[test]
    fn tsv_rejects_malformed_lines() {
        assert!(Lexicon::from_tsv_str("salam\n").is_err());
        assert!(Lexicon::from_tsv_str("salam\tسلام\tmany\n").is_err());
    }

    #[test]
    fn json_parsing() {
        let json = r#"[{"latin": "Ketab", "farsi": "کتاب", "freq": 4}, {"latin": "dar", "farsi": "در"}]"#;
        let lx = Lexicon::from_json_str(json).unwrap();
        assert_eq!(lx.lookup("ketab"), vec!["کتاب".to_string()]);
        assert_eq!(lx.lookup_entries("dar")[0].freq, 1);
    }

    #[test]
    fn predictions_come_from_bigrams() {
        let mut lx = Lexicon::new();
        lx.add_bigram("خیلی", "خوب", 3);
        lx.add_bigram("خیلی", "ممنون", 9);
        assert_eq!(lx.next_word_predictions("خیلی"), vec!["ممنون", "خوب"]);
        assert!(lx.next_word_predictions("نه").is_empty());
    }

    #[test]
    fn save_and_load_bincode_roundtrip() {
        let tmp = std::env::temp_dir().join("finglish_lexicon_test.bin");
        let mut lx = Lexicon::new();
        lx.insert("a", "آ", 5);
        lx.insert("b", "ب", 2);
        lx.add_bigram("آ", "ب", 1);
        lx.save_bincode(&tmp).unwrap();
        let loaded = Lexicon::load_bincode(&tmp).unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded.lookup("a"), vec!["آ".to_string()]);
        assert_eq!(loaded.next_word_predictions("آ"), vec!["ب".to_string()]);
        let _ = std::fs::remove_file(tmp);
    }

    #[test]
    fn trait_objects_and_arcs_forward() {
        let mut lx = Lexicon::new();
        lx.insert("dar", "در", 1);
        let shared = Arc::new(lx);
        let boxed: Box<dyn LexiconClient> = Box::new(Arc::clone(&shared));
        assert_eq!(boxed.find_matches("dar"), vec!["در".to_string()]);
        assert_eq!((&*shared).find_matches("dar"), vec!["در".to_string()]);
    }
}
