//! FST-backed lexicon.
//!
//! Artifact layout (written by `build_lexicon` or `write_artifacts`):
//! - `lexicon.fst`: FST map, Latin key -> payload index
//! - `lexicon.bincode`: `Vec<Vec<PhraseEntry>>`, indexed by the FST value
//! - `bigrams.bincode`: optional `WordBigram` table
//!
//! Prefix search walks the FST with a `starts_with` automaton, so the match
//! order is identical to the in-memory `Lexicon` built from the same words.

use anyhow::{Context, Result};
use fst::automaton::{Automaton, Str};
use fst::{IntoStreamer, Map, MapBuilder, Streamer};
use std::fs;
use std::path::Path;
use tracing::{info, warn};

use crate::lexicon::{rank_matches, Lexicon, LexiconClient, PhraseEntry, DEFAULT_PREFIX_LIMIT};
use crate::word_bigram::WordBigram;

pub const FST_FILE: &str = "lexicon.fst";
pub const PAYLOAD_FILE: &str = "lexicon.bincode";
pub const BIGRAM_FILE: &str = "bigrams.bincode";

pub struct FstLexicon {
    map: Map<Vec<u8>>,
    payloads: Vec<Vec<PhraseEntry>>,
    bigrams: WordBigram,
    prefix_limit: usize,
}

impl std::fmt::Debug for FstLexicon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FstLexicon")
            .field("keys", &self.map.len())
            .field("bigrams", &self.bigrams.len())
            .field("prefix_limit", &self.prefix_limit)
            .finish()
    }
}

impl FstLexicon {
    /// Build an in-memory FST from an existing lexicon.
    pub fn build(lexicon: &Lexicon) -> Result<Self> {
        let mut builder = MapBuilder::memory();
        let mut payloads = Vec::with_capacity(lexicon.len());
        // `entries` yields keys in sorted order, which the builder requires
        for (i, (key, entries)) in lexicon.entries().enumerate() {
            builder
                .insert(key, i as u64)
                .with_context(|| format!("insert key {key:?}"))?;
            payloads.push(entries.to_vec());
        }
        let map = Map::new(builder.into_inner()?)?;
        Ok(Self {
            map,
            payloads,
            bigrams: lexicon.bigrams().clone(),
            prefix_limit: lexicon.prefix_limit(),
        })
    }

    /// Load lexicon from FST + bincode artifacts.
    ///
    /// - fst_path: lexicon.fst file mapping keys to indices
    /// - bincode_path: lexicon.bincode file containing `Vec<Vec<PhraseEntry>>`
    pub fn load_from_fst_bincode<P: AsRef<Path>>(fst_path: P, bincode_path: P) -> Result<Self> {
        let fst_path = fst_path.as_ref();
        let bincode_path = bincode_path.as_ref();

        let bytes =
            fs::read(fst_path).with_context(|| format!("open fst {}", fst_path.display()))?;
        let map = Map::new(bytes).with_context(|| format!("fst map {}", fst_path.display()))?;

        let bytes = fs::read(bincode_path)
            .with_context(|| format!("open bincode {}", bincode_path.display()))?;
        let payloads: Vec<Vec<PhraseEntry>> = bincode::deserialize(&bytes)
            .with_context(|| format!("deserialize bincode {}", bincode_path.display()))?;

        if payloads.len() != map.len() {
            anyhow::bail!(
                "{} holds {} keys but {} has {} payloads",
                fst_path.display(),
                map.len(),
                bincode_path.display(),
                payloads.len()
            );
        }

        Ok(Self {
            map,
            payloads,
            bigrams: WordBigram::new(),
            prefix_limit: DEFAULT_PREFIX_LIMIT,
        })
    }

    /// Load `lexicon.fst`, `lexicon.bincode` and, when present, `bigrams.bincode`.
    pub fn from_data_dir<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref();
        let mut lx = Self::load_from_fst_bincode(dir.join(FST_FILE), dir.join(PAYLOAD_FILE))?;
        let bigram_path = dir.join(BIGRAM_FILE);
        if bigram_path.exists() {
            lx.bigrams = WordBigram::load(&bigram_path)?;
        } else {
            warn!(path = %bigram_path.display(), "no bigram table, predictions disabled");
        }
        info!(dir = %dir.display(), keys = lx.len(), bigrams = lx.bigrams.len(), "loaded lexicon artifacts");
        Ok(lx)
    }

    /// Write the three artifacts into `dir`, creating it if needed.
    pub fn write_artifacts<P: AsRef<Path>>(&self, dir: P) -> Result<()> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;
        fs::write(dir.join(FST_FILE), self.map.as_fst().as_bytes())
            .with_context(|| format!("write {}", dir.join(FST_FILE).display()))?;
        let payloads = bincode::serialize(&self.payloads)?;
        fs::write(dir.join(PAYLOAD_FILE), payloads)
            .with_context(|| format!("write {}", dir.join(PAYLOAD_FILE).display()))?;
        self.bigrams.save(dir.join(BIGRAM_FILE))?;
        Ok(())
    }

    pub fn set_prefix_limit(&mut self, limit: usize) {
        self.prefix_limit = limit;
    }

    pub fn set_bigrams(&mut self, bigrams: WordBigram) {
        self.bigrams = bigrams;
    }

    /// Entries stored under exactly `key`.
    pub fn lookup_entries(&self, key: &str) -> &[PhraseEntry] {
        self.map
            .get(key)
            .and_then(|idx| self.payloads.get(idx as usize))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl LexiconClient for FstLexicon {
    fn find_matches(&self, token: &str) -> Vec<String> {
        if token.is_empty() {
            return Vec::new();
        }
        let exact = self.lookup_entries(token);

        let matcher = Str::new(token).starts_with();
        let mut stream = self.map.search(matcher).into_stream();
        let mut indices = Vec::new();
        while let Some((key, idx)) = stream.next() {
            if key != token.as_bytes() {
                indices.push(idx as usize);
            }
        }
        let prefixed = indices
            .into_iter()
            .filter_map(|i| self.payloads.get(i))
            .flat_map(|entries| entries.iter());
        rank_matches(exact, prefixed, self.prefix_limit)
    }

    fn next_word_predictions(&self, after_word: &str) -> Vec<String> {
        self.bigrams.predictions(after_word.trim())
    }
}
