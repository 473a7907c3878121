// core/src/word_bigram.rs
//
// Word-level bigram table for next-word predictions.
// Stores how often word2 followed word1 so that, once a word is committed,
// the keyboard can offer the most common continuations.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// Entry in a word's continuation distribution
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BigramEntry {
    pub word: String,
    pub count: u32,
}

/// Word-level bigram table
/// Maps word1 -> list of (word2, count) pairs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordBigram {
    /// Bigram data: word1 -> [(word2, count), ...]
    data: HashMap<String, Vec<BigramEntry>>,
    /// Total frequency for each word1 (for normalization)
    totals: HashMap<String, u32>,
}

impl WordBigram {
    /// Create an empty bigram table
    pub fn new() -> Self {
        Self {
            data: HashMap::new(),
            totals: HashMap::new(),
        }
    }

    /// Get the probability P(word2 | word1)
    /// Returns 0.0 if the bigram doesn't exist
    pub fn get_probability(&self, word1: &str, word2: &str) -> f32 {
        let Some(entry) = self
            .data
            .get(word1)
            .and_then(|entries| entries.iter().find(|e| e.word == word2))
        else {
            return 0.0;
        };
        match self.totals.get(word1) {
            Some(&total) if total > 0 => entry.count as f32 / total as f32,
            _ => 0.0,
        }
    }

    /// Add a bigram observation. Repeated pairs accumulate their counts.
    pub fn add_bigram(&mut self, word1: String, word2: String, count: u32) {
        let entries = self.data.entry(word1.clone()).or_default();
        match entries.iter_mut().find(|e| e.word == word2) {
            Some(e) => e.count = e.count.saturating_add(count),
            None => entries.push(BigramEntry { word: word2, count }),
        }
        let total = self.totals.entry(word1).or_insert(0);
        *total = total.saturating_add(count);
    }

    /// All continuations of `word1`, most frequent first.
    /// Ties keep insertion order.
    pub fn predictions(&self, word1: &str) -> Vec<String> {
        let Some(entries) = self.data.get(word1) else {
            return Vec::new();
        };
        let mut ranked: Vec<&BigramEntry> = entries.iter().collect();
        ranked.sort_by(|a, b| b.count.cmp(&a.count));
        ranked.into_iter().map(|e| e.word.clone()).collect()
    }

    /// Parse `word1<TAB>word2[<TAB>count]` lines. `#` starts a comment line.
    pub fn from_tsv_str(content: &str) -> Result<Self> {
        let mut wb = Self::new();
        for (lineno, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let parts: Vec<&str> = line.split('\t').collect();
            if parts.len() < 2 {
                bail!("line {}: expected `word1<TAB>word2[<TAB>count]`", lineno + 1);
            }
            let count = match parts.get(2) {
                Some(c) => c
                    .trim()
                    .parse::<u32>()
                    .with_context(|| format!("line {}: bad count {:?}", lineno + 1, c))?,
                None => 1,
            };
            wb.add_bigram(parts[0].trim().to_string(), parts[1].trim().to_string(), count);
        }
        Ok(wb)
    }

    /// Load from bincode file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).with_context(|| format!("open {}", path.display()))?;
        let model = bincode::deserialize_from(BufReader::new(file))
            .with_context(|| format!("deserialize bigrams from {}", path.display()))?;
        Ok(model)
    }

    /// Save to bincode file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path).with_context(|| format!("create {}", path.display()))?;
        bincode::serialize_into(BufWriter::new(file), self)
            .with_context(|| format!("serialize bigrams to {}", path.display()))?;
        Ok(())
    }

    /// Get number of unique word1 entries
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get total number of bigram pairs
    pub fn total_bigrams(&self) -> usize {
        self.data.values().map(|v| v.len()).sum()
    }
}

impl Default for WordBigram {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_bigram_probability() {
        let mut wb = WordBigram::new();
        wb.add_bigram("خیلی".to_string(), "ممنون".to_string(), 10);
        wb.add_bigram("خیلی".to_string(), "خوب".to_string(), 5);

        // P("ممنون" | "خیلی") = 10 / 15
        let prob = wb.get_probability("خیلی", "ممنون");
        assert!((prob - 0.666).abs() < 0.01);

        let prob = wb.get_probability("خیلی", "خوب");
        assert!((prob - 0.333).abs() < 0.01);

        assert_eq!(wb.get_probability("خیلی", "نه"), 0.0);
    }

    #[test]
    fn test_repeated_pairs_accumulate() {
        let mut wb = WordBigram::new();
        wb.add_bigram("من".to_string(), "هم".to_string(), 2);
        wb.add_bigram("من".to_string(), "هم".to_string(), 3);
        assert_eq!(wb.total_bigrams(), 1);
        assert_eq!(wb.get_probability("من", "هم"), 1.0);
    }

    #[test]
    fn test_predictions_ordering() {
        let mut wb = WordBigram::new();
        wb.add_bigram("سلام".to_string(), "خوبی".to_string(), 4);
        wb.add_bigram("سلام".to_string(), "عزیزم".to_string(), 4);
        wb.add_bigram("سلام".to_string(), "چطوری".to_string(), 7);
        assert_eq!(wb.predictions("سلام"), vec!["چطوری", "خوبی", "عزیزم"]);
        assert!(wb.predictions("خداحافظ").is_empty());
    }

    #[test]
    fn test_tsv_loading() {
        let wb = WordBigram::from_tsv_str("# pairs\nمن\tهم\t3\nمن\tکه\n").unwrap();
        assert_eq!(wb.len(), 1);
        assert_eq!(wb.predictions("من"), vec!["هم", "که"]);
        assert!(WordBigram::from_tsv_str("تنها\n").is_err());
    }
}
