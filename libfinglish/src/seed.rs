//! Bundled starter lexicon.
//!
//! A few dozen everyday words and greetings plus a handful of word pairs for
//! predictions. Used by the CLI when no artifacts or word list are given.

use anyhow::{Context, Result};
use finglish_core::{Lexicon, WordBigram};

const SEED_WORDS: &str = include_str!("../data/seed_lexicon.tsv");
const SEED_BIGRAMS: &str = include_str!("../data/seed_bigrams.tsv");

/// Parse the bundled word list and bigrams into an in-memory lexicon.
pub fn seed_lexicon() -> Result<Lexicon> {
    let mut lexicon = Lexicon::from_tsv_str(SEED_WORDS).context("bundled word list")?;
    let bigrams = WordBigram::from_tsv_str(SEED_BIGRAMS).context("bundled bigrams")?;
    lexicon.set_bigrams(bigrams);
    tracing::debug!(keys = lexicon.len(), "seed lexicon ready");
    Ok(lexicon)
}

#[cfg(test)]
mod tests {
    use super::*;
    use finglish_core::LexiconClient;

    #[test]
    fn seed_parses() {
        let lx = seed_lexicon().unwrap();
        assert!(lx.len() > 50);
        assert_eq!(lx.lookup("salam"), vec!["سلام".to_string()]);
    }

    #[test]
    fn seed_has_predictions() {
        let lx = seed_lexicon().unwrap();
        let next = lx.next_word_predictions("خیلی");
        assert_eq!(next.first().map(String::as_str), Some("ممنون"));
    }
}
