use anyhow::{Context, Result};
use clap::Parser;
use finglish_core::fst_lexicon::{BIGRAM_FILE, FST_FILE, PAYLOAD_FILE};
use finglish_core::{FstLexicon, Lexicon, WordBigram};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Convert TSV/JSON word lists into the FST + bincode artifacts the engine loads.
#[derive(Parser)]
struct Args {
    /// Word list(s): `latin<TAB>farsi[<TAB>freq]` lines, or a JSON array
    #[arg(long, num_args = 1.., required = true)]
    words: Vec<PathBuf>,

    /// Bigram list: `word<TAB>next[<TAB>count]` lines
    #[arg(long)]
    bigrams: Option<PathBuf>,

    #[arg(long, default_value = "data")]
    out: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    let args = Args::parse();
    let fst = build(&args.words, args.bigrams.as_deref(), &args.out)?;
    info!(keys = fst.len(), out = %args.out.display(), "lexicon built");
    Ok(())
}

/// Merge the word lists, attach bigrams and write the artifacts into `out`.
fn build(words: &[PathBuf], bigrams: Option<&Path>, out: &Path) -> Result<FstLexicon> {
    // repeated (key, word) pairs add their frequencies
    let mut lexicon = Lexicon::new();
    for path in words {
        let part = Lexicon::load_words_file(path)?;
        for (key, entries) in part.entries() {
            for e in entries {
                lexicon.insert(key, e.text.clone(), e.freq);
            }
        }
    }

    if let Some(path) = bigrams {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("read bigrams {}", path.display()))?;
        let bigrams = WordBigram::from_tsv_str(&content)
            .with_context(|| format!("parse bigrams {}", path.display()))?;
        info!(path = %path.display(), contexts = bigrams.len(), "read bigrams");
        lexicon.set_bigrams(bigrams);
    }

    let fst = FstLexicon::build(&lexicon)?;
    fst.write_artifacts(out)?;
    for name in [FST_FILE, PAYLOAD_FILE, BIGRAM_FILE] {
        info!(path = %out.join(name).display(), "wrote artifact");
    }
    Ok(fst)
}
