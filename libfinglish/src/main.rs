use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use finglish_core::{Candidate, FstLexicon, Lexicon, LexiconClient, WordBigram};
use libfinglish::{seed_lexicon, Engine, FinglishConfig};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "finglish", about = "Finglish to Farsi suggestions")]
struct Args {
    /// Words to convert. Reads lines from stdin when empty.
    words: Vec<String>,

    /// Directory with lexicon.fst, lexicon.bincode and bigrams.bincode
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// TSV or JSON word list
    #[arg(long, conflicts_with = "data_dir")]
    lexicon: Option<PathBuf>,

    /// Bigram TSV (word, next, count)
    #[arg(long)]
    bigrams: Option<PathBuf>,

    /// TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print next-word predictions for this word and exit
    #[arg(long)]
    after: Option<String>,

    /// Show which stage produced each suggestion
    #[arg(long)]
    explain: bool,

    /// Print JSON instead of a numbered list
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let config = match &args.config {
        Some(path) => FinglishConfig::load_toml(path)?,
        None => FinglishConfig::default(),
    };

    if let Some(dir) = &args.data_dir {
        let mut lexicon = FstLexicon::from_data_dir(dir)?;
        lexicon.set_prefix_limit(config.base.prefix_match_limit);
        if let Some(path) = &args.bigrams {
            lexicon.set_bigrams(load_bigrams(path)?);
        }
        return run(&Engine::with_config(lexicon, config), &args);
    }

    let mut lexicon = match &args.lexicon {
        Some(path) => Lexicon::load_words_file(path)?,
        None => seed_lexicon()?,
    };
    lexicon.set_prefix_limit(config.base.prefix_match_limit);
    if let Some(path) = &args.bigrams {
        lexicon.set_bigrams(load_bigrams(path)?);
    }
    run(&Engine::with_config(lexicon, config), &args)
}

fn load_bigrams(path: &Path) -> Result<WordBigram> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("read bigrams {}", path.display()))?;
    WordBigram::from_tsv_str(&content).with_context(|| format!("parse bigrams {}", path.display()))
}

fn run<L: LexiconClient>(engine: &Engine<L>, args: &Args) -> Result<()> {
    let mut out = io::stdout().lock();

    if let Some(previous) = &args.after {
        let predictions = engine.next_word_predictions(previous);
        if args.json {
            writeln!(out, "{}", serde_json::to_string(&predictions)?)?;
        } else {
            for (i, word) in predictions.iter().enumerate() {
                writeln!(out, "  {}. {}", i + 1, word)?;
            }
        }
        return Ok(());
    }

    if !args.words.is_empty() {
        for word in &args.words {
            print_suggestions(&mut out, engine, word, args)?;
        }
        return Ok(());
    }

    writeln!(out, "Type Finglish and press Enter. Ctrl+D to exit.")?;
    out.flush()?;
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("read stdin")?;
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        print_suggestions(&mut out, engine, input, args)?;
        out.flush()?;
    }
    Ok(())
}

fn print_suggestions<L: LexiconClient, W: Write>(
    out: &mut W,
    engine: &Engine<L>,
    input: &str,
    args: &Args,
) -> Result<()> {
    let candidates: Vec<Candidate> = engine
        .suggestions(input)
        .into_iter()
        .map(|c| Candidate::new(engine.format_digits(&c.text), c.stage))
        .collect();

    if args.json {
        let row = serde_json::json!({ "input": input, "suggestions": candidates });
        writeln!(out, "{}", row)?;
        return Ok(());
    }

    writeln!(out, "{}:", input)?;
    if candidates.is_empty() {
        writeln!(out, "  → (no suggestions)")?;
    }
    for (i, c) in candidates.iter().enumerate() {
        if args.explain {
            writeln!(out, "  {}. {} ({})", i + 1, c.text, c.stage)?;
        } else {
            writeln!(out, "  {}. {}", i + 1, c.text)?;
        }
    }
    Ok(())
}
