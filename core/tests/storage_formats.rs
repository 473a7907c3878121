//! On-disk formats: TOML config, word lists, bincode and FST artifacts.

use finglish_core::{Config, FstLexicon, Lexicon, LexiconClient, WordBigram};
use std::fs;
use std::path::PathBuf;

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("finglish_core_{}_{}", std::process::id(), name))
}

#[test]
fn test_config_toml_file_roundtrip() {
    let path = temp_path("config.toml");
    let mut config = Config::default();
    config.set_max_candidates(3);
    config.set_persian_numerals(false);
    config.save_toml(&path).expect("save config");

    let loaded = Config::load_toml(&path).expect("load config");
    assert_eq!(loaded, config);

    let _ = fs::remove_file(&path);
}

#[test]
fn test_config_errors_name_the_file() {
    let missing = temp_path("missing.toml");
    let err = Config::load_toml(&missing).unwrap_err();
    assert!(format!("{err:#}").contains(&missing.display().to_string()), "{err:#}");

    let broken = temp_path("broken.toml");
    fs::write(&broken, "max_candidates = \"five\"\n").unwrap();
    let err = Config::load_toml(&broken).unwrap_err();
    assert!(err.to_string().starts_with("parse config"), "{err:#}");

    let _ = fs::remove_file(&broken);
}

#[test]
fn test_word_list_by_extension() {
    let tsv = temp_path("words.tsv");
    fs::write(&tsv, "# comment\nsalam\tسلام\t10\nsalam\tصلام\n\nketab\tکتاب\t4\n").unwrap();
    let lx = Lexicon::load_words_file(&tsv).expect("tsv");
    assert_eq!(lx.len(), 2);
    assert_eq!(lx.find_matches("salam"), vec!["سلام", "صلام"]);

    let json = temp_path("words.json");
    fs::write(
        &json,
        r#"[{"latin": "Salam", "farsi": "سلام", "freq": 3}, {"latin": "ab", "farsi": "آب"}]"#,
    )
    .unwrap();
    let lx = Lexicon::load_words_file(&json).expect("json");
    assert_eq!(lx.lookup("salam"), vec!["سلام"]);
    assert_eq!(lx.lookup_entries("ab")[0].freq, 1);

    let _ = fs::remove_file(&tsv);
    let _ = fs::remove_file(&json);
}

#[test]
fn test_malformed_tsv_reports_line() {
    let err = Lexicon::from_tsv_str("salam\tسلام\nbroken\n").unwrap_err();
    assert!(err.to_string().contains("line 2"), "{err}");
    assert!(Lexicon::from_tsv_str("salam\tسلام\tmany\n").is_err());
}

#[test]
fn test_bincode_lexicon_roundtrip() {
    let path = temp_path("lexicon.bin");
    let mut lx = Lexicon::new();
    lx.insert("merci", "مرسی", 9);
    lx.add_bigram("خیلی", "مرسی", 2);
    lx.save_bincode(&path).expect("save");

    let back = Lexicon::load_bincode(&path).expect("load");
    assert_eq!(back.lookup("merci"), vec!["مرسی"]);
    assert_eq!(back.next_word_predictions("خیلی"), vec!["مرسی"]);

    let _ = fs::remove_file(&path);
}

#[test]
fn test_fst_artifacts_roundtrip_with_bigrams() {
    let dir = temp_path("artifacts");
    let mut lx = Lexicon::new();
    for (key, word, freq) in [("kh", "خ", 1), ("khob", "خوب", 5), ("khoda", "خدا", 7), ("man", "من", 3)] {
        lx.insert(key, word, freq);
    }
    lx.set_bigrams(WordBigram::from_tsv_str("خیلی\tخوب\t4\nخیلی\tممنون\t9\n").unwrap());
    FstLexicon::build(&lx).unwrap().write_artifacts(&dir).unwrap();

    let fst = FstLexicon::from_data_dir(&dir).expect("load artifacts");
    assert_eq!(fst.len(), 4);
    assert_eq!(fst.find_matches("kh"), lx.find_matches("kh"));
    assert_eq!(fst.find_matches("kh"), vec!["خ", "خدا", "خوب"]);
    assert_eq!(fst.next_word_predictions("خیلی"), vec!["ممنون", "خوب"]);

    let _ = fs::remove_dir_all(&dir);
}
