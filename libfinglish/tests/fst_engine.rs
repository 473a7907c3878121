//! The engine over FST artifacts behaves like the engine over the in-memory
//! lexicon they were built from.

use finglish_core::FstLexicon;
use libfinglish::{seed_lexicon, Engine, FinglishConfig};
use std::fs;

#[test]
fn test_artifact_engine_matches_seed_engine() {
    let seed = seed_lexicon().unwrap();
    let dir = std::env::temp_dir().join(format!("finglish_fst_engine_{}", std::process::id()));
    FstLexicon::build(&seed).unwrap().write_artifacts(&dir).unwrap();

    let from_disk = Engine::from_data_dir(&dir, FinglishConfig::default()).unwrap();
    let in_memory = Engine::new(seed);
    for input in ["salam", "kh", "chetori", "ketab", "mikham", "xyz"] {
        assert_eq!(
            from_disk.get_suggestions(input),
            in_memory.get_suggestions(input),
            "{input}"
        );
    }
    assert_eq!(
        from_disk.next_word_predictions("سلام"),
        in_memory.next_word_predictions("سلام")
    );

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_missing_data_dir_is_an_error() {
    let dir = std::env::temp_dir().join("finglish_no_such_artifacts");
    assert!(Engine::from_data_dir(&dir, FinglishConfig::default()).is_err());
}
