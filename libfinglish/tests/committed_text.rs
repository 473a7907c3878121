//! Helpers applied to text after the user picks a suggestion.

use finglish_core::Lexicon;
use libfinglish::{
    convert_to_persian_numbers, insert_zone_joiner, should_insert_zone_joiner, Engine,
    FinglishConfig, ZWNJ,
};

#[test]
fn test_room_number() {
    assert_eq!(convert_to_persian_numbers("room101"), "room۱۰۱");
}

#[test]
fn test_joiner_after_typed_prefix() {
    let committed = "می";
    assert!(should_insert_zone_joiner(committed));
    let joined = insert_zone_joiner(&format!("{committed} خوام"));
    assert_eq!(joined, format!("می{ZWNJ}خوام"));
}

#[test]
fn test_joiner_leaves_single_words() {
    for word in ["سلام", "کتاب", "خوبی"] {
        assert_eq!(insert_zone_joiner(word), word);
    }
}

#[test]
fn test_engine_formats_digits_by_config() {
    let on = Engine::new(Lexicon::new());
    assert_eq!(on.format_digits("2024"), "۲۰۲۴");

    let cfg = FinglishConfig::from_toml_str("persian_numerals = false").unwrap();
    let off = Engine::with_config(Lexicon::new(), cfg);
    assert_eq!(off.format_digits("2024"), "2024");
}
