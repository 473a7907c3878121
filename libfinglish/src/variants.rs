//! Alternative spellings for letters that have several Farsi renderings.
//!
//! `s` may be س, ص or ث; `z` may be ز, ض, ظ or ذ; and so on. For each
//! ambiguous letter present in the token the generator emits renderings in
//! which only the *first* free occurrence of that letter takes an
//! alternative, keeping the fan-out small. Three shape-based variants follow:
//! a leading madda, ق for `gh`, and a final ی for a trailing `e`.

use crate::cleanup::cleanup;
use crate::tables::{self, AMBIGUOUS_LETTERS};
use crate::transliterate::{match_window, push_plain, transliterate};

/// Alternatives tried per ambiguous letter.
pub const DEFAULT_ALTERNATIVES: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Substitution {
    Pending,
    Done,
}

/// Transliterate `token` with the first occurrence of `letter` outside a
/// digraph rendered as `replacement`. Vowels use their standalone form.
fn substitute_first(token: &str, letter: char, replacement: &str) -> String {
    let chars: Vec<char> = token.to_lowercase().chars().collect();
    let mut out = String::with_capacity(token.len() * 2);
    let mut state = Substitution::Pending;
    let mut i = 0;
    while i < chars.len() {
        if let Some((farsi, len)) = match_window(&chars, i) {
            out.push_str(farsi);
            i += len;
            continue;
        }
        let c = chars[i];
        match (state, tables::positional(c)) {
            (Substitution::Pending, _) if c == letter => {
                out.push_str(replacement);
                state = Substitution::Done;
            }
            (_, Some(vowel)) => out.push_str(vowel.standalone),
            (_, None) => push_plain(&mut out, c),
        }
        i += 1;
    }
    out
}

/// Cleaned, deduplicated collection that never repeats the primary rendering.
struct VariantSet {
    primary: String,
    items: Vec<String>,
}

impl VariantSet {
    fn offer(&mut self, raw: String) {
        let v = cleanup(&raw);
        if !v.is_empty() && v != self.primary && !self.items.contains(&v) {
            self.items.push(v);
        }
    }
}

/// Variants with the default fan-out of two alternatives per letter.
pub fn variants(token: &str) -> Vec<String> {
    variants_with_limit(token, DEFAULT_ALTERNATIVES)
}

/// Variants in generation order, each cleaned, none equal to the cleaned
/// primary transliteration.
pub fn variants_with_limit(token: &str, alternatives: usize) -> Vec<String> {
    let mut set = VariantSet {
        primary: cleanup(&transliterate(token)),
        items: Vec::new(),
    };

    for &(letter, renderings) in AMBIGUOUS_LETTERS {
        if !token.contains(letter) {
            continue;
        }
        for alt in renderings.iter().take(alternatives) {
            set.offer(substitute_first(token, letter, alt));
        }
    }

    if let Some(rest) = token.strip_prefix('a') {
        if !rest.starts_with('a') {
            set.offer(format!("آ{}", transliterate(rest)));
        }
    }

    if token.contains("gh") {
        set.offer(transliterate(token).replace('غ', "ق"));
    }

    if let Some(stem) = token.strip_suffix('e') {
        if !stem.ends_with('e') {
            set.offer(format!("{}ی", transliterate(stem)));
        }
    }

    set.items
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substitutes_only_first_occurrence() {
        assert_eq!(substitute_first("sis", 's', "ص"), "صیس");
    }

    #[test]
    fn test_digraph_letters_are_not_substituted() {
        // the s of "sh" belongs to the digraph
        assert_eq!(substitute_first("shas", 's', "ص"), "شاص");
    }

    #[test]
    fn test_variants_for_salam() {
        assert_eq!(variants("salam"), vec!["سآلام", "صالام"]);
    }

    #[test]
    fn test_gh_resolves_to_qaf() {
        let v = variants("ghand");
        assert!(v.contains(&"قاند".to_string()), "{v:?}");
    }

    #[test]
    fn test_trailing_e_becomes_ye() {
        let v = variants("khune");
        assert!(v.contains(&"خونی".to_string()), "{v:?}");
        assert!(variants("chee").is_empty());
    }

    #[test]
    fn test_limit_controls_fan_out() {
        assert!(variants_with_limit("zaban", 0).len() < variants_with_limit("zaban", 4).len());
    }

    #[test]
    fn test_no_duplicates_and_no_primary() {
        for token in ["salam", "zaban", "ghazal", "sabz", "ostad", "cheshme"] {
            let primary = cleanup(&transliterate(token));
            let v = variants(token);
            assert!(!v.contains(&primary), "{token}: {v:?}");
            let mut sorted = v.clone();
            sorted.sort();
            sorted.dedup();
            assert_eq!(sorted.len(), v.len(), "{token}: {v:?}");
        }
    }
}
