//! Character-level Latin → Farsi transliteration.
//!
//! Two renderings are provided:
//! - `transliterate`: position aware. Vowels are written differently at the
//!   start of a word, between two consonants, at the end, or elsewhere.
//! - `simple_transliterate`: one fixed rendering per vowel, used as the last
//!   fallback candidate.
//!
//! Both scan Unicode scalar values left to right, try a 3-character then a
//! 2-character window against `tables::MULTI_CHAR`, and otherwise map one
//! character at a time. Unknown characters pass through unchanged, so the
//! functions are total.

use crate::tables::{self, CONSONANTS, LOANWORD_ENDINGS};

/// Where a vowel sits relative to its neighbours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Start,
    Middle,
    End,
    Standalone,
}

/// Classify position `i`. Start wins over end for one-letter words.
pub fn slot(chars: &[char], i: usize) -> Slot {
    let after_consonant = i > 0 && tables::is_consonant(chars[i - 1]);
    let before_consonant = i + 1 < chars.len() && tables::is_consonant(chars[i + 1]);
    if i == 0 {
        Slot::Start
    } else if i + 1 == chars.len() {
        Slot::End
    } else if after_consonant && before_consonant {
        Slot::Middle
    } else {
        Slot::Standalone
    }
}

/// Longest multi-character window at `i`: returns its rendering and length.
pub(crate) fn match_window(chars: &[char], i: usize) -> Option<(&'static str, usize)> {
    let remaining = chars.len() - i;
    for len in (2..=remaining.min(3)).rev() {
        let window: String = chars[i..i + len].iter().collect();
        if let Some(farsi) = tables::multi_char(&window) {
            return Some((farsi, len));
        }
    }
    None
}

/// Consonant, then digit, then the character itself.
pub(crate) fn push_plain(out: &mut String, c: char) {
    if let Some(farsi) = CONSONANTS.get(&c) {
        out.push_str(farsi);
    } else if let Some(digit) = tables::persian_digit(c) {
        out.push(digit);
    } else {
        out.push(c);
    }
}

/// Position-aware transliteration.
///
/// ```
/// use libfinglish::transliterate;
/// assert_eq!(transliterate("shir"), "شیر");
/// assert_eq!(transliterate("aab"), "آب");
/// assert_eq!(transliterate("room101"), "روم۱۰۱");
/// ```
pub fn transliterate(token: &str) -> String {
    let chars: Vec<char> = token.to_lowercase().chars().collect();
    let mut out = String::with_capacity(token.len() * 2);
    let mut i = 0;
    while i < chars.len() {
        if let Some((farsi, len)) = match_window(&chars, i) {
            // long a opening a word is written with madda
            if i == 0 && chars[0] == 'a' && chars[1] == 'a' && len == 2 {
                out.push('آ');
            } else {
                out.push_str(farsi);
            }
            i += len;
            continue;
        }

        let c = chars[i];
        if let Some(vowel) = tables::positional(c) {
            out.push_str(match slot(&chars, i) {
                Slot::Start => vowel.start,
                Slot::Middle => vowel.middle,
                Slot::End => vowel.end,
                Slot::Standalone => vowel.standalone,
            });
        } else {
            push_plain(&mut out, c);
        }
        i += 1;
    }
    out
}

/// Position-blind fallback: `a`/`e` → ه, `o`/`u` → و, `i` → ی.
///
/// ```
/// use libfinglish::simple_transliterate;
/// assert_eq!(simple_transliterate("salam"), "سهلهم");
/// ```
pub fn simple_transliterate(token: &str) -> String {
    let chars: Vec<char> = token.to_lowercase().chars().collect();
    let mut out = String::with_capacity(token.len() * 2);
    let mut i = 0;
    while i < chars.len() {
        if let Some((farsi, len)) = match_window(&chars, i) {
            out.push_str(farsi);
            i += len;
            continue;
        }
        match chars[i] {
            'a' | 'e' => out.push('ه'),
            'o' | 'u' => out.push('و'),
            'i' => out.push('ی'),
            c => push_plain(&mut out, c),
        }
        i += 1;
    }
    out
}

/// Loanword rendering: the first listed ending the token ends with is
/// written in its Farsi form, the rest transliterated positionally.
///
/// ```
/// use libfinglish::transliterate_loanword;
/// assert_eq!(transliterate_loanword("tourist").as_deref(), Some("توریست"));
/// assert_eq!(transliterate_loanword("salam"), None);
/// ```
pub fn transliterate_loanword(token: &str) -> Option<String> {
    LOANWORD_ENDINGS.iter().find_map(|&(ending, farsi)| {
        token
            .strip_suffix(ending)
            .map(|stem| transliterate(stem) + farsi)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vowel_positions() {
        assert_eq!(transliterate("abr"), "آبر");
        assert_eq!(transliterate("esm"), "اسم");
        assert_eq!(transliterate("to"), "تو");
        assert_eq!(transliterate("man"), "مان");
        assert_eq!(transliterate("ui"), "اوی");
        // i sits before a vowel, so neither start, end nor middle
        assert_eq!(transliterate("bia"), "بیه");
    }

    #[test]
    fn test_single_letter_uses_start_form() {
        assert_eq!(transliterate("a"), "آ");
        assert_eq!(transliterate("o"), "ا");
    }

    #[test]
    fn test_digraphs_and_trigraphs() {
        assert_eq!(transliterate("khoshk"), "خ\u{064F}شک");
        assert_eq!(transliterate("schtch"), "شچ");
        assert_eq!(transliterate("baa"), "با");
    }

    #[test]
    fn test_consonants_digits_passthrough() {
        assert_eq!(transliterate("x1'"), "خ۱ع");
        assert_eq!(transliterate("b c!"), "ب ک!");
        assert_eq!(transliterate(""), "");
    }

    #[test]
    fn test_slot_classification() {
        let chars: Vec<char> = "baba".chars().collect();
        assert_eq!(slot(&chars, 0), Slot::Start);
        assert_eq!(slot(&chars, 1), Slot::Middle);
        assert_eq!(slot(&chars, 3), Slot::End);
        let chars: Vec<char> = "biar".chars().collect();
        assert_eq!(slot(&chars, 1), Slot::Standalone);
    }

    #[test]
    fn test_simple_transliterate() {
        assert_eq!(simple_transliterate("aab"), "اب");
        assert_eq!(simple_transliterate("to"), "تو");
        assert_eq!(simple_transliterate("emruz"), "همروز");
        assert_eq!(simple_transliterate("2ta"), "۲ته");
    }

    #[test]
    fn test_loanword_endings() {
        assert_eq!(transliterate_loanword("ism").as_deref(), Some("یسم"));
        assert_eq!(transliterate_loanword("station").as_deref(), Some("ستهشن"));
        // "sion" is listed after "tion" but only one can match here
        assert_eq!(transliterate_loanword("vision").as_deref(), Some("ویژن"));
    }
}
