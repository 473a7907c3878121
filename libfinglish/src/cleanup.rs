//! Final normalization applied to every candidate before it is offered.

/// Short-vowel marks left behind by the positional transliterator.
const DIACRITICS: [char; 3] = ['\u{064E}', '\u{0650}', '\u{064F}'];

/// Doubled letters collapsed to one, in application order.
const COLLAPSE: &[(&str, &str)] = &[
    ("اا", "ا"),
    ("آا", "آ"),
    ("اآ", "آ"),
    ("وو", "و"),
    ("یی", "ی"),
    ("هه", "ه"),
    ("نن", "ن"),
    ("مم", "م"),
    ("رر", "ر"),
    ("لل", "ل"),
];

/// Hamza seated on the wrong carrier before ی or ا.
const HAMZA: &[(&str, &str)] = &[("ءی", "ئی"), ("ءا", "ئا")];

/// Strip diacritics, collapse doubled letters and fix hamza seats.
///
/// Runs to a fixed point, so `cleanup(&cleanup(s)) == cleanup(s)`.
///
/// ```
/// use libfinglish::cleanup;
/// assert_eq!(cleanup("کِتااب"), "کتاب");
/// assert_eq!(cleanup("خوووب"), "خوب");
/// ```
pub fn cleanup(input: &str) -> String {
    let mut result: String = input.chars().filter(|c| !DIACRITICS.contains(c)).collect();
    loop {
        let before = result.clone();
        for &(pattern, replacement) in COLLAPSE.iter().chain(HAMZA) {
            while result.contains(pattern) {
                result = result.replace(pattern, replacement);
            }
        }
        if result == before {
            return result;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_diacritics() {
        assert_eq!(cleanup("بِرُو"), "برو");
    }

    #[test]
    fn test_collapses_doubles() {
        assert_eq!(cleanup("سالاام"), "سالام");
        assert_eq!(cleanup("آا"), "آ");
        assert_eq!(cleanup("اآب"), "آب");
        assert_eq!(cleanup("مممنون"), "منون");
        assert_eq!(cleanup("خونننه"), "خونه");
    }

    #[test]
    fn test_hamza_seat() {
        assert_eq!(cleanup("پاءیز"), "پائیز");
        assert_eq!(cleanup("ءا"), "ئا");
    }

    #[test]
    fn test_keeps_zero_width_non_joiner() {
        assert_eq!(cleanup("می\u{200C}رم"), "می\u{200C}رم");
    }

    #[test]
    fn test_idempotent() {
        for s in ["اآا", "آاآا", "ءیی", "ااآآاا", "وِوُو", "", "abc", "هههه"] {
            let once = cleanup(s);
            assert_eq!(cleanup(&once), once, "input {s:?}");
        }
    }

    #[test]
    fn test_degenerate_output_is_empty() {
        assert_eq!(cleanup("\u{0650}\u{064F}"), "");
    }
}
