//! Compound word recognition.

use crate::tables::COMPOUND_PARTS;

/// Shortest token (in characters) worth testing.
const MIN_LEN: usize = 3;
/// Split points are tried in `[2, min(len - 1, MAX_SPLIT))`.
const MAX_SPLIT: usize = 6;

/// Match `token` against the compound table.
///
/// Tries each entry in order as a whole (allowing `a` doubled in the second
/// part or `o` doubled in the first), then tries splitting the token at
/// positions 2..5 and comparing both halves. The first hit wins.
///
/// ```
/// use libfinglish::match_compound;
/// assert_eq!(match_compound("chetori").as_deref(), Some("چطوری"));
/// assert_eq!(match_compound("khooda").as_deref(), Some("خدا"));
/// assert_eq!(match_compound("xy"), None);
/// ```
pub fn match_compound(token: &str) -> Option<String> {
    let chars: Vec<char> = token.chars().collect();
    if chars.len() < MIN_LEN {
        return None;
    }

    let whole = COMPOUND_PARTS.iter().find(|&&(first, second, _)| {
        let long_a = second.replace('a', "aa");
        let long_o = first.replace('o', "oo");
        token.strip_prefix(first) == Some(second)
            || token.strip_prefix(first) == Some(long_a.as_str())
            || token.strip_suffix(second) == Some(long_o.as_str())
    });
    if let Some(&(_, _, farsi)) = whole {
        return Some(farsi.to_string());
    }

    let upper = (chars.len() - 1).min(MAX_SPLIT);
    (2..upper).find_map(|i| {
        let head: String = chars[..i].iter().collect();
        let tail: String = chars[i..].iter().collect();
        COMPOUND_PARTS
            .iter()
            .find(|&&(first, second, _)| first == head && second == tail)
            .map(|&(_, _, farsi)| farsi.to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_concatenation() {
        assert_eq!(match_compound("koja").as_deref(), Some("کجا"));
        assert_eq!(match_compound("emruz").as_deref(), Some("امروز"));
        assert_eq!(match_compound("khaharam").as_deref(), Some("خواهرم"));
    }

    #[test]
    fn test_doubled_vowel_variants() {
        // a doubled in the second part
        assert_eq!(match_compound("kojaa").as_deref(), Some("کجا"));
        // o doubled in the first part
        assert_eq!(match_compound("koojast").as_deref(), Some("کجاست"));
    }

    #[test]
    fn test_table_order_wins() {
        // "chetor" is listed before "chetori"; an exact token picks its own entry
        assert_eq!(match_compound("chetor").as_deref(), Some("چطور"));
        assert_eq!(match_compound("chetori").as_deref(), Some("چطوری"));
    }

    #[test]
    fn test_zero_width_non_joiner_results() {
        assert_eq!(match_compound("mikham").as_deref(), Some("می\u{200C}خوام"));
    }

    #[test]
    fn test_short_or_unknown_tokens() {
        assert_eq!(match_compound("ab"), None);
        assert_eq!(match_compound("qwerty"), None);
    }
}
