//! Spoken verb forms.

use crate::tables::COLLOQUIAL_FORMS;

/// The spoken-Farsi rendering for `token`, matched against either the
/// colloquial or the formal Latin spelling.
///
/// ```
/// use libfinglish::colloquial_form;
/// assert_eq!(colloquial_form("mikham"), Some("می\u{200C}خوام"));
/// assert_eq!(colloquial_form("mikhaham"), Some("می\u{200C}خوام"));
/// assert_eq!(colloquial_form("ketab"), None);
/// ```
pub fn colloquial_form(token: &str) -> Option<&'static str> {
    COLLOQUIAL_FORMS
        .iter()
        .find(|&&(colloquial, formal, _)| token == colloquial || token == formal)
        .map(|&(_, _, farsi)| farsi)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negated_forms() {
        assert_eq!(colloquial_form("nemidoonam"), Some("نمی\u{200C}دونم"));
        assert_eq!(colloquial_form("nemidanam"), Some("نمی\u{200C}دونم"));
    }

    #[test]
    fn test_identical_spellings() {
        // both spellings of "mikonam" are the same string
        assert_eq!(colloquial_form("mikonam"), Some("می\u{200C}کنم"));
    }

    #[test]
    fn test_partial_tokens_do_not_match() {
        assert_eq!(colloquial_form("mikha"), None);
        assert_eq!(colloquial_form(""), None);
    }
}
