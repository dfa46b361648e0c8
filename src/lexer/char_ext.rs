//! Character classes used by the scanner.
pub trait CharExt {
    /// Characters that may open an identifier run.
    fn is_identifier_start(&self) -> bool;

    /// Characters that may continue an identifier run (`[0-9a-zA-Z_$]`).
    fn is_word_class(&self) -> bool;
}
impl CharExt for char {
    fn is_identifier_start(&self) -> bool {
        self.is_ascii_alphabetic() || *self == '$'
    }

    fn is_word_class(&self) -> bool {
        self.is_ascii_alphanumeric() || *self == '_' || *self == '$'
    }
}

/// Lifts a character predicate over a lookahead result.
/// Running off the end of the input never matches.
pub fn next_matches<P>(next: Option<char>, predicate: P) -> bool
where
    P: FnOnce(&char) -> bool,
{
    next.as_ref().is_some_and(predicate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dollar_starts_identifier() {
        assert!('$'.is_identifier_start());
        assert!('q'.is_identifier_start());
        assert!(!'_'.is_identifier_start());
        assert!(!'7'.is_identifier_start());
    }

    #[test]
    fn word_class_covers_digits_underscore_and_dollar() {
        for ch in ['a', 'Z', '0', '9', '_', '$'] {
            assert!(ch.is_word_class(), "{ch:?} should be word class");
        }
        for ch in [' ', '=', ';', '"', 'é', '-'] {
            assert!(!ch.is_word_class(), "{ch:?} should not be word class");
        }
    }

    #[test]
    fn end_of_input_never_matches() {
        assert!(!next_matches(None, char::is_ascii_digit));
        assert!(!next_matches(None, CharExt::is_word_class));
        assert!(next_matches(Some('4'), char::is_ascii_digit));
    }
}
