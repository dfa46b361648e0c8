use std::{iter::Peekable, str::Chars};

use crate::span::Bytes;

/// Abstraction over a peekable char iterator with position information.
///
/// Since it only holds an iterator and a position, this type is very
/// lightweight, making it easy to clone in order to handle branching
/// and lookahead.
#[derive(Clone)]
pub struct CharLexer<'a> {
    chars: Peekable<Chars<'a>>,
    byte_position: Bytes,
}

impl<'a> CharLexer<'a> {
    /// Constructs a new [`CharLexer`] for the given source string,
    /// starting at position `0`.
    pub fn new(source: &'a str) -> Self {
        Self {
            chars: source.chars().peekable(),
            byte_position: Bytes::new(0),
        }
    }

    /// Tries to advance the lexer by one character.
    /// Returns the character wrapped in an [`Option`] if it was successful,
    /// or [`None`] if the lexer cannot advance any further.
    pub fn try_next(&mut self) -> Option<char> {
        let next = self.chars.next();
        if let Some(ch) = next {
            self.byte_position += ch.len_utf8();
        }
        next
    }

    /// Returns the character under the cursor without consuming it.
    /// Returns [`None`] at the end of the input.
    pub fn peek(&mut self) -> Option<char> {
        self.chars.peek().copied()
    }

    /// Retrieves the byte position of the lexer.
    pub fn byte_position(&self) -> Bytes {
        self.byte_position
    }

    /// Peeks at the next character, and consumes it if it matches the provided character.
    /// Returns true if the character was consumed, false otherwise.
    pub fn recognise(&mut self, character: char) -> bool {
        match self.chars.peek() {
            Some(ch) if ch == &character => {
                self.try_next();
                true
            }
            _ => false,
        }
    }

    /// Checks if the lexer is finished.
    pub fn is_finished(&mut self) -> bool {
        self.peek().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn try_next_tracks_byte_position() {
        let mut lexer = CharLexer::new("aé;");

        assert_eq!(lexer.try_next(), Some('a'));
        assert_eq!(lexer.byte_position(), Bytes::new(1));
        assert_eq!(lexer.try_next(), Some('é'));
        assert_eq!(lexer.byte_position(), Bytes::new(3));
        assert_eq!(lexer.try_next(), Some(';'));
        assert_eq!(lexer.try_next(), None);
        assert_eq!(lexer.byte_position(), Bytes::new(4));
    }

    #[test]
    fn peek_does_not_consume() {
        let mut lexer = CharLexer::new("ab");

        assert_eq!(lexer.peek(), Some('a'));
        assert_eq!(lexer.peek(), Some('a'));
        assert_eq!(lexer.byte_position(), Bytes::new(0));
    }

    #[test]
    fn finished_after_last_character() {
        let mut lexer = CharLexer::new("a");

        assert!(!lexer.is_finished());
        lexer.try_next();
        assert!(lexer.is_finished());
        assert_eq!(lexer.peek(), None);
    }

    #[test]
    fn recognise_only_consumes_matching_character() {
        let mut lexer = CharLexer::new("\"x");

        assert!(!lexer.recognise('x'));
        assert!(lexer.recognise('"'));
        assert_eq!(lexer.peek(), Some('x'));
    }
}
