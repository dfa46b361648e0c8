//! Tokens, as produced by the lexer.
use std::fmt::{self, Display};

use crate::span::Span;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub source: Span,
    pub kind: TokenKind,
}
impl Token {
    /// The literal text carried by the token, if its kind has any.
    pub fn content(&self) -> Option<&str> {
        self.kind.content()
    }
}
impl Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.kind)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TokenKind {
    Identifier(String),
    Keyword(Keyword),
    Integer(String),
    String(String),
    /// The assignment operator `=`.
    Equal,
    /// End of expression, written as `;`.
    Eoe,
}
impl TokenKind {
    pub fn content(&self) -> Option<&str> {
        match self {
            TokenKind::Identifier(text) | TokenKind::Integer(text) | TokenKind::String(text) => {
                Some(text.as_str())
            }
            TokenKind::Keyword(keyword) => Some(keyword.as_str()),
            TokenKind::Equal | TokenKind::Eoe => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Identifier(_) => "identifier",
            TokenKind::Keyword(_) => "keyword",
            TokenKind::Integer(_) => "integer",
            TokenKind::String(_) => "string",
            TokenKind::Equal => "equal",
            TokenKind::Eoe => "eoe",
        }
    }
}
impl Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TokenKind::String(text) => write!(f, "{}({:?})", self.name(), text),
            kind => match kind.content() {
                Some(text) => write!(f, "{}({})", kind.name(), text),
                None => write!(f, "{}", kind.name()),
            },
        }
    }
}

/// A reserved word. Identifier runs are only reclassified once they are
/// complete, so `letter` stays an identifier.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Keyword {
    Let,
}
impl Keyword {
    pub const ALL: [Keyword; 1] = [Keyword::Let];

    pub fn lookup(text: &str) -> Option<Keyword> {
        Self::ALL.into_iter().find(|keyword| keyword.as_str() == text)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Keyword::Let => "let",
        }
    }
}
