//! A hand-written lexer for a tiny language of `let` declarations.
//!
//! ```
//! use letlex::lexer::{tokenize, tokens::TokenKind};
//!
//! let kinds: Vec<String> = tokenize("let a = 1;")
//!     .iter()
//!     .map(|token| token.kind.to_string())
//!     .collect();
//! assert_eq!(kinds, ["keyword(let)", "identifier(a)", "equal", "integer(1)", "eoe"]);
//! ```
pub mod error;
pub mod lexer;
pub mod prelude;
pub mod report;
pub mod source_map;
pub mod span;
