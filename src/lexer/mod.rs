//! Functionality for converting a source code string into a [`Token`] stream.
mod char_ext;
mod char_lexer;
mod diagnostic;
mod lexer;
mod options;

pub mod tokens;

pub use diagnostic::*;
pub use lexer::*;
pub use options::*;

#[allow(unused_imports, reason = "Docstring uses this")]
use tokens::Token;
