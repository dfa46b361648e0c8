//! Non-fatal findings reported alongside the token stream.
use std::fmt::{Display, Formatter};

use thiserror::Error;

use crate::{error::PositionalError, span::Span};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiagnosticKind {
    #[error("Skipped unrecognised character {0:?}")]
    SkippedCharacter(char),
    #[error("Unterminated string literal")]
    UnterminatedString,
}

/// A diagnostic never stops the scan and never changes which tokens are
/// produced; it only records what the lexer passed over.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub struct LexDiagnostic {
    pub range: Span,
    pub kind: DiagnosticKind,
}

impl Display for LexDiagnostic {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{}", self.kind))
    }
}

impl PositionalError for LexDiagnostic {
    fn range(&self) -> Span {
        self.range
    }

    fn describe(&self) -> String {
        self.to_string()
    }
}
