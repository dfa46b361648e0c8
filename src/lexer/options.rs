//! Knobs for a lexer session.

/// What to do with a string literal that is still open when the input ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnterminatedPolicy {
    /// Emit whatever was accumulated as a string token.
    #[default]
    Emit,
    /// Discard the partial string.
    Drop,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LexOptions {
    pub unterminated_strings: UnterminatedPolicy,
}

impl LexOptions {
    pub fn with_unterminated_strings(mut self, policy: UnterminatedPolicy) -> Self {
        self.unterminated_strings = policy;
        self
    }
}
