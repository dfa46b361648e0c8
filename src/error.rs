use crate::span::{Bytes, Span};

/// Anything that can be pointed at in the source code.
pub trait PositionalError {
    fn range(&self) -> Span;
    fn describe(&self) -> String;

    fn length(&self) -> Bytes {
        self.range().length()
    }
}
