//! Functionality for looking up the line that contains a source position.
use crate::span::{Bytes, Span};

/// Finds the line containing `target_position`.
///
/// Positions at or past the end of the source resolve to the last line, so a
/// diagnostic pointing at the end of input still has a line to show.
pub fn find_line(source: &str, target_position: Bytes) -> LineContext<'_> {
    let lines = inclusive_split_lines(source);
    let last_line = lines.len();

    let mut position = Bytes::new(0);
    for (line_idx, line) in lines.into_iter().enumerate() {
        let end_position = position + line.len();
        let is_last = line_idx + 1 == last_line;
        if target_position < end_position || is_last {
            return LineContext {
                source: line,
                range: Span::new(position, end_position),
                line_no: line_idx + 1,
            };
        }
        position = end_position;
    }

    // `inclusive_split_lines` always yields at least one line.
    LineContext {
        line_no: 1,
        range: Span::zero(),
        source: "",
    }
}

fn inclusive_split_lines(source: &str) -> Vec<&str> {
    let mut seen_lines = vec![];
    let mut start = 0;
    let mut position = 0;

    let mut char_enum = source.chars().peekable();

    while let Some(ch) = char_enum.next() {
        position += ch.len_utf8();

        // If we find an \r followed by an \n, delay recognising the line until the next iteration.
        if ch == '\n' || (ch == '\r' && char_enum.peek() != Some(&'\n')) {
            seen_lines.push(&source[start..position]);
            start = position;
        }
    }
    seen_lines.push(&source[start..position]);

    seen_lines
}

/// Contains a slice pointing to a single line in the program,
/// enhanced with contextual information describing its line number and byte range.
pub struct LineContext<'a> {
    source: &'a str,
    range: Span,
    line_no: usize,
}
impl LineContext<'_> {
    pub fn for_display(&self) -> String {
        self.source.replace(['\r', '\n'], "")
    }

    pub fn range(&self) -> Span {
        self.range
    }

    pub fn line_no(&self) -> usize {
        self.line_no
    }
}
