//! Renders positional diagnostics against the source they point into.
use crate::{error::PositionalError, source_map::find_line};

/// Renders `err` as the offending line, prefixed with a line-number gutter,
/// followed by a caret marker under the reported range:
///
/// ```text
/// 1| let a = #;
///  |         ^--- Skipped unrecognised character '#'
/// ```
///
/// Ranges that run past the end of their first line are cut off there.
pub fn describe(err: &impl PositionalError, source: &str) -> String {
    let range = err.range();
    let line = find_line(source, range.start());
    let line_range = line.range();
    let line_text = line_range.lookup(source);

    let line_start = usize::from(line_range.start());
    let line_end = usize::from(line_range.end());
    let start = usize::from(range.start()) - line_start;
    let marked_end = usize::from(range.start()) + usize::from(err.length());
    let end = (marked_end.min(line_end) - line_start).max(start);

    let padding = line_text[..start].chars().count();
    let markers = line_text[start..end]
        .trim_end_matches(['\r', '\n'])
        .chars()
        .count()
        .max(1);

    fn pad_char(ch: char, times: usize) -> String {
        std::iter::repeat(ch).take(times).collect()
    }

    let gutter = format!("{}", line.line_no());

    let source_line = format!("{}| {}", gutter, line.for_display());
    let marker_line = format!(
        "{}| {}{}--- {}",
        pad_char(' ', gutter.len()),
        pad_char(' ', padding),
        pad_char('^', markers),
        err.describe()
    );

    [source_line, marker_line].join("\n")
}

#[cfg(test)]
mod tests {
    use crate::{
        lexer::lex,
        span::{Bytes, Span},
    };

    use super::*;

    fn describe_first(source: &str) -> String {
        let lexed = lex(source);
        let diagnostic = lexed
            .diagnostics
            .first()
            .expect("Expected the source to produce a diagnostic");
        describe(diagnostic, source)
    }

    #[test]
    fn marks_skipped_character() {
        assert_eq!(
            describe_first("let a = #;"),
            "1| let a = #;\n |         ^--- Skipped unrecognised character '#'"
        );
    }

    #[test]
    fn marks_character_on_later_line() {
        assert_eq!(
            describe_first("let a = 1;\nlet b = a @ 2;"),
            "2| let b = a @ 2;\n |           ^--- Skipped unrecognised character '@'"
        );
    }

    #[test]
    fn marks_unterminated_string_to_end_of_line() {
        assert_eq!(
            describe_first("s = \"ab\nc"),
            "1| s = \"ab\n |     ^^^--- Unterminated string literal"
        );
    }

    struct Marked(Span);

    impl PositionalError for Marked {
        fn range(&self) -> Span {
            self.0
        }

        fn describe(&self) -> String {
            "marked".to_string()
        }
    }

    #[test]
    fn marker_width_follows_range_length() {
        let marked = Marked(Span::new(Bytes::new(4), Bytes::new(7)));

        assert_eq!(marked.length(), Bytes::new(3));
        assert_eq!(
            describe(&marked, "let abc = 1;"),
            "1| let abc = 1;\n |     ^^^--- marked"
        );
    }

    #[test]
    fn padding_counts_characters_not_bytes() {
        assert_eq!(
            describe_first("é é"),
            "1| é é\n | ^--- Skipped unrecognised character 'é'"
        );
    }
}
