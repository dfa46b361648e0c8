//! The scanning state machine that turns a source string into tokens.
use log::{debug, info, trace, warn};

use crate::span::*;

use super::{char_ext::*, char_lexer::*, diagnostic::*, options::*, tokens::*};

/// The run currently being accumulated. Every variant that accumulates
/// text also remembers where its run started, so the finished token can
/// carry a span.
#[derive(Debug)]
enum ScanState {
    Nothing,
    Identifier { start: Bytes, content: String },
    Integer { start: Bytes, content: String },
    /// `start` points at the opening quote, which is not part of `content`.
    String { start: Bytes, content: String },
}

/// Everything a lexer session produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lexed {
    pub tokens: Vec<Token>,
    pub diagnostics: Vec<LexDiagnostic>,
}

struct Lexer<'s> {
    lexer: CharLexer<'s>,
    options: LexOptions,
    state: ScanState,
    tokens: Vec<Token>,
    diagnostics: Vec<LexDiagnostic>,
}

/// Tokenizes `source`, silently skipping anything that is not part of the
/// language. Never fails.
pub fn tokenize(source: &str) -> Vec<Token> {
    lex(source).tokens
}

/// Tokenizes `source` with default options, keeping the diagnostics.
pub fn lex(source: &str) -> Lexed {
    lex_with(source, LexOptions::default())
}

pub fn lex_with(source: &str, options: LexOptions) -> Lexed {
    Lexer::new(source, options).run()
}

impl<'s> Lexer<'s> {
    fn new(source: &'s str, options: LexOptions) -> Self {
        Self {
            lexer: CharLexer::new(source),
            options,
            state: ScanState::Nothing,
            tokens: vec![],
            diagnostics: vec![],
        }
    }

    /// Drives the state machine until the input is exhausted, then consumes
    /// the lexer, producing the tokens and diagnostics it collected.
    fn run(mut self) -> Lexed {
        while !self.lexer.is_finished() {
            self.step();
        }
        self.end_of_input();

        info!(
            "Lexed {} bytes into {} tokens ({} diagnostics)",
            self.lexer.byte_position(),
            self.tokens.len(),
            self.diagnostics.len()
        );

        Lexed {
            tokens: self.tokens,
            diagnostics: self.diagnostics,
        }
    }

    /// Performs a single scan step. Each step either consumes at least one
    /// character or moves out of [`ScanState::Nothing`] into a run whose
    /// next step will consume one.
    fn step(&mut self) {
        let state = std::mem::replace(&mut self.state, ScanState::Nothing);
        self.state = match state {
            ScanState::Nothing => self.eat_nothing(),
            ScanState::Identifier { start, content } => self.eat_identifier(start, content),
            ScanState::Integer { start, content } => self.eat_integer(start, content),
            ScanState::String { start, content } => self.eat_string(start, content),
        };
    }

    fn eat_nothing(&mut self) -> ScanState {
        let start = self.lexer.byte_position();
        let Some(ch) = self.lexer.peek() else {
            return ScanState::Nothing;
        };

        match ch {
            ';' => {
                self.lexer.try_next();
                self.emit(start, TokenKind::Eoe);
                ScanState::Nothing
            }
            c if c.is_identifier_start() => {
                trace!("Identifier run at {start}");
                ScanState::Identifier {
                    start,
                    content: String::new(),
                }
            }
            c if c.is_ascii_digit() => {
                trace!("Integer run at {start}");
                ScanState::Integer {
                    start,
                    content: String::new(),
                }
            }
            c if c.is_whitespace() => {
                self.lexer.try_next();
                ScanState::Nothing
            }
            '=' => {
                self.lexer.try_next();
                self.emit(start, TokenKind::Equal);
                ScanState::Nothing
            }
            '"' => {
                self.lexer.try_next();
                trace!("String run at {start}");
                ScanState::String {
                    start,
                    content: String::new(),
                }
            }
            other => {
                self.lexer.try_next();
                self.skip(start, other);
                ScanState::Nothing
            }
        }
    }

    fn eat_identifier(&mut self, start: Bytes, mut content: String) -> ScanState {
        let Some(ch) = self.lexer.try_next() else {
            return ScanState::Identifier { start, content };
        };
        content.push(ch);

        if next_matches(self.lexer.peek(), CharExt::is_word_class) {
            return ScanState::Identifier { start, content };
        }

        self.finish_identifier(start, content);
        ScanState::Nothing
    }

    fn eat_integer(&mut self, start: Bytes, mut content: String) -> ScanState {
        let Some(ch) = self.lexer.try_next() else {
            return ScanState::Integer { start, content };
        };
        content.push(ch);

        if next_matches(self.lexer.peek(), char::is_ascii_digit) {
            return ScanState::Integer { start, content };
        }

        self.emit(start, TokenKind::Integer(content));
        ScanState::Nothing
    }

    fn eat_string(&mut self, start: Bytes, mut content: String) -> ScanState {
        // Only reachable with empty content: a non-empty run swallows its
        // closing quote in the same step that appends its last character.
        if self.lexer.recognise('"') {
            self.emit(start, TokenKind::String(content));
            return ScanState::Nothing;
        }

        let Some(ch) = self.lexer.try_next() else {
            return ScanState::String { start, content };
        };
        content.push(ch);

        if self.lexer.recognise('"') {
            self.emit(start, TokenKind::String(content));
            return ScanState::Nothing;
        }

        ScanState::String { start, content }
    }

    /// Settles whatever run is still open once the input has been consumed.
    fn end_of_input(&mut self) {
        let state = std::mem::replace(&mut self.state, ScanState::Nothing);
        match state {
            // Identifier and integer runs are always closed by their lookahead,
            // which never matches at the end of the input.
            ScanState::Nothing | ScanState::Identifier { .. } | ScanState::Integer { .. } => {}
            ScanState::String { start, content } => {
                let diagnostic = LexDiagnostic {
                    range: Span::new(start, self.lexer.byte_position()),
                    kind: DiagnosticKind::UnterminatedString,
                };
                warn!("{} at {:?}", diagnostic, diagnostic.range);
                self.diagnostics.push(diagnostic);

                match self.options.unterminated_strings {
                    UnterminatedPolicy::Emit => self.emit(start, TokenKind::String(content)),
                    UnterminatedPolicy::Drop => {
                        debug!("Dropped unterminated string {:?}", content)
                    }
                }
            }
        }
    }

    fn finish_identifier(&mut self, start: Bytes, content: String) {
        let kind = match Keyword::lookup(&content) {
            Some(keyword) => TokenKind::Keyword(keyword),
            None => TokenKind::Identifier(content),
        };
        self.emit(start, kind);
    }

    /// Appends a token spanning from `start` up to the lexer's current position.
    fn emit(&mut self, start: Bytes, kind: TokenKind) {
        let token = Token {
            source: Span::new(start, self.lexer.byte_position()),
            kind,
        };
        debug!("Emit {} at {:?}", token, token.source);
        self.tokens.push(token);
    }

    /// Records a character that was passed over at `start`.
    fn skip(&mut self, start: Bytes, ch: char) {
        let diagnostic = LexDiagnostic {
            range: Span::new(start, self.lexer.byte_position()),
            kind: DiagnosticKind::SkippedCharacter(ch),
        };
        debug!("{} at {:?}", diagnostic, diagnostic.range);
        self.diagnostics.push(diagnostic);
    }
}
