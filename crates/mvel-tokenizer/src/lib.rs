//! Hand-written tokenizer for MVEL expressions and templates.
//!
//! Tokens are produced lazily, one per call, in strict offset order. The
//! tokenizer never fails: input that matches no rule becomes a one-character
//! `ERROR` token, so the scan position always moves forward.

mod cursor;

use std::iter::FusedIterator;

use cursor::Cursor;
pub use mvel_syntax::SyntaxKind;
use mvel_syntax::SyntaxKind::*;
use text_size::{TextLen, TextRange, TextSize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Token {
    pub kind: SyntaxKind,
    /// Absolute offsets into the buffer, not relative to the window.
    pub range: TextRange,
}

/// Tokenizes `window` of `text`.
///
/// # Panics
///
/// If `window` is out of bounds or does not fall on `char` boundaries.
pub fn tokenize(text: &str, window: TextRange) -> Tokenizer<'_> {
    Tokenizer::with_window(text, window)
}

/// Restartable scanner. Cloning it snapshots the scan position.
#[derive(Clone)]
pub struct Tokenizer<'a> {
    text: &'a str,
    end: TextSize,
    cursor: Cursor<'a>,
}

impl<'a> Tokenizer<'a> {
    pub fn new(text: &'a str) -> Self {
        Self::with_window(text, TextRange::up_to(text.text_len()))
    }

    pub fn with_window(text: &'a str, window: TextRange) -> Self {
        Self { text, end: window.end(), cursor: Cursor::new(&text[window]) }
    }

    /// Current scan position.
    pub fn offset(&self) -> TextSize {
        self.end - self.cursor.len()
    }

    fn range(&self) -> TextRange {
        let end = self.offset();
        TextRange::new(end - self.cursor.pos_within_token(), end)
    }

    fn text(&self) -> &'a str {
        &self.text[self.range()]
    }

    /// Scans the next token. Once the window is exhausted this keeps
    /// returning an empty `EOF` token at the window's end.
    pub fn next_token(&mut self) -> Token {
        let kind = self.syntax_kind();
        let range = self.range();
        self.cursor.reset_pos_within_token();

        Token { kind, range }
    }

    fn syntax_kind(&mut self) -> SyntaxKind {
        if self.cursor.is_eof() {
            return EOF;
        }

        match self.cursor.advance() {
            c if is_whitespace(c) => {
                self.cursor.advance_while(is_whitespace);
                WHITESPACE
            }
            '/' if self.cursor.matches('/') => {
                self.cursor.advance_while(|c| c != '\n');
                LINE_COMMENT
            }
            '/' if self.cursor.matches('*') => {
                self.cursor.advance();
                self.block_comment()
            }
            quote @ ('"' | '\'') => self.string(quote),
            '0'..='9' => {
                self.cursor.advance_while(|c| c.is_ascii_digit());
                if self.cursor.matches('.') {
                    self.cursor.advance();
                    self.cursor.advance_while(|c| c.is_ascii_digit());
                }
                self.number_tail()
            }
            '.' if self.cursor.peek().is_ascii_digit() => {
                self.cursor.advance_while(|c| c.is_ascii_digit());
                self.number_tail()
            }
            '=' => self.pair('=', EQ_EQ, EQ),
            '!' => self.pair('=', BANG_EQ, BANG),
            '<' => self.pair('=', LT_EQ, LT),
            '>' => self.pair('=', GT_EQ, GT),
            '&' => self.pair('&', AMP_AMP, ERROR),
            '|' => self.pair('|', PIPE_PIPE, ERROR),
            '+' => PLUS,
            '-' => MINUS,
            '*' => STAR,
            '/' => SLASH,
            '%' => PERCENT,
            '.' => DOT,
            ',' => COMMA,
            ';' => SEMICOLON,
            '(' => LEFT_PAREN,
            ')' => RIGHT_PAREN,
            '[' => LEFT_BRACKET,
            ']' => RIGHT_BRACKET,
            '{' => LEFT_BRACE,
            '}' => RIGHT_BRACE,
            ':' => COLON,
            '?' => QUESTION,
            '@' => self.markup(),
            'A'..='Z' | 'a'..='z' | '_' | '$' => {
                self.cursor.advance_while(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$');
                SyntaxKind::from_keyword(self.text()).unwrap_or(NAME)
            }
            _ => ERROR,
        }
    }

    fn pair(&mut self, second: char, long: SyntaxKind, short: SyntaxKind) -> SyntaxKind {
        if self.cursor.matches(second) {
            self.cursor.advance();
            long
        } else {
            short
        }
    }

    /// Body of a block comment after `/*`. Unterminated comments run to the
    /// end of the window and become an error.
    fn block_comment(&mut self) -> SyntaxKind {
        while !self.cursor.is_eof() {
            if self.cursor.advance() == '*' && self.cursor.matches('/') {
                self.cursor.advance();
                return BLOCK_COMMENT;
            }
        }
        ERROR
    }

    /// Body of a string literal after its opening quote. Unterminated strings
    /// run to the end of the window and become an error.
    fn string(&mut self, quote: char) -> SyntaxKind {
        while !self.cursor.is_eof() {
            match self.cursor.advance() {
                '\\' => {
                    self.cursor.advance();
                }
                c if c == quote => return STRING,
                _ => {}
            }
        }
        ERROR
    }

    /// Optional exponent and type suffix of a number whose mantissa was
    /// already consumed.
    fn number_tail(&mut self) -> SyntaxKind {
        if matches!(self.cursor.peek(), 'e' | 'E') {
            let sign_len = match (self.cursor.second(), self.cursor.third()) {
                (c, _) if c.is_ascii_digit() => Some(1),
                ('+' | '-', c) if c.is_ascii_digit() => Some(2),
                _ => None,
            };

            if let Some(len) = sign_len {
                for _ in 0..len {
                    self.cursor.advance();
                }
                self.cursor.advance_while(|c| c.is_ascii_digit());
            }
        }

        if matches!(self.cursor.peek(), 'f' | 'F' | 'd' | 'D' | 'l' | 'L') {
            self.cursor.advance();
        }

        NUMBER
    }

    /// Template markup after `@`: a keyword opener such as `@code{`, the
    /// anonymous `@{`, or a lone `@`.
    fn markup(&mut self) -> SyntaxKind {
        let start = self.range().start();
        let rest = &self.text[TextRange::new(start, self.end)];

        if let Some((kind, len)) = SyntaxKind::from_markup(rest) {
            // Openers are ASCII, so bytes and chars agree.
            for _ in 1..len {
                self.cursor.advance();
            }
            return kind;
        }

        if self.cursor.matches('{') {
            self.cursor.advance();
            MARKUP_OPEN
        } else {
            AT
        }
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let token = self.next_token();
        (token.kind != EOF).then_some(token)
    }
}

impl FusedIterator for Tokenizer<'_> {}

fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0B' | '\x0C')
}
