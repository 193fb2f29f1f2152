//! Lexer for the Monkey scripting language.

use crate::token::{lookup_identifier, Position, Token, TokenKind};
use thiserror::Error;

/// Errors a driver can raise for input the lexer could not classify.
///
/// The lexer itself never fails; it emits [`TokenKind::Illegal`] tokens and
/// keeps going. [`tokenize_strict`] and [`Token::illegal_error`] turn those
/// tokens into errors for callers that want to reject the input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LexerError {
    #[error("Illegal character '{}' at line {line}, column {column}", .byte.escape_ascii())]
    IllegalCharacter { byte: u8, line: usize, column: usize },
}

/// Lexer tokenizes Monkey source code.
///
/// Operates on bytes: only 7-bit ASCII is meaningful, and every other byte
/// is reported as its own `Illegal` token. The input does not have to be
/// valid UTF-8.
pub struct Lexer<'a> {
    bytes: &'a [u8],
    position: usize,
    read_position: usize,
    // 0 once the cursor has run past the last byte.
    ch: u8,
    line: usize,
    line_start: usize,
    token_start: Position,
    // Set once the iterator has yielded Eof.
    finished: bool,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given input.
    pub fn new(input: &'a str) -> Self {
        Self::from_bytes(input.as_bytes())
    }

    /// Create a new lexer over raw source bytes.
    pub fn from_bytes(bytes: &'a [u8]) -> Self {
        let mut lexer = Self {
            bytes,
            position: 0,
            read_position: 0,
            ch: 0,
            line: 0,
            line_start: 0,
            token_start: Position::default(),
            finished: false,
        };
        lexer.read_char();
        lexer
    }

    /// Byte offset of the cursor.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Get the current position.
    fn current_position(&self) -> Position {
        Position::new(
            self.position,
            self.line_start,
            self.line,
            self.position - self.line_start,
        )
    }

    fn is_at_end(&self) -> bool {
        self.position >= self.bytes.len()
    }

    /// Read the next byte.
    fn read_char(&mut self) {
        if self.read_position >= self.bytes.len() {
            self.ch = 0;
            self.position = self.bytes.len();
            self.read_position = self.bytes.len() + 1;
            return;
        }
        self.ch = self.bytes[self.read_position];
        self.position = self.read_position;
        self.read_position += 1;
    }

    /// Peek at the next byte without consuming it.
    fn peek_char(&self) -> u8 {
        self.bytes.get(self.read_position).copied().unwrap_or(0)
    }

    /// Skip spaces, tabs, carriage returns and newlines.
    fn skip_whitespace(&mut self) {
        while !self.is_at_end() && matches!(self.ch, b' ' | b'\t' | b'\r' | b'\n') {
            if self.ch == b'\n' {
                self.line += 1;
                self.line_start = self.read_position;
            }
            self.read_char();
        }
    }

    /// Source text from the start of the current token up to the cursor.
    ///
    /// Only called after recognizing ASCII bytes, so the slice is valid UTF-8.
    fn token_text(&self) -> &'a str {
        let bytes = self
            .bytes
            .get(self.token_start.offset..self.position)
            .unwrap_or_default();
        std::str::from_utf8(bytes).unwrap_or("")
    }

    /// Create a token ending at the cursor.
    fn make_token(&self, kind: TokenKind, literal: &'a str) -> Token<'a> {
        let token = Token::new(kind, literal, self.token_start, self.current_position());
        tracing::trace!("scanned {} at offset {}", token, token.start.offset);
        token
    }

    /// Get the next token.
    ///
    /// Once the end of input is reached every further call returns `Eof`
    /// without moving the cursor.
    pub fn next_token(&mut self) -> Token<'a> {
        self.skip_whitespace();
        self.token_start = self.current_position();

        if self.is_at_end() {
            return self.make_token(TokenKind::Eof, "");
        }

        match self.ch {
            b'=' => self.read_pair(TokenKind::Assign, TokenKind::Eq),
            b'!' => self.read_pair(TokenKind::Bang, TokenKind::NotEq),
            ch if is_letter(ch) => self.read_identifier(),
            ch if ch.is_ascii_digit() => self.read_number(),
            _ => match self.read_operator() {
                Some(tok) => tok,
                None => self.read_illegal(),
            },
        }
    }

    /// Read `x` or `x=`, where `x` is the current byte.
    fn read_pair(&mut self, single: TokenKind, with_equals: TokenKind) -> Token<'a> {
        let kind = if self.peek_char() == b'=' {
            self.read_char();
            with_equals
        } else {
            single
        };
        self.read_char();
        self.make_token(kind, self.token_text())
    }

    /// Read an identifier or keyword.
    fn read_identifier(&mut self) -> Token<'a> {
        while !self.is_at_end() && is_letter(self.ch) {
            self.read_char();
        }
        let literal = self.token_text();
        self.make_token(lookup_identifier(literal), literal)
    }

    /// Read a run of decimal digits.
    fn read_number(&mut self) -> Token<'a> {
        while !self.is_at_end() && self.ch.is_ascii_digit() {
            self.read_char();
        }
        self.make_token(TokenKind::Int, self.token_text())
    }

    /// Read a single-character operator or punctuation token.
    fn read_operator(&mut self) -> Option<Token<'a>> {
        let kind = match self.ch {
            b'+' => TokenKind::Plus,
            b'-' => TokenKind::Minus,
            b'*' => TokenKind::Asterisk,
            b'/' => TokenKind::Slash,
            b'<' => TokenKind::Lt,
            b'>' => TokenKind::Gt,
            b',' => TokenKind::Comma,
            b';' => TokenKind::Semicolon,
            b'(' => TokenKind::LParen,
            b')' => TokenKind::RParen,
            b'{' => TokenKind::LBrace,
            b'}' => TokenKind::RBrace,
            _ => return None,
        };
        self.read_char();
        Some(self.make_token(kind, self.token_text()))
    }

    /// Consume one unrecognized byte.
    fn read_illegal(&mut self) -> Token<'a> {
        tracing::debug!(
            "illegal byte {:#04x} at offset {} (line {}, column {})",
            self.ch,
            self.token_start.offset,
            self.token_start.line_number(),
            self.token_start.column_number(),
        );
        self.read_char();
        self.make_token(TokenKind::Illegal, "")
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    /// Yields every token up to and including the first `Eof`.
    fn next(&mut self) -> Option<Token<'a>> {
        if self.finished {
            return None;
        }
        let token = self.next_token();
        self.finished = token.is_eof();
        Some(token)
    }
}

/// Check if a byte is a letter (for identifiers).
fn is_letter(ch: u8) -> bool {
    ch.is_ascii_alphabetic()
}

/// Tokenize an input into a vector of tokens ending with `Eof`.
///
/// Accepts anything viewable as bytes, such as `&str` or `&[u8]`.
pub fn tokenize<I: AsRef<[u8]> + ?Sized>(input: &I) -> Vec<Token<'_>> {
    Lexer::from_bytes(input.as_ref()).collect()
}

/// Tokenize an input, failing on the first illegal character.
pub fn tokenize_strict<I: AsRef<[u8]> + ?Sized>(input: &I) -> Result<Vec<Token<'_>>, LexerError> {
    let bytes = input.as_ref();
    let mut tokens = Vec::new();
    for tok in Lexer::from_bytes(bytes) {
        if let Some(err) = tok.illegal_error(bytes) {
            return Err(err);
        }
        tokens.push(tok);
    }
    Ok(tokens)
}
