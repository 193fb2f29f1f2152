//! Token types for the Monkey lexer.

use std::fmt;

use crate::lexer::LexerError;

/// Token kinds for the Monkey language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Special
    Eof,
    Illegal,

    // Literals
    Ident,
    Int,

    // Operators
    Assign,
    Plus,
    Minus,
    Bang,
    Asterisk,
    Slash,

    // Comparison
    Lt,
    Gt,
    Eq,
    NotEq,

    // Punctuation
    Comma,
    Semicolon,
    LParen,
    RParen,
    LBrace,
    RBrace,

    // Keywords
    Function,
    Let,
    True,
    False,
    If,
    Else,
    Return,
}

impl TokenKind {
    /// Stable symbolic name of this kind, as printed by the REPL.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Eof => "EOF",
            TokenKind::Illegal => "ILLEGAL",
            TokenKind::Ident => "IDENT",
            TokenKind::Int => "INT",
            TokenKind::Assign => "=",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Bang => "!",
            TokenKind::Asterisk => "*",
            TokenKind::Slash => "/",
            TokenKind::Lt => "<",
            TokenKind::Gt => ">",
            TokenKind::Eq => "==",
            TokenKind::NotEq => "!=",
            TokenKind::Comma => ",",
            TokenKind::Semicolon => ";",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::Function => "FUNCTION",
            TokenKind::Let => "LET",
            TokenKind::True => "TRUE",
            TokenKind::False => "FALSE",
            TokenKind::If => "IF",
            TokenKind::Else => "ELSE",
            TokenKind::Return => "RETURN",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Look up an identifier to see if it's a keyword.
///
/// Matching is exact and case-sensitive: `lets` and `Let` are identifiers.
pub fn lookup_identifier(ident: &str) -> TokenKind {
    match ident {
        "fn" => TokenKind::Function,
        "let" => TokenKind::Let,
        "true" => TokenKind::True,
        "false" => TokenKind::False,
        "if" => TokenKind::If,
        "else" => TokenKind::Else,
        "return" => TokenKind::Return,
        _ => TokenKind::Ident,
    }
}

/// Position in source code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    /// Byte offset within the input.
    pub offset: usize,
    /// Byte offset of the start of the current line.
    pub line_start: usize,
    /// 0-indexed line number.
    pub line: usize,
    /// 0-indexed column number.
    pub column: usize,
}

impl Position {
    /// Create a new Position.
    pub fn new(offset: usize, line_start: usize, line: usize, column: usize) -> Self {
        Self {
            offset,
            line_start,
            line,
            column,
        }
    }

    /// Returns the 1-indexed line number.
    pub fn line_number(&self) -> usize {
        self.line + 1
    }

    /// Returns the 1-indexed column number.
    pub fn column_number(&self) -> usize {
        self.column + 1
    }

    /// Advance this position by n bytes on the same line.
    pub fn advance(&self, n: usize) -> Self {
        Self {
            offset: self.offset + n,
            line_start: self.line_start,
            line: self.line,
            column: self.column + n,
        }
    }
}

/// A token produced by the lexer.
///
/// The literal borrows from the lexer's input, so tokens cannot outlive the
/// buffer they were scanned from. `Eof` and `Illegal` tokens carry an empty
/// literal; every other kind carries exactly the source bytes it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    /// The kind of token.
    pub kind: TokenKind,
    /// The source text of the token.
    pub literal: &'a str,
    /// Start position in source.
    pub start: Position,
    /// End position in source (exclusive).
    pub end: Position,
}

impl<'a> Token<'a> {
    /// Create a new Token.
    pub fn new(kind: TokenKind, literal: &'a str, start: Position, end: Position) -> Self {
        Self {
            kind,
            literal,
            start,
            end,
        }
    }

    /// Returns true if this is the end-of-input token.
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }

    /// Build the error describing an `Illegal` token scanned from `input`.
    /// Pass `str::as_bytes` for text input.
    ///
    /// Returns `None` for any other kind, or if `input` is not the buffer the
    /// token was scanned from.
    pub fn illegal_error(&self, input: &[u8]) -> Option<LexerError> {
        if self.kind != TokenKind::Illegal {
            return None;
        }
        let byte = *input.get(self.start.offset)?;
        Some(LexerError::IllegalCharacter {
            byte,
            line: self.start.line_number(),
            column: self.start.column_number(),
        })
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?})", self.kind, self.literal)
    }
}
