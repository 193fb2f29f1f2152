//! Monkey - the front end of a small scripting language.
//!
//! Source text is turned into tokens by [`lexer`]. A parser does not exist
//! yet, so the main consumer of this crate is the REPL, which tokenizes one
//! line at a time and prints the result.
//!
//! # Example
//!
//! ```
//! use monkey::{lex_line, TokenKind};
//!
//! let tokens = lex_line("let five = 5;");
//! assert_eq!(tokens[0].kind, TokenKind::Let);
//! assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
//! ```

pub use monkey_lexer as lexer;

// Re-export commonly used types
pub use monkey_lexer::{lookup_identifier, Lexer, LexerError, Position, Token, TokenKind};

/// How a driver treats characters the lexer does not recognize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IllegalMode {
    /// Keep going and hand back `Illegal` tokens.
    #[default]
    Report,
    /// Stop at the first illegal character and return an error.
    Reject,
}

/// Options for tokenizing driver input.
#[derive(Debug, Clone, Copy, Default)]
pub struct LexConfig {
    pub illegal: IllegalMode,
}

/// Tokenize a single line of input, up to and including `Eof`.
///
/// Never fails; unrecognized characters come back as `Illegal` tokens.
///
/// ```
/// use monkey::{lex_line, TokenKind};
///
/// let tokens = lex_line("1 @ 2");
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
/// assert_eq!(kinds, [TokenKind::Int, TokenKind::Illegal, TokenKind::Int, TokenKind::Eof]);
/// ```
pub fn lex_line(line: &str) -> Vec<Token<'_>> {
    let tokens = monkey_lexer::tokenize(line);
    tracing::debug!("lexed {} tokens from {} bytes", tokens.len(), line.len());
    tokens
}

/// Tokenize a single line of input with the given options.
///
/// ```
/// use monkey::{lex_line_with, IllegalMode, LexConfig};
///
/// let config = LexConfig { illegal: IllegalMode::Reject };
/// let err = lex_line_with("let x = @", config).unwrap_err();
/// assert_eq!(err.to_string(), "Illegal character '@' at line 1, column 9");
/// ```
pub fn lex_line_with(line: &str, config: LexConfig) -> Result<Vec<Token<'_>>, LexerError> {
    lex_bytes_with(line.as_bytes(), config)
}

/// Tokenize raw source bytes with the given options.
///
/// Bytes that are not ASCII, including invalid UTF-8, are illegal
/// characters.
///
/// ```
/// use monkey::{lex_bytes_with, LexConfig, TokenKind};
///
/// let tokens = lex_bytes_with(b"x \xFF", LexConfig::default()).unwrap();
/// assert_eq!(tokens[1].kind, TokenKind::Illegal);
/// ```
pub fn lex_bytes_with(source: &[u8], config: LexConfig) -> Result<Vec<Token<'_>>, LexerError> {
    let tokens = match config.illegal {
        IllegalMode::Report => monkey_lexer::tokenize(source),
        IllegalMode::Reject => monkey_lexer::tokenize_strict(source)?,
    };
    tracing::debug!("lexed {} tokens from {} bytes", tokens.len(), source.len());
    Ok(tokens)
}
