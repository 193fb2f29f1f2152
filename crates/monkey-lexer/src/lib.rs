//! Monkey lexer - tokenization for the Monkey scripting language.
//!
//! This crate provides the lexer for Monkey, which converts source code into
//! tokens for parsing. Tokens borrow their text from the input buffer.
//!
//! # Example
//!
//! ```
//! use monkey_lexer::{Lexer, TokenKind};
//!
//! let mut lexer = Lexer::new("let x = 42;");
//! let token = lexer.next_token();
//! assert_eq!(token.kind, TokenKind::Let);
//! assert_eq!(token.literal, "let");
//! ```

pub mod lexer;
pub mod token;

pub use lexer::{tokenize, tokenize_strict, Lexer, LexerError};
pub use token::{lookup_identifier, Position, Token, TokenKind};
