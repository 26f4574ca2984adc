//! Lexical analysis module.
//!
//! Converts source text into a stream of tokens. It handles:
//!
//! - The closed token model and the keyword lookup table
//! - A single-pass, one-character-lookahead scanner
//! - Byte spans for every token, used in diagnostics

pub mod lexer;
pub mod tokens;
