//! Error types for the fallible edges of the lexer.
//!
//! Scanning itself never fails: unrecognised characters become `Illegal`
//! tokens. This module covers the surfaces that can:
//!
//! - Strict tokenizing, which rejects the first unrecognised character
//! - Reading source text for the command-line tool

pub mod errors;

#[cfg(test)]
mod tests;
