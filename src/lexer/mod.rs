//! Lexical analysis module for the build description language.
//!
//! This module contains the lexer (tokenizer) that converts source text
//! into a lazily produced stream of tokens for parsing. It handles:
//!
//! - Tokenization of source text using an ordered table of regex patterns
//! - Recognition of keywords, identifiers, literals, and operators
//! - Line/column tracking, including across triple-quoted strings
//! - Implicit line continuation inside parentheses and brackets
//! - Comments and whitespace handling

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
