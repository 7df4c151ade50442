//! Error types and error handling for the lexer and parser.
//!
//! This module defines the error types produced while turning source text
//! into a syntax tree. It includes:
//!
//! - Error structures with source position information
//! - Specific error variants for the lexing and parsing phases
//! - Error formatting and display functionality
//! - Helpful error messages and suggestions

pub mod errors;
