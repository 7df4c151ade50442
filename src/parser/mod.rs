//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the recursive-descent parser that pulls tokens one
//! at a time from the lexer and builds a syntax tree. It handles:
//!
//! - Statement and block parsing (`if`/`elif`/`else`/`endif`)
//! - Expression parsing across a ladder of precedence levels
//! - Call and method call argument lists, including keyword arguments
//!
//! Parsing is all-or-nothing: the first error aborts the parse.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
