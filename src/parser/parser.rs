//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct, a cursor over the lazy token
//! stream holding exactly one token of lookahead, and the `parse` entry point.
//! The grammar itself lives in the `expr` and `stmt` modules as free
//! functions over the cursor.

use crate::{
    ast::statements::CodeBlock,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::{tokenize, Lexer},
        tokens::{Token, TokenKind},
    },
    MK_TOKEN,
};

use super::stmt::parse_codeblock;

/// The parsing state for one source text.
///
/// Owns the lexer it pulls tokens from and the current lookahead token.
/// When the lexer is exhausted the current token is a synthesized `eof`
/// positioned at the end of the input.
pub struct Parser<'a> {
    /// The token stream being consumed
    lexer: Lexer<'a>,
    /// The lookahead token
    current: Token,
}

impl<'a> Parser<'a> {
    /// Creates a new Parser and pulls the first token.
    ///
    /// # Arguments
    ///
    /// * `source` - The complete source text
    ///
    /// # Returns
    ///
    /// A Parser positioned on the first token, or the lex error that
    /// prevented reading it.
    pub fn new(source: &'a str) -> Result<Self, Error> {
        let mut lexer = tokenize(source);
        let current = next_token(&mut lexer)?;

        Ok(Parser { lexer, current })
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current.kind
    }

    /// Checks the current token's kind without consuming it.
    pub fn at(&self, kind: TokenKind) -> bool {
        self.current == kind
    }

    /// Advances to the next token and returns the previous one.
    pub fn advance(&mut self) -> Result<Token, Error> {
        let next = next_token(&mut self.lexer)?;
        Ok(std::mem::replace(&mut self.current, next))
    }

    /// Consumes the current token if it is of the given kind.
    ///
    /// # Returns
    ///
    /// Returns Ok(Some(Token)) with the consumed token, or Ok(None) if the
    /// current token is of another kind. Nothing is consumed in that case.
    pub fn accept_token(&mut self, kind: TokenKind) -> Result<Option<Token>, Error> {
        if self.at(kind) {
            Ok(Some(self.advance()?))
        } else {
            Ok(None)
        }
    }

    /// Like `accept_token`, but only reports whether a token was consumed.
    pub fn accept(&mut self, kind: TokenKind) -> Result<bool, Error> {
        Ok(self.accept_token(kind)?.is_some())
    }

    /// Expects a token of the specified kind.
    ///
    /// # Arguments
    ///
    /// * `expected_kind` - The expected TokenKind
    ///
    /// # Returns
    ///
    /// Returns Ok(Token) if the current token matches, otherwise an
    /// unexpected token error at the current token's position.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        match self.accept_token(expected_kind)? {
            Some(token) => Ok(token),
            None => Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    expected: expected_kind,
                    found: self.current.kind,
                },
                self.current.position,
            )),
        }
    }
}

fn next_token(lexer: &mut Lexer<'_>) -> Result<Token, Error> {
    match lexer.next() {
        Some(token) => token,
        None => Ok(MK_TOKEN!(TokenKind::Eof, None, lexer.current_position())),
    }
}

/// Parses a complete source text into its top-level code block.
///
/// # Arguments
///
/// * `source` - The complete source text
///
/// # Returns
///
/// The top-level statements, or the first lex or parse error encountered.
pub fn parse(source: &str) -> Result<CodeBlock, Error> {
    let mut parser = Parser::new(source)?;

    let block = parse_codeblock(&mut parser)?;
    parser.expect(TokenKind::Eof)?;

    Ok(block)
}
