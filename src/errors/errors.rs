use std::fmt::Display;

use thiserror::Error;

use crate::{lexer::tokens::TokenKind, Position};

/// The phase that produced an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Lex,
    Parse,
}

#[derive(Error, Debug, Clone, PartialEq)]
#[error("{internal_error}")]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> Position {
        self.position
    }

    pub fn get_internal_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn kind(&self) -> ErrorKind {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } | ErrorImpl::NumberParseError { .. } => {
                ErrorKind::Lex
            }
            ErrorImpl::UnexpectedToken { .. } | ErrorImpl::KeywordArgumentTarget => {
                ErrorKind::Parse
            }
        }
    }

    /// The token kind an `expect` was looking for, if this is an unexpected token error.
    pub fn expected(&self) -> Option<TokenKind> {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { expected, .. } => Some(*expected),
            _ => None,
        }
    }

    /// The token kind that was found instead, if this is an unexpected token error.
    pub fn found(&self) -> Option<TokenKind> {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { found, .. } => Some(*found),
            _ => None,
        }
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::KeywordArgumentTarget => "KeywordArgumentTarget",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::NumberParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                token
            )),
            ErrorImpl::UnexpectedToken { expected, found } => match expected {
                TokenKind::RParen | TokenKind::RBracket => ErrorTip::Suggestion(format!(
                    "Found `{}` where `{}` was expected, is a bracket left unclosed?",
                    found, expected
                )),
                TokenKind::Endif => ErrorTip::Suggestion(String::from(
                    "Every `if` block must be closed with `endif`",
                )),
                TokenKind::Eol => ErrorTip::Suggestion(format!(
                    "Found `{}` where the line should end, did you miss a comma or operator?",
                    found
                )),
                _ => ErrorTip::Suggestion(format!(
                    "Unexpected token: `{}`, expected `{}`",
                    found, expected
                )),
            },
            ErrorImpl::KeywordArgumentTarget => ErrorTip::Suggestion(String::from(
                "Keyword arguments are written as `name: value` where `name` is an identifier",
            )),
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("unrecognised token: '{token}'")]
    UnrecognisedToken { token: String },
    #[error("error parsing number: '{token}'")]
    NumberParseError { token: String },
    #[error("expecting {expected} got {found}")]
    UnexpectedToken {
        expected: TokenKind,
        found: TokenKind,
    },
    #[error("keyword argument must be a plain identifier")]
    KeywordArgumentTarget,
}
