use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Position;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("true", TokenKind::True);
        map.insert("false", TokenKind::False);
        map.insert("if", TokenKind::If);
        map.insert("else", TokenKind::Else);
        map.insert("elif", TokenKind::Elif);
        map.insert("endif", TokenKind::Endif);
        map.insert("and", TokenKind::And);
        map.insert("or", TokenKind::Or);
        map.insert("not", TokenKind::Not);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Id,
    Number,
    String,

    LParen,
    RParen,
    LBracket,
    RBracket,
    Comma,
    Dot,
    Colon,

    Assign,  // ==
    Equal,   // =
    NEquals, // !=

    Less,
    LessEquals,
    Greater,
    GreaterEquals,

    Plus,
    Minus,
    Star,
    Slash,
    Percent,

    Eol,
    Eof,

    // Reserved
    True,
    False,
    If,
    Else,
    Elif,
    Endif,
    And,
    Or,
    Not,
}

impl TokenKind {
    /// The stable lowercase name of the kind, as used in diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Id => "id",
            TokenKind::Number => "number",
            TokenKind::String => "string",
            TokenKind::LParen => "lparen",
            TokenKind::RParen => "rparen",
            TokenKind::LBracket => "lbracket",
            TokenKind::RBracket => "rbracket",
            TokenKind::Comma => "comma",
            TokenKind::Dot => "dot",
            TokenKind::Colon => "colon",
            TokenKind::Assign => "assign",
            TokenKind::Equal => "equal",
            TokenKind::NEquals => "nequals",
            TokenKind::Less => "lt",
            TokenKind::LessEquals => "le",
            TokenKind::Greater => "gt",
            TokenKind::GreaterEquals => "ge",
            TokenKind::Plus => "plus",
            TokenKind::Minus => "minus",
            TokenKind::Star => "star",
            TokenKind::Slash => "slash",
            TokenKind::Percent => "percent",
            TokenKind::Eol => "eol",
            TokenKind::Eof => "eof",
            TokenKind::True => "true",
            TokenKind::False => "false",
            TokenKind::If => "if",
            TokenKind::Else => "else",
            TokenKind::Elif => "elif",
            TokenKind::Endif => "endif",
            TokenKind::And => "and",
            TokenKind::Or => "or",
            TokenKind::Not => "not",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Literal payload carried by identifier, number and string tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenValue {
    Integer(i64),
    String(String),
}

impl Display for TokenValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenValue::Integer(value) => write!(f, "{}", value),
            TokenValue::String(value) => write!(f, "{:?}", value),
        }
    }
}

/// A lexed token.
///
/// Two tokens are equal only when kind, position and payload all match.
/// Compare against a `TokenKind` to test the kind alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub position: Position,
    pub value: Option<TokenValue>,
}

impl PartialEq<TokenKind> for Token {
    fn eq(&self, other: &TokenKind) -> bool {
        self.kind == *other
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.value {
            Some(value) => write!(
                f,
                "{} ({}) line {} column {}",
                self.kind, value, self.position.line, self.position.column
            ),
            None => write!(
                f,
                "{} line {} column {}",
                self.kind, self.position.line, self.position.column
            ),
        }
    }
}

impl Token {
    pub fn new(kind: TokenKind, position: Position, value: Option<TokenValue>) -> Self {
        Token {
            kind,
            position,
            value,
        }
    }

    pub fn line(&self) -> u32 {
        self.position.line
    }

    pub fn column(&self) -> u32 {
        self.position.column
    }

    /// The text of an identifier or string token.
    pub fn string_value(&self) -> Option<&str> {
        match &self.value {
            Some(TokenValue::String(value)) => Some(value),
            _ => None,
        }
    }

    /// The value of a number token.
    pub fn integer_value(&self) -> Option<i64> {
        match &self.value {
            Some(TokenValue::Integer(value)) => Some(*value),
            _ => None,
        }
    }

    pub fn is_one_of_many(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.kind)
    }
}
