use crate::{ast::ast::BinaryOp, lexer::tokens::TokenKind};

/// Operator tokens accepted at one precedence level and the operators they build.
pub type OperatorLookup = &'static [(TokenKind, BinaryOp)];

pub const OR_LOOKUP: OperatorLookup = &[(TokenKind::Or, BinaryOp::Or)];

pub const AND_LOOKUP: OperatorLookup = &[(TokenKind::And, BinaryOp::And)];

// `assign` is the `==` token
pub const EQUALITY_LOOKUP: OperatorLookup = &[
    (TokenKind::Assign, BinaryOp::Equal),
    (TokenKind::NEquals, BinaryOp::NotEqual),
];

pub const COMPARISON_LOOKUP: OperatorLookup = &[
    (TokenKind::Less, BinaryOp::Less),
    (TokenKind::LessEquals, BinaryOp::LessEqual),
    (TokenKind::Greater, BinaryOp::Greater),
    (TokenKind::GreaterEquals, BinaryOp::GreaterEqual),
];

pub const ADDITIVE_LOOKUP: OperatorLookup = &[
    (TokenKind::Plus, BinaryOp::Add),
    (TokenKind::Minus, BinaryOp::Subtract),
];

pub const MULTIPLICATIVE_LOOKUP: OperatorLookup = &[
    (TokenKind::Star, BinaryOp::Multiply),
    (TokenKind::Slash, BinaryOp::Divide),
    (TokenKind::Percent, BinaryOp::Modulo),
];

/// The operator `kind` denotes at a level, if any.
pub fn lookup_operator(lookup: OperatorLookup, kind: TokenKind) -> Option<BinaryOp> {
    lookup
        .iter()
        .find(|(operator_kind, _)| *operator_kind == kind)
        .map(|(_, op)| *op)
}
