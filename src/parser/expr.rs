//! Expression parsing.
//!
//! Each precedence level is a function that parses the next tighter level
//! and then optionally one operator of its own. Levels, loosest first:
//!
//! 1. assignment (`=`)
//! 2. `or`
//! 3. `and`
//! 4. equality (`==`, `!=`)
//! 5. comparison (`<`, `<=`, `>`, `>=`)
//! 6. additive (`+`, `-`)
//! 7. multiplicative (`*`, `/`, `%`)
//! 8. negation (`not`, prefix `-`)
//! 9. calls and method calls
//! 10. parentheses
//! 11. literals and identifiers
//!
//! Levels 1 to 5 apply at most one operator and recurse into themselves for
//! the right operand, so `a or b or c` groups as `a or (b or c)`. The
//! arithmetic levels loop and group to the left.

use log::trace;

use crate::{
    ast::{
        arguments::ArgumentList,
        ast::{BinaryOp, Node, NodeKind},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind, TokenValue},
    Position,
};

use super::{
    lookups::{
        lookup_operator, OperatorLookup, ADDITIVE_LOOKUP, AND_LOOKUP, COMPARISON_LOOKUP,
        EQUALITY_LOOKUP, MULTIPLICATIVE_LOOKUP, OR_LOOKUP,
    },
    parser::Parser,
};

type LevelParser = fn(&mut Parser<'_>) -> Result<Node, Error>;

/// Parses a full expression.
pub fn parse_statement(parser: &mut Parser<'_>) -> Result<Node, Error> {
    parse_assignment_expr(parser)
}

pub fn parse_assignment_expr(parser: &mut Parser<'_>) -> Result<Node, Error> {
    let target = parse_or_expr(parser)?;

    match parser.accept_token(TokenKind::Equal)? {
        Some(operator) => {
            let value = parse_assignment_expr(parser)?;
            let position = node_position(&target, &operator);

            Ok(Node::new(
                NodeKind::Assignment {
                    target: Box::new(target),
                    value: Box::new(value),
                },
                position,
            ))
        }
        None => Ok(target),
    }
}

pub fn parse_or_expr(parser: &mut Parser<'_>) -> Result<Node, Error> {
    parse_right_binary_expr(parser, OR_LOOKUP, parse_and_expr, parse_or_expr)
}

pub fn parse_and_expr(parser: &mut Parser<'_>) -> Result<Node, Error> {
    parse_right_binary_expr(parser, AND_LOOKUP, parse_equality_expr, parse_and_expr)
}

pub fn parse_equality_expr(parser: &mut Parser<'_>) -> Result<Node, Error> {
    parse_right_binary_expr(
        parser,
        EQUALITY_LOOKUP,
        parse_comparison_expr,
        parse_equality_expr,
    )
}

pub fn parse_comparison_expr(parser: &mut Parser<'_>) -> Result<Node, Error> {
    parse_right_binary_expr(
        parser,
        COMPARISON_LOOKUP,
        parse_additive_expr,
        parse_comparison_expr,
    )
}

pub fn parse_additive_expr(parser: &mut Parser<'_>) -> Result<Node, Error> {
    parse_left_binary_expr(parser, ADDITIVE_LOOKUP, parse_multiplicative_expr)
}

pub fn parse_multiplicative_expr(parser: &mut Parser<'_>) -> Result<Node, Error> {
    parse_left_binary_expr(parser, MULTIPLICATIVE_LOOKUP, parse_negation_expr)
}

/// `operand (op self)?`
fn parse_right_binary_expr(
    parser: &mut Parser<'_>,
    lookup: OperatorLookup,
    operand: LevelParser,
    same_level: LevelParser,
) -> Result<Node, Error> {
    let left = operand(parser)?;

    let op = match lookup_operator(lookup, parser.current_token_kind()) {
        Some(op) => op,
        None => return Ok(left),
    };

    let operator = parser.advance()?;
    let right = same_level(parser)?;

    Ok(make_binary(op, &operator, left, right))
}

/// `operand (op operand)*`
fn parse_left_binary_expr(
    parser: &mut Parser<'_>,
    lookup: OperatorLookup,
    operand: LevelParser,
) -> Result<Node, Error> {
    let mut left = operand(parser)?;

    while let Some(op) = lookup_operator(lookup, parser.current_token_kind()) {
        let operator = parser.advance()?;
        let right = operand(parser)?;
        left = make_binary(op, &operator, left, right);
    }

    Ok(left)
}

fn make_binary(op: BinaryOp, operator: &Token, left: Node, right: Node) -> Node {
    let position = node_position(&left, operator);

    Node::new(
        NodeKind::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        },
        position,
    )
}

/// Operator nodes sit at their left operand, or at the operator when there is none.
fn node_position(left: &Node, operator: &Token) -> Position {
    if left.is_empty() {
        operator.position
    } else {
        left.position
    }
}

/// `not` and prefix `-`, both repeatable.
pub fn parse_negation_expr(parser: &mut Parser<'_>) -> Result<Node, Error> {
    let make: fn(Box<Node>) -> NodeKind = match parser.current_token_kind() {
        TokenKind::Not => NodeKind::Not,
        TokenKind::Minus => NodeKind::Negate,
        _ => return parse_postfix_expr(parser),
    };

    let operator = parser.advance()?;
    let operand = parse_negation_expr(parser)?;

    Ok(Node::new(make(Box::new(operand)), operator.position))
}

/// A primary expression followed by any chain of `.name(args)` and `(args)`.
pub fn parse_postfix_expr(parser: &mut Parser<'_>) -> Result<Node, Error> {
    let mut left = parse_grouping_expr(parser)?;

    loop {
        if parser.accept(TokenKind::Dot)? {
            left = parse_method_call(parser, left)?;
        } else if parser.accept(TokenKind::LParen)? {
            let args = parse_args(parser)?;
            parser.expect(TokenKind::RParen)?;

            let position = left.position;
            left = Node::new(
                NodeKind::Call {
                    callee: Box::new(left),
                    args,
                },
                position,
            );
        } else {
            return Ok(left);
        }
    }
}

fn parse_method_call(parser: &mut Parser<'_>, object: Node) -> Result<Node, Error> {
    let name = parser.expect(TokenKind::Id)?;
    parser.expect(TokenKind::LParen)?;
    let args = parse_args(parser)?;
    parser.expect(TokenKind::RParen)?;

    let method = name.string_value().unwrap_or_default().to_string();

    Ok(Node::new(
        NodeKind::MethodCall {
            object: Box::new(object),
            method,
            args,
        },
        name.position,
    ))
}

pub fn parse_grouping_expr(parser: &mut Parser<'_>) -> Result<Node, Error> {
    if parser.accept(TokenKind::LParen)? {
        let expr = parse_statement(parser)?;
        parser.expect(TokenKind::RParen)?;
        return Ok(expr);
    }

    parse_primary_expr(parser)
}

/// Literals and identifiers. Anything else yields an `Empty` node without
/// consuming a token.
pub fn parse_primary_expr(parser: &mut Parser<'_>) -> Result<Node, Error> {
    if parser.at(TokenKind::LBracket) {
        return parse_array_expr(parser);
    }

    let current = parser.current_token();
    let kind = match (current.kind, &current.value) {
        (TokenKind::True, _) => NodeKind::Boolean(true),
        (TokenKind::False, _) => NodeKind::Boolean(false),
        (TokenKind::Id, Some(TokenValue::String(name))) => NodeKind::Identifier(name.clone()),
        (TokenKind::Number, Some(TokenValue::Integer(value))) => NodeKind::Number(*value),
        (TokenKind::String, Some(TokenValue::String(value))) => NodeKind::String(value.clone()),
        _ => return Ok(Node::empty()),
    };

    let token = parser.advance()?;
    Ok(Node::new(kind, token.position))
}

fn parse_array_expr(parser: &mut Parser<'_>) -> Result<Node, Error> {
    let start = parser.expect(TokenKind::LBracket)?.position;
    let mut elements = vec![];

    loop {
        let element = parse_statement(parser)?;
        if !element.is_empty() || parser.at(TokenKind::Comma) {
            elements.push(element);
        }

        if !parser.accept(TokenKind::Comma)? {
            break;
        }
    }

    parser.expect(TokenKind::RBracket)?;

    Ok(Node::new(NodeKind::Array(elements), start))
}

enum Argument {
    Positional(Node),
    Keyword(String, Node),
}

/// Parses the comma separated arguments between a call's parentheses.
///
/// An element followed by `:` is a keyword argument and must be a plain
/// identifier. Empty slots between commas are kept as `Empty` nodes; an
/// empty final slot, as in `f()` or `f(a,)`, is dropped.
pub fn parse_args(parser: &mut Parser<'_>) -> Result<ArgumentList, Error> {
    trace!("parse_args: next token = {}", parser.current_token());

    let position = parser.current_token().position;
    let mut collected = vec![];

    loop {
        let start = parser.current_token().position;
        let element = parse_statement(parser)?;

        if parser.accept(TokenKind::Colon)? {
            let name = match element.kind {
                NodeKind::Identifier(name) => name,
                NodeKind::Empty => {
                    return Err(Error::new(ErrorImpl::KeywordArgumentTarget, start));
                }
                _ => {
                    return Err(Error::new(
                        ErrorImpl::KeywordArgumentTarget,
                        element.position,
                    ));
                }
            };
            let value = parse_statement(parser)?;
            collected.push(Argument::Keyword(name, value));
        } else if !element.is_empty() || parser.at(TokenKind::Comma) {
            // Only an empty slot before the closing parenthesis is left out.
            collected.push(Argument::Positional(element));
        }

        if !parser.accept(TokenKind::Comma)? {
            break;
        }
    }

    // Assemble from the end so keyword arguments see the positional ones after them.
    let mut args = ArgumentList::new(position);
    for argument in collected.into_iter().rev() {
        match argument {
            Argument::Positional(node) => args.prepend(node),
            Argument::Keyword(name, value) => args.set_kwarg(name, value),
        }
    }

    Ok(args)
}
