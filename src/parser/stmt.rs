use log::trace;

use crate::{
    ast::statements::{CodeBlock, IfBranch, IfStmt, Statement},
    errors::errors::Error,
    lexer::tokens::TokenKind,
    parser::expr::parse_statement,
    Position,
};

use super::parser::Parser;

/// Tokens that end a code block without being consumed by it.
const BLOCK_TERMINATORS: &[TokenKind] = &[
    TokenKind::Eof,
    TokenKind::Elif,
    TokenKind::Else,
    TokenKind::Endif,
];

/// Parses lines separated by `eol` until the input ends or an
/// `elif`/`else`/`endif` is next. Empty lines are not recorded.
pub fn parse_codeblock(parser: &mut Parser<'_>) -> Result<CodeBlock, Error> {
    trace!("parse_codeblock: next token = {}", parser.current_token());

    let mut statements = vec![];

    loop {
        if let Some(statement) = parse_line(parser)? {
            statements.push(statement);
        }

        if parser.current_token().is_one_of_many(BLOCK_TERMINATORS) {
            break;
        }
        parser.expect(TokenKind::Eol)?;
    }

    Ok(CodeBlock::new(statements))
}

pub fn parse_line(parser: &mut Parser<'_>) -> Result<Option<Statement>, Error> {
    match parser.current_token_kind() {
        TokenKind::Eol | TokenKind::Eof | TokenKind::Elif | TokenKind::Else | TokenKind::Endif => {
            Ok(None)
        }
        TokenKind::If => Ok(Some(parse_if_stmt(parser)?)),
        _ => {
            let expression = parse_statement(parser)?;

            if expression.is_empty() {
                Ok(None)
            } else {
                Ok(Some(Statement::Expression(expression)))
            }
        }
    }
}

/// `if <expr> eol <block> (elif <expr> eol <block>)* (else eol <block>)? endif`
pub fn parse_if_stmt(parser: &mut Parser<'_>) -> Result<Statement, Error> {
    trace!("parse_if_stmt: next token = {}", parser.current_token());

    let start = parser.expect(TokenKind::If)?.position;
    let mut branches = vec![parse_if_branch(parser, start)?];

    while let Some(elif) = parser.accept_token(TokenKind::Elif)? {
        branches.push(parse_if_branch(parser, elif.position)?);
    }

    let else_block = if parser.accept(TokenKind::Else)? {
        parser.expect(TokenKind::Eol)?;
        Some(parse_codeblock(parser)?)
    } else {
        None
    };

    parser.expect(TokenKind::Endif)?;

    Ok(Statement::If(IfStmt {
        branches,
        else_block,
        position: start,
    }))
}

fn parse_if_branch(parser: &mut Parser<'_>, position: Position) -> Result<IfBranch, Error> {
    let condition = parse_statement(parser)?;
    parser.expect(TokenKind::Eol)?;
    let block = parse_codeblock(parser)?;

    Ok(IfBranch {
        condition,
        block,
        position,
    })
}
