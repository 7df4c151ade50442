//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords and identifiers
//! - Integer and string literals, including triple-quoted strings
//! - Operators and punctuation
//! - Comments, whitespace and newline handling
//! - Line and column tracking
//! - Error cases

use super::{
    lexer::tokenize,
    tokens::{Token, TokenKind, TokenValue},
};
use crate::{errors::errors::ErrorImpl, Position};

fn tokens(source: &str) -> Vec<Token> {
    tokenize(source).collect::<Result<Vec<_>, _>>().unwrap()
}

fn kinds(source: &str) -> Vec<TokenKind> {
    tokens(source).into_iter().map(|token| token.kind).collect()
}

#[test]
fn test_tokenize_keywords() {
    assert_eq!(
        kinds("true false if else elif endif and or not"),
        vec![
            TokenKind::True,
            TokenKind::False,
            TokenKind::If,
            TokenKind::Else,
            TokenKind::Elif,
            TokenKind::Endif,
            TokenKind::And,
            TokenKind::Or,
            TokenKind::Not,
        ]
    );

    for token in tokens("true endif not") {
        assert_eq!(token.value, None);
    }
}

#[test]
fn test_tokenize_identifiers() {
    let tokens = tokens("foo bar_2 _hidden CamelCase iffy endifs");

    let names = tokens
        .iter()
        .map(|token| {
            assert_eq!(token.kind, TokenKind::Id);
            token.string_value().unwrap()
        })
        .collect::<Vec<_>>();

    assert_eq!(names, vec!["foo", "bar_2", "_hidden", "CamelCase", "iffy", "endifs"]);
}

#[test]
fn test_tokenize_numbers() {
    let tokens = tokens("42 0 007");

    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[0].integer_value(), Some(42));
    assert_eq!(tokens[1].integer_value(), Some(0));
    assert_eq!(tokens[2].integer_value(), Some(7));
}

#[test]
fn test_tokenize_number_overflow() {
    let result = tokenize("x = 99999999999999999999").collect::<Result<Vec<_>, _>>();
    let error = result.unwrap_err();

    assert!(matches!(
        error.get_internal_error(),
        ErrorImpl::NumberParseError { token } if token == "99999999999999999999"
    ));
    assert_eq!(error.get_position(), Position::new(1, 4));
}

#[test]
fn test_tokenize_strings() {
    let tokens = tokens("'hello' 'two words' ''");

    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].value, Some(TokenValue::String("hello".to_string())));
    assert_eq!(tokens[1].string_value(), Some("two words"));
    assert_eq!(tokens[2].string_value(), Some(""));
}

#[test]
fn test_strings_keep_backslashes() {
    let tokens = tokens(r"'a\nb'");

    assert_eq!(tokens[0].string_value(), Some(r"a\nb"));
}

#[test]
fn test_tokenize_multiline_string() {
    let tokens = tokens("x = '''first\nsecond''' y");

    assert_eq!(tokens[2].kind, TokenKind::String);
    assert_eq!(tokens[2].string_value(), Some("first\nsecond"));
    assert_eq!(tokens[2].position, Position::new(1, 4));
    assert_eq!(tokens[3].position, Position::new(2, 10));
}

#[test]
fn test_multiline_string_advances_lines() {
    let source = "a = '''\none\ntwo\n'''\nb";
    let tokens = tokens(source);

    // a = string eol b
    assert_eq!(tokens.len(), 5);
    assert_eq!(tokens[3].kind, TokenKind::Eol);
    assert_eq!(tokens[3].position, Position::new(4, 3));
    assert_eq!(tokens[4].position, Position::new(5, 0));
}

#[test]
fn test_single_line_triple_quoted_string() {
    let tokens = tokens("'''it's''' z");

    assert_eq!(tokens[0].string_value(), Some("it's"));
    assert_eq!(tokens[1].position, Position::new(1, 11));
}

#[test]
fn test_tokenize_punctuation() {
    assert_eq!(
        kinds("( ) [ ] , . :"),
        vec![
            TokenKind::LParen,
            TokenKind::RParen,
            TokenKind::LBracket,
            TokenKind::RBracket,
            TokenKind::Comma,
            TokenKind::Dot,
            TokenKind::Colon,
        ]
    );
}

#[test]
fn test_tokenize_operators() {
    assert_eq!(
        kinds("== = != < <= > >= + - * / %"),
        vec![
            TokenKind::Assign,
            TokenKind::Equal,
            TokenKind::NEquals,
            TokenKind::Less,
            TokenKind::LessEquals,
            TokenKind::Greater,
            TokenKind::GreaterEquals,
            TokenKind::Plus,
            TokenKind::Minus,
            TokenKind::Star,
            TokenKind::Slash,
            TokenKind::Percent,
        ]
    );
}

#[test]
fn test_equality_and_assignment_without_whitespace() {
    assert_eq!(
        kinds("a==b"),
        vec![TokenKind::Id, TokenKind::Assign, TokenKind::Id]
    );
    assert_eq!(
        kinds("a=b"),
        vec![TokenKind::Id, TokenKind::Equal, TokenKind::Id]
    );
    assert_eq!(
        kinds("a===b"),
        vec![TokenKind::Id, TokenKind::Assign, TokenKind::Equal, TokenKind::Id]
    );
}

#[test]
fn test_whitespace_and_comments_only() {
    for source in ["", "   ", "\t \t", "# just a comment", "  # indented comment", "#a\t#b"] {
        assert!(tokens(source).is_empty(), "expected no tokens for {:?}", source);
    }
}

#[test]
fn test_comment_stops_at_newline() {
    assert_eq!(
        kinds("a # comment\nb"),
        vec![TokenKind::Id, TokenKind::Eol, TokenKind::Id]
    );
}

#[test]
fn test_newline_positions() {
    let tokens = tokens("foo\n  bar\nbaz");

    assert_eq!(tokens[0].position, Position::new(1, 0));
    assert_eq!(tokens[1].kind, TokenKind::Eol);
    assert_eq!(tokens[1].position, Position::new(1, 3));
    assert_eq!(tokens[2].position, Position::new(2, 2));
    assert_eq!(tokens[4].position, Position::new(3, 0));
}

#[test]
fn test_crlf_line_endings() {
    let tokens = tokens("a\r\nb");

    assert_eq!(tokens[1].kind, TokenKind::Eol);
    assert_eq!(tokens[2].position, Position::new(2, 0));
}

#[test]
fn test_newline_inside_parentheses_is_suppressed() {
    assert_eq!(
        kinds("f(a,\n  b)\nc"),
        vec![
            TokenKind::Id,
            TokenKind::LParen,
            TokenKind::Id,
            TokenKind::Comma,
            TokenKind::Id,
            TokenKind::RParen,
            TokenKind::Eol,
            TokenKind::Id,
        ]
    );

    let tokens = tokens("f(a,\n  b)");
    assert_eq!(tokens[4].position, Position::new(2, 2));
}

#[test]
fn test_newline_inside_brackets_is_suppressed() {
    assert_eq!(
        kinds("[1,\n2]\n3"),
        vec![
            TokenKind::LBracket,
            TokenKind::Number,
            TokenKind::Comma,
            TokenKind::Number,
            TokenKind::RBracket,
            TokenKind::Eol,
            TokenKind::Number,
        ]
    );
}

#[test]
fn test_closing_bracket_decrements_depth() {
    let mut lexer = tokenize("[[a]]\n");

    for _ in 0..5 {
        lexer.next().unwrap().unwrap();
    }

    assert_eq!(lexer.bracket_depth, 0);
    assert_eq!(lexer.next().unwrap().unwrap().kind, TokenKind::Eol);
}

#[test]
fn test_unbalanced_close_goes_negative() {
    let mut lexer = tokenize(")\n");

    assert_eq!(lexer.next().unwrap().unwrap().kind, TokenKind::RParen);
    assert_eq!(lexer.paren_depth, -1);
    assert_eq!(lexer.next().unwrap().unwrap().kind, TokenKind::Eol);
}

#[test]
fn test_line_continuation() {
    let tokens = tokens("a = \\\n  b\nc");

    assert_eq!(
        tokens.iter().map(|token| token.kind).collect::<Vec<_>>(),
        vec![
            TokenKind::Id,
            TokenKind::Equal,
            TokenKind::Id,
            TokenKind::Eol,
            TokenKind::Id,
        ]
    );
    assert_eq!(tokens[2].position, Position::new(2, 2));
    assert_eq!(tokens[4].position, Position::new(3, 0));
}

#[test]
fn test_line_continuation_inside_parentheses() {
    let tokens = tokens("f(a, \\\nb)");

    assert_eq!(tokens.len(), 6);
    assert_eq!(tokens[4].position, Position::new(2, 0));
}

#[test]
fn test_unrecognised_character() {
    let mut lexer = tokenize("foo = 1\nbar @ 2");
    let mut error = None;

    for token in lexer.by_ref() {
        if let Err(e) = token {
            error = Some(e);
            break;
        }
    }

    let error = error.unwrap();
    assert!(matches!(
        error.get_internal_error(),
        ErrorImpl::UnrecognisedToken { token } if token == "@"
    ));
    assert_eq!(error.get_position(), Position::new(2, 4));
    assert!(lexer.next().is_none());
}

#[test]
fn test_unterminated_string_is_an_error() {
    let error = tokenize("x = 'abc\n'")
        .collect::<Result<Vec<_>, _>>()
        .unwrap_err();

    assert_eq!(error.get_position(), Position::new(1, 4));
}

#[test]
fn test_lexer_is_lazy() {
    let mut lexer = tokenize("a b @");

    assert_eq!(lexer.next().unwrap().unwrap().kind, TokenKind::Id);
    assert_eq!(lexer.next().unwrap().unwrap().kind, TokenKind::Id);
    assert!(lexer.next().unwrap().is_err());
}

#[test]
fn test_tokenize_is_deterministic() {
    let source = "project('demo', 'c',\n  version: '1.0')\nif x == 1 and not y\n  z = '''a\nb'''\nendif\n";

    assert_eq!(tokens(source), tokens(source));
}

#[test]
fn test_token_equals_kind() {
    let tokens = tokens("foo 1");

    assert!(tokens[0] == TokenKind::Id);
    assert!(tokens[1] == TokenKind::Number);
    assert!(tokens[1] != TokenKind::Id);
    assert!(tokens[0].is_one_of_many(&[TokenKind::Number, TokenKind::Id]));
}

#[test]
fn test_token_equality_includes_position_and_value() {
    let tokens = tokens("x x y");

    assert!(tokens[0] != tokens[1]);
    assert!(tokens[0] != tokens[2]);
    assert!(tokens[0] == tokens[0].clone());
    assert!(tokens.iter().all(|token| *token == TokenKind::Id));
}

#[test]
fn test_token_display() {
    let tokens = tokens("foo\n(");

    assert_eq!(tokens[0].to_string(), "id (\"foo\") line 1 column 0");
    assert_eq!(tokens[2].to_string(), "lparen line 2 column 0");
}

#[test]
fn test_lexer_position_at_end() {
    let mut lexer = tokenize("ab\n  cd");
    while lexer.next().is_some() {}

    assert_eq!(lexer.current_position(), Position::new(2, 4));
    assert!(lexer.at_eof());
}
