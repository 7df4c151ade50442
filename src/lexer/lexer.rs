use std::iter::FusedIterator;

use lazy_static::lazy_static;
use log::trace;
use regex::Regex;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, MK_DEFAULT_HANDLER, MK_TOKEN,
};

use super::tokens::{Token, TokenKind, TokenValue, RESERVED_LOOKUP};

/// Handles the text matched by a pattern. `Ok(None)` means the match is discarded.
pub type RegexHandler = fn(&mut Lexer<'_>, &str) -> Result<Option<Token>, Error>;

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

impl RegexPattern {
    fn new(pattern: &str, handler: RegexHandler) -> Self {
        RegexPattern {
            regex: Regex::new(&format!("\\A(?:{})", pattern)).unwrap(),
            handler,
        }
    }
}

lazy_static! {
    // Tried in order; the first pattern matching at the current offset wins,
    // so longer operators come before their prefixes.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern::new("[ \\t]+", skip_handler),
        RegexPattern::new("[_a-zA-Z][_0-9a-zA-Z]*", symbol_handler),
        RegexPattern::new("[0-9]+", number_handler),
        RegexPattern::new("\\\\\\r?\\n", continuation_handler),
        RegexPattern::new("\\r?\\n", eol_handler),
        RegexPattern::new("'''(?s:.*?)'''", multiline_string_handler),
        RegexPattern::new("#[^\\n]*", skip_handler),
        RegexPattern::new("\\(", MK_DEFAULT_HANDLER!(TokenKind::LParen, paren_depth, 1)),
        RegexPattern::new("\\)", MK_DEFAULT_HANDLER!(TokenKind::RParen, paren_depth, -1)),
        RegexPattern::new("\\[", MK_DEFAULT_HANDLER!(TokenKind::LBracket, bracket_depth, 1)),
        RegexPattern::new("\\]", MK_DEFAULT_HANDLER!(TokenKind::RBracket, bracket_depth, -1)),
        RegexPattern::new("'[^'\\n]*'", string_handler),
        RegexPattern::new(",", MK_DEFAULT_HANDLER!(TokenKind::Comma)),
        RegexPattern::new("\\.", MK_DEFAULT_HANDLER!(TokenKind::Dot)),
        RegexPattern::new(":", MK_DEFAULT_HANDLER!(TokenKind::Colon)),
        RegexPattern::new("==", MK_DEFAULT_HANDLER!(TokenKind::Assign)),
        RegexPattern::new("=", MK_DEFAULT_HANDLER!(TokenKind::Equal)),
        RegexPattern::new("!=", MK_DEFAULT_HANDLER!(TokenKind::NEquals)),
        RegexPattern::new("<=", MK_DEFAULT_HANDLER!(TokenKind::LessEquals)),
        RegexPattern::new("<", MK_DEFAULT_HANDLER!(TokenKind::Less)),
        RegexPattern::new(">=", MK_DEFAULT_HANDLER!(TokenKind::GreaterEquals)),
        RegexPattern::new(">", MK_DEFAULT_HANDLER!(TokenKind::Greater)),
        RegexPattern::new("\\+", MK_DEFAULT_HANDLER!(TokenKind::Plus)),
        RegexPattern::new("-", MK_DEFAULT_HANDLER!(TokenKind::Minus)),
        RegexPattern::new("\\*", MK_DEFAULT_HANDLER!(TokenKind::Star)),
        RegexPattern::new("/", MK_DEFAULT_HANDLER!(TokenKind::Slash)),
        RegexPattern::new("%", MK_DEFAULT_HANDLER!(TokenKind::Percent)),
    ];
}

/// A lazy, single-pass token stream over a source string.
///
/// Tokens are produced on demand by [`Iterator::next`]. End of input is
/// signalled by exhaustion; no `eof` token is yielded. After the first
/// error the lexer yields nothing further.
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    source: &'a str,
    pos: usize,
    line: u32,
    line_start: usize,
    /// Where the match currently being handled starts
    pub token_start: Position,
    pub paren_depth: i32,
    pub bracket_depth: i32,
    finished: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Lexer<'a> {
        Lexer {
            source,
            pos: 0,
            line: 1,
            line_start: 0,
            token_start: Position::new(1, 0),
            paren_depth: 0,
            bracket_depth: 0,
            finished: false,
        }
    }

    /// The line and column of the next unconsumed byte.
    pub fn current_position(&self) -> Position {
        Position::new(self.line, (self.pos - self.line_start) as u32)
    }

    pub fn remainder(&self) -> &'a str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Whether a newline here continues the current line.
    pub fn is_nested(&self) -> bool {
        self.paren_depth > 0 || self.bracket_depth > 0
    }

    fn new_line(&mut self) {
        self.line += 1;
        self.line_start = self.pos;
    }

    fn fail(&mut self, error: Error) -> Option<Result<Token, Error>> {
        self.finished = true;
        Some(Err(error))
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Result<Token, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.finished && !self.at_eof() {
            let remainder = self.remainder();
            let matched = PATTERNS.iter().find_map(|pattern| {
                pattern
                    .regex
                    .find(remainder)
                    .map(|found| (pattern.handler, found.as_str()))
            });

            let (handler, text) = match matched {
                Some(matched) => matched,
                None => {
                    let token = remainder.chars().next().map(String::from).unwrap_or_default();
                    let position = self.current_position();
                    return self.fail(Error::new(ErrorImpl::UnrecognisedToken { token }, position));
                }
            };

            self.token_start = self.current_position();
            self.pos += text.len();

            match handler(self, text) {
                Ok(Some(token)) => return Some(Ok(token)),
                Ok(None) => continue,
                Err(error) => return self.fail(error),
            }
        }

        None
    }
}

impl FusedIterator for Lexer<'_> {}

fn skip_handler(_lexer: &mut Lexer<'_>, _text: &str) -> Result<Option<Token>, Error> {
    Ok(None)
}

fn symbol_handler(lexer: &mut Lexer<'_>, text: &str) -> Result<Option<Token>, Error> {
    if let Some(kind) = RESERVED_LOOKUP.get(text) {
        Ok(Some(MK_TOKEN!(*kind, None, lexer.token_start)))
    } else {
        Ok(Some(MK_TOKEN!(
            TokenKind::Id,
            Some(TokenValue::String(String::from(text))),
            lexer.token_start
        )))
    }
}

fn number_handler(lexer: &mut Lexer<'_>, text: &str) -> Result<Option<Token>, Error> {
    let value = text.parse::<i64>().map_err(|_| {
        Error::new(
            ErrorImpl::NumberParseError {
                token: String::from(text),
            },
            lexer.token_start,
        )
    })?;

    Ok(Some(MK_TOKEN!(
        TokenKind::Number,
        Some(TokenValue::Integer(value)),
        lexer.token_start
    )))
}

fn string_handler(lexer: &mut Lexer<'_>, text: &str) -> Result<Option<Token>, Error> {
    let value = &text[1..text.len() - 1];

    Ok(Some(MK_TOKEN!(
        TokenKind::String,
        Some(TokenValue::String(String::from(value))),
        lexer.token_start
    )))
}

fn multiline_string_handler(lexer: &mut Lexer<'_>, text: &str) -> Result<Option<Token>, Error> {
    let value = &text[3..text.len() - 3];
    let token = MK_TOKEN!(
        TokenKind::String,
        Some(TokenValue::String(String::from(value))),
        lexer.token_start
    );

    // Columns after the closing quotes count from the last embedded newline.
    if let Some(last_newline) = text.rfind('\n') {
        lexer.line += text.matches('\n').count() as u32;
        lexer.line_start = lexer.pos - text.len() + last_newline + 1;
    }

    Ok(Some(token))
}

fn eol_handler(lexer: &mut Lexer<'_>, _text: &str) -> Result<Option<Token>, Error> {
    let token = if lexer.is_nested() {
        trace!(
            "suppressing newline at {} (paren depth {}, bracket depth {})",
            lexer.token_start,
            lexer.paren_depth,
            lexer.bracket_depth
        );
        None
    } else {
        Some(MK_TOKEN!(TokenKind::Eol, None, lexer.token_start))
    };

    lexer.new_line();
    Ok(token)
}

fn continuation_handler(lexer: &mut Lexer<'_>, _text: &str) -> Result<Option<Token>, Error> {
    lexer.new_line();
    Ok(None)
}

/// Starts tokenizing `source`. Consuming the returned lexer is destructive;
/// tokenizing again requires a fresh call.
pub fn tokenize(source: &str) -> Lexer<'_> {
    Lexer::new(source)
}
