#![allow(clippy::module_inception)]

use std::fmt::Display;

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

/// A location in the source text. Lines start at 1, columns at 0.
/// Positions order by line, then column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn new(line: u32, column: u32) -> Self {
        Position { line, column }
    }

    /// Position used by nodes that do not originate from a token.
    pub fn null() -> Self {
        Position::default()
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Returns the text of the 1-based `line` of `source`, without its line ending.
pub fn get_line(source: &str, line: u32) -> Option<&str> {
    if line == 0 {
        return None;
    }

    source
        .split('\n')
        .nth(line as usize - 1)
        .map(|text| text.strip_suffix('\r').unwrap_or(text))
}


/// Renders a lex or parse error for the user.
///
/// ```text
/// Error expecting rparen got eof line 20 column 9
/// -> meson.build
///    |
/// 20 | x = (1 +
///    | --------^
/// ```
///
/// The snippet is omitted when the position does not fall on a line of
/// `source`. A suggestion, if the error has one, comes last.
pub fn format_error(error: &Error, file: &str, source: &str) -> String {
    let position = error.get_position();
    let mut output = format!(
        "Error {} line {} column {}\n",
        error, position.line, position.column
    );

    output.push_str(&format!("-> {}\n", file));

    if let Some(line_text) = get_line(source, position.line) {
        render_snippet(&mut output, line_text, position);
    }

    if let ErrorTip::Suggestion(tip) = error.get_tip() {
        output.push_str(&format!("= {}\n", tip));
    }

    output
}

fn render_snippet(output: &mut String, line_text: &str, position: Position) {
    let line_string = position.line.to_string();
    let padding = line_string.len() + 2;

    output.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(line_text);
    output.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    let arrows = (position.column as usize).saturating_sub(removed_whitespace) + 1;
    output.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));
}

/// Prints a rendered error to standard error.
pub fn display_error(error: &Error, file: &str, source: &str) {
    eprint!("{}", format_error(error, file, source));
}

fn remove_starting_whitespace(string: &str) -> (&str, usize) {
    let start = string
        .chars()
        .take_while(|c| *c == ' ' || *c == '\t')
        .count();

    (&string[start..], start)
}
