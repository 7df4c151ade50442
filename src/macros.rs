//! Utility macros for the lexer.
//!
//! This module defines helper macros used by the lexer pattern table:
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_DEFAULT_HANDLER!` - Creates a default lexer handler for punctuation
//!
//! These macros reduce boilerplate in the lexer implementation.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's optional literal payload
/// * `$position` - Where the token starts
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Number, Some(TokenValue::Integer(42)), position);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $position:expr) => {
        $crate::lexer::tokens::Token {
            kind: $kind,
            value: $value,
            position: $position,
        }
    };
}

/// Creates a default lexer handler for punctuation without a payload.
///
/// The generated handler produces a token of the given kind at the start of
/// the current match. The second form also adjusts one of the lexer's
/// nesting counters, which is how brackets drive line continuation.
///
/// # Example
///
/// ```ignore
/// RegexPattern::new(",", MK_DEFAULT_HANDLER!(TokenKind::Comma)),
/// RegexPattern::new("\\(", MK_DEFAULT_HANDLER!(TokenKind::LParen, paren_depth, 1)),
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($kind:expr) => {
        |lexer: &mut $crate::lexer::lexer::Lexer<'_>, _text: &str| {
            Ok(Some($crate::MK_TOKEN!($kind, None, lexer.token_start)))
        }
    };
    ($kind:expr, $counter:ident, $delta:expr) => {
        |lexer: &mut $crate::lexer::lexer::Lexer<'_>, _text: &str| {
            lexer.$counter += $delta;
            Ok(Some($crate::MK_TOKEN!($kind, None, lexer.token_start)))
        }
    };
}
