//! Parsing support for boolean expressions

use super::error::ExpressionParseError;
use super::BoolExpr;
use std::sync::Arc;

// Lalrpop-generated parser module (generated in OUT_DIR at build time)
#[allow(clippy::all)]
mod grammar {
    #![allow(clippy::all)]
    #![allow(dead_code)]
    #![allow(unused_variables)]
    #![allow(unused_imports)]
    #![allow(non_snake_case)]
    #![allow(non_camel_case_types)]
    #![allow(non_upper_case_globals)]
    include!(concat!(env!("OUT_DIR"), "/expression/bool_expr.rs"));
}

impl BoolExpr {
    /// Parse a boolean expression from a string
    ///
    /// Supports standard boolean operators:
    /// - `+` or `|` for OR
    /// - `*` or `&` for AND
    /// - `~` or `!` for NOT
    /// - Parentheses for grouping
    /// - Constants: `0`, `1`, `true`, `false`
    ///
    /// # Examples
    ///
    /// ```
    /// use mccluskey_logic::BoolExpr;
    ///
    /// let expr = BoolExpr::parse("~(a + b) * c").unwrap();
    /// assert_eq!(expr.to_string(), "~(a + b) * c");
    /// ```
    pub fn parse(input: &str) -> Result<Self, ExpressionParseError> {
        grammar::ExprParser::new().parse(input).map_err(|e| {
            let message = e.to_string();
            let offset = offset_from_message(&message);
            ExpressionParseError::InvalidSyntax {
                message: Arc::from(message.as_str()),
                input: Arc::from(input),
                offset,
            }
        })
    }
}

/// Extract a byte offset from a lalrpop error message, if one is present
///
/// Lalrpop's messages carry the offset in a trailing "at N" clause, e.g.
/// "Unrecognized token `+` found at 6:7".
fn offset_from_message(message: &str) -> Option<usize> {
    let after_at = &message[message.rfind(" at ")? + 4..];
    let digits: String = after_at.chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_from_message() {
        assert_eq!(
            offset_from_message("Unrecognized token `+` found at 6:7"),
            Some(6)
        );
        assert_eq!(offset_from_message("no location here"), None);
    }
}
