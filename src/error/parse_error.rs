use thiserror::Error;

use crate::interpreter::token::TokenKind;

/// Represents a single diagnostic recorded while parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A structural construct required a specific next token.
    #[error("expected next token to be {expected}, got {found} instead")]
    UnexpectedToken {
        /// The token kind the construct requires.
        expected: TokenKind,
        /// The token kind actually found.
        found:    TokenKind,
    },
    /// No expression can start with this token.
    #[error("no prefix parse function for {kind}")]
    NoPrefixParseFn {
        /// The offending token kind.
        kind: TokenKind,
    },
    /// An integer literal does not fit in a signed 64-bit integer.
    #[error("could not parse {literal} as integer")]
    InvalidInteger {
        /// The literal text.
        literal: String,
    },
}

/// The ordered diagnostics of a program that failed to parse.
///
/// Displays one message per line, in the order they were recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseErrors(pub Vec<ParseError>);

impl ParseErrors {
    /// Returns the diagnostic messages in order.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.0.iter().map(ToString::to_string).collect()
    }

    /// Iterates over the recorded diagnostics.
    pub fn iter(&self) -> std::slice::Iter<'_, ParseError> {
        self.0.iter()
    }

    /// Number of recorded diagnostics.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if nothing was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for ParseErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (index, error) in self.0.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseErrors {}

impl<'a> IntoIterator for &'a ParseErrors {
    type IntoIter = std::slice::Iter<'a, ParseError>;
    type Item = &'a ParseError;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
