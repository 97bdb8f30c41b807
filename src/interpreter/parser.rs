/// Parser state, the Pratt expression loop and precedence levels.
///
/// Contains the two-token window over the lexer, error collection and the
/// program entry point.
pub mod core;

/// Prefix parse functions.
///
/// Handles every construct that can start an expression: literals,
/// identifiers, unary operators, grouping, `if`, `fn`, arrays and hashes.
pub mod unary;

/// Infix parse functions.
///
/// Implements binary operators, calls and index expressions, which all
/// continue an expression already parsed on their left.
pub mod binary;

/// Block parsing.
///
/// Parses brace-delimited statement sequences used by `if` and `fn`.
pub mod block;

/// Utility functions for the parser.
pub mod utils;

/// Statement parsing.
///
/// Implements `let`, `return` and expression statements.
pub mod statement;
