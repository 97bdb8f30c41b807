//! # monkey
//!
//! monkey is a tree-walking interpreter for a small dynamically typed
//! language written in Rust. It supports integers, booleans, strings, arrays,
//! hash maps, first-class functions with closures, and a fixed set of builtin
//! functions.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use tracing::debug;

use crate::{
    ast::Program,
    error::ParseErrors,
    interpreter::{lexer::Lexer, parser::core::Parser},
};

/// Defines the structure of parsed code.
///
/// This module declares the `Program`, `Statement` and `Expr` types that
/// represent source code as a tree. The AST is built by the parser and
/// traversed by the evaluator; its `Display` output is the canonical, fully
/// parenthesized source form.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// # Responsibilities
/// - Defines the parse diagnostics collected by the parser.
/// - Defines the runtime faults raised by the evaluator and builtins.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation and the runtime
/// value model.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// The interactive read-eval-print loop.
pub mod repl;
/// General utilities for safe numeric conversion.
pub mod util;

pub use interpreter::{evaluator::core::Context, value::core::Value};

/// Parses a source text into a program.
///
/// The whole text is always parsed; when any statement fails, every
/// diagnostic is returned in source order instead of a partial tree.
///
/// # Examples
/// ```
/// let program = monkey::parse("-a * b").unwrap();
/// assert_eq!(program.to_string(), "((-a) * b);");
///
/// let errors = monkey::parse("let = 5;").unwrap_err();
/// assert_eq!(errors.messages(),
///            ["expected next token to be IDENT, got = instead",
///             "no prefix parse function for ="]);
/// ```
pub fn parse(source: &str) -> Result<Program, ParseErrors> {
    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();

    debug!(statements = program.statements.len(),
           errors = parser.errors().len(),
           "parsed program");

    if parser.errors().is_empty() {
        Ok(program)
    } else {
        Err(ParseErrors(parser.into_errors()))
    }
}

/// Parses and evaluates a source text against the root environment of
/// `context`.
///
/// Bindings made by the program stay in `context`, so consecutive calls behave
/// like consecutive REPL lines. A runtime fault is not an `Err`: it is
/// returned as a [`Value::Error`], the same way the language itself sees it.
/// `None` means the program produced no value, e.g. it ends in a `let`.
///
/// # Examples
/// ```
/// use monkey::{Context, Value};
///
/// let context = Context::new();
///
/// assert_eq!(monkey::run("5 + 2 * 10", &context).unwrap(), Some(Value::Integer(25)));
/// assert_eq!(monkey::run("let x = 1;", &context).unwrap(), None);
///
/// let error = monkey::run("5 + true;", &context).unwrap().unwrap();
/// assert_eq!(error.inspect(), "ERROR: type mismatch: INTEGER + BOOLEAN");
/// ```
pub fn run(source: &str, context: &Context) -> Result<Option<Value>, ParseErrors> {
    let program = parse(source)?;
    Ok(context.eval_program(&program))
}
