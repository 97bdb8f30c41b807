/// Parsing errors.
///
/// Defines the diagnostics recorded while turning tokens into an AST. The
/// parser never aborts on them; they are collected in order and handed back
/// alongside the program.
pub mod parse_error;
/// Runtime errors.
///
/// Contains every fault the evaluator can produce, such as type mismatches,
/// unknown operators, unresolved identifiers, or bad builtin arguments. The
/// `Display` form of each variant is the message carried by an `Error` value.
pub mod runtime_error;

pub use parse_error::{ParseError, ParseErrors};
pub use runtime_error::RuntimeError;
