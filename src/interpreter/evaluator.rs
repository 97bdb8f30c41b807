/// Binary operator evaluation logic.
///
/// Handles integer arithmetic and comparison, string concatenation, and
/// identity equality for every other operand pair.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements arithmetic negation and logical NOT.
pub mod unary;

/// Core evaluation logic and context management.
///
/// Contains the main evaluation engine, the persistent evaluation context, and
/// statement and block sequencing with `return` propagation.
pub mod core;

/// Evaluation of array literals, hash literals and index expressions.
pub mod collection;

/// Function evaluation.
///
/// Handles closure application, the builtin table, and argument checking.
pub mod function;
