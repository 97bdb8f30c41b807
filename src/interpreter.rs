/// Lexical environments.
///
/// Defines the chained name-to-value scopes that back `let` bindings, function
/// parameters and closure capture.
///
/// # Responsibilities
/// - Resolves names innermost scope first.
/// - Binds names in the local scope only.
/// - Keeps captured scopes alive through shared ownership.
pub mod environment;
/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator walks the AST against an environment, applies operators,
/// calls functions and builtins, and produces values. Runtime faults travel
/// up as the error side of a result and surface as `Error` values.
///
/// # Responsibilities
/// - Evaluates every statement and expression kind.
/// - Propagates `return` to the enclosing call and errors to the top.
/// - Hosts the builtin function table.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a stream of tokens on
/// demand, one per call, ending in an endless run of `EOF` tokens.
///
/// # Responsibilities
/// - Skips whitespace between tokens.
/// - Recognizes operators, delimiters, integers, strings, identifiers and
///   keywords.
/// - Turns unrecognized characters into `ILLEGAL` tokens.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// A Pratt parser: statements are dispatched on their leading keyword and
/// expressions are parsed by operator precedence using per-token prefix and
/// infix handlers.
///
/// # Responsibilities
/// - Converts tokens into `Program`, `Statement` and `Expr` nodes.
/// - Records a diagnostic for each structural failure and keeps going.
pub mod parser;
/// Token kinds, the keyword table, and the token type itself.
pub mod token;
/// The value module defines the runtime data types for evaluation.
///
/// # Responsibilities
/// - Defines the `Value` enum and its type tags.
/// - Implements truthiness, identity equality, hashing and the external
///   (`inspect`) representation.
/// - Defines closures and builtins as callable values.
pub mod value;
