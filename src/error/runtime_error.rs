use thiserror::Error;

use crate::{
    ast::{BinaryOperator, UnaryOperator},
    interpreter::value::core::ValueType,
};

/// Represents all errors that can occur during evaluation.
///
/// A runtime error never unwinds the host: it travels up the evaluator as the
/// `Err` side of an `EvalResult` and becomes an `Error` value once it reaches
/// the top of the program.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// A prefix operator was applied to an operand type it does not support.
    #[error("unknown operator: {op}{operand}")]
    UnknownPrefixOperator {
        /// The operator.
        op:      UnaryOperator,
        /// Type of the operand.
        operand: ValueType,
    },
    /// A binary operator is not defined for this pair of operand types.
    #[error("unknown operator: {left} {op} {right}")]
    UnknownInfixOperator {
        /// Type of the left operand.
        left:  ValueType,
        /// The operator.
        op:    BinaryOperator,
        /// Type of the right operand.
        right: ValueType,
    },
    /// The operands of a binary operator have different types.
    #[error("type mismatch: {left} {op} {right}")]
    TypeMismatch {
        /// Type of the left operand.
        left:  ValueType,
        /// The operator.
        op:    BinaryOperator,
        /// Type of the right operand.
        right: ValueType,
    },
    /// A name resolved neither in scope nor in the builtin table.
    #[error("identifier not found: {name}")]
    IdentifierNotFound {
        /// The unresolved name.
        name: String,
    },
    /// Called a value that is neither a function nor a builtin.
    #[error("not a function: {kind}")]
    NotAFunction {
        /// Type of the callee.
        kind: ValueType,
    },
    /// Indexed a value (or with an index) that does not support indexing.
    #[error("index operator not supported: {kind}")]
    IndexNotSupported {
        /// Type of the indexed collection.
        kind: ValueType,
    },
    /// Used an unhashable value as a hash key.
    #[error("unusable as hash key: {kind}")]
    UnusableHashKey {
        /// Type of the rejected key.
        kind: ValueType,
    },
    /// Integer division with a zero divisor.
    #[error("division by zero")]
    DivisionByZero,
    /// A builtin received the wrong number of arguments.
    #[error("wrong number of arguments. got={got}, want={want}")]
    ArgumentCountMismatch {
        /// Number of arguments supplied.
        got:  usize,
        /// Number of arguments expected.
        want: usize,
    },
    /// A builtin does not accept an argument of this type.
    #[error("argument to `{name}` not supported, got {kind}")]
    UnsupportedArgument {
        /// The builtin name.
        name: &'static str,
        /// Type of the rejected argument.
        kind: ValueType,
    },
    /// A builtin requires its argument to be of one specific type.
    #[error("argument to `{name}` must be {expected}, got {kind}")]
    UnexpectedArgumentType {
        /// The builtin name.
        name:     &'static str,
        /// The required type.
        expected: ValueType,
        /// Type of the rejected argument.
        kind:     ValueType,
    },
}
