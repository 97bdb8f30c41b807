use crate::{
    ast::UnaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context {
    /// Evaluates a unary operation on a value.
    ///
    /// Supported operators:
    /// - `Negate`: integer negation (wrapping). Any other operand type is an
    ///   `unknown operator` error.
    /// - `Not`: the inverse of truthiness. `!null` and `!false` are `true`,
    ///   everything else (including `!0`) is `false`; it never fails.
    ///
    /// # Example
    /// ```
    /// use monkey::{
    ///     ast::UnaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let v = Context::eval_unary(UnaryOperator::Negate, &Value::Integer(5)).unwrap();
    /// assert_eq!(v, Value::Integer(-5));
    ///
    /// let v = Context::eval_unary(UnaryOperator::Not, &Value::Integer(5)).unwrap();
    /// assert_eq!(v, Value::Boolean(false));
    ///
    /// let err = Context::eval_unary(UnaryOperator::Negate, &Value::Boolean(true)).unwrap_err();
    /// assert_eq!(err.to_string(), "unknown operator: -BOOLEAN");
    /// ```
    pub fn eval_unary(op: UnaryOperator, value: &Value) -> EvalResult<Value> {
        match op {
            UnaryOperator::Negate => match value {
                Value::Integer(n) => Ok(Value::Integer(n.wrapping_neg())),
                _ => Err(RuntimeError::UnknownPrefixOperator { op,
                                                               operand: value.value_type() }),
            },
            UnaryOperator::Not => Ok(Value::from(!value.is_truthy())),
        }
    }
}
