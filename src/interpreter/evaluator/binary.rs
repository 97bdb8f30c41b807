use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context {
    /// Evaluates a binary operation between two values.
    ///
    /// The operation is routed on the operand pair, in this order:
    /// 1. two integers: arithmetic and comparison,
    /// 2. two strings: concatenation only,
    /// 3. `==` / `!=` on anything else: identity equality,
    /// 4. operands of different types: `type mismatch`,
    /// 5. otherwise: `unknown operator`.
    ///
    /// # Example
    /// ```
    /// use monkey::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let v = Context::eval_binary(BinaryOperator::Add, &Value::Integer(3), &Value::Integer(4)).unwrap();
    /// assert_eq!(v, Value::Integer(7));
    ///
    /// let err = Context::eval_binary(BinaryOperator::Add,
    ///                                 &Value::Integer(5),
    ///                                 &Value::Boolean(true)).unwrap_err();
    /// assert_eq!(err.to_string(), "type mismatch: INTEGER + BOOLEAN");
    /// ```
    pub fn eval_binary(op: BinaryOperator, left: &Value, right: &Value) -> EvalResult<Value> {
        match (left, right) {
            (Value::Integer(a), Value::Integer(b)) => Self::eval_integer_op(op, *a, *b),
            (Value::String(a), Value::String(b)) => match op {
                BinaryOperator::Add => Ok(Value::from(format!("{a}{b}"))),
                _ => Err(Self::unknown_operator(op, left, right)),
            },
            _ if op == BinaryOperator::Equal => Ok(Value::from(left.is_identical(right))),
            _ if op == BinaryOperator::NotEqual => Ok(Value::from(!left.is_identical(right))),
            _ if left.value_type() != right.value_type() => {
                Err(RuntimeError::TypeMismatch { left: left.value_type(),
                                                 op,
                                                 right: right.value_type() })
            },
            _ => Err(Self::unknown_operator(op, left, right)),
        }
    }

    /// Evaluates an operator on two integers.
    ///
    /// Arithmetic wraps on overflow. Division truncates toward zero, so
    /// `-7 / 2` is `-3`; a zero divisor is an error.
    fn eval_integer_op(op: BinaryOperator, a: i64, b: i64) -> EvalResult<Value> {
        use BinaryOperator::{Add, Div, Equal, Greater, Less, Mul, NotEqual, Sub};

        Ok(match op {
            Add => Value::Integer(a.wrapping_add(b)),
            Sub => Value::Integer(a.wrapping_sub(b)),
            Mul => Value::Integer(a.wrapping_mul(b)),
            Div => {
                if b == 0 {
                    return Err(RuntimeError::DivisionByZero);
                }
                Value::Integer(a.wrapping_div(b))
            },
            Less => Value::from(a < b),
            Greater => Value::from(a > b),
            Equal => Value::from(a == b),
            NotEqual => Value::from(a != b),
        })
    }

    const fn unknown_operator(op: BinaryOperator, left: &Value, right: &Value) -> RuntimeError {
        RuntimeError::UnknownInfixOperator { left: left.value_type(),
                                             op,
                                             right: right.value_type() }
    }
}
