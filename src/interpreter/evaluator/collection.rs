use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        environment::Env,
        evaluator::core::{Context, EvalResult},
        value::{
            core::{NULL, Value},
            hash::{HashObject, HashPair},
        },
    },
    util::num::i64_to_index,
};

impl Context {
    /// Evaluates an array literal, element by element from left to right.
    ///
    /// The first failing element aborts the literal.
    pub(crate) fn eval_array_literal(elements: &[Expr], env: &Env) -> EvalResult<Value> {
        Ok(Value::from(Self::eval_expressions(elements, env)?))
    }

    /// Evaluates a hash literal.
    ///
    /// Each key is evaluated before its value. Keys must be hashable
    /// (integer, boolean or string). When a key repeats, the last pair wins.
    pub(crate) fn eval_hash_literal(pairs: &[(Expr, Expr)], env: &Env) -> EvalResult<Value> {
        let mut hash = HashObject::new();

        for (key_expr, value_expr) in pairs {
            let key = Self::eval(key_expr, env)?;
            let hash_key = key.hash_key()
                              .ok_or(RuntimeError::UnusableHashKey { kind: key.value_type() })?;
            let value = Self::eval(value_expr, env)?;

            hash.insert(hash_key, HashPair { key, value });
        }

        Ok(Value::from(hash))
    }

    /// Evaluates `left[index]`.
    ///
    /// - Array by integer: the element, or `null` when the index is negative
    ///   or past the end.
    /// - Hash by hashable key: the mapped value, or `null` when absent.
    ///
    /// Every other combination is an error.
    ///
    /// # Example
    /// ```
    /// use monkey::interpreter::{
    ///     evaluator::core::Context,
    ///     value::core::{NULL, Value},
    /// };
    ///
    /// let array = Value::from(vec![Value::Integer(1), Value::Integer(2)]);
    ///
    /// assert_eq!(Context::eval_index(&array, &Value::Integer(1)).unwrap(), Value::Integer(2));
    /// assert_eq!(Context::eval_index(&array, &Value::Integer(2)).unwrap(), NULL);
    /// assert_eq!(Context::eval_index(&array, &Value::Integer(-1)).unwrap(), NULL);
    /// ```
    pub fn eval_index(left: &Value, index: &Value) -> EvalResult<Value> {
        match (left, index) {
            (Value::Array(elements), Value::Integer(i)) => {
                Ok(i64_to_index(*i).and_then(|i| elements.get(i))
                                   .cloned()
                                   .unwrap_or(NULL))
            },
            (Value::Hash(hash), _) => {
                let key = index.hash_key()
                               .ok_or(RuntimeError::UnusableHashKey { kind: index.value_type() })?;

                Ok(hash.get(&key).map_or(NULL, |pair| pair.value.clone()))
            },
            _ => Err(RuntimeError::IndexNotSupported { kind: left.value_type() }),
        }
    }
}
