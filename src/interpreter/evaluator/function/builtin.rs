use std::rc::Rc;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{core::EvalResult, function::print},
        value::{
            core::{NULL, Value, ValueType},
            function::{Arity, Builtin},
        },
    },
    util::num::usize_to_i64_saturating,
};

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides:
/// - a string name,
/// - an arity specification,
/// - a function pointer implementing the builtin.
///
/// The macro produces:
/// - `BUILTIN_TABLE` (static table for lookup),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        static BUILTIN_TABLE: &[Builtin] = &[
            $(
                Builtin { name: $name, arity: $arity, func: $func },
            )*
        ];
        /// Names of every builtin, in table order.
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "len"   => { arity: Arity::Exact(1), func: len },
    "first" => { arity: Arity::Exact(1), func: first },
    "last"  => { arity: Arity::Exact(1), func: last },
    "rest"  => { arity: Arity::Exact(1), func: rest },
    "push"  => { arity: Arity::Exact(2), func: push },
    "puts"  => { arity: Arity::Any, func: print::puts },
}

/// Finds the builtin bound to `name`.
///
/// # Example
/// ```
/// use monkey::interpreter::evaluator::function::builtin::lookup;
///
/// assert!(lookup("len").is_some());
/// assert!(lookup("map").is_none());
/// ```
#[must_use]
pub fn lookup(name: &str) -> Option<Builtin> {
    BUILTIN_TABLE.iter().find(|b| b.name == name).copied()
}

/// Returns the length of a string (in characters) or an array.
///
/// # Example
/// ```
/// use monkey::interpreter::{evaluator::function::builtin::len, value::core::Value};
///
/// assert_eq!(len(&[Value::from("four")]).unwrap(), Value::Integer(4));
///
/// let err = len(&[Value::Integer(1)]).unwrap_err();
/// assert_eq!(err.to_string(), "argument to `len` not supported, got INTEGER");
/// ```
pub fn len(args: &[Value]) -> EvalResult<Value> {
    match single_argument(args)? {
        Value::String(text) => Ok(Value::Integer(usize_to_i64_saturating(text.chars().count()))),
        Value::Array(elements) => Ok(Value::Integer(usize_to_i64_saturating(elements.len()))),
        other => Err(RuntimeError::UnsupportedArgument { name: "len",
                                                         kind: other.value_type() }),
    }
}

/// Returns the first element of an array, or `null` when it is empty.
pub fn first(args: &[Value]) -> EvalResult<Value> {
    let elements = expect_array("first", single_argument(args)?)?;
    Ok(elements.first().cloned().unwrap_or(NULL))
}

/// Returns the last element of an array, or `null` when it is empty.
pub fn last(args: &[Value]) -> EvalResult<Value> {
    let elements = expect_array("last", single_argument(args)?)?;
    Ok(elements.last().cloned().unwrap_or(NULL))
}

/// Returns a new array holding every element but the first.
///
/// An empty array has no rest and yields `null`.
///
/// # Example
/// ```
/// use monkey::interpreter::{evaluator::function::builtin::rest, value::core::{NULL, Value}};
///
/// let array = Value::from(vec![Value::Integer(1), Value::Integer(2), Value::Integer(3)]);
/// let tail = rest(&[array]).unwrap();
///
/// assert_eq!(tail.to_string(), "[2, 3]");
/// assert_eq!(rest(&[Value::from(Vec::<Value>::new())]).unwrap(), NULL);
/// ```
pub fn rest(args: &[Value]) -> EvalResult<Value> {
    let elements = expect_array("rest", single_argument(args)?)?;

    match elements.split_first() {
        Some((_, tail)) => Ok(Value::from(tail.to_vec())),
        None => Ok(NULL),
    }
}

/// Returns a new array with the second argument appended.
///
/// The original array is left untouched.
pub fn push(args: &[Value]) -> EvalResult<Value> {
    let [array, item] = args else {
        return Err(RuntimeError::ArgumentCountMismatch { got:  args.len(),
                                                         want: 2, });
    };
    let elements = expect_array("push", array)?;

    let mut extended = Vec::with_capacity(elements.len() + 1);
    extended.extend(elements.iter().cloned());
    extended.push(item.clone());

    Ok(Value::from(extended))
}

fn single_argument(args: &[Value]) -> EvalResult<&Value> {
    match args {
        [value] => Ok(value),
        _ => Err(RuntimeError::ArgumentCountMismatch { got:  args.len(),
                                                       want: 1, }),
    }
}

fn expect_array<'a>(name: &'static str, value: &'a Value) -> EvalResult<&'a Rc<Vec<Value>>> {
    match value {
        Value::Array(elements) => Ok(elements),
        other => Err(RuntimeError::UnexpectedArgumentType { name,
                                                            expected: ValueType::Array,
                                                            kind: other.value_type() }),
    }
}
