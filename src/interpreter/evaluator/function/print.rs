use crate::interpreter::{
    evaluator::core::EvalResult,
    value::core::{NULL, Value},
};

/// Prints each argument on its own line and returns `null`.
///
/// Values are written with their inspect form, so strings appear without
/// quotes. Any number of arguments is accepted, including none.
///
/// # Example
/// ```
/// use monkey::interpreter::{
///     evaluator::function::print::puts,
///     value::core::{NULL, Value},
/// };
///
/// // The function prints to stdout, but the doctest
/// // only checks the returned result.
/// let result = puts(&[Value::from("hello"), Value::Integer(42)]).unwrap();
///
/// assert_eq!(result, NULL);
/// ```
pub fn puts(args: &[Value]) -> EvalResult<Value> {
    for arg in args {
        println!("{arg}");
    }
    Ok(NULL)
}
