/// Hash support.
///
/// Defines `HashKey`, the normalized key computed from hashable values, and
/// `HashObject`, the insertion-ordered storage behind `Value::Hash`. Only
/// integers, booleans and strings can be keys.
pub mod hash;
/// Callable values.
///
/// Defines user functions, which capture the environment they were created
/// in, and host builtins, which are plain function pointers with an arity.
pub mod function;

pub mod core;
