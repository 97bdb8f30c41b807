/// Built-in function implementations and the builtin table.
///
/// Contains the collection helpers available by default in the interpreter:
/// `len`, `first`, `last`, `rest` and `push`.
pub mod builtin;
/// The `puts` function implementation.
///
/// Writes values to standard output.
pub mod print;

pub mod core;
