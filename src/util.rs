/// Integer conversion helpers.
///
/// This module provides lossless conversions between the language's `i64`
/// integers and the host's `usize` lengths and indices. Use these helpers
/// instead of `as` casts so that out-of-range values are handled explicitly.
pub mod num;
