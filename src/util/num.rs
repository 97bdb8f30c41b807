/// Converts a language integer into a host index.
///
/// ## Returns
/// - `Some(usize)`: If the value is non-negative and fits in `usize`.
/// - `None`: For negative values, which never address an element.
///
/// ## Example
/// ```
/// use monkey::util::num::i64_to_index;
///
/// assert_eq!(i64_to_index(3), Some(3));
/// assert_eq!(i64_to_index(-1), None);
/// ```
#[must_use]
pub fn i64_to_index(value: i64) -> Option<usize> {
    usize::try_from(value).ok()
}

/// Converts a host length into a language integer.
///
/// Lengths beyond `i64::MAX` saturate; no real collection reaches that size.
///
/// ## Example
/// ```
/// use monkey::util::num::usize_to_i64_saturating;
///
/// assert_eq!(usize_to_i64_saturating(42), 42);
/// assert_eq!(usize_to_i64_saturating(usize::MAX), i64::MAX);
/// ```
#[must_use]
pub fn usize_to_i64_saturating(value: usize) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}
