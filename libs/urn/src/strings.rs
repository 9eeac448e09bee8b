//! Null-safe string helpers used around URN encoding.
//!
//! See also [`coalesce!`](crate::coalesce) for the variadic, lazily
//! evaluated form of [`coalesce`].

use std::fmt::Display;

/// Returns the first `Some` yielded by `values`.
///
/// Stops pulling from the iterator as soon as a value is found.
pub fn coalesce<T, I>(values: I) -> Option<T>
where
    I: IntoIterator<Item = Option<T>>,
{
    values.into_iter().flatten().next()
}

/// Formats a present value with [`Display`]; `None` stays `None`.
pub fn to_string_or_none<T: Display>(value: Option<T>) -> Option<String> {
    value.map(|v| v.to_string())
}

/// Returns at most the first `max_len` characters of `value`.
///
/// Lengths are counted in `char`s, so a multi-byte character is never split.
pub fn trim_to_length(value: Option<&str>, max_len: usize) -> Option<&str> {
    value.map(|s| match s.char_indices().nth(max_len) {
        Some((end, _)) => &s[..end],
        None => s,
    })
}
