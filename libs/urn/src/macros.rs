//! Macros shared by the URN helpers.

/// Returns the first `Some` among its arguments, or `None`.
///
/// Arguments are evaluated left to right and evaluation stops at the first
/// `Some`, so later arguments may be expensive or have side effects. All
/// arguments must be `Option<T>` for the same `T`.
///
/// # Example
///
/// ```
/// use wherehows_urn::coalesce;
///
/// let first: Option<&str> = coalesce!(None, Some("a"), Some("b"));
/// assert_eq!(first, Some("a"));
/// ```
#[macro_export]
macro_rules! coalesce {
    ($only:expr $(,)?) => {
        $only
    };
    ($first:expr, $($rest:expr),+ $(,)?) => {
        match $first {
            ::core::option::Option::Some(value) => ::core::option::Option::Some(value),
            ::core::option::Option::None => $crate::coalesce!($($rest),+),
        }
    };
}
