//! Factory trait for "already failed" results.
//!
//! Host result types, synchronous or asynchronous, implement
//! [`FromErrorValue`] so [`ErrorBuilder::fail_as`](crate::ErrorBuilder::fail_as)
//! can construct them directly from a freshly built error.
use crate::types::ErrorValue;

/// Constructs an already-failed instance carrying `error` as its payload.
pub trait FromErrorValue {
    fn from_error_value(error: ErrorValue) -> Self;
}

impl<T> FromErrorValue for Result<T, ErrorValue> {
    #[inline]
    fn from_error_value(error: ErrorValue) -> Self {
        Err(error)
    }
}

impl<T> FromErrorValue for Result<T, Box<ErrorValue>> {
    #[inline]
    fn from_error_value(error: ErrorValue) -> Self {
        Err(Box::new(error))
    }
}

impl<T> FromErrorValue for core::future::Ready<Result<T, ErrorValue>> {
    #[inline]
    fn from_error_value(error: ErrorValue) -> Self {
        core::future::ready(Err(error))
    }
}
