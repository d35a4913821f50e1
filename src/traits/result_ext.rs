//! Extension traits for `Result<T, ErrorValue>`.
//!
//! [`SentinelResultExt`] turns the `Result` returned by the fail terminals
//! back into the sentinel-plus-error-slot shape some boundaries still need.
//! [`ResultExt`] wraps an existing failure in one more layer of description.
//!
//! # Examples
//!
//! ```
//! use control_core_error::traits::{ResultExt, SentinelResultExt};
//! use control_core_error::{ErrorBuilder, ErrorValue};
//!
//! fn probe() -> Result<u32, ErrorValue> {
//!     ErrorBuilder::new().describe("port closed").no_logging().fail_uint()
//! }
//!
//! let mut slot = None;
//! assert_eq!(probe().or_sentinel(&mut slot), 0);
//! assert_eq!(slot.map(|e| e.message().to_owned()).as_deref(), Some("port closed"));
//!
//! let layered = probe().describe_err("probing device");
//! assert_eq!(layered.unwrap_err().message(), "probing device\nport closed");
//! ```

use crate::builder::ErrorBuilder;
use crate::types::{ErrorValue, Sentinel};

/// Collapses a `Result` into a sentinel value and an error slot.
pub trait SentinelResultExt<T: Sentinel> {
    /// Returns the success value, or `T::sentinel()` after storing the error
    /// in `slot`. On success `slot` is left untouched.
    fn or_sentinel(self, slot: &mut Option<ErrorValue>) -> T;

    /// Returns the success value, or `T::sentinel()` discarding the error.
    fn sentinel(self) -> T;
}

impl<T: Sentinel> SentinelResultExt<T> for Result<T, ErrorValue> {
    #[inline]
    fn or_sentinel(self, slot: &mut Option<ErrorValue>) -> T {
        match self {
            Ok(value) => value,
            Err(error) => {
                *slot = Some(error);
                T::sentinel()
            },
        }
    }

    #[inline]
    fn sentinel(self) -> T {
        self.unwrap_or_else(|_| T::sentinel())
    }
}

/// Adds context to an existing [`ErrorValue`] failure.
///
/// The wrapped error becomes the cause of a new default-domain error whose
/// first description is the given text. The new error is built, and
/// therefore logged, through a default [`ErrorBuilder`].
pub trait ResultExt<T> {
    fn describe_err(self, description: impl Into<String>) -> Result<T, ErrorValue>;

    /// Like [`describe_err`](ResultExt::describe_err) but only renders the
    /// description when `self` is an `Err`.
    fn describe_err_with<F>(self, f: F) -> Result<T, ErrorValue>
    where
        F: FnOnce() -> String;
}

impl<T> ResultExt<T> for Result<T, ErrorValue> {
    #[inline]
    fn describe_err(self, description: impl Into<String>) -> Result<T, ErrorValue> {
        self.map_err(|cause| ErrorBuilder::new().describe(description).caused_by(cause).build())
    }

    #[inline]
    fn describe_err_with<F>(self, f: F) -> Result<T, ErrorValue>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|cause| ErrorBuilder::new().describe(f()).caused_by(cause).build())
    }
}
