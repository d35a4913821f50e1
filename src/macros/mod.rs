//! Format-string shortcuts for descriptions.
//!
//! - [`macro@crate::describe`] - Appends a formatted description frame to a builder.
//! - [`macro@crate::error_for_format`] - Builds a default-domain error from a
//!   format string in one step.
//!
//! Both go through `format_args!`, so a malformed format string or a
//! mismatched argument list is a compile error rather than a runtime one.
//!
//! # Examples
//!
//! ```
//! use control_core_error::{describe, error_for_format, ErrorBuilder};
//!
//! let udid = "A1B2";
//! let err = describe!(ErrorBuilder::new().no_logging(), "simulator {} not found", udid).build();
//! assert_eq!(err.message(), "simulator A1B2 not found");
//!
//! let err = error_for_format!("{} of {} devices busy", 3, 4);
//! assert_eq!(err.message(), "3 of 4 devices busy");
//! ```

/// Appends a formatted description to an [`ErrorBuilder`](crate::ErrorBuilder).
///
/// The first argument is the builder expression; the rest are passed to
/// `format_args!`.
///
/// # Examples
///
/// ```
/// use control_core_error::{describe, ErrorBuilder};
///
/// let attempts = 3;
/// let builder = describe!(ErrorBuilder::new(), "gave up after {attempts} attempts");
/// assert_eq!(builder.descriptions(), ["gave up after 3 attempts"]);
/// ```
#[macro_export]
macro_rules! describe {
    ($builder:expr, $($arg:tt)+) => {
        $builder.describe_format(::core::format_args!($($arg)+))
    };
}

/// Builds a default-domain [`ErrorValue`](crate::ErrorValue) from a format
/// string, logging it like any other build.
///
/// # Examples
///
/// ```
/// use control_core_error::error_for_format;
///
/// let path = "/tmp/sim.plist";
/// let err = error_for_format!("could not read {}", path);
/// assert_eq!(err.message(), "could not read /tmp/sim.plist");
/// ```
#[macro_export]
macro_rules! error_for_format {
    ($($arg:tt)+) => {
        $crate::ErrorBuilder::error_for_format(::core::format_args!($($arg)+))
    };
}
