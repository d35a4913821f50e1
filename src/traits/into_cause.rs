//! Trait for converting values into an optional error cause.
//!
//! [`ErrorBuilder::caused_by`](crate::ErrorBuilder::caused_by) accepts any
//! [`IntoCause`], which lets call sites chain unconditionally whether or not
//! they have an upstream error in hand.
//!
//! # Implementations
//!
//! - `ErrorValue`, `&ErrorValue`, `Box<ErrorValue>` - Always a cause
//! - `Option<ErrorValue>`, `Option<&ErrorValue>` - `None` is a no-op
//! - `std::io::Error` - Converted into the `std::io` domain
//!
//! # Examples
//!
//! ```
//! use control_core_error::{traits::IntoCause, ErrorValue};
//!
//! let timeout = ErrorValue::new("Sim", 3, "timed out");
//! assert_eq!(timeout.clone().into_cause(), Some(timeout));
//! assert_eq!(None::<ErrorValue>.into_cause(), None);
//! ```
use crate::types::ErrorValue;

/// Converts a type into an optional cause for an [`ErrorValue`].
///
/// # Implementing for Custom Types
///
/// ```
/// use control_core_error::{traits::IntoCause, ErrorValue};
///
/// struct Timeout { seconds: u64 }
///
/// impl IntoCause for Timeout {
///     fn into_cause(self) -> Option<ErrorValue> {
///         Some(ErrorValue::new("Sim", 3, format!("timed out after {}s", self.seconds)))
///     }
/// }
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be used as an error cause",
    label = "this type does not implement `IntoCause`",
    note = "convert it with `ErrorValue::from_std_error` or implement `IntoCause` manually"
)]
pub trait IntoCause {
    /// Converts `self` into a cause; `None` leaves the builder unchanged.
    fn into_cause(self) -> Option<ErrorValue>;
}

impl IntoCause for ErrorValue {
    #[inline]
    fn into_cause(self) -> Option<ErrorValue> {
        Some(self)
    }
}

impl IntoCause for &ErrorValue {
    #[inline]
    fn into_cause(self) -> Option<ErrorValue> {
        Some(self.clone())
    }
}

impl IntoCause for Box<ErrorValue> {
    #[inline]
    fn into_cause(self) -> Option<ErrorValue> {
        Some(*self)
    }
}

impl IntoCause for Option<ErrorValue> {
    #[inline]
    fn into_cause(self) -> Option<ErrorValue> {
        self
    }
}

impl IntoCause for Option<&ErrorValue> {
    #[inline]
    fn into_cause(self) -> Option<ErrorValue> {
        self.cloned()
    }
}

impl IntoCause for std::io::Error {
    #[inline]
    fn into_cause(self) -> Option<ErrorValue> {
        Some(ErrorValue::from(self))
    }
}
