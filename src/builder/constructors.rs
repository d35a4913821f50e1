//! One-shot constructors for the common failure shapes.
//!
//! Each creates a default builder, applies one or two configuration calls,
//! and terminates it. They log exactly as a hand-written chain would.

use std::fmt;

use super::ErrorBuilder;
use crate::traits::IntoCause;
use crate::types::ErrorValue;

#[cfg(feature = "async")]
use crate::async_ext::FailedFuture;

impl ErrorBuilder {
    /// A default builder pre-seeded with one description.
    #[inline]
    pub fn from_description(description: impl Into<String>) -> Self {
        Self::new().describe(description)
    }

    /// A default builder pre-seeded with one formatted description.
    #[inline]
    pub fn from_format(args: fmt::Arguments<'_>) -> Self {
        Self::new().describe_format(args)
    }

    /// A default builder pre-seeded with a cause.
    #[inline]
    pub fn from_cause<C: IntoCause>(cause: C) -> Self {
        Self::new().caused_by(cause)
    }

    /// Builds a default-domain error with a single description.
    ///
    /// # Examples
    ///
    /// ```
    /// use control_core_error::{ErrorBuilder, DEFAULT_DOMAIN};
    ///
    /// let err = ErrorBuilder::error_for_description("no booted simulator");
    /// assert_eq!(err.message(), "no booted simulator");
    /// assert_eq!(err.domain(), DEFAULT_DOMAIN);
    /// ```
    #[inline]
    pub fn error_for_description(description: impl Into<String>) -> ErrorValue {
        Self::from_description(description).into_error()
    }

    /// Builds a default-domain error from format arguments.
    ///
    /// Usually reached through the [`error_for_format!`](crate::error_for_format) macro.
    #[inline]
    pub fn error_for_format(args: fmt::Arguments<'_>) -> ErrorValue {
        Self::from_format(args).into_error()
    }

    /// Fails with `cause` wrapped in the default domain.
    #[inline]
    pub fn fail_bool_with_error<C: IntoCause>(cause: C) -> Result<bool, ErrorValue> {
        Self::from_cause(cause).fail_bool()
    }

    /// Fails with `cause` wrapped in the default domain under an extra
    /// description.
    #[inline]
    pub fn fail_bool_with_error_described<C: IntoCause>(
        cause: C,
        description: impl Into<String>,
    ) -> Result<bool, ErrorValue> {
        Self::from_cause(cause).describe(description).fail_bool()
    }

    /// Fails with a simple message and no cause.
    #[inline]
    pub fn fail_bool_with_error_message(message: impl Into<String>) -> Result<bool, ErrorValue> {
        Self::from_description(message).fail_bool()
    }

    #[inline]
    pub fn fail_with_error_message<T>(message: impl Into<String>) -> Result<Option<T>, ErrorValue> {
        Self::from_description(message).fail_value()
    }

    #[inline]
    pub fn fail_with_error<T, C: IntoCause>(cause: C) -> Result<Option<T>, ErrorValue> {
        Self::from_cause(cause).fail_value()
    }

    #[inline]
    pub fn fail_with_error_described<T, C: IntoCause>(
        cause: C,
        description: impl Into<String>,
    ) -> Result<Option<T>, ErrorValue> {
        Self::from_cause(cause).describe(description).fail_value()
    }

    /// An already-failed future whose payload is caused by `cause`.
    ///
    /// # Examples
    ///
    /// ```
    /// use control_core_error::{ErrorBuilder, ErrorValue};
    ///
    /// let timeout = ErrorValue::new("Sim", 3, "timed out");
    /// let fut = ErrorBuilder::fail_future_with_error::<(), _>(&timeout);
    /// assert_eq!(fut.error().and_then(ErrorValue::cause), Some(&timeout));
    /// ```
    #[cfg(feature = "async")]
    #[inline]
    pub fn fail_future_with_error<T, C: IntoCause>(cause: C) -> FailedFuture<T> {
        Self::from_cause(cause).fail_future()
    }
}
