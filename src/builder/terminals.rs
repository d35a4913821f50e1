//! Fail terminals: build the error, then return it as the failure of the
//! type the caller needs.

use super::ErrorBuilder;
use crate::traits::FromErrorValue;
use crate::types::{ErrorValue, Rect};

#[cfg(feature = "async")]
use crate::async_ext::{FailedFuture, FutureContext};

impl ErrorBuilder {
    /// Builds the error and returns it as `Err`.
    ///
    /// # Examples
    ///
    /// ```
    /// use control_core_error::{ErrorBuilder, ErrorValue};
    ///
    /// fn parse_port(raw: &str) -> Result<u16, ErrorValue> {
    ///     match raw.parse() {
    ///         Ok(port) => Ok(port),
    ///         Err(_) => ErrorBuilder::new()
    ///             .describe(format!("invalid port {raw:?}"))
    ///             .no_logging()
    ///             .fail(),
    ///     }
    /// }
    ///
    /// assert!(parse_port("http").is_err());
    /// ```
    #[inline]
    pub fn fail<T>(self) -> Result<T, ErrorValue> {
        Err(self.into_error())
    }

    #[inline]
    pub fn fail_bool(self) -> Result<bool, ErrorValue> {
        self.fail()
    }

    #[inline]
    pub fn fail_uint(self) -> Result<u32, ErrorValue> {
        self.fail()
    }

    #[inline]
    pub fn fail_rect(self) -> Result<Rect, ErrorValue> {
        self.fail()
    }

    #[inline]
    pub fn fail_pointer<T>(self) -> Result<*mut T, ErrorValue> {
        self.fail()
    }

    /// The nullable-value variant: succeeds with `Option<T>`, fails with the
    /// error.
    #[inline]
    pub fn fail_value<T>(self) -> Result<Option<T>, ErrorValue> {
        self.fail()
    }

    /// Builds the error and wraps it in any [`FromErrorValue`] type.
    ///
    /// # Examples
    ///
    /// ```
    /// use control_core_error::{BoxedErrorResult, ErrorBuilder};
    ///
    /// let boxed: BoxedErrorResult<()> =
    ///     ErrorBuilder::new().describe("offline").no_logging().fail_as();
    /// assert_eq!(boxed.unwrap_err().message(), "offline");
    /// ```
    #[inline]
    pub fn fail_as<F: FromErrorValue>(self) -> F {
        F::from_error_value(self.into_error())
    }

    /// Builds the error into an already-failed future.
    #[cfg(feature = "async")]
    #[inline]
    pub fn fail_future<T>(self) -> FailedFuture<T> {
        self.fail_as()
    }

    /// Builds the error into an already-failed future with an empty teardown
    /// stack.
    #[cfg(feature = "async")]
    #[inline]
    pub fn fail_future_context<T>(self) -> FutureContext<FailedFuture<T>> {
        self.fail_as()
    }
}
