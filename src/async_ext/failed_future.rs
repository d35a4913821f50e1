//! A future that is failed from the moment it is created.

use core::future::Future;
use core::marker::PhantomData;
use core::pin::Pin;
use core::task::{Context, Poll};

use futures_core::future::FusedFuture;

use crate::traits::FromErrorValue;
use crate::types::ErrorValue;

/// Future that resolves to `Err(ErrorValue)` on its first poll.
///
/// The payload can also be inspected synchronously through
/// [`error`](FailedFuture::error) before the future is awaited.
///
/// # Examples
///
/// ```rust
/// use control_core_error::{ErrorBuilder, ErrorValue};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let fut = ErrorBuilder::new().describe("no device").no_logging().fail_future::<u32>();
/// assert_eq!(fut.error().map(ErrorValue::message), Some("no device"));
///
/// let result = fut.await;
/// assert!(result.is_err());
/// # }
/// ```
#[must_use = "futures do nothing unless polled"]
#[derive(Debug)]
pub struct FailedFuture<T> {
    error: Option<ErrorValue>,
    _output: PhantomData<fn() -> T>,
}

impl<T> FailedFuture<T> {
    #[inline]
    pub fn new(error: ErrorValue) -> Self {
        Self { error: Some(error), _output: PhantomData }
    }

    /// The failure payload; `None` once the future has been polled to completion.
    #[inline]
    pub fn error(&self) -> Option<&ErrorValue> {
        self.error.as_ref()
    }

    /// Takes the payload without polling.
    #[inline]
    pub fn into_error(self) -> Option<ErrorValue> {
        self.error
    }
}

impl<T> Future for FailedFuture<T> {
    type Output = Result<T, ErrorValue>;

    fn poll(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<Self::Output> {
        match self.get_mut().error.take() {
            Some(error) => Poll::Ready(Err(error)),
            None => Poll::Pending,
        }
    }
}

impl<T> FusedFuture for FailedFuture<T> {
    #[inline]
    fn is_terminated(&self) -> bool {
        self.error.is_none()
    }
}

impl<T> FromErrorValue for FailedFuture<T> {
    #[inline]
    fn from_error_value(error: ErrorValue) -> Self {
        Self::new(error)
    }
}

impl<'a, T: 'a> FromErrorValue for Pin<Box<dyn Future<Output = Result<T, ErrorValue>> + Send + 'a>> {
    #[inline]
    fn from_error_value(error: ErrorValue) -> Self {
        Box::pin(FailedFuture::<T>::new(error))
    }
}
