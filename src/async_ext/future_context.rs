//! A future paired with teardown work that runs once it completes.

use core::fmt;
use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};

use futures_core::future::FusedFuture;
use pin_project_lite::pin_project;

use super::FailedFuture;
use crate::traits::FromErrorValue;
use crate::types::{ErrorValue, ErrorVec};

type Teardown = Box<dyn FnOnce() + Send>;

pin_project! {
    /// Wraps a future together with a stack of teardown callbacks.
    ///
    /// When the inner future resolves, every registered teardown runs exactly
    /// once, most recently registered first, before the output is returned.
    ///
    /// # Cancel Safety
    ///
    /// Dropping a `FutureContext` before completion does not run its
    /// teardowns.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use control_core_error::ErrorBuilder;
    ///
    /// # #[tokio::main(flavor = "current_thread")]
    /// # async fn main() {
    /// let result = ErrorBuilder::new()
    ///     .describe("simulator shutdown")
    ///     .no_logging()
    ///     .fail_future_context::<()>()
    ///     .on_teardown(|| println!("releasing simulator"))
    ///     .await;
    ///
    /// assert!(result.is_err());
    /// # }
    /// ```
    #[must_use = "futures do nothing unless polled"]
    pub struct FutureContext<Fut> {
        #[pin]
        future: Fut,
        teardowns: ErrorVec<Teardown>,
        finished: bool,
    }
}

impl<Fut> FutureContext<Fut> {
    #[inline]
    pub fn new(future: Fut) -> Self {
        Self { future, teardowns: ErrorVec::new(), finished: false }
    }

    /// Registers a callback to run when the inner future completes.
    #[inline]
    pub fn on_teardown<F>(mut self, teardown: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        self.teardowns.push(Box::new(teardown));
        self
    }

    #[inline]
    pub fn teardown_count(&self) -> usize {
        self.teardowns.len()
    }

    #[inline]
    pub fn get_ref(&self) -> &Fut {
        &self.future
    }
}

impl<Fut: Future> Future for FutureContext<Fut> {
    type Output = Fut::Output;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();
        if *this.finished {
            return Poll::Pending;
        }

        let output = match this.future.poll(cx) {
            Poll::Ready(output) => output,
            Poll::Pending => return Poll::Pending,
        };

        *this.finished = true;
        while let Some(teardown) = this.teardowns.pop() {
            teardown();
        }
        Poll::Ready(output)
    }
}

impl<Fut: Future> FusedFuture for FutureContext<Fut> {
    #[inline]
    fn is_terminated(&self) -> bool {
        self.finished
    }
}

impl<T> FromErrorValue for FutureContext<FailedFuture<T>> {
    #[inline]
    fn from_error_value(error: ErrorValue) -> Self {
        Self::new(FailedFuture::new(error))
    }
}

impl<Fut: fmt::Debug> fmt::Debug for FutureContext<Fut> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FutureContext")
            .field("future", &self.future)
            .field("teardowns", &self.teardowns.len())
            .field("finished", &self.finished)
            .finish()
    }
}
