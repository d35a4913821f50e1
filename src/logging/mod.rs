//! Logging capability used by [`ErrorBuilder::build`](crate::ErrorBuilder::build).
//!
//! The builder never owns a logging backend. It holds a [`LoggerSlot`] that is
//! either the crate default, a caller-supplied [`ErrorLogger`], or explicitly
//! disabled. With the `tracing` feature the default forwards to
//! [`TracingLogger`]; without it the default is [`NoopLogger`].
//!
//! # Examples
//!
//! ```
//! use std::sync::{Arc, Mutex};
//! use control_core_error::{ErrorBuilder, ErrorLogger};
//!
//! #[derive(Default)]
//! struct Collect(Mutex<Vec<String>>);
//!
//! impl ErrorLogger for Collect {
//!     fn log(&self, message: &str) {
//!         if let Ok(mut lines) = self.0.lock() {
//!             lines.push(message.to_owned());
//!         }
//!     }
//! }
//!
//! let sink = Arc::new(Collect::default());
//! let _ = ErrorBuilder::new().describe("disk full").with_logger(sink.clone()).build();
//! assert_eq!(sink.0.lock().unwrap().as_slice(), ["disk full"]);
//! ```

use core::fmt;
use std::sync::Arc;

use crate::types::ErrorValue;

#[cfg(feature = "tracing")]
mod tracing_ext;

#[cfg(feature = "tracing")]
pub use tracing_ext::TracingLogger;

/// Receives rendered error messages.
///
/// Implementations must not panic; the builder treats logging as
/// fire-and-forget and has no channel to report a failed write.
pub trait ErrorLogger: Send + Sync {
    /// Records a rendered message.
    fn log(&self, message: &str);

    /// Records a freshly built error. Defaults to logging its message.
    fn log_error(&self, error: &ErrorValue) {
        self.log(error.message());
    }
}

impl<L: ErrorLogger + ?Sized> ErrorLogger for Arc<L> {
    #[inline]
    fn log(&self, message: &str) {
        (**self).log(message)
    }

    #[inline]
    fn log_error(&self, error: &ErrorValue) {
        (**self).log_error(error)
    }
}

/// Logger that discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopLogger;

impl ErrorLogger for NoopLogger {
    #[inline]
    fn log(&self, _message: &str) {}

    #[inline]
    fn log_error(&self, _error: &ErrorValue) {}
}

/// The logger used when a builder is not given one explicitly.
#[cfg(feature = "tracing")]
pub type DefaultLogger = TracingLogger;

/// The logger used when a builder is not given one explicitly.
#[cfg(not(feature = "tracing"))]
pub type DefaultLogger = NoopLogger;

/// Where a builder sends its error on `build`.
#[derive(Clone, Default)]
pub enum LoggerSlot {
    /// Resolve to [`DefaultLogger`] at build time.
    #[default]
    Default,
    Custom(Arc<dyn ErrorLogger>),
    /// Explicit "no logger"; suppresses logging regardless of other settings.
    Disabled,
}

impl LoggerSlot {
    #[inline]
    pub fn is_disabled(&self) -> bool {
        matches!(self, Self::Disabled)
    }

    /// Hands `error` to the resolved logger, if any.
    pub(crate) fn emit(&self, error: &ErrorValue) {
        match self {
            Self::Default => DefaultLogger::default().log_error(error),
            Self::Custom(logger) => logger.log_error(error),
            Self::Disabled => {},
        }
    }
}

impl From<Option<Arc<dyn ErrorLogger>>> for LoggerSlot {
    #[inline]
    fn from(logger: Option<Arc<dyn ErrorLogger>>) -> Self {
        logger.map_or(Self::Disabled, Self::Custom)
    }
}

impl fmt::Debug for LoggerSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default => f.write_str("Default"),
            Self::Custom(_) => f.write_str("Custom(..)"),
            Self::Disabled => f.write_str("Disabled"),
        }
    }
}
