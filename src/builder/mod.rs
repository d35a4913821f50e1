//! Fluent construction of [`ErrorValue`]s.
//!
//! An [`ErrorBuilder`] is created per failure site, configured through a
//! chain of `self -> Self` calls, and finished with exactly one terminal:
//!
//! - [`build`](ErrorBuilder::build) returns the [`ErrorValue`] itself
//! - the `fail*` terminals return `Err(ErrorValue)` typed for the caller
//! - [`fail_future`](ErrorBuilder::fail_future) and
//!   [`fail_future_context`](ErrorBuilder::fail_future_context) return an
//!   already-failed future
//!
//! Building logs the error through the configured [`ErrorLogger`] unless
//! logging was switched off.
//!
//! # Examples
//!
//! ```
//! use control_core_error::{ErrorBuilder, ErrorValue};
//!
//! let timeout = ErrorValue::new("Sim", 3, "timed out waiting for launchd");
//!
//! let err = ErrorBuilder::new()
//!     .describe("failed to boot")
//!     .describe("simulator busy")
//!     .caused_by(&timeout)
//!     .in_domain("Sim")
//!     .code(7)
//!     .no_logging()
//!     .fail_bool()
//!     .unwrap_err();
//!
//! assert_eq!(err.code(), 7);
//! assert_eq!(
//!     err.message(),
//!     "failed to boot\nsimulator busy\ntimed out waiting for launchd"
//! );
//! ```

use std::borrow::Cow;
use std::fmt;
use std::mem;
use std::sync::Arc;

use crate::logging::{ErrorLogger, LoggerSlot};
use crate::traits::IntoCause;
use crate::types::{ErrorValue, ErrorVec, ExtraInfo, InfoValue};

mod config;
mod constructors;
mod terminals;

pub use config::BuilderConfig;

/// Mutable, chainable accumulator for an [`ErrorValue`].
#[must_use]
#[derive(Debug, Clone)]
pub struct ErrorBuilder {
    descriptions: ErrorVec<String>,
    cause: Option<ErrorValue>,
    domain: Cow<'static, str>,
    code: i64,
    extra_info: ExtraInfo,
    logging_enabled: bool,
    recursive: bool,
    logger: LoggerSlot,
    separator: Cow<'static, str>,
}

impl Default for ErrorBuilder {
    fn default() -> Self {
        Self::with_config(BuilderConfig::default())
    }
}

impl ErrorBuilder {
    /// Creates a builder with the default domain, code 0, recursive
    /// description and logging to [`DefaultLogger`](crate::logging::DefaultLogger).
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder whose untouched fields come from `config`.
    pub fn with_config(config: BuilderConfig) -> Self {
        Self {
            descriptions: ErrorVec::new(),
            cause: None,
            domain: config.domain,
            code: config.code,
            extra_info: ExtraInfo::new(),
            logging_enabled: config.logging_enabled,
            recursive: config.recursive,
            logger: config.logger,
            separator: config.separator,
        }
    }

    /// Appends a description frame.
    #[inline]
    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.descriptions.push(description.into());
        self
    }

    /// Renders `args` and appends the result as a description frame.
    ///
    /// Usually reached through the [`describe!`](crate::describe) macro.
    #[inline]
    pub fn describe_format(self, args: fmt::Arguments<'_>) -> Self {
        self.describe(fmt::format(args))
    }

    /// Sets the cause, replacing any earlier one. A `None` cause is ignored,
    /// so call sites can chain unconditionally.
    #[inline]
    pub fn caused_by<C: IntoCause>(mut self, cause: C) -> Self {
        if let Some(cause) = cause.into_cause() {
            self.cause = Some(cause);
        }
        self
    }

    /// Attaches a diagnostic entry; the last value written for a key wins.
    #[inline]
    pub fn extra_info(mut self, key: impl Into<String>, value: impl Into<InfoValue>) -> Self {
        self.extra_info.insert(key, value);
        self
    }

    /// Includes the cause's message in the built message. This is the default.
    #[inline]
    pub fn recursive_description(mut self) -> Self {
        self.recursive = true;
        self
    }

    #[inline]
    pub fn no_recursive_description(mut self) -> Self {
        self.recursive = false;
        self
    }

    /// Replaces the logger. `None` suppresses logging regardless of
    /// [`no_logging`](Self::no_logging).
    #[inline]
    pub fn logger(mut self, logger: Option<Arc<dyn ErrorLogger>>) -> Self {
        self.logger = LoggerSlot::from(logger);
        self
    }

    #[inline]
    pub fn with_logger<L: ErrorLogger + 'static>(mut self, logger: L) -> Self {
        self.logger = LoggerSlot::Custom(Arc::new(logger));
        self
    }

    /// Prevents automatic logging, for errors that are expected or handled.
    #[inline]
    pub fn no_logging(mut self) -> Self {
        self.logging_enabled = false;
        self
    }

    /// Accepts borrowed runtime strings (`&String`, `&str`) as well as owned ones.
    #[inline]
    pub fn in_domain<'a>(mut self, domain: impl Into<Cow<'a, str>>) -> Self {
        self.domain = Cow::Owned(domain.into().into_owned());
        self
    }

    #[inline]
    pub fn code(mut self, code: i64) -> Self {
        self.code = code;
        self
    }

    /// Builds the error and logs it.
    ///
    /// The builder is left untouched, so `build` can be called again; every
    /// call logs again.
    pub fn build(&self) -> ErrorValue {
        let error = ErrorValue {
            domain: self.domain.clone(),
            code: self.code,
            message: self.render_message(),
            descriptions: self.descriptions.clone(),
            cause: self.cause.clone().map(Box::new),
            extra_info: self.extra_info.clone(),
        };
        self.log(&error);
        error
    }

    /// Consuming form of [`build`](Self::build).
    pub fn into_error(mut self) -> ErrorValue {
        let message = self.render_message();
        let error = ErrorValue {
            domain: mem::take(&mut self.domain),
            code: self.code,
            message,
            descriptions: mem::take(&mut self.descriptions),
            cause: self.cause.take().map(Box::new),
            extra_info: mem::take(&mut self.extra_info),
        };
        self.log(&error);
        error
    }

    fn render_message(&self) -> String {
        let cause = self
            .cause
            .as_ref()
            .filter(|_| self.recursive)
            .map(ErrorValue::message)
            .filter(|message| !message.is_empty());

        let mut parts = self
            .descriptions
            .iter()
            .map(String::as_str)
            .filter(|d| !d.is_empty())
            .chain(cause);

        let mut message = String::new();
        if let Some(first) = parts.next() {
            message.push_str(first);
            for part in parts {
                message.push_str(&self.separator);
                message.push_str(part);
            }
        }
        message
    }

    fn log(&self, error: &ErrorValue) {
        if self.logging_enabled {
            self.logger.emit(error);
        }
    }

    #[inline]
    pub fn descriptions(&self) -> &[String] {
        &self.descriptions
    }

    #[inline]
    pub fn cause(&self) -> Option<&ErrorValue> {
        self.cause.as_ref()
    }

    #[inline]
    pub fn domain(&self) -> &str {
        &self.domain
    }

    #[inline]
    pub fn error_code(&self) -> i64 {
        self.code
    }

    /// `true` when `build` would hand the error to a logger.
    #[inline]
    pub fn will_log(&self) -> bool {
        self.logging_enabled && !self.logger.is_disabled()
    }
}
