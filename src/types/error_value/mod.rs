//! The immutable error record produced by [`ErrorBuilder`](crate::ErrorBuilder).
//!
//! An [`ErrorValue`] carries a domain, a numeric code, a rendered message,
//! the raw description frames that produced it, an optional nested cause and
//! a snapshot of diagnostic metadata. Once built it never changes; wrapping
//! it in a further layer of context means building a new value caused by it.

use std::borrow::Cow;

use crate::types::{ErrorVec, ExtraInfo};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

mod chain;
mod traits;

pub use chain::Chain;

/// Domain assigned to errors that never call `in_domain`.
pub const DEFAULT_DOMAIN: &str = "com.control-core.error";

/// Code assigned to errors that never call `code`.
pub const DEFAULT_CODE: i64 = 0;

/// Domain used when converting foreign `std::error::Error` values.
pub const FOREIGN_DOMAIN: &str = "std::error";

/// Domain used for converted `std::io::Error` values.
pub const IO_DOMAIN: &str = "std::io";

/// Structured, immutable error.
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorValue {
    pub(crate) domain: Cow<'static, str>,
    pub(crate) code: i64,
    pub(crate) message: String,
    pub(crate) descriptions: ErrorVec<String>,
    pub(crate) cause: Option<Box<ErrorValue>>,
    pub(crate) extra_info: ExtraInfo,
}

impl ErrorValue {
    /// Creates a bare error with a single description and no cause.
    ///
    /// Nothing is logged; use [`ErrorBuilder`](crate::ErrorBuilder) when the
    /// error should be reported.
    pub fn new(domain: impl Into<Cow<'static, str>>, code: i64, message: impl Into<String>) -> Self {
        let message = message.into();
        let mut descriptions = ErrorVec::new();
        if !message.is_empty() {
            descriptions.push(message.clone());
        }
        Self {
            domain: domain.into(),
            code,
            message,
            descriptions,
            cause: None,
            extra_info: ExtraInfo::new(),
        }
    }

    /// Converts a foreign error, following its `source()` chain.
    ///
    /// An `ErrorValue` anywhere in the chain (for instance one that travelled
    /// through a `Box<dyn Error>`) is cloned as is, since its `Display`
    /// already renders its own causes.
    pub fn from_std_error(error: &(dyn std::error::Error + 'static)) -> Self {
        if let Some(value) = error.downcast_ref::<ErrorValue>() {
            return value.clone();
        }
        let cause = error.source().map(|source| Box::new(Self::from_std_error(source)));
        let description = error.to_string();
        let message = match &cause {
            Some(inner) if !inner.message.is_empty() => {
                format!("{description}\n{}", inner.message)
            },
            _ => description.clone(),
        };
        let mut descriptions = ErrorVec::new();
        descriptions.push(description);
        Self {
            domain: Cow::Borrowed(FOREIGN_DOMAIN),
            code: DEFAULT_CODE,
            message,
            descriptions,
            cause,
            extra_info: ExtraInfo::new(),
        }
    }

    #[inline]
    pub fn domain(&self) -> &str {
        &self.domain
    }

    #[inline]
    pub fn code(&self) -> i64 {
        self.code
    }

    /// The rendered message, including the cause chain when the error was
    /// built with recursive description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Description frames of this error only, oldest first.
    #[inline]
    pub fn descriptions(&self) -> &[String] {
        &self.descriptions
    }

    #[inline]
    pub fn cause(&self) -> Option<&ErrorValue> {
        self.cause.as_deref()
    }

    #[inline]
    pub fn extra_info(&self) -> &ExtraInfo {
        &self.extra_info
    }

    /// Iterates from this error down to the innermost cause.
    #[inline]
    pub fn chain(&self) -> Chain<'_> {
        Chain::new(self)
    }

    /// The innermost error of the chain; `self` when there is no cause.
    pub fn root_cause(&self) -> &ErrorValue {
        self.chain().last().unwrap_or(self)
    }

    #[inline]
    pub fn is_in_domain(&self, domain: &str) -> bool {
        self.domain == domain
    }

    #[inline]
    pub fn has_code(&self, code: i64) -> bool {
        self.code == code
    }

    /// Returns a builder for customizing how the error chain is rendered.
    #[must_use]
    #[inline]
    pub fn fmt(&self) -> crate::types::error_formatter::ErrorFormatBuilder<'_> {
        crate::types::error_formatter::ErrorFormatBuilder::new(self)
    }
}
