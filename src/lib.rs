//! Chainable builder for structured errors with a domain, a numeric code,
//! layered descriptions, an optional cause and diagnostic metadata.
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `control_core_error::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Building an Error
//!
//! ```
//! use control_core_error::ErrorBuilder;
//!
//! let err = ErrorBuilder::new()
//!     .describe("failed to boot")
//!     .in_domain("Sim")
//!     .code(7)
//!     .extra_info("udid", "A1B2")
//!     .no_logging()
//!     .build();
//!
//! assert_eq!(err.domain(), "Sim");
//! assert_eq!(err.code(), 7);
//! assert_eq!(err.message(), "failed to boot");
//! ```
//!
//! ## Returning Early
//!
//! ```
//! use control_core_error::{ErrorBuilder, ErrorResult};
//!
//! fn boot(busy: bool) -> ErrorResult<bool> {
//!     if busy {
//!         return ErrorBuilder::new().describe("simulator busy").no_logging().fail_bool();
//!     }
//!     Ok(true)
//! }
//!
//! assert!(boot(true).is_err());
//! ```
//!
//! ## Wrapping a Cause
//!
//! ```
//! use control_core_error::{ErrorBuilder, ErrorValue};
//!
//! let timeout = ErrorValue::new("Sim", 3, "timed out");
//! let err = ErrorBuilder::from_cause(&timeout)
//!     .describe("failed to shut down")
//!     .no_logging()
//!     .build();
//!
//! assert_eq!(err.cause(), Some(&timeout));
//! assert_eq!(err.message(), "failed to shut down\ntimed out");
//! assert_eq!(err.chain().count(), 2);
//! ```

/// ErrorBuilder, its configuration, terminals and static constructors
pub mod builder;
/// Logging capability consumed by `build`
pub mod logging;
/// Format-string macros for descriptions
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Core traits for causes, sentinels and failure factories
pub mod traits;
/// ErrorValue, metadata, formatting and sentinel types
pub mod types;

/// Already-failed futures (requires `async` feature)
#[cfg(feature = "async")]
pub mod async_ext;

pub use builder::{BuilderConfig, ErrorBuilder};
pub use logging::{DefaultLogger, ErrorLogger, LoggerSlot, NoopLogger};
pub use traits::*;
pub use types::{
    error_formatter::ErrorFormatConfig, BoxedErrorResult, ErrorResult, ErrorValue, ErrorVec,
    ExtraInfo, InfoValue, Rect, Sentinel, DEFAULT_CODE, DEFAULT_DOMAIN,
};

#[cfg(feature = "tracing")]
pub use logging::TracingLogger;

#[cfg(feature = "async")]
pub use async_ext::{FailedFuture, FutureContext};
