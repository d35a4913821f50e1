//! Core traits for building and consuming errors.
//!
//! - [`IntoCause`]: Conversion trait for anything accepted by
//!   [`ErrorBuilder::caused_by`](crate::ErrorBuilder::caused_by)
//! - [`SentinelResultExt`]: Bridges `Result<T, ErrorValue>` back to the
//!   sentinel-plus-error-slot convention
//! - [`ResultExt`]: Adds a layer of description to an `Err` in place
//! - [`FromErrorValue`]: Factory for already-failed results and futures
//!
//! # Examples
//!
//! ```
//! use control_core_error::traits::{IntoCause, SentinelResultExt};
//! use control_core_error::ErrorBuilder;
//!
//! let none: Option<control_core_error::ErrorValue> = None;
//! assert!(none.into_cause().is_none());
//!
//! let mut slot = None;
//! let ok = ErrorBuilder::new().describe("nope").no_logging().fail_bool().or_sentinel(&mut slot);
//! assert!(!ok);
//! assert!(slot.is_some());
//! ```

pub mod from_error_value;
pub mod into_cause;
pub mod result_ext;

pub use from_error_value::FromErrorValue;
pub use into_cause::IntoCause;
pub use result_ext::{ResultExt, SentinelResultExt};
