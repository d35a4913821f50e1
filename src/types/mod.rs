//! Error types and utilities.
//!
//! This module provides the immutable [`ErrorValue`] record, its diagnostic
//! metadata, rendering helpers, and the sentinel values used by the fail
//! terminals.
//!
//! # Examples
//!
//! ```
//! use control_core_error::ErrorBuilder;
//!
//! let err = ErrorBuilder::new()
//!     .describe("failed to boot")
//!     .in_domain("Sim")
//!     .code(7)
//!     .no_logging()
//!     .build();
//!
//! println!("{}", err.fmt());
//! // Output: failed to boot (domain: Sim, code: 7)
//! ```
use smallvec::SmallVec;

pub mod error_formatter;
pub mod error_value;
pub mod extra_info;
pub mod sentinel;

pub use error_value::*;
pub use extra_info::*;
pub use sentinel::*;

/// SmallVec-backed collection used for description frames and metadata.
///
/// Uses inline storage for up to 2 elements to avoid heap allocations in the
/// common case of one or two descriptions.
pub type ErrorVec<E> = SmallVec<[E; 2]>;

/// Result alias that fails with an [`ErrorValue`].
pub type ErrorResult<T> = Result<T, ErrorValue>;

/// Result alias with a boxed [`ErrorValue`] for reduced stack size.
pub type BoxedErrorResult<T> = Result<T, Box<ErrorValue>>;
