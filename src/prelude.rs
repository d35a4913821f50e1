//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use control_core_error::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`describe!`], [`error_for_format!`]
//! - **Types**: [`ErrorBuilder`], [`ErrorValue`], [`ErrorResult`]
//! - **Traits**: [`IntoCause`], [`ResultExt`], [`SentinelResultExt`]
//!
//! # Examples
//!
//! ```
//! use control_core_error::prelude::*;
//!
//! fn read_config() -> ErrorResult<String> {
//!     std::fs::read_to_string("/definitely/missing.toml")
//!         .map_err(|e| ErrorBuilder::from_cause(e).describe("loading configuration").into_error())
//! }
//!
//! let err = read_config().unwrap_err();
//! assert!(err.message().starts_with("loading configuration\n"));
//! ```

// Macros
pub use crate::{describe, error_for_format};

// Core types
pub use crate::builder::ErrorBuilder;
pub use crate::types::{ErrorResult, ErrorValue};

// Traits
pub use crate::traits::{IntoCause, ResultExt, SentinelResultExt};
