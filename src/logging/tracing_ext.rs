//! Tracing integration for control-core-error.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature (enabled by default):
//!
//! ```toml
//! [dependencies]
//! control-core-error = { version = "0.3", features = ["tracing"] }
//! ```

use super::ErrorLogger;
use crate::types::ErrorValue;

/// Emits built errors as `tracing` debug events.
///
/// Events use the `control_core_error` target and carry `domain` and `code`
/// as structured fields, so subscribers can filter on them.
///
/// # Example
///
/// ```rust,ignore
/// use control_core_error::{ErrorBuilder, TracingLogger};
///
/// tracing_subscriber::fmt().init();
/// let _ = ErrorBuilder::new().describe("boot failed").with_logger(TracingLogger).build();
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogger;

impl ErrorLogger for TracingLogger {
    fn log(&self, message: &str) {
        tracing::debug!(target: "control_core_error", "{}", message);
    }

    fn log_error(&self, error: &ErrorValue) {
        tracing::debug!(
            target: "control_core_error",
            domain = error.domain(),
            code = error.code(),
            "{}",
            error.message()
        );
    }
}
