//! Async extensions for control-core-error.
//!
//! Provides the already-failed asynchronous results produced by
//! [`ErrorBuilder::fail_future`](crate::ErrorBuilder::fail_future) and
//! [`ErrorBuilder::fail_future_context`](crate::ErrorBuilder::fail_future_context).
//! Neither type schedules anything; how the failure is observed is left to
//! whichever runtime polls it.
//!
//! # Feature Flag
//!
//! Requires the `async` feature (enabled by default):
//!
//! ```toml
//! [dependencies]
//! control-core-error = { version = "0.3", features = ["async"] }
//! ```

mod failed_future;
mod future_context;

pub use failed_future::FailedFuture;
pub use future_context::FutureContext;
