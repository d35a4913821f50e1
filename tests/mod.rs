pub mod builder;
pub mod logging;
