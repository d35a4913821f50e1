use std::borrow::Cow;
use std::sync::Arc;

use crate::logging::{ErrorLogger, LoggerSlot};
use crate::types::{DEFAULT_CODE, DEFAULT_DOMAIN};

/// Starting state for an [`ErrorBuilder`](super::ErrorBuilder).
///
/// Every field can still be overridden per builder; the config only decides
/// what an untouched builder produces. Pass one to
/// [`ErrorBuilder::with_config`](super::ErrorBuilder::with_config) instead of
/// relying on process-wide defaults.
///
/// # Examples
///
/// ```
/// use control_core_error::{BuilderConfig, ErrorBuilder};
///
/// let config = BuilderConfig::quiet().with_domain("Sim");
/// let err = ErrorBuilder::with_config(config).describe("busy").build();
/// assert_eq!(err.domain(), "Sim");
/// ```
#[derive(Debug, Clone)]
pub struct BuilderConfig {
    pub domain: Cow<'static, str>,
    pub code: i64,
    /// Joins description frames and the cause message into one string.
    pub separator: Cow<'static, str>,
    pub recursive: bool,
    pub logging_enabled: bool,
    pub logger: LoggerSlot,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            domain: Cow::Borrowed(DEFAULT_DOMAIN),
            code: DEFAULT_CODE,
            separator: Cow::Borrowed("\n"),
            recursive: true,
            logging_enabled: true,
            logger: LoggerSlot::Default,
        }
    }
}

impl BuilderConfig {
    /// Logging off, for expected errors and tight loops.
    #[inline]
    pub fn quiet() -> Self {
        Self { logging_enabled: false, ..Default::default() }
    }

    /// Messages never include the cause chain.
    #[inline]
    pub fn flat() -> Self {
        Self { recursive: false, ..Default::default() }
    }

    /// Frames joined with `" | "` so the message stays on one line.
    #[inline]
    pub fn single_line() -> Self {
        Self { separator: Cow::Borrowed(" | "), ..Default::default() }
    }

    #[must_use]
    pub fn with_domain<'a>(mut self, domain: impl Into<Cow<'a, str>>) -> Self {
        self.domain = Cow::Owned(domain.into().into_owned());
        self
    }

    #[must_use]
    pub fn with_separator(mut self, separator: impl Into<Cow<'static, str>>) -> Self {
        self.separator = separator.into();
        self
    }

    #[must_use]
    pub fn with_logger<L: ErrorLogger + 'static>(mut self, logger: L) -> Self {
        self.logger = LoggerSlot::Custom(Arc::new(logger));
        self
    }
}
