//! Error chain formatting utilities.
//!
//! [`ErrorValue::message`](crate::ErrorValue::message) is rendered once, at
//! build time, with the builder's separator. The types here re-render a chain
//! on demand from the stored description frames, which is useful for logs and
//! terminal output that want a different layout.

use core::fmt::{self, Display};
use std::borrow::Cow;

use crate::types::ErrorValue;

/// Configuration-based error formatter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorFormatConfig {
    pub separator: Cow<'static, str>,
    pub indent: Cow<'static, str>,
    /// Indent each cause level by one more `indent`.
    pub cascade: bool,
    /// Follow the cause chain instead of rendering only the outermost error.
    pub recursive: bool,
    pub show_domain: bool,
    pub show_code: bool,
    pub show_extra: bool,
}

impl Default for ErrorFormatConfig {
    fn default() -> Self {
        Self {
            separator: Cow::Borrowed(" -> "),
            indent: Cow::Borrowed("  "),
            cascade: false,
            recursive: true,
            show_domain: true,
            show_code: true,
            show_extra: false,
        }
    }
}

impl ErrorFormatConfig {
    #[inline]
    pub fn pretty() -> Self {
        Self { separator: "\n".into(), cascade: true, show_extra: true, ..Default::default() }
    }

    #[inline]
    pub fn cascaded() -> Self {
        Self { separator: "\n".into(), cascade: true, ..Default::default() }
    }

    #[inline]
    pub fn compact() -> Self {
        Self { separator: " | ".into(), ..Default::default() }
    }

    /// Only the description frames, no domain or code suffix.
    #[inline]
    pub fn bare() -> Self {
        Self { show_domain: false, show_code: false, ..Default::default() }
    }

    /// Renders `error` according to this configuration.
    pub fn render(&self, error: &ErrorValue) -> String {
        let mut out = String::with_capacity(error.message().len() + 32);
        let depth_limit = if self.recursive { usize::MAX } else { 1 };
        let mut first = true;

        for (depth, level) in error.chain().take(depth_limit).enumerate() {
            for description in level.descriptions() {
                if !first {
                    out.push_str(&self.separator);
                }
                first = false;
                if self.cascade {
                    for _ in 0..depth {
                        out.push_str(&self.indent);
                    }
                }
                out.push_str(description);
            }
        }

        let suffix = match (self.show_domain, self.show_code) {
            (true, true) => format!("(domain: {}, code: {})", error.domain(), error.code()),
            (true, false) => format!("(domain: {})", error.domain()),
            (false, true) => format!("(code: {})", error.code()),
            (false, false) => String::new(),
        };
        if !suffix.is_empty() {
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(&suffix);
        }

        if self.show_extra && !error.extra_info().is_empty() {
            let multiline = self.separator.contains('\n');
            if multiline {
                out.push('\n');
                out.push_str(&self.indent);
                out.push_str("extra: ");
                out.push_str(&error.extra_info().to_string());
            } else {
                if !out.is_empty() {
                    out.push(' ');
                }
                out.push('{');
                out.push_str(&error.extra_info().to_string());
                out.push('}');
            }
        }

        out
    }
}

/// Builder for customizing error display output.
pub struct ErrorFormatBuilder<'a> {
    pub(crate) error: &'a ErrorValue,
    pub(crate) config: ErrorFormatConfig,
}

impl<'a> ErrorFormatBuilder<'a> {
    pub fn new(error: &'a ErrorValue) -> Self {
        Self { error, config: ErrorFormatConfig::default() }
    }

    pub fn with_config(mut self, config: ErrorFormatConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_separator(mut self, separator: impl Into<Cow<'static, str>>) -> Self {
        self.config.separator = separator.into();
        self
    }

    pub fn show_domain(mut self, show: bool) -> Self {
        self.config.show_domain = show;
        self
    }

    pub fn show_code(mut self, show: bool) -> Self {
        self.config.show_code = show;
        self
    }

    pub fn show_extra(mut self, show: bool) -> Self {
        self.config.show_extra = show;
        self
    }

    pub fn recursive(mut self, recursive: bool) -> Self {
        self.config.recursive = recursive;
        self
    }

    pub fn pretty(mut self) -> Self {
        self.config = ErrorFormatConfig::pretty();
        self
    }

    pub fn compact(mut self) -> Self {
        self.config = ErrorFormatConfig::compact();
        self
    }

    pub fn cascade(mut self, enabled: bool) -> Self {
        self.config.cascade = enabled;
        if enabled && self.config.separator == " -> " {
            self.config.separator = "\n".into();
        }
        self
    }

    pub fn cascaded(mut self) -> Self {
        self.config = ErrorFormatConfig::cascaded();
        self
    }
}

impl Display for ErrorFormatBuilder<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.config.render(self.error))
    }
}
