use core::fmt::{self, Display};
use std::borrow::Cow;

use super::{ErrorValue, IO_DOMAIN};
use crate::types::error_formatter::ErrorFormatConfig;
use crate::types::{ErrorVec, ExtraInfo};

impl Display for ErrorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !f.alternate() {
            return f.write_str(&self.message);
        }
        f.write_str(&ErrorFormatConfig::pretty().render(self))
    }
}

impl std::error::Error for ErrorValue {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.cause.as_deref().map(|cause| cause as &(dyn std::error::Error + 'static))
    }
}

impl From<std::io::Error> for ErrorValue {
    fn from(error: std::io::Error) -> Self {
        let message = error.to_string();
        let mut descriptions = ErrorVec::new();
        descriptions.push(message.clone());
        Self {
            domain: Cow::Borrowed(IO_DOMAIN),
            code: error.raw_os_error().map_or(0, i64::from),
            message,
            descriptions,
            cause: None,
            extra_info: ExtraInfo::new(),
        }
    }
}
