//! Error line shown next to the control that failed.

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct ErrorDisplay {
    pub message: String,
}

impl ErrorDisplay {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for ErrorDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error: {}", self.message)
    }
}
