//! Error category classification.

use std::fmt;

/// High-level categorization of errors for handling decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Invalid palette, style table or fixture contents.
    /// Not recoverable until the input is corrected.
    Configuration,

    /// Filesystem or terminal errors.
    System,

    /// Internal failures such as image encoding.
    Client,
}

impl ErrorCategory {
    /// Returns a short label for the category suitable for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Configuration => "configuration",
            ErrorCategory::System => "system",
            ErrorCategory::Client => "client",
        }
    }

    /// Whether the user can fix the problem by editing their input files.
    pub fn is_user_fixable(&self) -> bool {
        matches!(self, ErrorCategory::Configuration)
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
