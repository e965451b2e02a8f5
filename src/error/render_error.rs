//! Error type for loading inputs and producing output images.

use std::path::PathBuf;

use thiserror::Error;

use super::category::ErrorCategory;

/// Errors raised outside the paint path.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Reading or writing a file failed
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Terminal output failed
    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),

    /// A JSON document could not be parsed
    #[error("invalid JSON in {what}: {source}")]
    Json {
        what: String,
        #[source]
        source: serde_json::Error,
    },

    /// Image encoding failed
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    /// A color string is not `#rrggbb` or `#rrggbbaa`
    #[error("invalid color {0:?}, expected #rrggbb or #rrggbbaa")]
    InvalidColor(String),

    /// A fixture is structurally inconsistent
    #[error("invalid fixture: {0}")]
    InvalidFixture(String),
}

impl RenderError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        RenderError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn json(what: impl Into<String>, source: serde_json::Error) -> Self {
        RenderError::Json {
            what: what.into(),
            source,
        }
    }

    /// Get the category of this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            RenderError::Io { .. } | RenderError::Terminal(_) => ErrorCategory::System,
            RenderError::Json { .. }
            | RenderError::InvalidColor(_)
            | RenderError::InvalidFixture(_) => ErrorCategory::Configuration,
            RenderError::Image(_) => ErrorCategory::Client,
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            RenderError::Io { .. } => "E_RENDER_IO",
            RenderError::Terminal(_) => "E_RENDER_TERM",
            RenderError::Json { .. } => "E_RENDER_JSON",
            RenderError::Image(_) => "E_RENDER_IMAGE",
            RenderError::InvalidColor(_) => "E_RENDER_COLOR",
            RenderError::InvalidFixture(_) => "E_RENDER_FIXTURE",
        }
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            RenderError::Io { path, .. } => {
                format!("Could not access {}. Check that the file exists.", path.display())
            }
            RenderError::Terminal(_) => {
                "Could not draw the preview. Try writing a PNG with --output instead.".to_string()
            }
            RenderError::Json { what, .. } => format!("The {} file is not valid JSON.", what),
            RenderError::Image(_) => "Could not encode the rendered image.".to_string(),
            RenderError::InvalidColor(value) => {
                format!("Color {:?} must look like #rrggbb or #rrggbbaa.", value)
            }
            RenderError::InvalidFixture(message) => format!("Fixture problem: {}", message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_is_system() {
        let err = RenderError::io(
            "/missing.json",
            std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        );
        assert_eq!(err.category(), ErrorCategory::System);
        assert_eq!(err.error_code(), "E_RENDER_IO");
        assert!(err.user_message().contains("/missing.json"));
    }

    #[test]
    fn test_json_error_is_configuration() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = RenderError::json("palette", source);
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert!(err.to_string().starts_with("invalid JSON in palette"));
    }

    #[test]
    fn test_invalid_color_message() {
        let err = RenderError::InvalidColor("blue".to_string());
        assert_eq!(err.error_code(), "E_RENDER_COLOR");
        assert!(err.user_message().contains("#rrggbb"));
    }

    #[test]
    fn test_terminal_from_io() {
        let err: RenderError = std::io::Error::new(std::io::ErrorKind::Other, "tty").into();
        assert!(matches!(err, RenderError::Terminal(_)));
    }
}
