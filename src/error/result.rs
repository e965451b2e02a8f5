//! Result type alias for rendering operations.

use std::path::Path;

use super::render_error::RenderError;

/// Type alias for Results using RenderError.
pub type RenderResult<T> = Result<T, RenderError>;

/// Extension trait attaching a file path to raw I/O results.
pub trait ResultExt<T> {
    /// Convert an I/O failure into [`RenderError::Io`] for `path`.
    ///
    /// ```ignore
    /// let text = std::fs::read_to_string(&path).with_path(&path)?;
    /// ```
    fn with_path(self, path: &Path) -> RenderResult<T>;
}

impl<T> ResultExt<T> for Result<T, std::io::Error> {
    fn with_path(self, path: &Path) -> RenderResult<T> {
        self.map_err(|e| RenderError::io(path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_path_wraps_io_error() {
        let path = Path::new("/definitely/not/here.json");
        let result = std::fs::read_to_string(path).with_path(path);
        match result {
            Err(RenderError::Io { path: p, .. }) => assert_eq!(p, path),
            other => panic!("expected Io error, got {:?}", other),
        }
    }
}
