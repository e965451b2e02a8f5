//! Render configuration
//!
//! Where the palette and style tables come from, how wide to render and
//! which row variant to use. Values come from the builder, from
//! `CHATROW_*` environment variables, or from `palette.json` in the user's
//! config directory.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::error::{RenderError, RenderResult, ResultExt};
use crate::ui::style::{RowVariant, StyleTable};
use crate::ui::theme::Palette;

/// Environment variable naming a palette JSON file
pub const PALETTE_ENV: &str = "CHATROW_PALETTE";
/// Environment variable naming a style table JSON file
pub const STYLE_ENV: &str = "CHATROW_STYLE";
/// Environment variable with the list width in pixels
pub const WIDTH_ENV: &str = "CHATROW_WIDTH";

const DEFAULT_WIDTH: i32 = 400;

/// Configuration for one render.
///
/// # Example
///
/// ```ignore
/// use chatrow::config::RenderConfig;
///
/// let config = RenderConfig::default()
///     .with_width(320)
///     .with_variant(RowVariant::Compact);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Palette file; falls back to the config directory, then built-in colors
    pub palette_path: Option<PathBuf>,
    /// Style table file; built-in metrics when absent
    pub style_path: Option<PathBuf>,
    pub width: i32,
    pub variant: RowVariant,
    /// Force the avatar-only layout
    pub narrow: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            palette_path: None,
            style_path: None,
            width: DEFAULT_WIDTH,
            variant: RowVariant::Standard,
            narrow: false,
        }
    }
}

impl RenderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_palette_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.palette_path = Some(path.into());
        self
    }

    pub fn with_style_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.style_path = Some(path.into());
        self
    }

    pub fn with_width(mut self, width: i32) -> Self {
        self.width = width;
        self
    }

    pub fn with_variant(mut self, variant: RowVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn with_narrow(mut self, narrow: bool) -> Self {
        self.narrow = narrow;
        self
    }

    /// Create config from `CHATROW_PALETTE`, `CHATROW_STYLE` and `CHATROW_WIDTH`.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(path) = lookup(PALETTE_ENV).filter(|p| !p.is_empty()) {
            config = config.with_palette_path(path);
        }
        if let Some(path) = lookup(STYLE_ENV).filter(|p| !p.is_empty()) {
            config = config.with_style_path(path);
        }
        if let Some(width) = lookup(WIDTH_ENV) {
            match width.trim().parse::<i32>() {
                Ok(width) if width > 0 => config = config.with_width(width),
                _ => warn!(value = %width, "Ignoring invalid {}", WIDTH_ENV),
            }
        }
        config
    }

    /// `<config dir>/chatrow/palette.json`
    pub fn default_palette_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("chatrow").join("palette.json"))
    }

    /// Load the palette: the configured file, else the default location if it
    /// exists, else the built-in palette.
    pub fn load_palette(&self) -> RenderResult<Palette> {
        if let Some(path) = &self.palette_path {
            return read_json(path, "palette");
        }
        match Self::default_palette_path() {
            Some(path) if path.is_file() => read_json(&path, "palette"),
            _ => Ok(Palette::default()),
        }
    }

    /// Load the style table, or the built-in one
    pub fn load_style(&self) -> RenderResult<StyleTable> {
        match &self.style_path {
            Some(path) => read_json(path, "style"),
            None => Ok(StyleTable::default()),
        }
    }
}

fn read_json<T: DeserializeOwned>(path: &Path, what: &str) -> RenderResult<T> {
    let text = std::fs::read_to_string(path).with_path(path)?;
    let value = serde_json::from_str(&text).map_err(|e| RenderError::json(what, e))?;
    debug!(path = %path.display(), what, "Loaded configuration file");
    Ok(value)
}
