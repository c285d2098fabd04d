use std::path::PathBuf;

use crate::foundation::core::Rgba8;

/// Default canvas width in pixels.
pub const DEFAULT_WIDTH: u32 = 100;
/// Default canvas height in pixels.
pub const DEFAULT_HEIGHT: u32 = 100;
/// Default background color name.
pub const DEFAULT_BACKGROUND: &str = "gray";
/// Label used when `--text` is passed without a value.
pub const DEFAULT_TEXT: &str = "SAMPLE";
/// Default label size in points (72 DPI, so one point is one pixel).
pub const DEFAULT_FONT_SIZE: f32 = 24.0;

/// Environment variable selecting the log level of the binary.
pub const LOG_ENV: &str = "SAMPLEIMAGE_LOG";

/// Output encodings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Baseline JPEG at quality 100.
    Jpeg,
    /// Lossless PNG.
    Png,
}

impl OutputFormat {
    /// Extensions accepted for output paths, with the leading dot.
    pub const EXTENSIONS: [&'static str; 3] = [".jpeg", ".jpg", ".png"];

    /// Map a dotted, case-sensitive extension to a format.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext {
            ".jpg" | ".jpeg" => Some(Self::Jpeg),
            ".png" => Some(Self::Png),
            _ => None,
        }
    }
}

/// Run parameters as they arrive from the command line, before validation.
#[derive(Clone, Debug, PartialEq)]
pub struct ImageRequest {
    /// Output path. Empty when none was given.
    pub path: PathBuf,
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// Background color name.
    pub background: String,
    /// Optional label.
    pub text: Option<String>,
    /// Label size in points.
    pub font_size: f32,
}

impl ImageRequest {
    /// Request with default options for `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            background: DEFAULT_BACKGROUND.to_string(),
            text: None,
            font_size: DEFAULT_FONT_SIZE,
        }
    }
}

/// Validated, immutable run configuration. Only [`crate::validate`] builds one.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub(crate) path: PathBuf,
    pub(crate) width: u32,
    pub(crate) height: u32,
    pub(crate) background: String,
    pub(crate) color: Rgba8,
    pub(crate) format: OutputFormat,
    pub(crate) text: Option<String>,
    pub(crate) font_size: f32,
}

impl Config {
    /// Destination file.
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    /// Canvas width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Canvas height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Background color name as requested.
    pub fn background(&self) -> &str {
        &self.background
    }

    /// Resolved background color.
    pub fn color(&self) -> Rgba8 {
        self.color
    }

    /// Encoding selected from the path's extension.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Label to draw, if any.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Label size in points.
    pub fn font_size(&self) -> f32 {
        self.font_size
    }
}

/// Read the log level from [`LOG_ENV`]. Unset or unparsable values disable logging.
pub fn log_level_from_env() -> Option<tracing::Level> {
    std::env::var(LOG_ENV)
        .ok()
        .and_then(|v| parse_log_level(&v))
}

fn parse_log_level(value: &str) -> Option<tracing::Level> {
    value.trim().parse::<tracing::Level>().ok()
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
