use std::path::PathBuf;

/// Result alias used across the crate.
pub type SampleImageResult<T> = Result<T, SampleImageError>;

/// Coarse classification of [`SampleImageError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// Command-line arguments could not be parsed.
    Usage,
    /// The request was rejected before any pixels were produced.
    Validation,
    /// Creating or writing the output file failed.
    Io,
    /// Canvas allocation or text rasterization failed.
    Render,
    /// Image serialization failed.
    Encode,
}

/// Every failure a run can end with.
///
/// `Display` is the single diagnostic line shown to the user, so variants that wrap lower-level
/// failures keep those details out of the message. Use [`SampleImageError::detail`] (or the
/// `#[source]` chain for IO) when logging.
#[derive(thiserror::Error, Debug)]
pub enum SampleImageError {
    #[error("{0}")]
    /// Argument parsing failure, already rendered as one line.
    Usage(String),

    #[error("Please specify an output path")]
    /// No output path was given.
    EmptyPath,

    #[error("{} already exits", .0.display())]
    /// The output path already exists. Existing files are never overwritten.
    PathExists(PathBuf),

    #[error("{} does not exit", .0.display())]
    /// The directory that would contain the output file is missing.
    MissingDirectory(PathBuf),

    #[error("{0} is invalid extention")]
    /// The output extension is not one of `.jpg`, `.jpeg`, `.png`.
    UnsupportedExtension(String),

    #[error("{0} is invalid color")]
    /// The background name is not in the color table.
    UnknownColor(String),

    #[error("Error: canvas size {width}x{height} is not supported")]
    /// Canvas dimensions outside what the raster backend can allocate.
    CanvasSize {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
    },

    #[error("Error: render text failed")]
    /// Font loading, layout, or glyph rasterization failed.
    Render(String),

    #[error("Error: encode failed")]
    /// The encoder rejected the canvas or the requested format.
    Encode(String),

    #[error("Error: create image file failed")]
    /// The output file could not be created.
    Create(#[source] std::io::Error),

    #[error("Error: write image file failed")]
    /// Bytes could not be written to, or flushed into, the output file.
    Write(#[source] std::io::Error),
}

impl SampleImageError {
    /// Build a render error from any displayable cause.
    pub fn render(detail: impl std::fmt::Display) -> Self {
        Self::Render(format!("{detail:#}"))
    }

    /// Build an encode error from any displayable cause.
    pub fn encode(detail: impl std::fmt::Display) -> Self {
        Self::Encode(format!("{detail:#}"))
    }

    /// Which part of the taxonomy this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Usage(_) => ErrorKind::Usage,
            Self::EmptyPath
            | Self::PathExists(_)
            | Self::MissingDirectory(_)
            | Self::UnsupportedExtension(_)
            | Self::UnknownColor(_) => ErrorKind::Validation,
            Self::CanvasSize { .. } | Self::Render(_) => ErrorKind::Render,
            Self::Encode(_) => ErrorKind::Encode,
            Self::Create(_) | Self::Write(_) => ErrorKind::Io,
        }
    }

    /// Internal detail for logs. Never part of the diagnostic line.
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::Render(d) | Self::Encode(d) => Some(d.clone()),
            Self::Create(e) | Self::Write(e) => Some(e.to_string()),
            _ => None,
        }
    }
}

impl From<image::ImageError> for SampleImageError {
    fn from(err: image::ImageError) -> Self {
        match err {
            image::ImageError::IoError(io) => Self::Write(io),
            other => Self::encode(other),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
