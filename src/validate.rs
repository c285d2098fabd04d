use std::path::{Path, PathBuf};

use crate::{
    color,
    config::{Config, ImageRequest, OutputFormat},
    foundation::error::{SampleImageError, SampleImageResult},
};

/// Filesystem existence probe used by validation.
pub trait PathProbe {
    /// Whether anything (file, directory, or symlink target) exists at `path`.
    fn exists(&self, path: &Path) -> bool;
}

/// [`PathProbe`] backed by `std::fs`.
#[derive(Clone, Copy, Debug, Default)]
pub struct StdFs;

impl PathProbe for StdFs {
    fn exists(&self, path: &Path) -> bool {
        std::fs::metadata(path).is_ok()
    }
}

/// Check a request and turn it into a [`Config`].
///
/// Checks run in a fixed order and the first failure wins:
/// empty path, existing path, missing parent directory, extension, color.
pub fn validate(request: &ImageRequest, probe: &impl PathProbe) -> SampleImageResult<Config> {
    let path = request.path.as_path();
    if path.as_os_str().is_empty() {
        return Err(SampleImageError::EmptyPath);
    }
    if probe.exists(path) {
        return Err(SampleImageError::PathExists(path.to_path_buf()));
    }

    let dir = parent_dir(path);
    if !probe.exists(&dir) {
        return Err(SampleImageError::MissingDirectory(dir));
    }

    let ext = extension(path);
    let format = OutputFormat::from_extension(&ext)
        .ok_or_else(|| SampleImageError::UnsupportedExtension(ext.clone()))?;

    let color = color::lookup(&request.background)
        .ok_or_else(|| SampleImageError::UnknownColor(request.background.clone()))?;

    Ok(Config {
        path: path.to_path_buf(),
        width: request.width,
        height: request.height,
        background: request.background.clone(),
        color,
        format,
        text: request.text.clone(),
        font_size: request.font_size,
    })
}

/// Directory that will contain `path`. A bare file name lives in `.`.
pub(crate) fn parent_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// Final dotted suffix of the file name, dot included; empty when there is none.
///
/// Unlike [`Path::extension`], a leading dot counts, so `.png` has the extension `.png`.
pub(crate) fn extension(path: &Path) -> String {
    let Some(name) = path.file_name() else {
        return String::new();
    };
    let name = name.to_string_lossy();
    match name.rfind('.') {
        Some(i) => name[i..].to_string(),
        None => String::new(),
    }
}

#[cfg(test)]
#[path = "../tests/unit/validate.rs"]
mod tests;
