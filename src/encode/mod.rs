//! Canvas serialization.

use std::io::Write;

use image::ImageEncoder as _;

use crate::{
    config::OutputFormat,
    foundation::error::{SampleImageError, SampleImageResult},
    render::canvas::Canvas,
};

/// JPEG quality on the 1..=100 scale.
pub const JPEG_QUALITY: u8 = 100;

/// Encoded file contents, produced once and never modified.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncodedImage {
    format: OutputFormat,
    bytes: Vec<u8>,
}

impl EncodedImage {
    /// Format the bytes are in.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Encoded bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Take ownership of the encoded bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

/// Encode `canvas` in memory.
pub fn encode(canvas: &Canvas, format: OutputFormat) -> SampleImageResult<EncodedImage> {
    let mut bytes = Vec::new();
    encode_into(canvas, format, &mut bytes)?;
    Ok(EncodedImage { format, bytes })
}

/// Encode `canvas` for a dotted output extension such as `.png`.
///
/// Extensions outside `.jpg`, `.jpeg`, `.png` fail instead of falling back to a default.
pub fn encode_for_extension(canvas: &Canvas, ext: &str) -> SampleImageResult<EncodedImage> {
    let format = OutputFormat::from_extension(ext)
        .ok_or_else(|| SampleImageError::encode(format!("no encoder for extension '{ext}'")))?;
    encode(canvas, format)
}

/// Stream the encoded `canvas` into `writer`.
pub fn encode_into<W: Write>(
    canvas: &Canvas,
    format: OutputFormat,
    writer: W,
) -> SampleImageResult<()> {
    let rgba = canvas.to_rgba_image()?;
    let (width, height) = rgba.dimensions();

    match format {
        OutputFormat::Jpeg => {
            let rgb = image::DynamicImage::ImageRgba8(rgba).into_rgb8();
            image::codecs::jpeg::JpegEncoder::new_with_quality(writer, JPEG_QUALITY).write_image(
                rgb.as_raw(),
                width,
                height,
                image::ExtendedColorType::Rgb8,
            )?;
        }
        OutputFormat::Png => {
            image::codecs::png::PngEncoder::new(writer).write_image(
                rgba.as_raw(),
                width,
                height,
                image::ExtendedColorType::Rgba8,
            )?;
        }
    }

    tracing::debug!(?format, width, height, "encoded canvas");
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/encode.rs"]
mod tests;
