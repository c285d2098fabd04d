use crate::foundation::{
    core::{Rgba8, Rgba8Premul},
    error::{SampleImageError, SampleImageResult},
};

/// Pixel grid owned by one pipeline run.
///
/// Pixels are stored premultiplied, row-major, in a `vello_cpu` pixmap so text can be rasterized
/// straight against the same dimensions.
pub struct Canvas {
    width: u16,
    height: u16,
    pixmap: vello_cpu::Pixmap,
}

impl std::fmt::Debug for Canvas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Canvas")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

/// Allocate a `width` x `height` canvas with every pixel set to `color`.
///
/// Each side must be in `1..=65535`.
pub fn fill_background(width: u32, height: u32, color: Rgba8) -> SampleImageResult<Canvas> {
    let mut canvas = Canvas::new(width, height)?;
    canvas.fill(color);
    tracing::debug!(width, height, ?color, "filled background");
    Ok(canvas)
}

impl Canvas {
    /// Allocate a transparent canvas.
    pub fn new(width: u32, height: u32) -> SampleImageResult<Self> {
        let size_err = || SampleImageError::CanvasSize { width, height };
        let w: u16 = width.try_into().map_err(|_| size_err())?;
        let h: u16 = height.try_into().map_err(|_| size_err())?;
        if w == 0 || h == 0 {
            return Err(size_err());
        }
        Ok(Self {
            width: w,
            height: h,
            pixmap: vello_cpu::Pixmap::new(w, h),
        })
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        u32::from(self.width)
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        u32::from(self.height)
    }

    /// Overwrite every pixel with `color`.
    pub fn fill(&mut self, color: Rgba8) {
        let premul = color.premultiply().to_array();
        for px in self.pixmap.data_as_u8_slice_mut().chunks_exact_mut(4) {
            px.copy_from_slice(&premul);
        }
    }

    /// Straight-alpha color at `(x, y)`, or `None` outside the canvas.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba8> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        let data = self.pixmap.data_as_u8_slice();
        Some(Rgba8Premul::from_slice(&data[i..i + 4]).unpremultiply())
    }

    /// Premultiplied RGBA8 bytes, row-major.
    pub fn premul_bytes(&self) -> &[u8] {
        self.pixmap.data_as_u8_slice()
    }

    pub(crate) fn premul_bytes_mut(&mut self) -> &mut [u8] {
        self.pixmap.data_as_u8_slice_mut()
    }

    pub(crate) fn size_u16(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    /// Copy out as a straight-alpha `image` buffer for encoding.
    pub fn to_rgba_image(&self) -> SampleImageResult<image::RgbaImage> {
        let mut out = Vec::with_capacity(self.premul_bytes().len());
        for px in self.premul_bytes().chunks_exact(4) {
            out.extend_from_slice(&Rgba8Premul::from_slice(px).unpremultiply().to_array());
        }
        image::RgbaImage::from_raw(self.width(), self.height(), out)
            .ok_or_else(|| SampleImageError::encode("canvas byte length mismatch"))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/canvas.rs"]
mod tests;
