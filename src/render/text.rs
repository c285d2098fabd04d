use anyhow::Context as _;

use crate::{
    foundation::{
        core::Rgba8,
        error::{SampleImageError, SampleImageResult},
    },
    render::{canvas::Canvas, composite::over_in_place},
};

/// Bytes of the bold typeface every label is drawn with.
pub const EMBEDDED_FONT: &[u8] = include_bytes!("../../assets/fonts/DejaVuSans-Bold.ttf");

/// Left margin of a label, in pixels.
pub const LABEL_MARGIN_X: f32 = 10.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// RGBA8 brush color used by Parley text layout.
pub(crate) struct TextBrushRgba8 {
    pub(crate) r: u8,
    pub(crate) g: u8,
    pub(crate) b: u8,
    pub(crate) a: u8,
}

impl From<Rgba8> for TextBrushRgba8 {
    fn from(c: Rgba8) -> Self {
        Self {
            r: c.r,
            g: c.g,
            b: c.b,
            a: c.a,
        }
    }
}

/// Top-left origin of the label for a canvas of `canvas_height`.
///
/// The vertical term `height / 2 - size / 2` (integer halving of the height) puts the top of the
/// em box half a font size above the middle, which lands the glyphs roughly, not exactly, at the
/// vertical center.
pub fn label_origin(canvas_height: u32, font_size: f32) -> (f32, f32) {
    let half_height = (canvas_height / 2) as f32;
    (LABEL_MARGIN_X, half_height - font_size / 2.0)
}

/// Shapes labels with Parley and rasterizes them with `vello_cpu`.
pub struct TextRenderer {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<TextBrushRgba8>,
    family_name: Option<String>,
    font: vello_cpu::peniko::FontData,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TextRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextRenderer")
            .field("family_name", &self.family_name)
            .finish_non_exhaustive()
    }
}

impl TextRenderer {
    /// Renderer over the embedded font. Font registration is deferred to the first label.
    pub fn new() -> Self {
        Self {
            font_ctx: parley::FontContext::default(),
            layout_ctx: parley::LayoutContext::new(),
            family_name: None,
            font: vello_cpu::peniko::FontData::new(
                vello_cpu::peniko::Blob::from(EMBEDDED_FONT.to_vec()),
                0,
            ),
        }
    }

    /// Family name of the embedded font, registering it if needed.
    pub fn family_name(&mut self) -> SampleImageResult<&str> {
        self.ensure_family().map_err(SampleImageError::render)?;
        Ok(self.family_name.as_deref().unwrap_or_default())
    }

    fn ensure_family(&mut self) -> anyhow::Result<String> {
        if let Some(name) = &self.family_name {
            return Ok(name.clone());
        }

        let families = self
            .font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(EMBEDDED_FONT.to_vec()), None);
        let family_id = families
            .first()
            .map(|(id, _)| *id)
            .context("no font families registered from embedded font")?;
        let name = self
            .font_ctx
            .collection
            .family_name(family_id)
            .context("embedded font family has no name")?
            .to_string();

        self.family_name = Some(name.clone());
        Ok(name)
    }

    fn layout(
        &mut self,
        text: &str,
        font_size: f32,
        brush: TextBrushRgba8,
    ) -> anyhow::Result<parley::Layout<TextBrushRgba8>> {
        let family_name = self.ensure_family()?;

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(family_name)),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(font_size));
        builder.push_default(parley::style::StyleProperty::Brush(brush));

        let mut layout: parley::Layout<TextBrushRgba8> = builder.build(text);
        layout.break_all_lines(None);
        Ok(layout)
    }

    /// Draw `text` in white with its top-left at `(origin_x, origin_y)`.
    ///
    /// The baseline sits at `origin_y + ascent`. Nothing wraps; glyphs past the canvas edge are
    /// clipped. Empty text leaves the canvas untouched.
    #[tracing::instrument(skip(self, canvas), fields(width = canvas.width(), height = canvas.height()))]
    pub fn draw_label(
        &mut self,
        canvas: &mut Canvas,
        text: &str,
        origin_x: f32,
        origin_y: f32,
        font_size: f32,
    ) -> SampleImageResult<()> {
        if text.is_empty() {
            return Ok(());
        }
        if !font_size.is_finite() || font_size <= 0.0 {
            return Err(SampleImageError::render(format!(
                "font size must be finite and > 0, got {font_size}"
            )));
        }

        let layout = self
            .layout(&single_line(text), font_size, Rgba8::WHITE.into())
            .map_err(SampleImageError::render)?;

        let (w, h) = canvas.size_u16();
        let mut ctx = vello_cpu::RenderContext::new(w, h);
        let mut glyph_count = 0usize;

        for line in layout.lines() {
            let metrics = line.metrics();
            let dy = origin_y + metrics.ascent - metrics.baseline;

            for item in line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                    continue;
                };

                let brush = run.style().brush;
                ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                    brush.r, brush.g, brush.b, brush.a,
                ));

                let glyphs: Vec<vello_cpu::Glyph> = run
                    .positioned_glyphs()
                    .map(|g| vello_cpu::Glyph {
                        id: g.id,
                        x: origin_x + g.x,
                        y: g.y + dy,
                    })
                    .collect();
                glyph_count += glyphs.len();

                ctx.glyph_run(&self.font)
                    .font_size(run.run().font_size())
                    .fill_glyphs(glyphs.into_iter());
            }
        }

        ctx.flush();
        let mut layer = vello_cpu::Pixmap::new(w, h);
        ctx.render_to_pixmap(&mut layer);
        over_in_place(canvas.premul_bytes_mut(), layer.data_as_u8_slice())?;

        tracing::debug!(glyph_count, "label drawn");
        Ok(())
    }
}

/// Labels are one line: control characters, line breaks included, become spaces.
fn single_line(text: &str) -> std::borrow::Cow<'_, str> {
    let is_break = |c: char| c.is_control() || matches!(c, '\u{2028}' | '\u{2029}');
    if text.contains(is_break) {
        std::borrow::Cow::Owned(text.replace(is_break, " "))
    } else {
        std::borrow::Cow::Borrowed(text)
    }
}

/// Convenience wrapper drawing with a fresh [`TextRenderer`].
pub fn draw_label(
    canvas: &mut Canvas,
    text: &str,
    origin_x: f32,
    origin_y: f32,
    font_size: f32,
) -> SampleImageResult<()> {
    TextRenderer::new().draw_label(canvas, text, origin_x, origin_y, font_size)
}

#[cfg(test)]
#[path = "../../tests/unit/render/text.rs"]
mod tests;
