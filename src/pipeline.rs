use std::{fs::File, io::BufWriter, io::Write as _};

use crate::{
    config::{Config, ImageRequest},
    encode::encode_into,
    foundation::error::{SampleImageError, SampleImageResult},
    render::{
        canvas::{Canvas, fill_background},
        text::{TextRenderer, label_origin},
    },
    validate::{PathProbe, validate},
};

/// Validate `request`, render it, and write the image file.
///
/// Stops at the first failure. The output is opened with create-new semantics, so an existing
/// file is never truncated; a file that was created before a later failure is left in place.
#[tracing::instrument(skip_all, fields(path = %request.path.display()))]
pub fn generate(request: &ImageRequest, probe: &impl PathProbe) -> SampleImageResult<Config> {
    let config = validate(request, probe)?;
    tracing::debug!(
        width = config.width(),
        height = config.height(),
        background = config.background(),
        format = ?config.format(),
        "request validated"
    );

    let canvas = render(&config)?;
    write_image(&config, &canvas)?;

    tracing::info!(path = %config.path().display(), "image written");
    Ok(config)
}

/// Produce the in-memory canvas for `config`: background fill, then the label if any.
pub fn render(config: &Config) -> SampleImageResult<Canvas> {
    let mut canvas = fill_background(config.width(), config.height(), config.color())?;

    if let Some(text) = config.text().filter(|t| !t.is_empty()) {
        let (x, y) = label_origin(config.height(), config.font_size());
        TextRenderer::new().draw_label(&mut canvas, text, x, y, config.font_size())?;
    }

    Ok(canvas)
}

/// Create the output file and encode `canvas` into it.
pub fn write_image(config: &Config, canvas: &Canvas) -> SampleImageResult<()> {
    let file = File::create_new(config.path()).map_err(|e| match e.kind() {
        std::io::ErrorKind::AlreadyExists => {
            SampleImageError::PathExists(config.path().to_path_buf())
        }
        _ => SampleImageError::Create(e),
    })?;

    let mut writer = BufWriter::new(file);
    encode_into(canvas, config.format(), &mut writer)?;
    writer.flush().map_err(SampleImageError::Write)?;
    Ok(())
}

#[cfg(test)]
#[path = "../tests/unit/pipeline.rs"]
mod tests;
