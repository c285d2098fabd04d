//! Command-line adapter: clap parsing, help text, and exit codes.

use std::{ffi::OsString, io::Write, path::PathBuf};

use clap::{CommandFactory as _, FromArgMatches as _, Parser, builder::TypedValueParser as _};

use crate::{
    color,
    config::{self, ImageRequest, OutputFormat},
    foundation::error::{SampleImageError, SampleImageResult},
    pipeline,
    validate::StdFs,
};

/// Exit status of a successful run, including `--help`.
pub const EXIT_OK: i32 = 0;
/// Exit status of any failed run.
pub const EXIT_ERR: i32 = 1;

const HELP_TEMPLATE: &str = "\
Usage: {usage}

{before-help}Options:
{options}
";

#[derive(Parser, Debug)]
#[command(
    name = "sampleimage",
    version,
    about = "Generate a solid-color placeholder JPEG or PNG image",
    override_usage = "sampleimage [file] [options]",
    help_template = HELP_TEMPLATE
)]
struct Cli {
    /// Output file (.jpg, .jpeg or .png). Must not exist yet.
    #[arg(value_parser = clap::builder::OsStringValueParser::new().map(PathBuf::from))]
    path: Option<PathBuf>,

    /// Image width in pixels.
    #[arg(
        short = 'W',
        long,
        default_value_t = config::DEFAULT_WIDTH,
        value_parser = clap::value_parser!(u32).range(1..=65535)
    )]
    width: u32,

    /// Image height in pixels.
    #[arg(
        short = 'H',
        long,
        default_value_t = config::DEFAULT_HEIGHT,
        value_parser = clap::value_parser!(u32).range(1..=65535)
    )]
    height: u32,

    /// Image background color.
    #[arg(short = 'c', long = "bg", default_value = config::DEFAULT_BACKGROUND)]
    bg: String,

    /// Label drawn on the image; `--text` alone draws "SAMPLE".
    #[arg(
        short = 't',
        long,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = config::DEFAULT_TEXT
    )]
    text: Option<String>,

    /// Label size in points.
    #[arg(long, default_value_t = config::DEFAULT_FONT_SIZE)]
    font_size: f32,
}

impl Cli {
    fn into_request(self) -> ImageRequest {
        ImageRequest {
            path: self.path.unwrap_or_default(),
            width: self.width,
            height: self.height,
            background: self.bg,
            text: self.text,
            font_size: self.font_size,
        }
    }
}

fn before_help() -> String {
    let exts: Vec<&str> = OutputFormat::EXTENSIONS
        .iter()
        .map(|e| e.trim_start_matches('.'))
        .collect();
    let colors: Vec<&str> = color::names().collect();
    format!(
        "Available extentions:\n  {}\nAvailable background colors:\n  {}\n",
        exts.join(", "),
        colors.join(", ")
    )
}

enum Parsed {
    Request(ImageRequest),
    /// Help or version output that should go to stdout.
    Info(String),
}

fn parse<I, T>(args: I) -> SampleImageResult<Parsed>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cmd = Cli::command().before_help(before_help());
    let matches = match cmd.try_get_matches_from(args) {
        Ok(m) => m,
        Err(e) => {
            return match e.kind() {
                clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
                    Ok(Parsed::Info(e.render().to_string()))
                }
                _ => Err(usage_error(&e)),
            };
        }
    };
    let cli = Cli::from_arg_matches(&matches).map_err(|e| usage_error(&e))?;
    Ok(Parsed::Request(cli.into_request()))
}

fn usage_error(e: &clap::Error) -> SampleImageError {
    let rendered = e.render().to_string();
    let line = rendered
        .lines()
        .find(|l| !l.trim().is_empty())
        .unwrap_or("error: invalid arguments");
    SampleImageError::Usage(line.trim_end().to_string())
}

/// Run the tool with `args` (program name first).
///
/// Help goes to `out`; on failure exactly one diagnostic line goes to `err`. Returns the process
/// exit status.
pub fn run<I, T>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let result = parse(args).and_then(|parsed| match parsed {
        Parsed::Info(text) => out
            .write_all(text.as_bytes())
            .and_then(|()| out.flush())
            .map_err(SampleImageError::Write),
        Parsed::Request(request) => pipeline::generate(&request, &StdFs).map(|_| ()),
    });

    match result {
        Ok(()) => EXIT_OK,
        Err(e) => {
            tracing::warn!(kind = ?e.kind(), detail = ?e.detail(), "sampleimage failed");
            let _ = writeln!(err, "{e}");
            EXIT_ERR
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/cli.rs"]
mod tests;
