//! `sampleimage` generates placeholder images for UI and design fixtures.
//!
//! A run validates an [`ImageRequest`] into a [`Config`], fills a [`Canvas`] with a named
//! background color, optionally draws one line of white text, and encodes the result as JPEG or
//! PNG into a file that must not exist yet.
//!
//! - [`generate`] runs the whole pipeline against the filesystem
//! - [`render`] produces the canvas only
//! - [`cli::run`] is the command-line entry point used by the `sampleimage` binary
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

pub mod cli;
/// Named background colors.
pub mod color;
/// Run parameters and defaults.
pub mod config;
pub mod encode;
/// Orchestration of one run.
pub mod pipeline;
/// Canvas construction and text overlay.
pub mod render;
/// Request validation.
pub mod validate;

pub use crate::config::{Config, ImageRequest, OutputFormat};
pub use crate::encode::{EncodedImage, encode, encode_for_extension, encode_into};
pub use crate::foundation::core::{Rgba8, Rgba8Premul};
pub use crate::foundation::error::{ErrorKind, SampleImageError, SampleImageResult};
pub use crate::pipeline::{generate, render, write_image};
pub use crate::render::canvas::{Canvas, fill_background};
pub use crate::render::text::{TextRenderer, draw_label, label_origin};
pub use crate::validate::{PathProbe, StdFs, validate};
