use std::path::{Path, PathBuf};

use super::*;
use crate::{config::OutputFormat, foundation::core::Rgba8, validate::StdFs};

fn scratch_dir(name: &str) -> PathBuf {
    let dir = PathBuf::from("target").join("unit_pipeline").join(name);
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn request(path: &Path) -> ImageRequest {
    ImageRequest {
        width: 40,
        height: 30,
        background: "red".to_string(),
        ..ImageRequest::new(path)
    }
}

#[test]
fn render_without_text_is_uniform() {
    let dir = scratch_dir("uniform");
    let cfg = validate(&request(&dir.join("a.png")), &StdFs).unwrap();
    let canvas = render(&cfg).unwrap();
    let red = Rgba8::opaque(255, 0, 0);
    assert!(
        (0..30).all(|y| (0..40).all(|x| canvas.pixel(x, y) == Some(red))),
        "canvas must be uniformly red"
    );
}

#[test]
fn empty_text_renders_like_no_text() {
    let dir = scratch_dir("empty_text");
    let mut req = request(&dir.join("a.png"));
    let plain = render(&validate(&req, &StdFs).unwrap()).unwrap();
    req.text = Some(String::new());
    let empty = render(&validate(&req, &StdFs).unwrap()).unwrap();
    assert_eq!(plain.premul_bytes(), empty.premul_bytes());
}

#[test]
fn generate_writes_png() {
    let dir = scratch_dir("png");
    let out = dir.join("out.png");
    let cfg = generate(&request(&out), &StdFs).unwrap();
    assert_eq!(cfg.format(), OutputFormat::Png);

    let img = image::open(&out).unwrap().to_rgba8();
    assert_eq!(img.dimensions(), (40, 30));
    assert!(img.pixels().all(|p| p.0 == [255, 0, 0, 255]));
}

#[test]
fn generate_never_overwrites() {
    let dir = scratch_dir("exists");
    let out = dir.join("out.jpg");
    std::fs::write(&out, b"keep me").unwrap();

    let err = generate(&request(&out), &StdFs).unwrap_err();
    assert!(matches!(err, SampleImageError::PathExists(_)));
    assert_eq!(std::fs::read(&out).unwrap(), b"keep me");
}

#[test]
fn write_image_reports_existing_file_created_after_validation() {
    let dir = scratch_dir("race");
    let out = dir.join("late.png");
    let cfg = validate(&request(&out), &StdFs).unwrap();
    let canvas = render(&cfg).unwrap();

    std::fs::write(&out, b"first").unwrap();
    let err = write_image(&cfg, &canvas).unwrap_err();
    assert!(matches!(err, SampleImageError::PathExists(_)));
    assert_eq!(std::fs::read(&out).unwrap(), b"first");
}
