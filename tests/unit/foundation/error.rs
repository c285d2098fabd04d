use super::*;

#[test]
fn validation_messages_are_stable() {
    assert_eq!(
        SampleImageError::EmptyPath.to_string(),
        "Please specify an output path"
    );
    assert_eq!(
        SampleImageError::PathExists(PathBuf::from("out.png")).to_string(),
        "out.png already exits"
    );
    assert_eq!(
        SampleImageError::MissingDirectory(PathBuf::from("nowhere")).to_string(),
        "nowhere does not exit"
    );
    assert_eq!(
        SampleImageError::UnsupportedExtension(".psd".to_string()).to_string(),
        ".psd is invalid extention"
    );
    assert_eq!(
        SampleImageError::UnknownColor("sliver".to_string()).to_string(),
        "sliver is invalid color"
    );
}

#[test]
fn wrapped_failures_hide_detail() {
    let err = SampleImageError::render("glyph outline missing");
    assert_eq!(err.to_string(), "Error: render text failed");
    assert_eq!(err.detail().as_deref(), Some("glyph outline missing"));

    let err = SampleImageError::Create(std::io::Error::other("disk full"));
    assert_eq!(err.to_string(), "Error: create image file failed");
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn kinds_cover_taxonomy() {
    assert_eq!(SampleImageError::EmptyPath.kind(), ErrorKind::Validation);
    assert_eq!(
        SampleImageError::UnknownColor("x".into()).kind(),
        ErrorKind::Validation
    );
    assert_eq!(SampleImageError::encode("x").kind(), ErrorKind::Encode);
    assert_eq!(
        SampleImageError::CanvasSize {
            width: 0,
            height: 1
        }
        .kind(),
        ErrorKind::Render
    );
    assert_eq!(
        SampleImageError::Write(std::io::Error::other("x")).kind(),
        ErrorKind::Io
    );
    assert_eq!(SampleImageError::Usage("x".into()).kind(), ErrorKind::Usage);
}

#[test]
fn image_io_errors_map_to_write() {
    let err: SampleImageError = image::ImageError::IoError(std::io::Error::other("boom")).into();
    assert_eq!(err.kind(), ErrorKind::Io);
}
