use super::*;

#[test]
fn extensions_map_case_sensitively() {
    assert_eq!(OutputFormat::from_extension(".jpg"), Some(OutputFormat::Jpeg));
    assert_eq!(
        OutputFormat::from_extension(".jpeg"),
        Some(OutputFormat::Jpeg)
    );
    assert_eq!(OutputFormat::from_extension(".png"), Some(OutputFormat::Png));
    assert_eq!(OutputFormat::from_extension(".PNG"), None);
    assert_eq!(OutputFormat::from_extension("png"), None);
    assert_eq!(OutputFormat::from_extension(""), None);

    for ext in OutputFormat::EXTENSIONS {
        assert!(OutputFormat::from_extension(ext).is_some());
    }
}

#[test]
fn request_defaults() {
    let req = ImageRequest::new("out.png");
    assert_eq!(req.width, 100);
    assert_eq!(req.height, 100);
    assert_eq!(req.background, "gray");
    assert_eq!(req.text, None);
    assert_eq!(req.font_size, DEFAULT_FONT_SIZE);
}

#[test]
fn log_levels_parse_leniently() {
    assert_eq!(parse_log_level("debug"), Some(tracing::Level::DEBUG));
    assert_eq!(parse_log_level(" WARN "), Some(tracing::Level::WARN));
    assert_eq!(parse_log_level("loud"), None);
}
