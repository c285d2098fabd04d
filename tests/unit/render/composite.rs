use super::*;

#[test]
fn transparent_source_keeps_destination() {
    assert_eq!(over([10, 20, 30, 255], [0, 0, 0, 0]), [10, 20, 30, 255]);
}

#[test]
fn opaque_source_replaces_destination() {
    assert_eq!(over([10, 20, 30, 255], [255, 255, 255, 255]), [255; 4]);
}

#[test]
fn half_coverage_white_over_black() {
    let out = over([0, 0, 0, 255], [128, 128, 128, 128]);
    assert_eq!(out, [128, 128, 128, 255]);
}

#[test]
fn half_coverage_white_over_gray_brightens() {
    let out = over([169, 169, 169, 255], [128, 128, 128, 128]);
    assert_eq!(out[3], 255);
    assert!(out[0] > 169);
}

#[test]
fn mismatched_buffers_error() {
    let mut dst = vec![0u8; 8];
    assert!(over_in_place(&mut dst, &[0u8; 4]).is_err());
    assert!(over_in_place(&mut [0u8; 3], &[0u8; 3]).is_err());
}

#[test]
fn in_place_composites_each_pixel() {
    let mut dst = vec![0, 0, 0, 255, 0, 0, 0, 255];
    let src = vec![255, 255, 255, 255, 0, 0, 0, 0];
    over_in_place(&mut dst, &src).unwrap();
    assert_eq!(dst, vec![255, 255, 255, 255, 0, 0, 0, 255]);
}
