use super::*;

#[test]
fn opaque_premultiply_is_identity() {
    let c = Rgba8::opaque(169, 20, 3);
    let p = c.premultiply();
    assert_eq!(p.to_array(), [169, 20, 3, 255]);
    assert_eq!(p.unpremultiply(), c);
}

#[test]
fn half_alpha_roundtrips_closely() {
    let c = Rgba8 {
        r: 200,
        g: 100,
        b: 0,
        a: 128,
    };
    let p = c.premultiply();
    assert_eq!(p.to_array(), [100, 50, 0, 128]);

    let back = p.unpremultiply();
    assert_eq!(back.a, 128);
    assert!(back.r.abs_diff(200) <= 1);
    assert!(back.g.abs_diff(100) <= 1);
    assert_eq!(back.b, 0);
}

#[test]
fn transparent_unpremultiplies_to_zero() {
    let p = Rgba8Premul::from_slice(&[0, 0, 0, 0]);
    assert_eq!(p.unpremultiply(), Rgba8::default());
}

#[test]
fn from_slice_reads_the_first_pixel() {
    let p = Rgba8Premul::from_slice(&[1, 2, 3, 4, 5, 6, 7, 8]);
    assert_eq!(p.to_array(), [1, 2, 3, 4]);
}
