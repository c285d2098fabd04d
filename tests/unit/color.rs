use super::*;

#[test]
fn known_names_resolve_to_table_values() {
    assert_eq!(lookup("black"), Some(Rgba8::opaque(0, 0, 0)));
    assert_eq!(lookup("gray"), Some(Rgba8::opaque(169, 169, 169)));
    assert_eq!(lookup("grey"), lookup("gray"));
    assert_eq!(lookup("red"), Some(Rgba8::opaque(255, 0, 0)));
    assert_eq!(lookup("blue"), Some(Rgba8::opaque(0, 0, 255)));
    assert_eq!(lookup("green"), Some(Rgba8::opaque(0, 128, 0)));
    assert_eq!(lookup("yellow"), Some(Rgba8::opaque(255, 255, 0)));
}

#[test]
fn every_entry_is_opaque_and_resolvable() {
    for name in names() {
        let c = lookup(name).unwrap();
        assert_eq!(c.a, 255, "{name} must be opaque");
    }
    assert_eq!(names().count(), 7);
}

#[test]
fn unknown_and_differently_cased_names_miss() {
    assert_eq!(lookup("sliver"), None);
    assert_eq!(lookup("Black"), None);
    assert_eq!(lookup(""), None);
}
