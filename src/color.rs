use crate::foundation::core::Rgba8;

static COLOR_TABLE: &[(&str, Rgba8)] = &[
    ("black", Rgba8::opaque(0, 0, 0)),
    ("gray", Rgba8::opaque(169, 169, 169)),
    ("grey", Rgba8::opaque(169, 169, 169)),
    ("red", Rgba8::opaque(255, 0, 0)),
    ("blue", Rgba8::opaque(0, 0, 255)),
    ("green", Rgba8::opaque(0, 128, 0)),
    ("yellow", Rgba8::opaque(255, 255, 0)),
];

/// Resolve a background name. Matching is exact and case-sensitive.
pub fn lookup(name: &str) -> Option<Rgba8> {
    COLOR_TABLE
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, c)| *c)
}

/// All known color names in table order.
pub fn names() -> impl Iterator<Item = &'static str> {
    COLOR_TABLE.iter().map(|(n, _)| *n)
}

#[cfg(test)]
#[path = "../tests/unit/color.rs"]
mod tests;
