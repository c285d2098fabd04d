/// Canvas allocation and background fill.
pub mod canvas;
pub(crate) mod composite;
/// Label layout and rasterization.
pub mod text;
