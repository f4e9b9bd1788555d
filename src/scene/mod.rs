//! Scene composition: shape list, viewport fitting, SVG output and the JSON boundary model.

/// Shape list and SVG document rendering.
pub mod compositor;
/// JSON scene description.
pub mod doc;
pub mod palette;
