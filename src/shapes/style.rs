use std::fmt::Write as _;

/// Presentation attributes of one shape.
///
/// A `custom` style opts the shape out of palette coloring: the scene wraps the shape in
/// a group carrying these attributes instead of the next palette color.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Style {
    /// SVG `fill` paint.
    pub fill: Option<String>,
    /// SVG `stroke` paint.
    pub stroke: Option<String>,
    /// Explicit `stroke-width`; the scene-wide width applies otherwise.
    pub stroke_width: Option<f64>,
    /// Opt out of palette coloring.
    pub custom: bool,
}

impl Style {
    /// Palette-colored style with no own attributes.
    pub fn palette() -> Self {
        Self::default()
    }

    /// Palette-colored outline: `fill="none"`, stroke from the palette.
    pub fn outline() -> Self {
        Self {
            fill: Some("none".to_owned()),
            ..Self::default()
        }
    }

    /// Caller-specified colors, excluded from palette cycling.
    pub fn custom(fill: impl Into<String>, stroke: impl Into<String>) -> Self {
        Self {
            fill: Some(fill.into()),
            stroke: Some(stroke.into()),
            stroke_width: None,
            custom: true,
        }
    }

    pub fn with_stroke_width(mut self, width: f64) -> Self {
        self.stroke_width = Some(width);
        self
    }

    /// Attribute list with a leading space per attribute, empty when nothing is set.
    pub fn attributes(&self) -> String {
        let mut out = String::new();
        if let Some(fill) = &self.fill {
            push_attr(&mut out, "fill", fill);
        }
        if let Some(stroke) = &self.stroke {
            push_attr(&mut out, "stroke", stroke);
        }
        if let Some(width) = self.stroke_width {
            let _ = write!(out, r#" stroke-width="{width}""#);
        }
        out
    }
}

/// Append ` name="value"` with the value escaped for a double-quoted attribute.
pub(crate) fn push_attr(out: &mut String, name: &str, value: &str) {
    let _ = write!(out, r#" {name}="{}""#, quick_xml::escape::escape(value));
}

#[cfg(test)]
#[path = "../../tests/unit/shapes/style.rs"]
mod tests;
