use crate::foundation::error::{SceneError, SceneResult};

/// Default color cycle, applied in order to shapes without a custom style.
pub const SVG_COLORS: &[&str] = &[
    "red",
    "green",
    "blue",
    "purple",
    "orange",
    "saddlebrown",
    "mediumseagreen",
    "darkolivegreen",
    "lightskyblue",
    "dimgray",
    "mediumpurple",
    "midnightblue",
    "olive",
    "chartreuse",
    "darkorchid",
    "hotpink",
    "darkred",
    "peru",
    "goldenrod",
    "mediumslateblue",
    "orangered",
    "darkmagenta",
    "darkgoldenrod",
    "mediumslateblue",
    "firebrick",
    "palegreen",
    "royalblue",
    "tan",
    "tomato",
    "springgreen",
    "pink",
    "orchid",
    "saddlebrown",
    "moccasin",
    "mistyrose",
    "cornflowerblue",
    "darkgrey",
];

/// Read-only color list cycled round-robin by position.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct Palette {
    colors: Vec<String>,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: SVG_COLORS.iter().map(|c| (*c).to_owned()).collect(),
        }
    }
}

impl Palette {
    /// Palette from a non-empty color list.
    pub fn new(colors: impl IntoIterator<Item = impl Into<String>>) -> SceneResult<Self> {
        let colors: Vec<String> = colors.into_iter().map(Into::into).collect();
        if colors.is_empty() {
            return Err(SceneError::validation("palette must contain at least one color"));
        }
        Ok(Self { colors })
    }

    /// Color at `cursor`, wrapping around the list.
    pub fn color(&self, cursor: usize) -> &str {
        &self.colors[cursor % self.colors.len()]
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

impl TryFrom<Vec<String>> for Palette {
    type Error = SceneError;

    fn try_from(colors: Vec<String>) -> SceneResult<Self> {
        Self::new(colors)
    }
}

impl From<Palette> for Vec<String> {
    fn from(p: Palette) -> Self {
        p.colors
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/palette.rs"]
mod tests;
