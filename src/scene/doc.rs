use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context as _;

use crate::animation::keyframe::Keyframe;
use crate::foundation::core::{Canvas, Fps};
use crate::foundation::error::{SceneError, SceneResult};
use crate::foundation::vector::Vector;
use crate::scene::compositor::Scene;
use crate::scene::palette::Palette;
use crate::shapes::arc::Arc;
use crate::shapes::circle::Circle;
use crate::shapes::ellipse_arc::EllipseArc;
use crate::shapes::style::Style;
use crate::shapes::{ShapeBuilder, ShapeRef};

/// JSON-facing description of a scene.
///
/// This is the human-edited form: it is validated and turned into a live [`Scene`] by
/// [`SceneDoc::build`]. Every field is optional; defaults are a 500x500 canvas at 30 fps
/// with an auto-fit viewport.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SceneDoc {
    pub canvas: Canvas,
    pub fps: Fps,
    /// Explicit viewport; auto-fit when absent.
    pub viewport: Option<ViewportDoc>,
    pub verbose: bool,
    /// Color cycle replacing the built-in SVG color list.
    pub palette: Option<Palette>,
    pub shapes: Vec<ShapeDoc>,
}

/// Explicit viewport corners.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ViewportDoc {
    pub start: Vector,
    pub end: Vector,
}

/// One shape entry: geometry selected by `kind`, plus shared presentation and animation.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ShapeDoc {
    #[serde(flatten)]
    pub geometry: GeometryDoc,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<Style>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    /// Present (even empty) to attach a timeline at the scene fps.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keyframes: Option<Vec<Keyframe>>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GeometryDoc {
    /// Absolute `start`/`mid`/`end` points, or radii and endpoint offset when `relative`.
    Arc {
        start: Vector,
        mid: Vector,
        end: Vector,
        #[serde(default)]
        relative: bool,
        #[serde(default)]
        rotation: f64,
        #[serde(default)]
        large_arc: bool,
        #[serde(default)]
        sweep_invert: bool,
    },
    EllipseArc {
        center: Vector,
        radius: Vector,
        start_angle: f64,
        end_angle: f64,
        #[serde(default)]
        rotation: f64,
    },
    Circle {
        center: Vector,
        radius: f64,
    },
}

impl SceneDoc {
    /// Parse a scene document from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> SceneResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| SceneError::serde(format!("parse scene JSON: {e}")))
    }

    /// Parse a scene document from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> SceneResult<Self> {
        let path = path.as_ref();
        let f = File::open(path)
            .with_context(|| format!("open scene JSON '{}'", path.display()))?;
        Self::from_reader(BufReader::new(f))
    }

    /// Parse a scene document from a JSON string.
    pub fn from_json(s: &str) -> SceneResult<Self> {
        serde_json::from_str(s).map_err(|e| SceneError::serde(format!("parse scene JSON: {e}")))
    }

    /// Pretty-printed JSON form.
    pub fn to_json(&self) -> SceneResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| SceneError::serde(format!("serialize scene JSON: {e}")))
    }

    /// Check document-level invariants that serde cannot express.
    pub fn validate(&self) -> SceneResult<()> {
        self.fps.validate()?;
        if self.canvas.is_degenerate() {
            return Err(SceneError::validation(format!(
                "canvas {}x{} must be non-empty",
                self.canvas.width, self.canvas.height
            )));
        }
        for (i, shape) in self.shapes.iter().enumerate() {
            if let Some(opacity) = shape.opacity
                && !opacity.is_finite()
            {
                return Err(SceneError::validation(format!(
                    "shapes[{i}]: opacity must be finite"
                )));
            }
            for kf in shape.keyframes.iter().flatten() {
                kf.validate()
                    .map_err(|e| SceneError::validation(format!("shapes[{i}]: {e}")))?;
            }
        }
        Ok(())
    }

    /// Validate and build a live scene.
    #[tracing::instrument(skip(self), fields(shapes = self.shapes.len()))]
    pub fn build(&self) -> SceneResult<Scene> {
        self.validate()?;

        let mut scene = Scene::new(self.canvas);
        if let Some(palette) = &self.palette {
            scene.set_palette(palette.clone());
        }
        if let Some(vp) = &self.viewport {
            scene.set_view_box(vp.start.clone(), vp.end.clone())?;
        }
        for (i, shape) in self.shapes.iter().enumerate() {
            let built = shape
                .build(self.fps)
                .map_err(|e| SceneError::validation(format!("shapes[{i}]: {e}")))?;
            scene.append(built);
        }
        scene.set_verbose(self.verbose);
        tracing::debug!(frames = scene.max_frame_count(), "scene built");
        Ok(scene)
    }
}

impl std::str::FromStr for SceneDoc {
    type Err = SceneError;

    fn from_str(s: &str) -> SceneResult<Self> {
        Self::from_json(s)
    }
}

impl ShapeDoc {
    /// Shape handle for this entry, animated at `fps` when keyframes are present.
    pub fn build(&self, fps: Fps) -> SceneResult<ShapeRef> {
        match &self.geometry {
            GeometryDoc::Arc {
                start,
                mid,
                end,
                relative,
                rotation,
                large_arc,
                sweep_invert,
            } => {
                let arc = if *relative {
                    Arc::from_relative(start.clone(), mid.clone(), end.clone())?
                } else {
                    Arc::new(start.clone(), mid.clone(), end.clone())?
                };
                let arc = arc
                    .with_rotation(*rotation)
                    .with_large_arc(*large_arc)
                    .with_sweep_invert(*sweep_invert);
                Ok(self.decorate(arc, fps)?.into_ref())
            }
            GeometryDoc::EllipseArc {
                center,
                radius,
                start_angle,
                end_angle,
                rotation,
            } => {
                let arc = EllipseArc::new(center.clone(), radius.clone(), *start_angle, *end_angle)?
                    .with_rotation(*rotation);
                Ok(self.decorate(arc, fps)?.into_ref())
            }
            GeometryDoc::Circle { center, radius } => {
                let circle = Circle::new(center.clone(), *radius);
                Ok(self.decorate(circle, fps)?.into_ref())
            }
        }
    }

    fn decorate<S: ShapeBuilder>(&self, mut shape: S, fps: Fps) -> SceneResult<S> {
        if let Some(style) = &self.style {
            shape = shape.styled(style.clone());
        }
        if let Some(id) = &self.id {
            shape = shape.with_id(id.clone());
        }
        if let Some(opacity) = self.opacity {
            shape = shape.with_opacity(opacity);
        }
        if let Some(keyframes) = &self.keyframes {
            shape = shape.animated(fps);
            for kf in keyframes {
                shape = shape.keyframe(kf.clone())?;
            }
        }
        Ok(shape)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/doc.rs"]
mod tests;
