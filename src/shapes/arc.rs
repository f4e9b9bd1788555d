use std::fmt;

use crate::animation::keyframe::Action;
use crate::foundation::error::{SceneError, SceneResult, ensure_same_dim};
use crate::foundation::quadrant::Quadrant;
use crate::foundation::vector::Vector;
use crate::shapes::style::Style;
use crate::shapes::{Shape, ShapeCore};

/// Elliptical arc encoded with relative SVG path coordinates.
///
/// `mid` (the SVG arc radii) and `end` (the endpoint) are stored relative to the start
/// point, so translation moves the start point only.
#[derive(Clone, Debug)]
pub struct Arc {
    core: ShapeCore,
    start: Vector,
    point: Vector,
    mid: Vector,
    end: Vector,
    rotation: f64,
    large_arc: bool,
    sweep_invert: bool,
}

impl Arc {
    /// Arc from absolute points: radii are `start - mid`, endpoint offset is `end - start`.
    pub fn new(start: Vector, mid: Vector, end: Vector) -> SceneResult<Self> {
        let radii = start.try_sub(&mid)?;
        let offset = end.try_sub(&start)?;
        Self::from_relative(start, radii, offset)
    }

    /// Arc from a start point plus radii and endpoint offset already relative to it.
    pub fn from_relative(start: Vector, mid: Vector, end: Vector) -> SceneResult<Self> {
        for v in [&start, &mid, &end] {
            v.as_pair()?;
        }
        Ok(Self {
            core: ShapeCore::new(Style::outline()),
            point: start.clone(),
            start,
            mid,
            end,
            rotation: 0.0,
            large_arc: false,
            sweep_invert: false,
        })
    }

    /// x-axis rotation of the arc ellipse, in degrees.
    pub fn with_rotation(mut self, degrees: f64) -> Self {
        self.rotation = degrees;
        self
    }

    pub fn with_large_arc(mut self, large_arc: bool) -> Self {
        self.large_arc = large_arc;
        self
    }

    pub fn with_sweep_invert(mut self, sweep_invert: bool) -> Self {
        self.sweep_invert = sweep_invert;
        self
    }

    /// Current (animated) start point.
    pub fn point(&self) -> &Vector {
        &self.point
    }

    pub fn start(&self) -> &Vector {
        &self.start
    }

    /// Radii, relative to the start point.
    pub fn mid(&self) -> &Vector {
        &self.mid
    }

    /// Endpoint, relative to the start point.
    pub fn end(&self) -> &Vector {
        &self.end
    }

    pub fn large_arc(&self) -> bool {
        self.large_arc
    }

    pub fn sweep_invert(&self) -> bool {
        self.sweep_invert
    }
}

impl Shape for Arc {
    fn kind(&self) -> &'static str {
        "Arc"
    }

    fn core(&self) -> &ShapeCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut ShapeCore {
        &mut self.core
    }

    /// Control hull of the curve: conservative, not tight.
    fn bounding_quadrant(&self) -> SceneResult<Quadrant> {
        let mid = self.point.try_add(&self.mid)?;
        let end = self.point.try_add(&self.end)?;
        Quadrant::from_points([&self.point, &mid, &end])
    }

    fn to_svg(&self) -> SceneResult<String> {
        Ok(format!(
            r#"<path d="m {} a {} {} {} {} {}"{}></path>"#,
            self.point,
            self.mid,
            self.rotation,
            u8::from(self.large_arc),
            u8::from(self.sweep_invert),
            self.end,
            self.core.element_attributes()
        ))
    }

    fn apply_translation(&mut self, delta: &Vector) -> SceneResult<()> {
        self.point.add_assign_checked(delta)
    }

    fn apply_inflation(&mut self, _delta: &Vector) -> SceneResult<()> {
        Err(SceneError::unsupported(self.kind(), "inflation"))
    }

    fn apply_rotation(&mut self, _start: f64, _end: f64) -> SceneResult<()> {
        Err(SceneError::unsupported(self.kind(), "rotation"))
    }

    fn sample(&self, action: &Action) -> SceneResult<Action> {
        match action {
            Action::Translate(_) => Ok(Action::Translate(self.point.clone())),
            Action::Inflate(_) => Err(SceneError::unsupported(self.kind(), "inflation")),
            Action::Rotate { .. } => Err(SceneError::unsupported(self.kind(), "rotation")),
            Action::Opacity(_) => Ok(Action::Opacity(self.core.opacity)),
        }
    }

    fn assign(&mut self, value: &Action) -> SceneResult<()> {
        match value {
            Action::Translate(point) => {
                ensure_same_dim(self.point.dim(), point.dim())?;
                self.point = point.clone();
            }
            Action::Inflate(_) => return Err(SceneError::unsupported(self.kind(), "inflation")),
            Action::Rotate { .. } => return Err(SceneError::unsupported(self.kind(), "rotation")),
            Action::Opacity(opacity) => self.core.opacity = *opacity,
        }
        Ok(())
    }

    fn reset(&mut self) -> SceneResult<()> {
        self.core.reset_animation();
        self.point = self.start.clone();
        Ok(())
    }
}

impl fmt::Display for Arc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Arc(start: {}, mid: {}, end: {})",
            self.point, self.mid, self.end
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/shapes/arc.rs"]
mod tests;
