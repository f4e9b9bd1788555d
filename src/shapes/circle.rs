use std::fmt;

use crate::animation::keyframe::Action;
use crate::foundation::error::{SceneError, SceneResult, ensure_same_dim};
use crate::foundation::quadrant::Quadrant;
use crate::foundation::vector::{Vector, squared_distance};
use crate::shapes::style::Style;
use crate::shapes::{Shape, ShapeCore};

/// Circle around a center of any dimension.
///
/// Arithmetic and animation accept any dimension; [`Shape::to_svg`] requires a 2-D center.
#[derive(Clone, Debug)]
pub struct Circle {
    core: ShapeCore,
    start_center: Vector,
    center: Vector,
    radius: f64,
}

impl Circle {
    /// Palette-styled circle; the center is snapshotted for [`Shape::reset`].
    pub fn new(center: Vector, radius: f64) -> Self {
        Self {
            core: ShapeCore::new(Style::palette()),
            start_center: center.clone(),
            center,
            radius,
        }
    }

    pub fn center(&self) -> &Vector {
        &self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Euclidean distance between centers over their shared components.
    ///
    /// Symmetric bit-for-bit: the lexicographically larger center drives the summation.
    pub fn distance_to(&self, other: &Circle) -> f64 {
        if self.center < other.center {
            return other.distance_to(self);
        }
        squared_distance(self.center.coords(), other.center.coords()).sqrt()
    }

    /// Circle at `self.center + other.center`, keeping this radius.
    pub fn try_add(&self, other: &Circle) -> SceneResult<Circle> {
        Ok(Circle::new(self.center.try_add(&other.center)?, self.radius))
    }

    /// Circle at `self.center - other.center`, keeping this radius.
    pub fn try_sub(&self, other: &Circle) -> SceneResult<Circle> {
        Ok(Circle::new(self.center.try_sub(&other.center)?, self.radius))
    }

    /// Circle at the componentwise absolute center, keeping this radius.
    pub fn abs(&self) -> Circle {
        Circle::new(self.center.abs(), self.radius)
    }

    /// Center plus the radius on every axis.
    fn extent(&self) -> SceneResult<Quadrant> {
        let r = self.radius.abs();
        let lo = self.center.map(|c| c - r);
        let hi = self.center.map(|c| c + r);
        Quadrant::new(lo, hi)
    }
}

impl PartialEq for Circle {
    fn eq(&self, other: &Self) -> bool {
        self.center == other.center && self.radius == other.radius
    }
}

/// Scales the center only.
impl std::ops::Mul<f64> for &Circle {
    type Output = Circle;

    fn mul(self, factor: f64) -> Circle {
        Circle::new(&self.center * factor, self.radius)
    }
}

/// Scales the center only.
impl std::ops::Div<f64> for &Circle {
    type Output = Circle;

    fn div(self, factor: f64) -> Circle {
        Circle::new(&self.center / factor, self.radius)
    }
}

impl Shape for Circle {
    fn kind(&self) -> &'static str {
        "Circle"
    }

    fn core(&self) -> &ShapeCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut ShapeCore {
        &mut self.core
    }

    /// Degenerate box at the center. The radius is not added.
    fn bounding_quadrant(&self) -> SceneResult<Quadrant> {
        Ok(Quadrant::from_point(self.center.clone()))
    }

    fn padded_quadrant(&self) -> SceneResult<Quadrant> {
        self.extent()
    }

    fn to_svg(&self) -> SceneResult<String> {
        let (cx, cy) = self.center.as_pair()?;
        Ok(format!(
            r#"<circle cx="{cx}" cy="{cy}" r="{}"{}/>"#,
            self.radius,
            self.core.element_attributes()
        ))
    }

    fn apply_translation(&mut self, delta: &Vector) -> SceneResult<()> {
        self.center.add_assign_checked(delta)
    }

    fn apply_inflation(&mut self, delta: &Vector) -> SceneResult<()> {
        match delta.coords() {
            [dr] => {
                self.radius += dr;
                Ok(())
            }
            _ => Err(SceneError::dimension_mismatch(1, delta.dim())),
        }
    }

    fn apply_rotation(&mut self, _start: f64, _end: f64) -> SceneResult<()> {
        Ok(())
    }

    /// Inflation samples the radius as a 1-D vector; rotation samples as zero.
    fn sample(&self, action: &Action) -> SceneResult<Action> {
        Ok(match action {
            Action::Translate(_) => Action::Translate(self.center.clone()),
            Action::Inflate(_) => Action::Inflate(Vector::scalar(self.radius)),
            Action::Rotate { .. } => Action::Rotate {
                start: 0.0,
                end: 0.0,
            },
            Action::Opacity(_) => Action::Opacity(self.core.opacity),
        })
    }

    fn assign(&mut self, value: &Action) -> SceneResult<()> {
        match value {
            Action::Translate(center) => {
                ensure_same_dim(self.center.dim(), center.dim())?;
                self.center = center.clone();
            }
            Action::Inflate(radius) => match radius.coords() {
                [r] => self.radius = *r,
                _ => return Err(SceneError::dimension_mismatch(1, radius.dim())),
            },
            Action::Rotate { .. } => {}
            Action::Opacity(opacity) => self.core.opacity = *opacity,
        }
        Ok(())
    }

    /// Restores the center. The radius keeps its animated value.
    fn reset(&mut self) -> SceneResult<()> {
        self.core.reset_animation();
        self.center = self.start_center.clone();
        Ok(())
    }
}

impl fmt::Display for Circle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Circle({}, r={})", self.center, self.radius)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/shapes/circle.rs"]
mod tests;
