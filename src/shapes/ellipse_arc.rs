use std::fmt::{self, Write as _};

use crate::animation::keyframe::Action;
use crate::foundation::core::{Point, Vec2};
use crate::foundation::error::SceneResult;
use crate::foundation::quadrant::Quadrant;
use crate::foundation::vector::Vector;
use crate::shapes::style::Style;
use crate::shapes::{Shape, ShapeCore};

/// Portion of an ellipse between two angles, emitted with absolute coordinates.
///
/// Angles are in degrees, positive counter-clockwise on screen. The endpoints and both arc
/// flags are derived state: [`EllipseArc::compute_derived`] runs after every mutation.
#[derive(Clone, Debug)]
pub struct EllipseArc {
    core: ShapeCore,
    start_center: Point,
    start_radius: Vec2,
    start_angles: (f64, f64),

    center: Point,
    radius: Vec2,
    start_angle: f64,
    end_angle: f64,
    rotation: f64,

    start_point: Point,
    end_point: Point,
    large_arc: bool,
    sweep_invert: bool,
}

impl EllipseArc {
    /// Arc between `start_angle` and `end_angle` degrees; `center` and `radius` must be 2-D.
    pub fn new(
        center: Vector,
        radius: Vector,
        start_angle: f64,
        end_angle: f64,
    ) -> SceneResult<Self> {
        let center = center.to_point()?;
        let radius = radius.to_vec2()?;
        let mut out = Self {
            core: ShapeCore::new(Style::outline()),
            start_center: center,
            start_radius: radius,
            start_angles: (start_angle, end_angle),
            center,
            radius,
            start_angle,
            end_angle,
            rotation: 0.0,
            start_point: center,
            end_point: center,
            large_arc: false,
            sweep_invert: false,
        };
        out.compute_derived();
        Ok(out)
    }

    /// x-axis rotation written into the arc command, in degrees.
    pub fn with_rotation(mut self, degrees: f64) -> Self {
        self.rotation = degrees;
        self
    }

    /// Recompute endpoints and arc flags from center, radius and angles.
    pub fn compute_derived(&mut self) {
        self.start_point = point_on_ellipse(self.center, self.radius, self.start_angle);
        self.end_point = point_on_ellipse(self.center, self.radius, self.end_angle);
        self.large_arc = (self.end_angle - self.start_angle).abs() > 180.0;
        self.sweep_invert = self.end_angle < self.start_angle;
    }

    pub fn center(&self) -> Point {
        self.center
    }

    /// Center the shape was built with; not restored by reset.
    pub fn start_center(&self) -> Point {
        self.start_center
    }

    pub fn radius(&self) -> Vec2 {
        self.radius
    }

    /// Current `(start, end)` angles in degrees.
    pub fn angles(&self) -> (f64, f64) {
        (self.start_angle, self.end_angle)
    }

    pub fn start_point(&self) -> Point {
        self.start_point
    }

    pub fn end_point(&self) -> Point {
        self.end_point
    }

    pub fn large_arc(&self) -> bool {
        self.large_arc
    }

    pub fn sweep_invert(&self) -> bool {
        self.sweep_invert
    }

    fn marker_radius(&self) -> f64 {
        let r = self.radius.x.abs().max(self.radius.y.abs()) * 0.05;
        if r > 0.0 { r } else { 1.0 }
    }
}

/// `center + (rx cos θ, ry sin θ)` with `θ = -degrees` in radians.
fn point_on_ellipse(center: Point, radius: Vec2, degrees: f64) -> Point {
    let theta = (-degrees).to_radians();
    center + Vec2::new(radius.x * theta.cos(), radius.y * theta.sin())
}

impl Shape for EllipseArc {
    fn kind(&self) -> &'static str {
        "EllipseArc"
    }

    fn core(&self) -> &ShapeCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut ShapeCore {
        &mut self.core
    }

    /// Box of the two endpoints; extrema between them are not included.
    fn bounding_quadrant(&self) -> SceneResult<Quadrant> {
        let a = Vector::from(self.start_point);
        let b = Vector::from(self.end_point);
        Quadrant::from_points([&a, &b])
    }

    fn to_svg(&self) -> SceneResult<String> {
        let mut out = format!(
            r#"<path d="M {} {} A {} {}, {}, {}, {}, {} {}"{}></path>"#,
            self.start_point.x,
            self.start_point.y,
            self.radius.x,
            self.radius.y,
            self.rotation,
            u8::from(self.large_arc),
            u8::from(self.sweep_invert),
            self.end_point.x,
            self.end_point.y,
            self.core.element_attributes()
        );
        if self.core.verbose {
            let r = self.marker_radius();
            for p in [self.center, self.start_point, self.end_point] {
                let _ = write!(out, r#"<circle cx="{}" cy="{}" r="{r}"/>"#, p.x, p.y);
            }
        }
        Ok(out)
    }

    fn apply_translation(&mut self, delta: &Vector) -> SceneResult<()> {
        self.center += delta.to_vec2()?;
        self.compute_derived();
        Ok(())
    }

    fn apply_inflation(&mut self, delta: &Vector) -> SceneResult<()> {
        self.radius += delta.to_vec2()?;
        self.compute_derived();
        Ok(())
    }

    fn apply_rotation(&mut self, start: f64, end: f64) -> SceneResult<()> {
        self.start_angle += start;
        self.end_angle += end;
        self.compute_derived();
        Ok(())
    }

    fn sample(&self, action: &Action) -> SceneResult<Action> {
        Ok(match action {
            Action::Translate(_) => Action::Translate(Vector::from(self.center)),
            Action::Inflate(_) => Action::Inflate(Vector::from(self.radius)),
            Action::Rotate { .. } => Action::Rotate {
                start: self.start_angle,
                end: self.end_angle,
            },
            Action::Opacity(_) => Action::Opacity(self.core.opacity),
        })
    }

    fn assign(&mut self, value: &Action) -> SceneResult<()> {
        match value {
            Action::Translate(center) => self.center = center.to_point()?,
            Action::Inflate(radius) => self.radius = radius.to_vec2()?,
            Action::Rotate { start, end } => {
                self.start_angle = *start;
                self.end_angle = *end;
            }
            Action::Opacity(opacity) => self.core.opacity = *opacity,
        }
        self.compute_derived();
        Ok(())
    }

    /// Restores radius and angles. The center keeps its animated value.
    fn reset(&mut self) -> SceneResult<()> {
        self.core.reset_animation();
        self.radius = self.start_radius;
        (self.start_angle, self.end_angle) = self.start_angles;
        self.compute_derived();
        Ok(())
    }
}

impl fmt::Display for EllipseArc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "EllipseArc(start: {} {}, center: {} {}, end: {} {})",
            self.start_point.x,
            self.start_point.y,
            self.center.x,
            self.center.y,
            self.end_point.x,
            self.end_point.y
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/shapes/ellipse_arc.rs"]
mod tests;
