//! Shape protocol and the concrete geometries.
//!
//! Every shape keeps a start geometry (restored by [`Shape::reset`]) next to its current,
//! animated geometry. The scene only talks to shapes through the [`Shape`] trait:
//! quadrant for viewport fitting, SVG fragment for output, transform callbacks for the
//! timeline.

pub mod arc;
pub mod circle;
pub mod ellipse_arc;
pub mod style;

use std::cell::RefCell;
use std::fmt::{self, Write as _};
use std::rc::Rc;

use crate::animation::keyframe::{Action, Keyframe};
use crate::animation::timeline::Timeline;
use crate::foundation::core::Fps;
use crate::foundation::error::SceneResult;
use crate::foundation::quadrant::Quadrant;
use crate::foundation::vector::Vector;
use crate::shapes::style::{Style, push_attr};

/// Shared handle to a shape. A scene holds these; aliasing one handle across scenes makes
/// both observe the same mutations.
pub type ShapeRef = Rc<RefCell<dyn Shape>>;

/// Bookkeeping every shape carries besides its geometry.
#[derive(Clone, Debug)]
pub struct ShapeCore {
    /// Optional `id` attribute.
    pub id: Option<String>,
    /// Presentation attributes.
    pub style: Style,
    /// Current opacity, animated by opacity keyframes.
    pub opacity: f64,
    /// Emit debug markers where the shape supports them.
    pub verbose: bool,
    timeline: Option<Timeline>,
}

impl ShapeCore {
    /// Unanimated, fully opaque core with `style`.
    pub fn new(style: Style) -> Self {
        Self {
            id: None,
            style,
            opacity: 1.0,
            verbose: false,
            timeline: None,
        }
    }

    /// Attached timeline, if the shape is animated.
    pub fn timeline(&self) -> Option<&Timeline> {
        self.timeline.as_ref()
    }

    /// Mutable timeline, if the shape is animated.
    pub fn timeline_mut(&mut self) -> Option<&mut Timeline> {
        self.timeline.as_mut()
    }

    /// Attach an empty timeline snapshotting the current opacity.
    pub fn enable_animation(&mut self, fps: Fps) {
        self.timeline = Some(Timeline::new(fps, self.opacity));
    }

    /// Rewind the timeline and restore the opacity snapshot.
    pub fn reset_animation(&mut self) {
        if let Some(timeline) = self.timeline.as_mut() {
            timeline.reset();
            self.opacity = timeline.start_opacity();
        }
    }

    /// Attributes written on the primitive itself.
    ///
    /// Custom styles live on the enclosing group, so only `id` and opacity remain here.
    pub fn element_attributes(&self) -> String {
        let mut out = String::new();
        if let Some(id) = &self.id {
            push_attr(&mut out, "id", id);
        }
        if !self.style.custom {
            out.push_str(&self.style.attributes());
        }
        if self.opacity != 1.0 {
            let _ = write!(out, r#" opacity="{}""#, self.opacity.clamp(0.0, 1.0));
        }
        out
    }
}

/// Capability set the scene and the timeline rely on.
pub trait Shape: fmt::Display {
    /// Shape kind name used in errors and logs.
    fn kind(&self) -> &'static str;

    fn core(&self) -> &ShapeCore;

    fn core_mut(&mut self) -> &mut ShapeCore;

    /// Bounding box of the current geometry, used for viewport auto-fit.
    fn bounding_quadrant(&self) -> SceneResult<Quadrant>;

    /// Box used when the whole scene collapses onto a zero-length axis.
    fn padded_quadrant(&self) -> SceneResult<Quadrant> {
        self.bounding_quadrant()
    }

    /// SVG fragment for the current geometry.
    fn to_svg(&self) -> SceneResult<String>;

    fn apply_translation(&mut self, delta: &Vector) -> SceneResult<()>;

    fn apply_inflation(&mut self, delta: &Vector) -> SceneResult<()>;

    /// Add `start`/`end` degrees to the shape angles.
    fn apply_rotation(&mut self, start: f64, end: f64) -> SceneResult<()>;

    fn apply_opacity(&mut self, delta: f64) -> SceneResult<()> {
        self.core_mut().opacity += delta;
        Ok(())
    }

    /// Restore the start geometry and rewind the timeline.
    fn reset(&mut self) -> SceneResult<()>;

    /// Dispatch one action to the matching transform callback.
    fn apply(&mut self, action: &Action) -> SceneResult<()> {
        match action {
            Action::Translate(v) => self.apply_translation(v),
            Action::Inflate(v) => self.apply_inflation(v),
            Action::Rotate { start, end } => self.apply_rotation(*start, *end),
            Action::Opacity(v) => self.apply_opacity(*v),
        }
    }

    /// Current value of the property `action` animates, in the same payload form.
    fn sample(&self, action: &Action) -> SceneResult<Action>;

    /// Overwrite the property `value` animates.
    fn assign(&mut self, value: &Action) -> SceneResult<()>;

    /// Advance the timeline one frame.
    ///
    /// The property is set to its value at the start of the active keyframe plus the share
    /// reached, so a keyframe ends exactly where a one-shot [`Shape::apply`] of its payload
    /// would.
    fn update(&mut self) -> SceneResult<()> {
        let (reached, base) = {
            let Some(timeline) = self.core_mut().timeline_mut() else {
                return Ok(());
            };
            let Some(reached) = timeline.step() else {
                return Ok(());
            };
            (reached, timeline.keyframe_base().cloned())
        };
        let base = match base {
            Some(base) => base,
            None => {
                let base = self.sample(&reached)?;
                if let Some(timeline) = self.core_mut().timeline_mut() {
                    timeline.set_keyframe_base(base.clone());
                }
                base
            }
        };
        self.assign(&base.plus(&reached)?)
    }

    /// Seconds until the timeline is exhausted, 0 when not animated.
    fn end_time(&self) -> f64 {
        self.core().timeline().map_or(0.0, Timeline::end_time)
    }

    /// Frames until the timeline is exhausted, 0 when not animated.
    fn frame_count(&self) -> u64 {
        self.core().timeline().map_or(0, Timeline::duration_frames)
    }

    /// `true` when the shape opted out of palette coloring.
    fn is_custom_style(&self) -> bool {
        self.core().style.custom
    }
}

/// Builder-style setters shared by every concrete shape.
pub trait ShapeBuilder: Shape + Sized {
    /// Attach an empty timeline at `fps`.
    fn animated(mut self, fps: Fps) -> Self {
        self.core_mut().enable_animation(fps);
        self
    }

    /// Append a keyframe, attaching a 30 fps timeline first if needed.
    fn keyframe(mut self, keyframe: Keyframe) -> SceneResult<Self> {
        let core = self.core_mut();
        if core.timeline().is_none() {
            core.enable_animation(Fps::default());
        }
        if let Some(timeline) = core.timeline_mut() {
            timeline.push(keyframe)?;
        }
        Ok(self)
    }

    fn styled(mut self, style: Style) -> Self {
        self.core_mut().style = style;
        self
    }

    fn with_id(mut self, id: impl Into<String>) -> Self {
        self.core_mut().id = Some(id.into());
        self
    }

    /// Set the opacity; call before [`ShapeBuilder::animated`] so the snapshot sees it.
    fn with_opacity(mut self, opacity: f64) -> Self {
        self.core_mut().opacity = opacity;
        self
    }

    fn verbose(mut self, verbose: bool) -> Self {
        self.core_mut().verbose = verbose;
        self
    }

    /// Wrap into a shared handle for a [`crate::Scene`].
    fn into_ref(self) -> ShapeRef
    where
        Self: 'static,
    {
        Rc::new(RefCell::new(self))
    }
}

impl<S: Shape + Sized> ShapeBuilder for S {}

#[cfg(test)]
#[path = "../../tests/unit/shapes/mod.rs"]
mod tests;
