//! arcscene composes animated 2-D arcs, elliptical arcs and circles into SVG documents.
//!
//! The API is scene-oriented:
//!
//! - Build shapes ([`Arc`], [`EllipseArc`], [`Circle`]) and attach [`Keyframe`]s
//! - Append them to a [`Scene`], or load a [`SceneDoc`] from JSON
//! - Render the current frame with [`Scene::render`], advance with [`Scene::step_all`]
#![forbid(unsafe_code)]

pub mod animation;
pub mod foundation;
pub mod scene;
pub mod shapes;

pub use crate::animation::keyframe::{Action, Keyframe};
pub use crate::animation::timeline::{Timeline, TimelineState};
pub use crate::foundation::core::{Canvas, Fps, FrameIndex, Point, Rect, Vec2};
pub use crate::foundation::error::{SceneError, SceneResult};
pub use crate::foundation::quadrant::Quadrant;
pub use crate::foundation::vector::Vector;
pub use crate::scene::compositor::{Element, Layout, Scene};
pub use crate::scene::doc::{GeometryDoc, SceneDoc, ShapeDoc, ViewportDoc};
pub use crate::scene::palette::{Palette, SVG_COLORS};
pub use crate::shapes::arc::Arc;
pub use crate::shapes::circle::Circle;
pub use crate::shapes::ellipse_arc::EllipseArc;
pub use crate::shapes::style::Style;
pub use crate::shapes::{Shape, ShapeBuilder, ShapeCore, ShapeRef};
