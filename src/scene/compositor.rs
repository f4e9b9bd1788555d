use std::fmt::{self, Write as _};

use crate::foundation::core::{Canvas, Fps};
use crate::foundation::error::{SceneError, SceneResult};
use crate::foundation::quadrant::Quadrant;
use crate::foundation::vector::Vector;
use crate::scene::palette::Palette;
use crate::shapes::ShapeRef;

/// Inflation applied to the auto-fit viewport so borders stay visible.
pub const VIEWPORT_MARGIN: f64 = 1.1;

/// Stroke width in canvas units, divided by the viewport scale.
pub const BASE_STROKE: f64 = 3.0;

/// Something [`Scene::append`] accepts: one shape or a nested group of them.
#[derive(Clone)]
pub enum Element {
    /// A single shape handle.
    Shape(ShapeRef),
    /// Nested elements, flattened in order on append.
    Group(Vec<Element>),
}

impl From<ShapeRef> for Element {
    fn from(shape: ShapeRef) -> Self {
        Self::Shape(shape)
    }
}

impl From<Vec<ShapeRef>> for Element {
    fn from(shapes: Vec<ShapeRef>) -> Self {
        Self::Group(shapes.into_iter().map(Self::Shape).collect())
    }
}

impl From<Vec<Element>> for Element {
    fn from(elements: Vec<Element>) -> Self {
        Self::Group(elements)
    }
}

/// Geometry of one render: viewport corners, extent, scale and stroke width.
#[derive(Clone, Debug, PartialEq)]
pub struct Layout {
    /// Minimum viewport corner.
    pub origin: Vector,
    /// Viewport width and height.
    pub dimensions: Vector,
    /// Uniform canvas-per-viewport scale.
    pub scale: f64,
    /// Stroke width in viewport units.
    pub stroke_width: f64,
}

/// Ordered shapes rendered into one SVG document per frame.
///
/// The viewport is fitted to the shapes unless set explicitly; shapes without a custom
/// style receive palette colors by position.
pub struct Scene {
    shapes: Vec<ShapeRef>,
    canvas: Canvas,
    view_box: Option<(Vector, Vector)>,
    palette: Palette,
    verbose: bool,
}

impl fmt::Debug for Scene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scene")
            .field("shapes", &self.shapes.len())
            .field("canvas", &self.canvas)
            .field("view_box", &self.view_box)
            .field("palette", &self.palette)
            .field("verbose", &self.verbose)
            .finish()
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new(Canvas::default())
    }
}

impl Scene {
    /// Empty scene on `canvas` with the built-in palette and an auto-fit viewport.
    pub fn new(canvas: Canvas) -> Self {
        Self {
            shapes: Vec::new(),
            canvas,
            view_box: None,
            palette: Palette::default(),
            verbose: false,
        }
    }

    /// Append one shape or a nested group, flattening groups in order.
    pub fn append(&mut self, element: impl Into<Element>) -> &mut Self {
        fn flatten(out: &mut Vec<ShapeRef>, element: Element) {
            match element {
                Element::Shape(shape) => out.push(shape),
                Element::Group(children) => {
                    for child in children {
                        flatten(out, child);
                    }
                }
            }
        }
        let first = self.shapes.len();
        flatten(&mut self.shapes, element.into());
        if self.verbose {
            for shape in &self.shapes[first..] {
                shape.borrow_mut().core_mut().verbose = true;
            }
        }
        self
    }

    /// Flattened shapes in append order.
    pub fn shapes(&self) -> &[ShapeRef] {
        &self.shapes
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Resize the output canvas.
    pub fn set_size(&mut self, width: u32, height: u32) {
        self.canvas = Canvas { width, height };
    }

    /// Use `start..end` verbatim instead of the auto-fit viewport.
    pub fn set_view_box(&mut self, start: Vector, end: Vector) -> SceneResult<()> {
        start.as_pair()?;
        end.as_pair()?;
        self.view_box = Some((start, end));
        Ok(())
    }

    /// Return to the auto-fit viewport.
    pub fn clear_view_box(&mut self) {
        self.view_box = None;
    }

    /// Replace the color cycle used for palette-styled shapes.
    pub fn set_palette(&mut self, palette: Palette) {
        self.palette = palette;
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Toggle debug markers on every shape.
    pub fn set_verbose(&mut self, verbose: bool) {
        self.verbose = verbose;
        for shape in &self.shapes {
            shape.borrow_mut().core_mut().verbose = verbose;
        }
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }

    /// Retime every animated shape.
    pub fn set_fps(&mut self, fps: Fps) {
        for shape in &self.shapes {
            if let Some(timeline) = shape.borrow_mut().core_mut().timeline_mut() {
                timeline.set_fps(fps);
            }
        }
    }

    /// Viewport corners: the explicit one, or the inflated union of all shape quadrants.
    ///
    /// When the union has a zero-length axis (a lone circle, collinear points), the
    /// shapes' padded quadrants are used instead.
    #[tracing::instrument(skip(self), fields(shapes = self.shapes.len()))]
    pub fn compute_viewport(&self) -> SceneResult<(Vector, Vector)> {
        if let Some((start, end)) = &self.view_box {
            return Ok((start.clone(), end.clone()));
        }

        let mut quadrant = Quadrant::empty();
        for shape in &self.shapes {
            quadrant.update(&shape.borrow().bounding_quadrant()?)?;
        }
        if has_zero_axis(&quadrant) {
            tracing::debug!("content has a zero-length axis, using padded quadrants");
            let mut padded = Quadrant::empty();
            for shape in &self.shapes {
                padded.update(&shape.borrow().padded_quadrant()?)?;
            }
            quadrant = padded;
        }
        quadrant.inflate(VIEWPORT_MARGIN)?;

        quadrant
            .get_arrays()
            .ok_or_else(|| SceneError::degenerate_viewport("scene has no shapes to fit"))
    }

    /// Viewport, scale factor and stroke width for the current shape state.
    pub fn layout(&self) -> SceneResult<Layout> {
        if self.canvas.is_degenerate() {
            return Err(SceneError::degenerate_viewport(format!(
                "canvas {}x{} has a zero-length axis",
                self.canvas.width, self.canvas.height
            )));
        }

        let (origin, end) = self.compute_viewport()?;
        let dimensions = end.try_sub(&origin)?;
        let (w, h) = dimensions.as_pair()?;
        if !(w > 0.0 && h > 0.0) {
            return Err(SceneError::degenerate_viewport(format!(
                "viewport {w}x{h} has a zero-length axis"
            )));
        }

        let ratios = [f64::from(self.canvas.width) / w, f64::from(self.canvas.height) / h];
        let scale = ratios[0].min(ratios[1]);
        if !(scale > 0.0 && scale.is_finite()) {
            return Err(SceneError::degenerate_viewport(format!(
                "no usable scale factor ({scale})"
            )));
        }
        let stroke_width = BASE_STROKE / scale;
        tracing::debug!(w, h, scale, stroke_width, "viewport fitted");

        Ok(Layout {
            origin,
            dimensions,
            scale,
            stroke_width,
        })
    }

    /// Render the current frame into a complete SVG document.
    ///
    /// Fails as a whole if any shape fails.
    #[tracing::instrument(skip(self), fields(shapes = self.shapes.len()))]
    pub fn render(&self) -> SceneResult<String> {
        let layout = self.layout()?;
        let (x, y) = layout.origin.as_pair()?;
        let (w, h) = layout.dimensions.as_pair()?;

        let mut out = String::new();
        let _ = writeln!(
            out,
            r#"<svg width="{}" height="{}" viewBox="{x} {y} {w} {h}" xmlns="http://www.w3.org/2000/svg">"#,
            self.canvas.width, self.canvas.height
        );
        let _ = writeln!(
            out,
            r#"<rect x="{x}" y="{y}" width="{w}" height="{h}" fill="white"/>"#
        );
        let _ = writeln!(out, r#"<g stroke-width="{}">"#, layout.stroke_width);
        let mut cursor = 0;
        self.write_shapes(&mut out, &mut cursor)?;
        out.push_str("</g>\n</svg>\n");
        Ok(out)
    }

    /// One style group per shape; every shape consumes a palette slot.
    fn write_shapes(&self, out: &mut String, cursor: &mut usize) -> SceneResult<()> {
        for shape in &self.shapes {
            let shape = shape.borrow();
            let color = self.palette.color(*cursor);
            *cursor += 1;
            if shape.is_custom_style() {
                let _ = writeln!(out, "<g{}>", shape.core().style.attributes());
            } else {
                let _ = writeln!(out, r#"<g fill="{color}" stroke="{color}">"#);
            }
            out.push_str(&shape.to_svg()?);
            out.push_str("\n</g>\n");
        }
        Ok(())
    }

    /// Advance every shape's timeline by one frame.
    #[tracing::instrument(skip(self), fields(shapes = self.shapes.len()))]
    pub fn step_all(&mut self) -> SceneResult<()> {
        for shape in &self.shapes {
            shape.borrow_mut().update()?;
        }
        Ok(())
    }

    /// Reset every shape to its start state.
    pub fn reset_all(&mut self) -> SceneResult<()> {
        for shape in &self.shapes {
            shape.borrow_mut().reset()?;
        }
        Ok(())
    }

    /// Longest timeline duration in seconds.
    pub fn max_end_time(&self) -> f64 {
        self.shapes
            .iter()
            .map(|s| s.borrow().end_time())
            .fold(0.0, f64::max)
    }

    /// Longest timeline duration in frames.
    pub fn max_frame_count(&self) -> u64 {
        self.shapes
            .iter()
            .map(|s| s.borrow().frame_count())
            .max()
            .unwrap_or(0)
    }

    /// Reset, then render frame 0 and one document after each step until the longest
    /// timeline ends.
    pub fn render_frames(&mut self) -> SceneResult<Vec<String>> {
        self.reset_all()?;
        let frames = self.max_frame_count();
        let mut out = Vec::new();
        out.push(self.render()?);
        for _ in 0..frames {
            self.step_all()?;
            out.push(self.render()?);
        }
        Ok(out)
    }
}

fn has_zero_axis(q: &Quadrant) -> bool {
    q.dimensions()
        .is_some_and(|d| d.coords().iter().any(|&c| c == 0.0))
}

impl fmt::Display for Scene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for shape in &self.shapes {
            writeln!(f, "{}", shape.borrow())?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/compositor.rs"]
mod tests;
