use crate::foundation::core::Rect;
use crate::foundation::error::{SceneError, SceneResult, ensure_same_dim};
use crate::foundation::vector::Vector;

/// Axis-aligned bounding box of any dimension.
///
/// Starts [`Quadrant::Empty`] and grows through [`Quadrant::add_point`] and
/// [`Quadrant::update`]. Once bounded, `min <= max` holds componentwise.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Quadrant {
    /// No point inserted yet.
    #[default]
    Empty,
    /// Box spanning `min..=max`.
    Bounded {
        /// Minimum corner.
        min: Vector,
        /// Maximum corner.
        max: Vector,
    },
}

impl Quadrant {
    /// Box containing nothing; the identity of [`Quadrant::update`].
    pub fn empty() -> Self {
        Self::Empty
    }

    /// Box from two corners, normalized so `min <= max` componentwise.
    pub fn new(a: Vector, b: Vector) -> SceneResult<Self> {
        let min = a.min_with(&b)?;
        let max = a.max_with(&b)?;
        Ok(Self::Bounded { min, max })
    }

    /// Degenerate box containing only `p`.
    pub fn from_point(p: Vector) -> Self {
        Self::Bounded {
            min: p.clone(),
            max: p,
        }
    }

    /// Smallest box containing every point of `points`.
    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a Vector>) -> SceneResult<Self> {
        let mut q = Self::Empty;
        for p in points {
            q.add_point(p)?;
        }
        Ok(q)
    }

    /// `true` until a point has been added.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Dimension of the corners, `None` while empty.
    pub fn dim(&self) -> Option<usize> {
        match self {
            Self::Empty => None,
            Self::Bounded { min, .. } => Some(min.dim()),
        }
    }

    /// Expand to cover `p`.
    pub fn add_point(&mut self, p: &Vector) -> SceneResult<()> {
        match self {
            Self::Empty => *self = Self::from_point(p.clone()),
            Self::Bounded { min, max } => {
                let new_min = min.min_with(p)?;
                let new_max = max.max_with(p)?;
                *min = new_min;
                *max = new_max;
            }
        }
        Ok(())
    }

    /// Union with `other` in place.
    pub fn update(&mut self, other: &Quadrant) -> SceneResult<()> {
        let Self::Bounded {
            min: omin,
            max: omax,
        } = other
        else {
            return Ok(());
        };
        match self {
            Self::Empty => *self = other.clone(),
            Self::Bounded { min, max } => {
                let new_min = min.min_with(omin)?;
                let new_max = max.max_with(omax)?;
                *min = new_min;
                *max = new_max;
            }
        }
        Ok(())
    }

    /// Union as a new value.
    pub fn union(&self, other: &Quadrant) -> SceneResult<Quadrant> {
        let mut out = self.clone();
        out.update(other)?;
        Ok(out)
    }

    /// Scale every half-extent by `ratio` about the current center.
    ///
    /// Inflating an empty box is a no-op.
    pub fn inflate(&mut self, ratio: f64) -> SceneResult<()> {
        if ratio <= 0.0 || !ratio.is_finite() {
            return Err(SceneError::validation(format!(
                "inflation ratio must be a finite value > 0, got {ratio}"
            )));
        }
        if ratio == 1.0 {
            return Ok(());
        }
        if let Self::Bounded { min, max } = self {
            let center = center_of(min, max)?;
            let half = max.try_sub(min)? / 2.0;
            let scaled = &half * ratio;
            *min = center.try_sub(&scaled)?;
            *max = center.try_add(&scaled)?;
        }
        Ok(())
    }

    /// `(min, max)` corners, `None` while empty.
    pub fn corners(&self) -> Option<(&Vector, &Vector)> {
        match self {
            Self::Empty => None,
            Self::Bounded { min, max } => Some((min, max)),
        }
    }

    /// Owned `(min, max)` corners, the form a viewport is stored in.
    pub fn get_arrays(&self) -> Option<(Vector, Vector)> {
        self.corners().map(|(a, b)| (a.clone(), b.clone()))
    }

    /// Midpoint of the corners, `None` when empty.
    pub fn center(&self) -> Option<Vector> {
        let (min, max) = self.corners()?;
        center_of(min, max).ok()
    }

    /// Per-axis extent `max - min`.
    pub fn dimensions(&self) -> Option<Vector> {
        let (min, max) = self.corners()?;
        max.try_sub(min).ok()
    }

    /// `true` when `p` lies inside the box, borders included.
    pub fn contains(&self, p: &Vector) -> SceneResult<bool> {
        let Some((min, max)) = self.corners() else {
            return Ok(false);
        };
        ensure_same_dim(min.dim(), p.dim())?;
        Ok(min
            .coords()
            .iter()
            .zip(max.coords())
            .zip(p.coords())
            .all(|((lo, hi), c)| lo <= c && c <= hi))
    }

    /// 2-D export as a `kurbo::Rect`.
    pub fn to_rect(&self) -> SceneResult<Option<Rect>> {
        let Some((min, max)) = self.corners() else {
            return Ok(None);
        };
        let (x0, y0) = min.as_pair()?;
        let (x1, y1) = max.as_pair()?;
        Ok(Some(Rect::new(x0, y0, x1, y1)))
    }
}

fn center_of(min: &Vector, max: &Vector) -> SceneResult<Vector> {
    Ok(min.try_add(max)? / 2.0)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/quadrant.rs"]
mod tests;
