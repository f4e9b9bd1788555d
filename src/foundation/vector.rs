use std::fmt;

use smallvec::SmallVec;

use crate::foundation::core::{Point, Vec2};
use crate::foundation::error::{SceneError, SceneResult, ensure_same_dim};

/// N-dimensional point or displacement.
///
/// The dimension is fixed per value. Vector/vector arithmetic is checked and fails with
/// [`SceneError::DimensionMismatch`] rather than truncating; scalar arithmetic is
/// available through the usual operators. Ordering is lexicographic over components.
#[derive(Clone, Debug, PartialEq, PartialOrd, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Vector {
    coords: SmallVec<[f64; 3]>,
}

impl Vector {
    /// Build a vector from any sequence of components.
    pub fn new(coords: impl IntoIterator<Item = f64>) -> Self {
        Self {
            coords: coords.into_iter().collect(),
        }
    }

    /// 2-D vector.
    pub fn xy(x: f64, y: f64) -> Self {
        Self::new([x, y])
    }

    /// 1-D vector, used for scalar payloads such as a circle's radius delta.
    pub fn scalar(v: f64) -> Self {
        Self::new([v])
    }

    /// Origin of dimension `dim`.
    pub fn zeros(dim: usize) -> Self {
        Self::new(std::iter::repeat_n(0.0, dim))
    }

    /// Number of components.
    pub fn dim(&self) -> usize {
        self.coords.len()
    }

    /// Components as a slice.
    pub fn coords(&self) -> &[f64] {
        &self.coords
    }

    /// Component `i`, or `None` past the dimension.
    pub fn get(&self, i: usize) -> Option<f64> {
        self.coords.get(i).copied()
    }

    /// Componentwise sum; dimensions must match.
    pub fn try_add(&self, other: &Vector) -> SceneResult<Vector> {
        self.zip_with(other, |a, b| a + b)
    }

    /// Componentwise difference; dimensions must match.
    pub fn try_sub(&self, other: &Vector) -> SceneResult<Vector> {
        self.zip_with(other, |a, b| a - b)
    }

    /// In-place `self += other`.
    pub fn add_assign_checked(&mut self, other: &Vector) -> SceneResult<()> {
        ensure_same_dim(self.dim(), other.dim())?;
        for (a, b) in self.coords.iter_mut().zip(other.coords.iter()) {
            *a += b;
        }
        Ok(())
    }

    /// Componentwise minimum.
    pub fn min_with(&self, other: &Vector) -> SceneResult<Vector> {
        self.zip_with(other, f64::min)
    }

    /// Componentwise maximum.
    pub fn max_with(&self, other: &Vector) -> SceneResult<Vector> {
        self.zip_with(other, f64::max)
    }

    /// Componentwise absolute value.
    pub fn abs(&self) -> Vector {
        self.map(f64::abs)
    }

    /// Euclidean distance.
    ///
    /// Symmetric bit-for-bit: the larger operand (lexicographically) always drives the
    /// summation, so `a.distance_to(b) == b.distance_to(a)` holds exactly.
    pub fn distance_to(&self, other: &Vector) -> SceneResult<f64> {
        ensure_same_dim(self.dim(), other.dim())?;
        if self < other {
            return other.distance_to(self);
        }
        Ok(squared_distance(&self.coords, &other.coords).sqrt())
    }

    /// `self` as a 2-D point.
    pub fn to_point(&self) -> SceneResult<Point> {
        let (x, y) = self.as_pair()?;
        Ok(Point::new(x, y))
    }

    /// `self` as a 2-D displacement.
    pub fn to_vec2(&self) -> SceneResult<Vec2> {
        let (x, y) = self.as_pair()?;
        Ok(Vec2::new(x, y))
    }

    pub(crate) fn as_pair(&self) -> SceneResult<(f64, f64)> {
        match self.coords.as_slice() {
            [x, y] => Ok((*x, *y)),
            _ => Err(SceneError::dimension_mismatch(2, self.dim())),
        }
    }

    pub(crate) fn map(&self, f: impl Fn(f64) -> f64) -> Vector {
        Self::new(self.coords.iter().map(|&c| f(c)))
    }

    fn zip_with(&self, other: &Vector, f: impl Fn(f64, f64) -> f64) -> SceneResult<Vector> {
        ensure_same_dim(self.dim(), other.dim())?;
        Ok(Self::new(
            self.coords
                .iter()
                .zip(other.coords.iter())
                .map(|(&a, &b)| f(a, b)),
        ))
    }
}

/// Sum of squared differences over the shared components.
pub(crate) fn squared_distance(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b.iter()).map(|(x, y)| (x - y) * (x - y)).sum()
}

impl From<Point> for Vector {
    fn from(p: Point) -> Self {
        Self::xy(p.x, p.y)
    }
}

impl From<Vec2> for Vector {
    fn from(v: Vec2) -> Self {
        Self::xy(v.x, v.y)
    }
}

impl std::ops::Mul<f64> for &Vector {
    type Output = Vector;

    fn mul(self, factor: f64) -> Vector {
        self.map(|c| c * factor)
    }
}

impl std::ops::Mul<f64> for Vector {
    type Output = Vector;

    fn mul(self, factor: f64) -> Vector {
        &self * factor
    }
}

impl std::ops::Div<f64> for &Vector {
    type Output = Vector;

    fn div(self, factor: f64) -> Vector {
        self.map(|c| c / factor)
    }
}

impl std::ops::Div<f64> for Vector {
    type Output = Vector;

    fn div(self, factor: f64) -> Vector {
        &self / factor
    }
}

impl std::ops::Neg for &Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        self.map(|c| -c)
    }
}

impl std::ops::Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        -&self
    }
}

impl fmt::Display for Vector {
    /// Space-separated components, the form SVG attributes expect.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, c) in self.coords.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/vector.rs"]
mod tests;
