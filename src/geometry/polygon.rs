use crate::error::{GeometryError, Result};
use crate::math::distance_2d::distance_to_polygon;
use crate::math::polygon_2d::{diameter, perimeter, point_in_polygon, signed_area, Aabb2};
use crate::math::{Point2, TOLERANCE};

/// A closed polygon in the plane.
///
/// The boundary runs through the points in order and back from the last point
/// to the first. A polygon produced by a sealed walk repeats its first point
/// at the end; that explicit closing point is the only permitted coincidence
/// and its zero-length closing edge has no effect on any query.
///
/// Invariants (checked by [`Polygon::new`]):
/// - at least 3 distinct points, all coordinates finite;
/// - no two consecutive points coincide exactly (except the closing point);
/// - non-zero signed area.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    points: Vec<Point2>,
}

impl Polygon {
    /// Creates a polygon after validating its invariants.
    ///
    /// # Errors
    ///
    /// - `GeometryError::TooFewPoints` with fewer than 3 distinct points
    /// - `GeometryError::NonFinite` if any coordinate is NaN or infinite
    /// - `GeometryError::CoincidentPoints` if two consecutive points are equal
    /// - `GeometryError::ZeroArea` if the signed area vanishes
    pub fn new(points: Vec<Point2>) -> Result<Self> {
        Ok(Self::from_checked(points)?)
    }

    /// Validates `points` and wraps them, reporting the bare geometry error.
    pub(crate) fn from_checked(points: Vec<Point2>) -> std::result::Result<Self, GeometryError> {
        let closing = points.len() > 1 && points.first() == points.last();
        let distinct = if closing {
            points.len() - 1
        } else {
            points.len()
        };
        if distinct < 3 {
            return Err(GeometryError::TooFewPoints { count: distinct });
        }
        if let Some(index) = points
            .iter()
            .position(|p| !(p.x.is_finite() && p.y.is_finite()))
        {
            return Err(GeometryError::NonFinite { index });
        }
        if let Some(index) = points.windows(2).position(|w| w[0] == w[1]) {
            return Err(GeometryError::CoincidentPoints { index: index + 1 });
        }
        if signed_area(&points).abs() <= TOLERANCE {
            return Err(GeometryError::ZeroArea);
        }
        Ok(Self { points })
    }

    /// The ordered boundary points.
    #[must_use]
    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    /// Consumes the polygon, returning its points.
    #[must_use]
    pub fn into_points(self) -> Vec<Point2> {
        self.points
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false`; a valid polygon has at least 3 points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[must_use]
    pub fn first(&self) -> Point2 {
        self.points[0]
    }

    #[must_use]
    pub fn last(&self) -> Point2 {
        self.points[self.points.len() - 1]
    }

    /// Returns `true` when the last point repeats the first exactly.
    #[must_use]
    pub fn is_explicitly_closed(&self) -> bool {
        self.first() == self.last()
    }

    /// Iterates over the boundary edges, including the closing edge.
    pub fn edges(&self) -> impl Iterator<Item = (Point2, Point2)> + '_ {
        let n = self.points.len();
        (0..n).map(move |i| (self.points[i], self.points[(i + 1) % n]))
    }

    /// Ray-casting containment test, see [`point_in_polygon`].
    #[must_use]
    pub fn contains(&self, p: &Point2) -> bool {
        point_in_polygon(p, &self.points)
    }

    /// Minimum distance from `p` to the boundary.
    #[must_use]
    pub fn distance_to(&self, p: &Point2) -> f64 {
        distance_to_polygon(p, &self.points)
    }

    #[must_use]
    pub fn signed_area(&self) -> f64 {
        signed_area(&self.points)
    }

    #[must_use]
    pub fn perimeter(&self) -> f64 {
        perimeter(&self.points)
    }

    #[must_use]
    pub fn diameter(&self) -> f64 {
        diameter(&self.points)
    }

    #[must_use]
    pub fn bounding_box(&self) -> Aabb2 {
        let mut bb = Aabb2::at(self.first());
        self.points[1..].iter().for_each(|p| bb.include(p));
        bb
    }
}

impl AsRef<[Point2]> for Polygon {
    fn as_ref(&self) -> &[Point2] {
        &self.points
    }
}

impl TryFrom<Vec<Point2>> for Polygon {
    type Error = crate::error::FoglineError;

    fn try_from(points: Vec<Point2>) -> Result<Self> {
        Self::new(points)
    }
}
