use std::f64::consts::{FRAC_PI_2, PI, TAU};

use crate::error::Result;
use crate::geometry::Polygon;
use crate::math::Point2;

/// Creates a polygon from radii sampled at evenly spaced angles.
///
/// Vertex `i` of `n` sits at angle `2π·i/n` (counter-clockwise from +X) and
/// distance `radii[i]` from `center`. Circles and the pathological test
/// boundaries (spikes, dents, stars, pinched passages) are all profiles of
/// this kind.
#[derive(Debug, Clone)]
pub struct MakeRadialPolygon {
    center: Point2,
    radii: Vec<f64>,
}

impl MakeRadialPolygon {
    /// Creates a new `MakeRadialPolygon` operation.
    #[must_use]
    pub fn new(center: Point2, radii: Vec<f64>) -> Self {
        Self { center, radii }
    }

    /// Regular `vertex_count`-gon approximating a circle.
    #[must_use]
    pub fn circle(center: Point2, radius: f64, vertex_count: u32) -> Self {
        Self::from_fn(center, vertex_count, |_, _| radius)
    }

    /// 20-vertex circle with vertex 10 pushed out by `spike_height`.
    #[must_use]
    pub fn spike(center: Point2, radius: f64, spike_height: f64) -> Self {
        Self::from_fn(center, 20, |i, _| {
            if i == 10 {
                radius + spike_height
            } else {
                radius
            }
        })
    }

    /// 20-vertex circle with a sinusoidal dent of `depth` over 30–70 % of the turn.
    #[must_use]
    pub fn deep_concave(center: Point2, radius: f64, depth: f64) -> Self {
        Self::from_fn(center, 20, |_, fraction| {
            if (0.3..=0.7).contains(&fraction) {
                radius - depth * (PI * (fraction - 0.3) / 0.4).sin()
            } else {
                radius
            }
        })
    }

    /// Star alternating between `outer` (even vertices) and `inner` (odd).
    #[must_use]
    pub fn star(center: Point2, outer: f64, inner: f64, vertex_count: u32) -> Self {
        Self::from_fn(center, vertex_count, |i, _| if i % 2 == 0 { outer } else { inner })
    }

    /// 24-vertex circle pinched to 30 % within 0.3 rad of each axis direction.
    #[must_use]
    pub fn narrow_passages(center: Point2, radius: f64) -> Self {
        let passages = [0.0, FRAC_PI_2, PI, 3.0 * FRAC_PI_2];
        Self::from_fn(center, 24, |_, fraction| {
            let angle = TAU * fraction;
            if passages.iter().any(|pa| (angle - pa).abs() < 0.3) {
                radius * 0.3
            } else {
                radius
            }
        })
    }

    fn from_fn(center: Point2, vertex_count: u32, radius_at: impl Fn(u32, f64) -> f64) -> Self {
        let radii = (0..vertex_count)
            .map(|i| radius_at(i, f64::from(i) / f64::from(vertex_count)))
            .collect();
        Self { center, radii }
    }

    /// Executes the operation.
    ///
    /// # Errors
    ///
    /// Returns a `GeometryError` if the profile does not describe a valid
    /// polygon (fewer than 3 vertices, zero or non-finite radii).
    pub fn execute(&self) -> Result<Polygon> {
        let n = self.radii.len();
        #[allow(clippy::cast_precision_loss)]
        let points = self
            .radii
            .iter()
            .enumerate()
            .map(|(i, r)| {
                let angle = TAU * i as f64 / n as f64;
                Point2::new(
                    self.center.x + r * angle.cos(),
                    self.center.y + r * angle.sin(),
                )
            })
            .collect();
        Polygon::new(points)
    }
}
