pub mod distance_2d;
pub mod intersect_2d;
pub mod polygon_2d;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Slack applied to both ends of a separation band when accepting a step.
pub const SEPARATION_TOLERANCE: f64 = 1e-9;

/// Unit direction for a heading given in degrees (counter-clockwise from +X).
#[must_use]
pub fn heading_vector(degrees: f64) -> Vector2 {
    let radians = degrees.to_radians();
    Vector2::new(radians.cos(), radians.sin())
}

/// Heading of a direction vector in degrees, in `(-180, 180]`.
#[must_use]
pub fn heading_degrees(dir: &Vector2) -> f64 {
    dir.y.atan2(dir.x).to_degrees()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn heading_round_trip() {
        let v = heading_vector(135.0);
        assert_abs_diff_eq!(heading_degrees(&v), 135.0, epsilon = 1e-9);
        assert_abs_diff_eq!(v.norm(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn heading_zero_is_positive_x() {
        let v = heading_vector(0.0);
        assert_abs_diff_eq!(v.x, 1.0);
        assert_abs_diff_eq!(v.y, 0.0);
    }
}
