pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;

pub use error::{FoglineError, GenerationFailure, GeometryError, LevelResult, Result};
pub use geometry::Polygon;
pub use math::distance_2d::distance_to_polygon;
pub use math::polygon_2d::point_in_polygon;
pub use math::Point2;
pub use operations::nested::{NestedPolygon, NestedPolygonSequence, OffsetParameters};

/// Generates one polygon nested inside `reference`.
///
/// # Errors
///
/// Returns the [`GenerationFailure`] that stopped the level.
pub fn generate_nested_polygon(
    reference: &Polygon,
    params: &OffsetParameters,
) -> LevelResult<Polygon> {
    NestedPolygon::new(reference, *params).execute()
}

/// Generates up to `level_count` nested polygons inside `boundary`.
///
/// The returned list starts with `boundary` itself and ends at the last
/// level that closed successfully.
#[must_use]
pub fn generate_nested_polygon_sequence(
    boundary: Polygon,
    level_count: usize,
    params: &OffsetParameters,
    inter_curve_distance: f64,
) -> Vec<Polygon> {
    NestedPolygonSequence::new(boundary, level_count, *params, inter_curve_distance)
        .execute()
        .into_polygons()
}
