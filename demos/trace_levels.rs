//! Generates nested levels inside a circle and prints a summary per level.
//!
//! Usage:
//! ```text
//! cargo run --example trace_levels
//! RUST_LOG=fogline=debug cargo run --example trace_levels
//! RUST_LOG=fogline=trace cargo run --example trace_levels   # every step
//! ```

use fogline::operations::creation::MakeRadialPolygon;
use fogline::operations::query::{max_turn_angle, SegmentStats};
use fogline::{NestedPolygonSequence, OffsetParameters, Point2};

fn main() -> fogline::Result<()> {
    // Default: WARN for everything, INFO for fogline.
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("fogline=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let boundary = MakeRadialPolygon::circle(Point2::new(500.0, 500.0), 500.0, 1000).execute()?;
    let params = OffsetParameters {
        target_separation: 2.5,
        ..OffsetParameters::default()
    };
    let set = NestedPolygonSequence::new(boundary, 5, params, 0.5).execute();

    for (level, poly) in set.polygons.iter().enumerate() {
        let stats = SegmentStats::of(poly.points());
        println!(
            "level {level}: {} points, area {:.1}, mean segment {:.3}, max turn {:.1} deg",
            poly.len(),
            poly.signed_area().abs(),
            stats.map_or(0.0, |s| s.mean),
            max_turn_angle(poly.points()),
        );
    }
    if let Some(failure) = set.failure {
        println!("stopped at level {}: {}", failure.level, failure.failure);
    }
    Ok(())
}
