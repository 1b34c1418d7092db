mod offset_checks;
mod segment_stats;

pub use offset_checks::{all_points_inside, crossing_edges, max_turn_angle, separation_violations};
pub use segment_stats::SegmentStats;
