use crate::math::Point2;

/// Summary of the segment lengths along an ordered point sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentStats {
    pub count: usize,
    pub mean: f64,
    pub min: f64,
    pub max: f64,
    /// Population standard deviation.
    pub std_dev: f64,
}

impl SegmentStats {
    /// Collects statistics over consecutive segments of `points`.
    ///
    /// Returns `None` when there are fewer than two points.
    #[must_use]
    pub fn of(points: &[Point2]) -> Option<Self> {
        let lengths: Vec<f64> = points
            .windows(2)
            .map(|w| nalgebra::distance(&w[0], &w[1]))
            .collect();
        if lengths.is_empty() {
            return None;
        }

        #[allow(clippy::cast_precision_loss)]
        let n = lengths.len() as f64;
        let mean = lengths.iter().sum::<f64>() / n;
        let variance = lengths.iter().map(|l| (l - mean).powi(2)).sum::<f64>() / n;
        let min = lengths.iter().copied().fold(f64::INFINITY, f64::min);
        let max = lengths.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        Some(Self {
            count: lengths.len(),
            mean,
            min,
            max,
            std_dev: variance.sqrt(),
        })
    }

    /// How close the mean length is to `target`, as a percentage (0–100).
    #[must_use]
    pub fn accuracy_percent(&self, target: f64) -> f64 {
        if target <= 0.0 {
            return 0.0;
        }
        (100.0 - (self.mean - target).abs() / target * 100.0).max(0.0)
    }
}
