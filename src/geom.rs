//! Small geometric helpers for landmark positions.

use nalgebra::Point2;

/// Computes the Manhattan (L1) distance between two normalized landmark positions.
///
/// This is the only distance metric used by the gesture predicates. It is cheaper to evaluate than
/// the Euclidean distance but distorts with direction: diagonal separations measure up to √2 times
/// larger than axis-aligned ones of the same Euclidean length. The gesture thresholds are tuned
/// against this metric, so don't swap it out for the Euclidean distance.
pub fn manhattan(p: Point2<f32>, q: Point2<f32>) -> f32 {
    (p.x - q.x).abs() + (p.y - q.y).abs()
}
