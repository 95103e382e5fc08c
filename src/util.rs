//! Distance computations over goal arrays.
use ndarray::{Array1, Array2, Axis};

/// Euclidean distance between two goal vectors.
///
/// Panics if the shapes of the two arrays differ.
pub fn goal_distance(goal_a: &Array1<f32>, goal_b: &Array1<f32>) -> f32 {
    assert_eq!(
        goal_a.shape(),
        goal_b.shape(),
        "compared goal arrays must have identical shapes"
    );
    let d = goal_a - goal_b;
    d.dot(&d).sqrt()
}

/// Row-wise Euclidean distance between two batches of goal vectors.
///
/// The norm is taken along the last axis, yielding one distance per batch
/// row. Panics if the shapes of the two arrays differ.
pub fn goal_distances(goals_a: &Array2<f32>, goals_b: &Array2<f32>) -> Array1<f32> {
    assert_eq!(
        goals_a.shape(),
        goals_b.shape(),
        "compared goal arrays must have identical shapes"
    );
    let d = goals_a - goals_b;
    (&d * &d).sum_axis(Axis(1)).mapv(f32::sqrt)
}
