use ndarray::{ArrayView1, ArrayView2};

/// Squared Euclidean distance between two `[x, y]` rows
#[inline]
pub fn squared_distance(a: &ArrayView1<f64>, b: &ArrayView1<f64>) -> f64 {
    let dx = a[0] - b[0];
    let dy = a[1] - b[1];
    dx * dx + dy * dy
}

/// Find the nearest facility for each point
///
/// Facilities are scanned in id order and only a strictly smaller distance
/// replaces the current best, so equidistant facilities resolve to the lowest id.
///
/// # Arguments
/// * `points` - Point coordinates (n_points, 2)
/// * `facilities` - Facility coordinates (n_facilities, 2), row = id
///
/// # Returns
/// * `labels` - Facility id for each point (n_points,)
pub fn find_nearest_facilities(
    points: &ArrayView2<f64>,
    facilities: &ArrayView2<f64>,
) -> Vec<usize> {
    points
        .outer_iter()
        .map(|point| {
            let mut best_label = 0;
            let mut best_dist = f64::INFINITY;

            for (id, facility) in facilities.outer_iter().enumerate() {
                let dist = squared_distance(&point, &facility);
                if dist < best_dist {
                    best_dist = dist;
                    best_label = id;
                }
            }

            best_label
        })
        .collect()
}

/// Compute centroid shift (sum of L2 norms of facility movements)
pub fn compute_centroid_shift(
    old_positions: &ArrayView2<f64>,
    new_positions: &ArrayView2<f64>,
) -> f64 {
    old_positions
        .outer_iter()
        .zip(new_positions.outer_iter())
        .map(|(old, new)| squared_distance(&old, &new).sqrt())
        .sum()
}
