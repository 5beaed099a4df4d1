use crate::assignment::Assignment;
use crate::distance::find_nearest_facilities;
use crate::error::FacilityError;
use crate::facility::FacilitySet;
use crate::points::PointSet;
use ndarray::{Array1, Array2};

/// Result of one centroid update
#[derive(Debug, Clone, PartialEq)]
pub struct CentroidUpdate {
    /// New facility positions (n_facilities, 2), row = id
    pub positions: Array2<f64>,

    /// Ids of facilities with no assigned points; their positions are unchanged
    pub empty_facilities: Vec<usize>,
}

/// Round to the nearest integer, halves upward
#[inline]
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Map every point to its nearest facility.
///
/// Inputs are left untouched; the caller decides whether to keep the result.
///
/// # Errors
///
/// Returns `InvalidState` if either set is empty.
pub fn assign_points(
    points: &PointSet,
    facilities: &FacilitySet,
) -> Result<Assignment, FacilityError> {
    if points.is_empty() {
        return Err(FacilityError::InvalidState(
            "cannot assign without points".to_string(),
        ));
    }
    if facilities.is_empty() {
        return Err(FacilityError::InvalidState(
            "cannot assign without facilities".to_string(),
        ));
    }

    let labels = find_nearest_facilities(&points.view(), &facilities.view());
    Ok(Assignment::from(labels))
}

/// Move every facility to the rounded mean of its assigned points.
///
/// Unassigned points contribute nothing. A facility with no points keeps its
/// previous position and is reported in `empty_facilities`.
///
/// # Errors
///
/// Returns `InvalidState` if the assignment length differs from the number of
/// points or refers to a facility id that does not exist.
pub fn update_facilities(
    points: &PointSet,
    facilities: &FacilitySet,
    assignment: &Assignment,
) -> Result<CentroidUpdate, FacilityError> {
    let n_points = points.len();
    let k = facilities.len();

    if assignment.len() != n_points {
        return Err(FacilityError::InvalidState(format!(
            "assignment covers {} points, expected {}",
            assignment.len(),
            n_points
        )));
    }
    if let Some(bad) = assignment.labels().iter().flatten().find(|&&id| id >= k) {
        return Err(FacilityError::InvalidState(format!(
            "assignment refers to facility {} but only {} exist",
            bad, k
        )));
    }

    // Accumulators for new positions
    let mut cluster_sums: Array2<f64> = Array2::zeros((k, 2));
    let mut cluster_counts: Array1<f64> = Array1::zeros(k);

    let coords = points.view();
    for (i, label) in assignment.labels().iter().enumerate() {
        if let Some(id) = *label {
            cluster_counts[id] += 1.0;
            cluster_sums[[id, 0]] += coords[[i, 0]];
            cluster_sums[[id, 1]] += coords[[i, 1]];
        }
    }

    let mut positions = facilities.view().to_owned();
    let mut empty_facilities = Vec::new();

    for id in 0..k {
        let count = cluster_counts[id];
        if count > 0.0 {
            positions[[id, 0]] = round_half_up(cluster_sums[[id, 0]] / count);
            positions[[id, 1]] = round_half_up(cluster_sums[[id, 1]] / count);
        } else {
            empty_facilities.push(id);
        }
    }

    Ok(CentroidUpdate {
        positions,
        empty_facilities,
    })
}
