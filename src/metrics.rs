use crate::assignment::Assignment;
use crate::distance::squared_distance;
use crate::facility::FacilitySet;
use crate::points::PointSet;

/// Quality of the current assignment
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Metrics {
    /// Mean distance from each assigned point to its facility
    pub average_distance: f64,

    /// Sum of squared distances from each assigned point to its facility
    pub inertia: f64,
}

/// Compute metrics from scratch for the given assignment.
///
/// Unassigned points are left out of both sums and of the denominator, as are
/// labels that name no existing facility. With nothing assigned both values are 0.
pub fn compute_metrics(
    points: &PointSet,
    facilities: &FacilitySet,
    assignment: &Assignment,
) -> Metrics {
    let positions = facilities.view();
    let k = positions.nrows();

    let mut n_assigned = 0usize;
    let mut distance_sum = 0.0f64;
    let mut inertia = 0.0f64;

    for (point, label) in points.view().outer_iter().zip(assignment.labels()) {
        let Some(id) = (*label).filter(|&id| id < k) else {
            continue;
        };
        let dist_sq = squared_distance(&point, &positions.row(id));
        distance_sum += dist_sq.sqrt();
        inertia += dist_sq;
        n_assigned += 1;
    }

    if n_assigned == 0 {
        return Metrics::default();
    }

    Metrics {
        average_distance: distance_sum / n_assigned as f64,
        inertia,
    }
}

/// How many points are currently served by a facility
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Coverage {
    pub assigned: usize,
    pub total: usize,
}

impl Coverage {
    pub fn of(assignment: &Assignment) -> Self {
        Self {
            assigned: assignment.assigned_count(),
            total: assignment.len(),
        }
    }

    /// Fraction of points assigned, 0 when there are no points
    pub fn ratio(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.assigned as f64 / self.total as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{Point, SpatialGrid};
    use approx::assert_relative_eq;

    fn fixture() -> (PointSet, FacilitySet) {
        let grid = SpatialGrid::new(10).unwrap();
        let points =
            PointSet::from_points(&[Point::new(0.0, 0.0), Point::new(9.0, 9.0)], &grid).unwrap();
        let facilities = FacilitySet::from_positions(&[Point::new(0.0, 0.0)], &grid).unwrap();
        (points, facilities)
    }

    #[test]
    fn test_metrics_single_facility() {
        let (points, facilities) = fixture();
        let assignment = Assignment::from(vec![0, 0]);

        let metrics = compute_metrics(&points, &facilities, &assignment);

        assert_relative_eq!(metrics.average_distance, 162f64.sqrt() / 2.0, epsilon = 1e-12);
        assert_relative_eq!(metrics.inertia, 162.0, epsilon = 1e-12);
    }

    #[test]
    fn test_metrics_unassigned_is_zero() {
        let (points, facilities) = fixture();

        let metrics = compute_metrics(&points, &facilities, &Assignment::unassigned(2));

        assert_eq!(metrics, Metrics::default());
    }

    #[test]
    fn test_metrics_excludes_unassigned_from_denominator() {
        let (points, facilities) = fixture();
        let assignment = Assignment::from(vec![None, Some(0)]);

        let metrics = compute_metrics(&points, &facilities, &assignment);

        assert_relative_eq!(metrics.average_distance, 162f64.sqrt(), epsilon = 1e-12);
        assert_relative_eq!(metrics.inertia, 162.0, epsilon = 1e-12);
    }

    #[test]
    fn test_coverage() {
        let coverage = Coverage::of(&Assignment::from(vec![Some(0), None, Some(0), None]));
        assert_eq!(coverage.assigned, 2);
        assert_eq!(coverage.total, 4);
        assert_relative_eq!(coverage.ratio(), 0.5);
        assert_eq!(Coverage::default().ratio(), 0.0);
    }
}
