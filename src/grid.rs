use crate::error::FacilityError;
use ndarray::Array2;
use ndarray_rand::rand_distr::Uniform;
use ndarray_rand::RandomExt;
use rand::Rng;

/// A location on the grid.
///
/// Coordinates are whole numbers stored as `f64` so that centroid arithmetic
/// and distances need no conversions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    pub fn distance(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl From<(i64, i64)> for Point {
    fn from((x, y): (i64, i64)) -> Self {
        Self::new(x as f64, y as f64)
    }
}

/// Square coordinate domain `[0, m) x [0, m)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpatialGrid {
    size: usize,
}

impl SpatialGrid {
    /// Create a grid with side length `size`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `size` is 0.
    pub fn new(size: usize) -> Result<Self, FacilityError> {
        if size == 0 {
            return Err(FacilityError::InvalidArgument(
                "grid size must be greater than 0".to_string(),
            ));
        }
        Ok(Self { size })
    }

    /// Side length `m`
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether `point` has whole-number coordinates inside the domain
    pub fn contains(&self, point: &Point) -> bool {
        let upper = self.size as f64;
        [point.x, point.y]
            .iter()
            .all(|&c| c.is_finite() && c.fract() == 0.0 && c >= 0.0 && c < upper)
    }

    /// Draw `count` locations uniformly, one row `[x, y]` per location.
    pub(crate) fn sample<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> Array2<f64> {
        Array2::random_using((count, 2), Uniform::new(0u64, self.size as u64), rng)
            .mapv(|c| c as f64)
    }

    /// Copy explicit locations into the row layout used by `sample`.
    pub(crate) fn collect(&self, points: &[Point], what: &str) -> Result<Array2<f64>, FacilityError> {
        if points.is_empty() {
            return Err(FacilityError::InvalidArgument(format!(
                "at least one {} is required",
                what
            )));
        }

        let mut coords = Array2::zeros((points.len(), 2));
        for (i, point) in points.iter().enumerate() {
            if !self.contains(point) {
                return Err(FacilityError::InvalidArgument(format!(
                    "{} {} at ({}, {}) lies outside the {}x{} grid",
                    what, i, point.x, point.y, self.size, self.size
                )));
            }
            coords[[i, 0]] = point.x;
            coords[[i, 1]] = point.y;
        }
        Ok(coords)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_grid_zero_size() {
        assert!(matches!(
            SpatialGrid::new(0),
            Err(FacilityError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_sample_within_bounds() {
        let grid = SpatialGrid::new(7).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(42);

        let coords = grid.sample(1000, &mut rng);

        assert_eq!(coords.nrows(), 1000);
        assert_eq!(coords.ncols(), 2);
        for &c in coords.iter() {
            assert!((0.0..7.0).contains(&c));
            assert_eq!(c.fract(), 0.0);
        }
    }

    #[test]
    fn test_sample_single_cell_grid() {
        let grid = SpatialGrid::new(1).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(0);

        let coords = grid.sample(10, &mut rng);
        assert!(coords.iter().all(|&c| c == 0.0));
    }

    #[test]
    fn test_contains() {
        let grid = SpatialGrid::new(10).unwrap();
        assert!(grid.contains(&Point::new(0.0, 9.0)));
        assert!(!grid.contains(&Point::new(10.0, 0.0)));
        assert!(!grid.contains(&Point::new(-1.0, 0.0)));
        assert!(!grid.contains(&Point::new(2.5, 3.0)));
        assert!(!grid.contains(&Point::new(f64::NAN, 3.0)));
    }

    #[test]
    fn test_collect_rejects_out_of_bounds() {
        let grid = SpatialGrid::new(5).unwrap();
        let points = [Point::new(1.0, 1.0), Point::new(5.0, 0.0)];

        let result = grid.collect(&points, "point");
        assert!(matches!(result, Err(FacilityError::InvalidArgument(_))));
    }

    #[test]
    fn test_point_distance() {
        let a = Point::from((0, 0));
        let b = Point::from((3, 4));
        assert_relative_eq!(a.distance(&b), 5.0, epsilon = 1e-12);
    }
}
