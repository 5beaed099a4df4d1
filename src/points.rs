use crate::error::FacilityError;
use crate::grid::{Point, SpatialGrid};
use ndarray::{Array2, ArrayView2};
use rand::Rng;

/// Fixed residential points for one run.
///
/// Stored as an `(n, 2)` array; never mutated after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct PointSet {
    coords: Array2<f64>,
}

impl PointSet {
    /// Generate `n` points uniformly over the grid.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `n` is 0.
    pub fn generate<R: Rng + ?Sized>(
        n: usize,
        grid: &SpatialGrid,
        rng: &mut R,
    ) -> Result<Self, FacilityError> {
        if n == 0 {
            return Err(FacilityError::InvalidArgument(
                "number of points must be greater than 0".to_string(),
            ));
        }
        Ok(Self {
            coords: grid.sample(n, rng),
        })
    }

    /// Build a point set from explicit locations.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `points` is empty or any point is off the grid.
    pub fn from_points(points: &[Point], grid: &SpatialGrid) -> Result<Self, FacilityError> {
        Ok(Self {
            coords: grid.collect(points, "point")?,
        })
    }

    pub fn len(&self) -> usize {
        self.coords.nrows()
    }

    pub fn is_empty(&self) -> bool {
        self.coords.nrows() == 0
    }

    /// Point at `index`, if any
    pub fn get(&self, index: usize) -> Option<Point> {
        (index < self.len()).then(|| Point::new(self.coords[[index, 0]], self.coords[[index, 1]]))
    }

    pub fn iter(&self) -> impl Iterator<Item = Point> + '_ {
        self.coords.outer_iter().map(|row| Point::new(row[0], row[1]))
    }

    pub fn to_vec(&self) -> Vec<Point> {
        self.iter().collect()
    }

    /// Coordinates as an `(n, 2)` view
    pub fn view(&self) -> ArrayView2<'_, f64> {
        self.coords.view()
    }
}
