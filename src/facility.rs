use crate::error::FacilityError;
use crate::grid::{Point, SpatialGrid};
use ndarray::{Array2, ArrayView2};
use rand::Rng;

/// A facility and its current position. `id` is its row in the `FacilitySet`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Facility {
    pub id: usize,
    pub x: f64,
    pub y: f64,
}

impl Facility {
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Facility positions indexed by id `0..a`.
///
/// Positions change on every update step; the number of facilities and their
/// ids never do.
#[derive(Debug, Clone, PartialEq)]
pub struct FacilitySet {
    coords: Array2<f64>,
}

impl FacilitySet {
    /// Generate `a` facilities uniformly over the grid, ids `0..a`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `a` is 0.
    pub fn generate<R: Rng + ?Sized>(
        a: usize,
        grid: &SpatialGrid,
        rng: &mut R,
    ) -> Result<Self, FacilityError> {
        if a == 0 {
            return Err(FacilityError::InvalidArgument(
                "number of facilities must be greater than 0".to_string(),
            ));
        }
        Ok(Self {
            coords: grid.sample(a, rng),
        })
    }

    /// Place facilities at explicit positions; ids follow slice order.
    pub fn from_positions(positions: &[Point], grid: &SpatialGrid) -> Result<Self, FacilityError> {
        Ok(Self {
            coords: grid.collect(positions, "facility")?,
        })
    }

    pub fn len(&self) -> usize {
        self.coords.nrows()
    }

    pub fn is_empty(&self) -> bool {
        self.coords.nrows() == 0
    }

    pub fn get(&self, id: usize) -> Option<Facility> {
        (id < self.len()).then(|| Facility {
            id,
            x: self.coords[[id, 0]],
            y: self.coords[[id, 1]],
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = Facility> + '_ {
        self.coords
            .outer_iter()
            .enumerate()
            .map(|(id, row)| Facility {
                id,
                x: row[0],
                y: row[1],
            })
    }

    pub fn to_vec(&self) -> Vec<Facility> {
        self.iter().collect()
    }

    /// Positions as an `(a, 2)` view, row = id
    pub fn view(&self) -> ArrayView2<'_, f64> {
        self.coords.view()
    }

    /// Replace all positions in place, keeping ids and order.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `positions` is not shaped `(a, 2)`.
    pub fn update(&mut self, positions: Array2<f64>) -> Result<(), FacilityError> {
        if positions.dim() != self.coords.dim() {
            return Err(FacilityError::InvalidArgument(format!(
                "expected positions of shape {:?}, got {:?}",
                self.coords.dim(),
                positions.dim()
            )));
        }
        self.coords = positions;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_generate_ids_are_dense() {
        let grid = SpatialGrid::new(20).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        let facilities = FacilitySet::generate(6, &grid, &mut rng).unwrap();

        let ids: Vec<usize> = facilities.iter().map(|f| f.id).collect();
        assert_eq!(ids, (0..6).collect::<Vec<_>>());
        assert!(facilities.iter().all(|f| grid.contains(&f.position())));
    }

    #[test]
    fn test_generate_zero() {
        let grid = SpatialGrid::new(20).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        let result = FacilitySet::generate(0, &grid, &mut rng);
        assert!(matches!(result, Err(FacilityError::InvalidArgument(_))));
    }

    #[test]
    fn test_update_keeps_ids() {
        let grid = SpatialGrid::new(10).unwrap();
        let mut facilities =
            FacilitySet::from_positions(&[Point::new(0.0, 0.0), Point::new(5.0, 5.0)], &grid)
                .unwrap();

        facilities.update(array![[1.0, 1.0], [4.0, 4.0]]).unwrap();

        assert_eq!(
            facilities.get(1),
            Some(Facility {
                id: 1,
                x: 4.0,
                y: 4.0
            })
        );
    }

    #[test]
    fn test_update_shape_mismatch() {
        let grid = SpatialGrid::new(10).unwrap();
        let mut facilities =
            FacilitySet::from_positions(&[Point::new(0.0, 0.0)], &grid).unwrap();

        let result = facilities.update(array![[1.0, 1.0], [4.0, 4.0]]);
        assert!(matches!(result, Err(FacilityError::InvalidArgument(_))));
        assert_eq!(facilities.get(0).unwrap().position(), Point::new(0.0, 0.0));
    }
}
