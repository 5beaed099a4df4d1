use crate::algorithm::{assign_points, update_facilities};
use crate::assignment::Assignment;
use crate::config::SessionConfig;
use crate::distance::compute_centroid_shift;
use crate::error::FacilityError;
use crate::facility::{Facility, FacilitySet};
use crate::grid::{Point, SpatialGrid};
use crate::metrics::{compute_metrics, Coverage, Metrics};
use crate::points::PointSet;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::fmt;
use tracing::{debug, info};

/// Lifecycle step of an `OptimizationSession`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionPhase {
    Unconfigured,
    GridReady,
    PointsReady,
    FacilitiesReady,
    Assigned,
    Updated,
}

impl fmt::Display for SessionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SessionPhase::Unconfigured => "unconfigured",
            SessionPhase::GridReady => "grid ready",
            SessionPhase::PointsReady => "points ready",
            SessionPhase::FacilitiesReady => "facilities ready",
            SessionPhase::Assigned => "assigned",
            SessionPhase::Updated => "updated",
        };
        f.write_str(name)
    }
}

/// Outcome of one update step
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateReport {
    /// Facilities at their new positions
    pub facilities: Vec<Facility>,

    /// Sum of distances moved by all facilities
    pub shift: f64,

    /// Facilities that had no points and stayed put
    pub empty_facilities: Vec<usize>,

    /// Number of update steps completed so far, this one included
    pub iteration: usize,
}

/// Owned copy of everything a session currently holds
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSnapshot {
    pub phase: SessionPhase,
    pub grid_size: Option<usize>,
    pub points: Vec<Point>,
    pub facilities: Vec<Facility>,
    pub assignment: Option<Vec<Option<usize>>>,
    pub iteration: usize,
    pub metrics: Metrics,
    pub coverage: Coverage,
}

/// Step-driven k-means facility placement.
///
/// The caller moves the session through its phases one call at a time:
/// configure the grid, generate (or place) points, generate (or place)
/// facilities, then alternate `assign` and `update`. Each call either
/// succeeds or returns an error and leaves the session as it was.
///
/// # Example
///
/// ```
/// use facility_kmeans::OptimizationSession;
///
/// let mut session = OptimizationSession::with_seed(42);
/// session.configure_grid(20).unwrap();
/// session.generate_points(100).unwrap();
/// session.generate_facilities(4).unwrap();
///
/// for _ in 0..5 {
///     session.assign().unwrap();
///     session.update().unwrap();
/// }
///
/// assert!(session.metrics().inertia >= 0.0);
/// ```
pub struct OptimizationSession {
    /// Session configuration
    config: SessionConfig,

    /// Generator for points and facilities, seeded from `config.seed`
    rng: ChaCha8Rng,

    phase: SessionPhase,
    grid: Option<SpatialGrid>,
    points: Option<PointSet>,
    facilities: Option<FacilitySet>,
    assignment: Option<Assignment>,

    /// Completed update steps
    iteration: usize,
}

impl Default for OptimizationSession {
    fn default() -> Self {
        Self::new()
    }
}

impl OptimizationSession {
    /// Create a session with default configuration.
    pub fn new() -> Self {
        Self::with_config(SessionConfig::default())
    }

    /// Create a session whose generators are seeded with `seed`.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_config(SessionConfig::new(seed))
    }

    /// Create a session with custom configuration.
    pub fn with_config(config: SessionConfig) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            config,
            phase: SessionPhase::Unconfigured,
            grid: None,
            points: None,
            facilities: None,
            assignment: None,
            iteration: 0,
        }
    }

    /// Fix the grid to `[0, m) x [0, m)`.
    ///
    /// # Errors
    ///
    /// - `IllegalTransition` unless the session is unconfigured
    /// - `InvalidArgument` if `m` is 0
    pub fn configure_grid(&mut self, m: usize) -> Result<(), FacilityError> {
        self.require_phase("configure grid", &[SessionPhase::Unconfigured])?;

        self.grid = Some(SpatialGrid::new(m)?);
        self.enter(SessionPhase::GridReady);
        Ok(())
    }

    /// Generate `n` random residences on the grid.
    ///
    /// # Errors
    ///
    /// - `IllegalTransition` unless the grid was just configured
    /// - `InvalidArgument` if `n` is 0
    pub fn generate_points(&mut self, n: usize) -> Result<Vec<Point>, FacilityError> {
        self.require_phase("generate points", &[SessionPhase::GridReady])?;

        let grid = self.require_grid()?;
        let points = PointSet::generate(n, &grid, &mut self.rng)?;
        Ok(self.install_points(points))
    }

    /// Use explicit residences instead of random ones. Same gating as
    /// `generate_points`; every point must lie on the grid.
    pub fn place_points(&mut self, points: &[Point]) -> Result<Vec<Point>, FacilityError> {
        self.require_phase("place points", &[SessionPhase::GridReady])?;

        let grid = self.require_grid()?;
        let points = PointSet::from_points(points, &grid)?;
        Ok(self.install_points(points))
    }

    /// Generate `a` random facilities with ids `0..a`.
    ///
    /// # Errors
    ///
    /// - `IllegalTransition` unless points were just generated
    /// - `InvalidArgument` if `a` is 0
    pub fn generate_facilities(&mut self, a: usize) -> Result<Vec<Facility>, FacilityError> {
        self.require_phase("generate facilities", &[SessionPhase::PointsReady])?;

        let grid = self.require_grid()?;
        let facilities = FacilitySet::generate(a, &grid, &mut self.rng)?;
        Ok(self.install_facilities(facilities))
    }

    /// Place facilities at explicit positions; ids follow slice order. Same
    /// gating as `generate_facilities`.
    pub fn place_facilities(
        &mut self,
        positions: &[Point],
    ) -> Result<Vec<Facility>, FacilityError> {
        self.require_phase("place facilities", &[SessionPhase::PointsReady])?;

        let grid = self.require_grid()?;
        let facilities = FacilitySet::from_positions(positions, &grid)?;
        Ok(self.install_facilities(facilities))
    }

    /// Map every point to its nearest facility (lowest id on ties).
    ///
    /// # Errors
    ///
    /// - `IllegalTransition` unless facilities are ready or were just updated
    /// - `InvalidState` if points or facilities are missing
    pub fn assign(&mut self) -> Result<&Assignment, FacilityError> {
        self.require_phase(
            "assign",
            &[SessionPhase::FacilitiesReady, SessionPhase::Updated],
        )?;

        let (Some(points), Some(facilities)) = (&self.points, &self.facilities) else {
            return Err(FacilityError::InvalidState(
                "points and facilities must be generated before assigning".to_string(),
            ));
        };
        let assignment = assign_points(points, facilities)?;

        debug!(
            event = "assign",
            iteration = self.iteration,
            points = assignment.len(),
            facilities = facilities.len(),
        );

        self.enter(SessionPhase::Assigned);
        Ok(self.assignment.insert(assignment))
    }

    /// Move each facility to the rounded centroid of its assigned points.
    ///
    /// # Errors
    ///
    /// - `IllegalTransition` unless the session was just assigned
    /// - `InvalidState` if the stored assignment does not match the points
    pub fn update(&mut self) -> Result<UpdateReport, FacilityError> {
        self.require_phase("update", &[SessionPhase::Assigned])?;

        let (Some(points), Some(facilities), Some(assignment)) =
            (&self.points, self.facilities.as_mut(), &self.assignment)
        else {
            return Err(FacilityError::InvalidState(
                "an assignment is required before updating".to_string(),
            ));
        };

        let update = update_facilities(points, facilities, assignment)?;
        let shift = compute_centroid_shift(&facilities.view(), &update.positions.view());
        facilities.update(update.positions)?;

        self.iteration += 1;
        let metrics = compute_metrics(points, facilities, assignment);

        info!(
            event = "update",
            iteration = self.iteration,
            shift = shift,
            empty_facilities = update.empty_facilities.len(),
            average_distance = metrics.average_distance,
            inertia = metrics.inertia,
        );

        let report = UpdateReport {
            facilities: facilities.to_vec(),
            shift,
            empty_facilities: update.empty_facilities,
            iteration: self.iteration,
        };
        self.enter(SessionPhase::Updated);
        Ok(report)
    }

    /// Average distance and inertia of the stored assignment against the
    /// current facility positions, recomputed on every call. Both are 0
    /// before the first assignment.
    pub fn metrics(&self) -> Metrics {
        match (&self.points, &self.facilities, &self.assignment) {
            (Some(points), Some(facilities), Some(assignment)) => {
                compute_metrics(points, facilities, assignment)
            }
            _ => Metrics::default(),
        }
    }

    /// Share of points currently mapped to a facility.
    pub fn coverage(&self) -> Coverage {
        match (&self.assignment, &self.points) {
            (Some(assignment), _) => Coverage::of(assignment),
            (None, Some(points)) => Coverage {
                assigned: 0,
                total: points.len(),
            },
            (None, None) => Coverage::default(),
        }
    }

    /// Points served by each facility; all zeros before the first assignment.
    pub fn cluster_sizes(&self) -> Vec<usize> {
        let k = self.facilities.as_ref().map_or(0, FacilitySet::len);
        match &self.assignment {
            Some(assignment) => assignment.cluster_sizes(k),
            None => vec![0; k],
        }
    }

    /// Drop grid, points, facilities and assignment and reseed the generator.
    /// Legal in every phase.
    pub fn reset(&mut self) {
        self.rng = ChaCha8Rng::seed_from_u64(self.config.seed);
        self.grid = None;
        self.points = None;
        self.facilities = None;
        self.assignment = None;
        self.iteration = 0;
        self.enter(SessionPhase::Unconfigured);
    }

    /// Owned copy of the current state.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            phase: self.phase,
            grid_size: self.grid.map(|g| g.size()),
            points: self.points.as_ref().map(PointSet::to_vec).unwrap_or_default(),
            facilities: self
                .facilities
                .as_ref()
                .map(FacilitySet::to_vec)
                .unwrap_or_default(),
            assignment: self.assignment.as_ref().map(|a| a.labels().to_vec()),
            iteration: self.iteration,
            metrics: self.metrics(),
            coverage: self.coverage(),
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn grid(&self) -> Option<&SpatialGrid> {
        self.grid.as_ref()
    }

    pub fn points(&self) -> Option<&PointSet> {
        self.points.as_ref()
    }

    pub fn facilities(&self) -> Option<&FacilitySet> {
        self.facilities.as_ref()
    }

    pub fn assignment(&self) -> Option<&Assignment> {
        self.assignment.as_ref()
    }

    /// Number of completed update steps since the last reset
    pub fn iteration(&self) -> usize {
        self.iteration
    }

    fn require_phase(
        &self,
        operation: &'static str,
        allowed: &[SessionPhase],
    ) -> Result<(), FacilityError> {
        if allowed.contains(&self.phase) {
            Ok(())
        } else {
            Err(FacilityError::IllegalTransition {
                operation,
                phase: self.phase,
            })
        }
    }

    fn require_grid(&self) -> Result<SpatialGrid, FacilityError> {
        self.grid
            .ok_or_else(|| FacilityError::InvalidState("grid is not configured".to_string()))
    }

    fn install_points(&mut self, points: PointSet) -> Vec<Point> {
        let generated = points.to_vec();
        self.points = Some(points);
        self.facilities = None;
        self.assignment = None;
        self.enter(SessionPhase::PointsReady);
        generated
    }

    fn install_facilities(&mut self, facilities: FacilitySet) -> Vec<Facility> {
        let generated = facilities.to_vec();
        self.facilities = Some(facilities);
        self.assignment = None;
        self.enter(SessionPhase::FacilitiesReady);
        generated
    }

    fn enter(&mut self, phase: SessionPhase) {
        debug!(event = "phase", from = %self.phase, to = %phase);
        self.phase = phase;
    }
}
