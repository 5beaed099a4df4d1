//! # facility-kmeans
//!
//! Step-driven k-means placement of facilities on a bounded 2D grid,
//! built on ndarray.
//!
//! ## Features
//!
//! - **Explicit phases**: configure grid → generate points → generate facilities →
//!   alternate assign/update, with every transition initiated by the caller
//! - **Reproducible**: points and facilities are drawn from a seeded ChaCha8 generator
//! - **Deterministic steps**: lowest-id tie-break on assignment, round-half-up
//!   centroids that stay on the integer grid
//! - **Fresh metrics**: average distance and inertia recomputed from the current
//!   assignment on every read
//!
//! ## Example
//!
//! ```rust
//! use facility_kmeans::{OptimizationSession, SessionPhase};
//!
//! let mut session = OptimizationSession::with_seed(42);
//! session.configure_grid(50).unwrap();
//! session.generate_points(200).unwrap();
//! session.generate_facilities(5).unwrap();
//!
//! session.assign().unwrap();
//! let first = session.metrics();
//!
//! let report = session.update().unwrap();
//! assert_eq!(report.facilities.len(), 5);
//! assert_eq!(session.phase(), SessionPhase::Updated);
//!
//! session.assign().unwrap();
//! assert!(session.metrics().inertia <= first.inertia);
//! ```
//!
//! ## Explicit placement
//!
//! ```rust
//! use facility_kmeans::{OptimizationSession, Point};
//!
//! let mut session = OptimizationSession::new();
//! session.configure_grid(10).unwrap();
//! session.place_points(&[Point::new(0.0, 0.0), Point::new(9.0, 9.0)]).unwrap();
//! session.place_facilities(&[Point::new(0.0, 0.0)]).unwrap();
//!
//! let assignment = session.assign().unwrap();
//! assert_eq!(assignment.labels(), &[Some(0), Some(0)]);
//! assert_eq!(session.metrics().inertia, 162.0);
//! ```

mod algorithm;
mod assignment;
mod config;
mod distance;
mod error;
mod facility;
mod grid;
mod metrics;
mod points;
mod session;

pub use algorithm::{assign_points, round_half_up, update_facilities, CentroidUpdate};
pub use assignment::Assignment;
pub use config::{ConfigError, SessionConfig};
pub use error::FacilityError;
pub use facility::{Facility, FacilitySet};
pub use grid::{Point, SpatialGrid};
pub use metrics::{compute_metrics, Coverage, Metrics};
pub use points::PointSet;
pub use session::{OptimizationSession, SessionPhase, SessionSnapshot, UpdateReport};
