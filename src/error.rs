use crate::session::SessionPhase;
use thiserror::Error;

/// Error types for the facility placement engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FacilityError {
    /// A size or count is invalid (must be > 0), or a coordinate lies outside the grid
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Data required by the operation is missing or inconsistent
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// The operation is not permitted in the current session phase
    #[error("Illegal transition: cannot {operation} while session is {phase}")]
    IllegalTransition {
        operation: &'static str,
        phase: SessionPhase,
    },
}
