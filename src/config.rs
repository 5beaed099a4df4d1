use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Configuration for an optimization session
///
/// The session itself only reads `seed`. The size fields describe a full run
/// and are consumed by drivers such as the `facility-sim` binary.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Random seed for point and facility generation
    pub seed: u64,

    /// Side length `m` of the square grid
    pub grid_size: usize,

    /// Number of residences to generate
    pub n_points: usize,

    /// Number of facilities to place
    pub n_facilities: usize,

    /// Number of assign/update rounds a driver should run
    pub iterations: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            grid_size: 10,
            n_points: 50,
            n_facilities: 3,
            iterations: 10,
        }
    }
}

impl SessionConfig {
    /// Create a new configuration with the specified seed
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            ..Default::default()
        }
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if the file can't be read or contains invalid TOML.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string. Missing keys take their defaults.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Check that every size is positive
    pub fn validate(&self) -> Result<(), ConfigError> {
        let sizes = [
            ("grid_size", self.grid_size),
            ("n_points", self.n_points),
            ("n_facilities", self.n_facilities),
        ];
        for (name, value) in sizes {
            if value == 0 {
                return Err(ConfigError::Invalid(format!(
                    "{} must be greater than 0",
                    name
                )));
            }
        }
        Ok(())
    }

    /// Set the random seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the grid side length
    pub fn with_grid_size(mut self, grid_size: usize) -> Self {
        self.grid_size = grid_size;
        self
    }

    /// Set the number of residences
    pub fn with_points(mut self, n_points: usize) -> Self {
        self.n_points = n_points;
        self
    }

    /// Set the number of facilities
    pub fn with_facilities(mut self, n_facilities: usize) -> Self {
        self.n_facilities = n_facilities;
        self
    }

    /// Set the number of assign/update rounds
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }
}
