use thiserror::Error;

/// Iteration budget used when none is given.
pub const DEFAULT_MAX_ITERS: usize = 50;

/// How interval endpoints are interpreted before bisection starts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Endpoints {
    /// Truncate each endpoint toward zero, so `[-1.9, 0.7]` becomes `[-1, 0]`.
    #[default]
    Truncate,

    /// Use the endpoints as given.
    Exact,
}

/// Configuration for the bisection solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    max_iters: usize,
    endpoints: Endpoints,
}

/// Errors that can occur when validating a bisection solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("max_iters must be at least 1")]
    ZeroIters,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_iters: DEFAULT_MAX_ITERS,
            endpoints: Endpoints::default(),
        }
    }
}

impl Config {
    /// Creates a new config.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroIters`] if `max_iters` is zero.
    pub fn new(max_iters: usize, endpoints: Endpoints) -> Result<Self, ConfigError> {
        if max_iters == 0 {
            return Err(ConfigError::ZeroIters);
        }

        Ok(Self {
            max_iters,
            endpoints,
        })
    }

    /// Returns the config with a different endpoint policy.
    #[must_use]
    pub fn with_endpoints(self, endpoints: Endpoints) -> Self {
        Self { endpoints, ..self }
    }

    /// Returns the number of iterations the solver runs unless it exits early.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    #[must_use]
    pub fn endpoints(&self) -> Endpoints {
        self.endpoints
    }
}
