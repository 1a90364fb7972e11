use std::sync::{PoisonError, RwLock};

use thiserror::Error;

/// Default convergence threshold on both `|y|` and the bracket width error.
pub const PRECISION: f64 = 1e-6;

/// Default cap on bisection loop iterations.
///
/// A precision of `1e-6` typically needs about 20 iterations.
pub const MAX_ITERATION: usize = 500;

/// Process-wide configuration read by [`find`](super::find).
static GLOBAL: RwLock<Config> = RwLock::new(Config::DEFAULT);

/// Errors that can occur when validating a [`Config`].
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ConfigError {
    #[error("precision must be finite and positive, got {0}")]
    Precision(f64),
}

/// Configuration for the bisection solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// Threshold on `|y(mid)|` and on the bracket width error.
    pub precision: f64,
    /// Maximum number of loop iterations before giving up.
    pub max_iteration: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl Config {
    pub const DEFAULT: Self = Self {
        precision: PRECISION,
        max_iteration: MAX_ITERATION,
    };

    /// Validates that the precision is finite and strictly positive.
    ///
    /// # Errors
    ///
    /// Returns an error if the precision is zero, negative, or non-finite.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.precision.is_finite() || self.precision <= 0.0 {
            return Err(ConfigError::Precision(self.precision));
        }
        Ok(())
    }

    /// Returns a copy of the process-wide configuration.
    #[must_use]
    pub fn global() -> Self {
        *GLOBAL.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Replaces the process-wide configuration and returns the previous one.
    ///
    /// The new value affects every later call to [`find`](super::find).
    ///
    /// # Errors
    ///
    /// Returns an error, leaving the current configuration in place, if
    /// `config` is invalid.
    pub fn set_global(config: Self) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut global = GLOBAL.write().unwrap_or_else(PoisonError::into_inner);
        Ok(std::mem::replace(&mut *global, config))
    }
}
