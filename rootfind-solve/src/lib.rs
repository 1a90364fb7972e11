//! Guarded root finding for scalar functions.
//!
//! ```
//! use rootfind_solve::{find, infallible};
//!
//! let root = find(infallible(|x| x * x - 2.0), 0.0, 2.0).unwrap();
//! assert!((root * root - 2.0).abs() < rootfind_solve::PRECISION);
//! ```

pub mod bisection;

pub use bisection::{
    Config, ConfigError, Error, ErrorKind, Event, MAX_ITERATION, PRECISION, Solution, Trace,
    TraceRow, find, solve,
};
pub use rootfind_core::{Evaluator, Observer, infallible};
