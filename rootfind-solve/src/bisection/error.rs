use std::error::Error as StdError;

use thiserror::Error;

use super::ConfigError;

/// Errors that can occur during bisection solving.
#[derive(Debug, Error)]
pub enum Error {
    #[error("too many iterations: {iters} in [{left:.5e}, {right:.5e}]")]
    MaximalIteration { iters: usize, left: f64, right: f64 },

    #[error("evaluation failed at x = {x:.5e} searching {bounds:?}")]
    Evaluation {
        x: f64,
        bounds: [f64; 2],
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },

    #[error("no root bracketed: x = {x:.3?}, y = {y:.3?}")]
    NoBracket { x: [f64; 3], y: [f64; 3] },

    #[error("invalid config: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error("not valid value: f({x}) = {y} searching {bounds:?}")]
    NotValidValue { x: f64, y: f64, bounds: [f64; 2] },

    #[error("evaluator panicked at x = {x:.5e} searching {bounds:?}: {message}")]
    Recovery {
        x: f64,
        bounds: [f64; 2],
        message: String,
    },
}

/// Classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The loop hit the iteration cap without converging.
    MaximalIteration,
    /// The evaluator failed, the bracket was lost, or the config is invalid.
    Internal,
    /// A midpoint or its value became NaN or infinite.
    NotValidValue,
    /// The evaluator panicked and the panic was caught.
    Recovery,
}

impl Error {
    /// Returns the kind of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MaximalIteration { .. } => ErrorKind::MaximalIteration,
            Self::Evaluation { .. } | Self::NoBracket { .. } | Self::InvalidConfig(_) => {
                ErrorKind::Internal
            }
            Self::NotValidValue { .. } => ErrorKind::NotValidValue,
            Self::Recovery { .. } => ErrorKind::Recovery,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::error::Error as _;

    #[test]
    fn evaluation_keeps_source() {
        let err = Error::Evaluation {
            x: 0.5,
            bounds: [0.0, 1.0],
            source: Box::new(std::fmt::Error),
        };
        assert_eq!(err.kind(), ErrorKind::Internal);
        assert!(err.source().is_some());
        assert!(err.to_string().contains("[0.0, 1.0]"));
    }

    #[test]
    fn messages_carry_context() {
        let err = Error::MaximalIteration {
            iters: 500,
            left: 0.25,
            right: 0.5,
        };
        assert!(err.to_string().contains("500"));

        let err = Error::Recovery {
            x: 1.0,
            bounds: [-2.0, 3.0],
            message: "PANIC".to_owned(),
        };
        assert_eq!(err.kind(), ErrorKind::Recovery);
        assert!(err.to_string().contains("[-2.0, 3.0]"));
        assert!(err.to_string().ends_with("PANIC"));

        let err = Error::NotValidValue {
            x: 0.5,
            y: f64::NAN,
            bounds: [0.0, 1.0],
        };
        assert_eq!(err.kind(), ErrorKind::NotValidValue);
        assert!(err.to_string().contains("[0.0, 1.0]"));
    }
}
