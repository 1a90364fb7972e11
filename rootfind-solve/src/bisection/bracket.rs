use super::Error;

/// An evaluated point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub x: f64,
    pub y: f64,
}

impl Sample {
    /// Returns the sign of the sample's value.
    #[must_use]
    pub fn sign(&self) -> Sign {
        Sign::of(self.y)
    }

    /// Returns true if both coordinates are finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// The sign bit of a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    /// Sign bit clear (includes `+0.0`).
    Positive,
    /// Sign bit set (includes `-0.0`).
    Negative,
}

impl Sign {
    /// Returns the sign of a value from its sign bit, not its magnitude.
    #[must_use]
    pub fn of(value: f64) -> Self {
        if value.is_sign_negative() {
            Sign::Negative
        } else {
            Sign::Positive
        }
    }
}

/// Ordered search bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Bounds {
    pub(super) low: f64,
    pub(super) high: f64,
}

impl Bounds {
    /// Orders the endpoints so that `low <= high`.
    pub(super) fn new(min: f64, max: f64) -> Self {
        if min > max {
            Self { low: max, high: min }
        } else {
            Self { low: min, high: max }
        }
    }

    /// Returns the bounds as an array.
    pub(super) fn as_array(&self) -> [f64; 2] {
        [self.low, self.high]
    }

    /// Returns the midpoint of the bounds.
    pub(super) fn midpoint(&self) -> f64 {
        midpoint(self.low, self.high)
    }

    /// Returns the width error of the bounds, see [`Bracket::width_error`].
    pub(super) fn width_error(&self) -> f64 {
        width_error(self.low, self.high)
    }
}

/// Left, midpoint and right samples of the current search bracket.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Bracket {
    left: Sample,
    mid: Sample,
    right: Sample,
}

impl Bracket {
    pub(super) fn new(left: Sample, mid: Sample, right: Sample) -> Self {
        Self { left, mid, right }
    }

    pub(super) fn mid(&self) -> Sample {
        self.mid
    }

    /// Returns the bracket bounds as an array.
    pub(super) fn as_array(&self) -> [f64; 2] {
        [self.left.x, self.right.x]
    }

    /// Returns the width error used by the convergence test.
    ///
    /// The width is taken relative to the left endpoint, or absolute when
    /// the left endpoint is exactly zero.
    pub(super) fn width_error(&self) -> f64 {
        width_error(self.left.x, self.right.x)
    }

    /// Returns true if both the midpoint value and the width error are
    /// below `precision`.
    pub(super) fn is_converged(&self, precision: f64) -> bool {
        self.mid.y.abs() < precision && self.width_error() < precision
    }

    /// Discards the half of the bracket that shows no sign change.
    ///
    /// # Errors
    ///
    /// Returns `Error::NoBracket` if neither half shows a sign change.
    pub(super) fn halve(&mut self) -> Result<(), Error> {
        if self.left.sign() != self.mid.sign() {
            self.right = self.mid;
        } else if self.mid.sign() != self.right.sign() {
            self.left = self.mid;
        } else {
            return Err(Error::NoBracket {
                x: [self.left.x, self.mid.x, self.right.x],
                y: [self.left.y, self.mid.y, self.right.y],
            });
        }
        Ok(())
    }

    /// Returns the midpoint of the current endpoints.
    pub(super) fn next_midpoint(&self) -> f64 {
        midpoint(self.left.x, self.right.x)
    }

    /// Replaces the midpoint sample.
    pub(super) fn set_mid(&mut self, mid: Sample) {
        self.mid = mid;
    }
}

fn midpoint(left: f64, right: f64) -> f64 {
    left + (right - left) / 2.0
}

#[allow(clippy::float_cmp)]
fn width_error(left: f64, right: f64) -> f64 {
    let width = right - left;
    if left == 0.0 {
        width.abs()
    } else {
        (width / left).abs()
    }
}
