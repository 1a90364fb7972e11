/// Event emitted by the bisection solver after each successful evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// Left bound evaluation.
    Left { x: f64, y: f64 },
    /// Right bound evaluation.
    Right { x: f64, y: f64 },
    /// Midpoint evaluation.
    Midpoint {
        /// Zero for the initial midpoint, `n + 1` for the midpoint taken in
        /// loop iteration `n`.
        iter: usize,
        x: f64,
        y: f64,
        /// Width error of the bracket the midpoint was taken from.
        width: f64,
    },
    /// Confirmatory evaluation at the reported root.
    Confirm { x: f64, y: f64 },
}

impl Event {
    /// Returns the evaluated x value.
    #[must_use]
    pub fn x(&self) -> f64 {
        match self {
            Event::Left { x, .. }
            | Event::Right { x, .. }
            | Event::Midpoint { x, .. }
            | Event::Confirm { x, .. } => *x,
        }
    }

    /// Returns the evaluated y value.
    #[must_use]
    pub fn y(&self) -> f64 {
        match self {
            Event::Left { y, .. }
            | Event::Right { y, .. }
            | Event::Midpoint { y, .. }
            | Event::Confirm { y, .. } => *y,
        }
    }
}
