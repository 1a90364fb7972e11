/// The result of a bisection solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// Root estimate.
    pub root: f64,
    /// Value returned by the confirmatory evaluation at `root`.
    pub value: f64,
    /// Loop iterations performed, zero if a bound was already a root.
    pub iters: usize,
    /// Evaluator calls made, including the confirmatory one.
    pub evals: usize,
}
