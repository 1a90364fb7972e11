use std::convert::Infallible;

/// A scalar function that maps `x` to `y` and may fail.
///
/// Solvers assume an evaluator is effectively pure: repeated calls at the
/// same `x` return the same `y` (or the same kind of failure). This is not
/// enforced.
///
/// Closures of the form `FnMut(f64) -> Result<f64, E>` implement this trait.
/// Use [`infallible`] to adapt a plain `FnMut(f64) -> f64`.
pub trait Evaluator {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Evaluates the function at `x`.
    ///
    /// # Errors
    ///
    /// Returns an error if the function cannot be evaluated at `x`.
    fn eval(&mut self, x: f64) -> Result<f64, Self::Error>;
}

/// Blanket implementation for fallible closures.
impl<F, E> Evaluator for F
where
    F: FnMut(f64) -> Result<f64, E>,
    E: std::error::Error + Send + Sync + 'static,
{
    type Error = E;

    fn eval(&mut self, x: f64) -> Result<f64, Self::Error> {
        self(x)
    }
}

/// Wraps a function that cannot fail into an [`Evaluator`].
pub fn infallible<F>(mut f: F) -> impl FnMut(f64) -> Result<f64, Infallible>
where
    F: FnMut(f64) -> f64,
{
    move |x| Ok(f(x))
}
