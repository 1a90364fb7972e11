//! Guarded bisection.
//!
//! The bisection method applies to any continuous function for which two
//! values with opposite signs are known. It repeatedly halves the interval
//! between them and keeps the half in which the function changes sign.
//!
//! Every evaluator call runs inside a panic boundary, and every failure is
//! reported as a classified [`Error`].

mod bracket;
mod config;
mod error;
mod eval_context;
mod event;
mod solution;
mod trace;

pub use config::{Config, ConfigError, MAX_ITERATION, PRECISION};
pub use error::{Error, ErrorKind};
pub use event::Event;
pub use solution::Solution;
pub use trace::{Trace, TraceRow};

use rootfind_core::{Evaluator, Observer};

use self::{
    bracket::{Bounds, Bracket, Sample},
    eval_context::EvalContext,
};

/// Finds a root of `f` between `min` and `max`.
///
/// Uses the process-wide [`Config`] (see [`Config::set_global`]) read at
/// call time. The bounds may be given in either order.
///
/// A panic inside `f` is caught and returned as [`Error::Recovery`], but it
/// still runs the process panic hook first. The default hook prints the
/// panic message to stderr. Install a quiet hook with
/// [`std::panic::set_hook`] if that output is unwanted.
///
/// # Errors
///
/// Returns an error if `f` fails or panics, if no sign change is bracketed,
/// if a midpoint or its value is not finite, or if the iteration cap is
/// reached before converging.
pub fn find<E: Evaluator>(f: E, min: f64, max: f64) -> Result<f64, Error> {
    solve(f, min, max, &Config::global(), ()).map(|solution| solution.root)
}

/// Finds a root of `f` between `min` and `max` with an explicit config.
/// Observers see every successful evaluation.
///
/// The evaluator is called at most `3 + config.max_iteration + 1` times.
/// The left bound, midpoint and right bound are all evaluated before any
/// evaluator error among them is reported, checked in the order left, right,
/// midpoint. A panic ends the search immediately.
///
/// Caught panics still run the process panic hook, which by default prints
/// to stderr; see [`find`].
///
/// # Errors
///
/// Returns an error if the config is invalid, if `f` fails or panics, if no
/// sign change is bracketed, if a midpoint or its value is not finite, or if
/// the iteration cap is reached before converging.
pub fn solve<E, Obs>(
    f: E,
    min: f64,
    max: f64,
    config: &Config,
    observer: Obs,
) -> Result<Solution, Error>
where
    E: Evaluator,
    Obs: Observer<Event>,
{
    config.validate()?;
    let precision = config.precision;

    let bounds = Bounds::new(min, max);
    let mut ctx = EvalContext::new(f, observer, bounds.as_array());

    let left = unless_panicked(ctx.left(bounds.low))?;
    let mid = unless_panicked(ctx.midpoint(0, bounds.midpoint(), bounds.width_error()))?;
    let right = unless_panicked(ctx.right(bounds.high))?;
    let left = left?;
    let right = right?;
    let mid = mid?;

    if left.y.abs() < precision {
        return confirm(&mut ctx, left.x, 0);
    }
    if right.y.abs() < precision {
        return confirm(&mut ctx, right.x, 0);
    }
    check_finite(mid, ctx.bounds())?;

    let mut bracket = Bracket::new(left, mid, right);
    let mut iters = 0;
    loop {
        if iters >= config.max_iteration {
            let [left, right] = bracket.as_array();
            return Err(Error::MaximalIteration { iters, left, right });
        }
        if bracket.is_converged(precision) {
            break;
        }

        bracket.halve()?;
        let width = bracket.width_error();
        let mid = ctx.midpoint(iters + 1, bracket.next_midpoint(), width)?;
        check_finite(mid, ctx.bounds())?;
        bracket.set_mid(mid);

        iters += 1;
    }

    confirm(&mut ctx, bracket.mid().x, iters)
}

/// Re-evaluates `f` at the root so a late failure there is still reported.
fn confirm<E, Obs>(
    ctx: &mut EvalContext<E, Obs>,
    root: f64,
    iters: usize,
) -> Result<Solution, Error>
where
    E: Evaluator,
    Obs: Observer<Event>,
{
    let sample = ctx.confirm(root)?;
    Ok(Solution {
        root,
        value: sample.y,
        iters,
        evals: ctx.evals(),
    })
}

/// Splits off a caught panic so it ends the search, leaving other
/// evaluation results for the caller to check.
fn unless_panicked(result: Result<Sample, Error>) -> Result<Result<Sample, Error>, Error> {
    match result {
        Err(err @ Error::Recovery { .. }) => Err(err),
        other => Ok(other),
    }
}

fn check_finite(sample: Sample, bounds: [f64; 2]) -> Result<(), Error> {
    if sample.is_finite() {
        Ok(())
    } else {
        Err(Error::NotValidValue {
            x: sample.x,
            y: sample.y,
            bounds,
        })
    }
}
