use std::{
    any::Any,
    panic::{self, AssertUnwindSafe},
};

use rootfind_core::{Evaluator, Observer};

use super::{Error, Event, bracket::Sample};

/// Evaluates points through a panic boundary and reports them to the observer.
pub(super) struct EvalContext<E, Obs> {
    evaluator: E,
    observer: Obs,
    bounds: [f64; 2],
    evals: usize,
}

impl<E, Obs> EvalContext<E, Obs>
where
    E: Evaluator,
    Obs: Observer<Event>,
{
    /// Creates a context for a search over the normalized `bounds`.
    pub(super) fn new(evaluator: E, observer: Obs, bounds: [f64; 2]) -> Self {
        Self {
            evaluator,
            observer,
            bounds,
            evals: 0,
        }
    }

    /// Normalized bounds of the search, attached to every error.
    pub(super) fn bounds(&self) -> [f64; 2] {
        self.bounds
    }

    /// Number of evaluator calls made so far, including failed ones.
    pub(super) fn evals(&self) -> usize {
        self.evals
    }

    pub(super) fn left(&mut self, x: f64) -> Result<Sample, Error> {
        let y = self.call(x)?;
        self.observer.observe(&Event::Left { x, y });
        Ok(Sample { x, y })
    }

    pub(super) fn right(&mut self, x: f64) -> Result<Sample, Error> {
        let y = self.call(x)?;
        self.observer.observe(&Event::Right { x, y });
        Ok(Sample { x, y })
    }

    pub(super) fn midpoint(&mut self, iter: usize, x: f64, width: f64) -> Result<Sample, Error> {
        let y = self.call(x)?;
        self.observer.observe(&Event::Midpoint { iter, x, y, width });
        Ok(Sample { x, y })
    }

    pub(super) fn confirm(&mut self, x: f64) -> Result<Sample, Error> {
        let y = self.call(x)?;
        self.observer.observe(&Event::Confirm { x, y });
        Ok(Sample { x, y })
    }

    /// Calls the evaluator, turning failures and panics into errors.
    fn call(&mut self, x: f64) -> Result<f64, Error> {
        self.evals += 1;
        let evaluator = &mut self.evaluator;
        match panic::catch_unwind(AssertUnwindSafe(|| evaluator.eval(x))) {
            Ok(Ok(y)) => Ok(y),
            Ok(Err(error)) => Err(Error::Evaluation {
                x,
                bounds: self.bounds,
                source: Box::new(error),
            }),
            Err(payload) => Err(Error::Recovery {
                x,
                bounds: self.bounds,
                message: panic_message(payload.as_ref()),
            }),
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_owned()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_owned()
    }
}
