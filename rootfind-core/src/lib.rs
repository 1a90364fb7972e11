//! Core traits for the rootfind solvers.
//!
//! This crate defines the collaborator abstractions the solvers build on:
//!
//! - [`Evaluator`] — a scalar function `x -> y` that may fail
//! - [`Observer`] — receives solver events, used for tracing and diagnostics

mod evaluator;
mod observer;

pub use evaluator::{Evaluator, infallible};
pub use observer::Observer;
