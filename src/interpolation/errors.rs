//! Interpolation error types.
//!
//! Only the configuration layer ([`crate::interpolation::config`]) and the
//! comparison session ([`crate::interpolation::session`]) produce these. The
//! evaluators themselves never validate their parameters.
//!
//! ┌ bounds    : ordering, finiteness, function domain, zoom length
//! ├ points    : per-algorithm sample count limits
//! └ functions : unknown function index

use thiserror::Error;
use crate::interpolation::algorithms::Algorithm;

#[derive(Debug, Error, PartialEq)]
pub enum InterpolationError {
    #[error("non-finite bound: got {got}")]
    NonFiniteBound { got: f64 },

    #[error("invalid bounds: need left + {min_gap} <= right. got [{left}, {right}]")]
    InvalidBounds { left: f64, right: f64, min_gap: f64 },

    #[error("bounds [{left}, {right}] outside the domain [{lo}, {hi}] of {function}")]
    OutOfDomain { left: f64, right: f64, lo: f64, hi: f64, function: &'static str },

    #[error("interval length {length} too small: need at least {min}")]
    IntervalTooSmall { length: f64, min: f64 },

    #[error("interval length {length} too big: must not exceed {max}")]
    IntervalTooLarge { length: f64, max: f64 },

    #[error("too few points for {algorithm}: got {got}, need at least {min}")]
    TooFewPoints { algorithm: Algorithm, got: usize, min: usize },

    #[error("too many points for {algorithm}: got {got}, at most {max}")]
    TooManyPoints { algorithm: Algorithm, got: usize, max: usize },

    #[error("unknown function index {index}: expected 0..{count}")]
    UnknownFunction { index: usize, count: usize },
}
