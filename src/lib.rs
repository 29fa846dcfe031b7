//! Interpolation and error-analysis engine.
//!
//! ┌ [`interpolation`]  : function registry, perturbation model, evaluators
//! │   ├ Newton divided-difference polynomial
//! │   ├ staggered-grid piecewise quadratic spline
//! │   └ residual decorator over either
//! └ [`numeric_policy`] : process-wide floating-point trap toggle

pub mod interpolation;
pub mod numeric_policy;
