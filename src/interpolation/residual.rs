//! Residual decorator
//!
//! Wraps one evaluator and reports its pointwise distance to the sampled
//! function, `|target(x) - f(x)|`, as an evaluator in its own right.
//!
//! The residual owns its target and keeps the target's parameters in
//! lock-step: when its own gate decides to recompute it writes the new
//! parameters onto the target and delegates `resize_all`/`resolve`, so the
//! target's own `update` is never involved.

use crate::interpolation::algorithms::{Algorithm, Color, LineStyle};
use crate::interpolation::config::Params;
use crate::interpolation::traits::Evaluator;

/// Added to the target's color.
pub const RESIDUAL_COLOR_OFFSET: Color = 6;
pub const RESIDUAL_LINE_STYLE: LineStyle = 3;

#[derive(Debug, Clone)]
pub struct Residual<E> {
    params : Params,
    target : E,
}

impl<E: Evaluator> Residual<E> {
    /// Starts from `params`; the target's parameters are overwritten on the
    /// first recompute.
    pub fn new(params: Params, target: E) -> Self {
        Self { params, target }
    }

    pub fn target(&self) -> &E { &self.target }

    pub fn target_mut(&mut self) -> &mut E { &mut self.target }

    pub fn into_inner(self) -> E { self.target }
}

impl<E: Evaluator> Evaluator for Residual<E> {
    fn algorithm(&self) -> Algorithm { Algorithm::Residual }

    fn params(&self) -> &Params { &self.params }

    fn set_params(&mut self, params: Params) {
        self.params = params;
        self.target.set_params(params);
    }

    fn resize_all(&mut self) { self.target.resize_all(); }

    fn resolve(&mut self) { self.target.resolve(); }

    #[inline]
    fn get_value(&self, x: f64) -> f64 {
        (self.target.get_value(x) - self.params.function_kind.value(x)).abs()
    }

    fn color(&self) -> Color { self.target.color() + RESIDUAL_COLOR_OFFSET }

    fn line_style(&self) -> LineStyle { RESIDUAL_LINE_STYLE }
}
