//! Base evaluator
//!
//! The sampled function itself, behind the [`Evaluator`] interface. Drawn
//! next to the interpolants as the ground truth.

use crate::interpolation::algorithms::{Algorithm, Color, LineStyle};
use crate::interpolation::config::Params;
use crate::interpolation::traits::Evaluator;

pub const BASE_COLOR: Color = 7;
pub const BASE_LINE_STYLE: LineStyle = 1;

#[derive(Debug, Clone)]
pub struct BaseEvaluator {
    params: Params,
}

impl BaseEvaluator {
    pub fn new(params: Params) -> Self {
        Self { params }
    }
}

impl Evaluator for BaseEvaluator {
    fn algorithm(&self) -> Algorithm { Algorithm::Base }

    fn params(&self) -> &Params { &self.params }

    fn set_params(&mut self, params: Params) { self.params = params; }

    fn resize_all(&mut self) {}

    fn resolve(&mut self) {}

    #[inline]
    fn get_value(&self, x: f64) -> f64 {
        self.params.function_kind.value(x)
    }

    fn color(&self) -> Color { BASE_COLOR }

    fn line_style(&self) -> LineStyle { BASE_LINE_STYLE }
}
