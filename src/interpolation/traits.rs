use tracing::{debug, trace};

use crate::interpolation::algorithms::{Algorithm, Color, LineStyle};
use crate::interpolation::config::Params;
use crate::interpolation::functions::math_equal;

/// Change-detection gate shared by every [`Evaluator::update`].
///
/// Skips only when the function kind and point count are unchanged, the left
/// bound is (nearly) unchanged and the right bound *did* change. Any other
/// combination, including a fully identical parameter set, recomputes.
#[inline]
pub fn skips_recompute(old: &Params, new: &Params) -> bool {
    old.function_kind == new.function_kind
        && old.number_points == new.number_points
        && math_equal(old.left_bound, new.left_bound)
        && !math_equal(old.right_bound, new.right_bound)
}

pub trait Evaluator {
    fn algorithm(&self) -> Algorithm;

    /// Parameters of the most recent recompute (or of construction).
    fn params(&self) -> &Params;

    /// Replaces the parameters without recomputing.
    fn set_params(&mut self, params: Params);

    /// Reallocates every derived buffer for the current parameters.
    fn resize_all(&mut self);

    /// Recomputes the derived state from the current parameters.
    fn resolve(&mut self);

    /// Evaluates the most recently resolved state at `x`. No bounds checks.
    fn get_value(&self, x: f64) -> f64;

    fn color(&self) -> Color;

    fn line_style(&self) -> LineStyle;

    /// Applies `new_params`, recomputing unless [`skips_recompute`] says otherwise.
    fn update(&mut self, new_params: Params) {
        if skips_recompute(self.params(), &new_params) {
            trace!(algorithm = %self.algorithm(), "update skipped");
            return;
        }

        debug!(
            algorithm     = %self.algorithm(),
            left_bound    = new_params.left_bound,
            right_bound   = new_params.right_bound,
            number_points = new_params.number_points,
            function      = new_params.function_kind.label(),
            "recomputing"
        );

        self.set_params(new_params);
        self.resize_all();
        self.resolve();
    }

    /// Reusable callable bound to the current state.
    fn value_getter(&self) -> Box<dyn Fn(f64) -> f64 + '_> {
        Box::new(move |x| self.get_value(x))
    }

    /// evaluates many points
    #[inline]
    fn eval_many(&self, xs: &[f64]) -> Vec<f64> {
        xs.iter().map(|&x| self.get_value(x)).collect()
    }
}
