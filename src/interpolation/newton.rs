//! Newton (Divided-Difference) Interpolation
//!
//! Global polynomial interpolation of the sampled function using the
//! [divided-difference method](https://en.wikipedia.org/wiki/Newton_polynomial).
//!
//! Nodes are equally spaced and generated from `right_bound` toward
//! `left_bound`; the middle sample carries the shared perturbation. The
//! coefficient table is built in place and evaluated with Horner's scheme.
//!
//! No bounds checking on evaluation: outside the nodes the polynomial
//! extrapolates, and for high degree it diverges fast. Above
//! [`crate::interpolation::config::NEWTON_LIMITS_MAX`] nodes the table itself
//! is dominated by cancellation; the caller enforces that limit.

use crate::interpolation::algorithms::{Algorithm, Color, LineStyle};
use crate::interpolation::config::Params;
use crate::interpolation::perturbation::SharedPerturbation;
use crate::interpolation::traits::Evaluator;

pub const NEWTON_COLOR: Color = 9;
pub const NEWTON_LINE_STYLE: LineStyle = 1;


/// Newton interpolant state.
///
/// # Fields
/// - `x` : nodes, `x[i] = right_bound + delta * i`
/// - `y` : samples, then divided-difference coefficients after `resolve`
///
/// Empty until the first recompute; an empty table evaluates to `0`.
#[derive(Debug, Clone)]
pub struct Newton {
    params       : Params,
    perturbation : SharedPerturbation,
    x            : Vec<f64>,
    y            : Vec<f64>,
}

impl Newton {
    pub fn new(params: Params, perturbation: SharedPerturbation) -> Self {
        Self { params, perturbation, x: Vec::new(), y: Vec::new() }
    }

    /// Nodes of the last recompute.
    pub fn nodes(&self) -> &[f64] { &self.x }

    /// Divided-difference coefficients `c` s.t.
    /// `P(x) = c[0] + c[1](x - x0) + ... + c[n-1](x - x0)...(x - x_{n-2})`.
    pub fn coefficients(&self) -> &[f64] { &self.y }
}


/// In-place divided differences over `(x, y)`.
#[inline]
fn divided_differences(x: &[f64], y: &mut [f64]) {
    let n = x.len();

    for i in 1..n {
        for j in (i..n).rev() {
            y[j] = (y[j] - y[j - 1]) / (x[j] - x[j - i]);
        }
    }
}


impl Evaluator for Newton {
    fn algorithm(&self) -> Algorithm { Algorithm::Newton }

    fn params(&self) -> &Params { &self.params }

    fn set_params(&mut self, params: Params) { self.params = params; }

    fn resize_all(&mut self) {
        let n = self.params.number_points;
        self.x = vec![0.0; n];
        self.y = vec![0.0; n];
    }

    /// Samples, perturbs the middle sample and builds the coefficient table.
    ///
    /// ```text
    /// delta = (left_bound - right_bound) / (n - 1)
    /// x[i]  = right_bound + delta * i
    /// y[i]  = f(x[i]),  y[n/2] += perturbation
    /// ```
    fn resolve(&mut self) {
        let Params { left_bound, right_bound, number_points: n, function_kind } = self.params;
        let delta = (left_bound - right_bound) / (n as f64 - 1.0);

        for (i, (xi, yi)) in self.x.iter_mut().zip(self.y.iter_mut()).enumerate() {
            *xi = right_bound + delta * i as f64;
            *yi = function_kind.value(*xi);
        }

        if let Some(mid) = self.y.get_mut(n / 2) {
            *mid += self.perturbation.borrow_mut().get_value();
        }

        divided_differences(&self.x, &mut self.y);
    }

    /// Horner's nested form of the Newton polynomial:
    ///
    /// ```text
    /// P(x) = c[0] + (x - x[0]) * [ c[1] + (x - x[1]) * [ ... c[n-1] ... ] ]
    /// ```
    fn get_value(&self, x: f64) -> f64 {
        let Some((&c0, tail)) = self.y.split_first() else {
            return 0.0;
        };

        let mut res = 0.0;
        for (i, &ci) in tail.iter().enumerate().rev() {
            res += ci;
            res *= x - self.x[i];
        }
        res + c0
    }

    fn color(&self) -> Color { NEWTON_COLOR }

    fn line_style(&self) -> LineStyle { NEWTON_LINE_STYLE }
}
