//! Staggered-grid quadratic spline.
//!
//! Samples `n` equally spaced primal points from `left_bound` to
//! `right_bound` and places `n + 1` staggered knots `eps` around them: one
//! halfway between each pair of samples and one half a step outside each end.
//! The unknowns are the spline values `u[i]` at the knots, found from a
//! tridiagonal flux-balance system whose end rows match the analytic first
//! derivative (Neumann condition).
//!
//! Each primal cell `[eps[i], eps[i+1]]` then carries the parabola through
//! `(eps[i], u[i])`, `(x[i], y[i])` and `(eps[i+1], u[i+1])`:
//!
//! ```text
//! s(x) = ans1[i] + ans2[i] (x - eps[i]) + ans3[i] (x - eps[i])^2
//! ```
//!
//! so the curve is continuous across knots and passes through every sample.
//! It is a piecewise quadratic, not a cubic spline.

use crate::interpolation::algorithms::{Algorithm, Color, LineStyle};
use crate::interpolation::config::Params;
use crate::interpolation::perturbation::SharedPerturbation;
use crate::interpolation::spline::helpers::{cell_index, staggered_knots, thomas_in_place};
use crate::interpolation::traits::Evaluator;

pub const SPLINE_COLOR: Color = 8;
pub const SPLINE_LINE_STYLE: LineStyle = 1;


/// Staggered spline state.
///
/// # Fields
/// - `x`, `y`                 : primal samples (length `n`)
/// - `eps`                    : staggered knots (length `n + 1`)
/// - `left`, `diagonal`, `right`, `rhs` : tridiagonal bands (length `n + 1`)
/// - `help`                   : solved knot values (length `n + 1`)
/// - `ans1`, `ans2`, `ans3`   : per-cell coefficients, filled up to `n - 1`;
///   slot `n` stays zero
///
/// Empty until the first recompute; an empty spline evaluates to `0`.
#[derive(Debug, Clone)]
pub struct StaggeredSpline {
    params       : Params,
    perturbation : SharedPerturbation,
    x            : Vec<f64>,
    y            : Vec<f64>,
    eps          : Vec<f64>,
    left         : Vec<f64>,
    diagonal     : Vec<f64>,
    right        : Vec<f64>,
    rhs          : Vec<f64>,
    help         : Vec<f64>,
    ans1         : Vec<f64>,
    ans2         : Vec<f64>,
    ans3         : Vec<f64>,
}

impl StaggeredSpline {
    pub fn new(params: Params, perturbation: SharedPerturbation) -> Self {
        Self {
            params,
            perturbation,
            x        : Vec::new(),
            y        : Vec::new(),
            eps      : Vec::new(),
            left     : Vec::new(),
            diagonal : Vec::new(),
            right    : Vec::new(),
            rhs      : Vec::new(),
            help     : Vec::new(),
            ans1     : Vec::new(),
            ans2     : Vec::new(),
            ans3     : Vec::new(),
        }
    }

    // getters
    pub fn nodes(&self) -> &[f64] { &self.x }
    pub fn samples(&self) -> &[f64] { &self.y }
    pub fn knots(&self) -> &[f64] { &self.eps }
    pub fn knot_values(&self) -> &[f64] { &self.help }

    /// Quadratic of `cell` evaluated at `x`, whichever cell `x` falls in.
    #[inline]
    pub fn segment_value(&self, cell: usize, x: f64) -> f64 {
        let d = x - self.eps[cell];
        self.ans1[cell] + self.ans2[cell] * d + self.ans3[cell] * d * d
    }

    fn sample(&mut self, step: f64) {
        let Params { left_bound, number_points: n, function_kind, .. } = self.params;

        for (i, (xi, yi)) in self.x.iter_mut().zip(self.y.iter_mut()).enumerate() {
            *xi = left_bound + step * i as f64;
            *yi = function_kind.value(*xi);
        }

        if let Some(mid) = self.y.get_mut(n / 2) {
            *mid += self.perturbation.borrow_mut().get_value();
        }
    }

    /// Flux balance on interior rows, Neumann rows at both ends.
    fn assemble(&mut self) {
        let n = self.params.number_points;
        let kind = self.params.function_kind;
        let fp = |x: f64| kind.first_derivative(x);
        let (x, y, eps) = (&self.x, &self.y, &self.eps);

        for i in 1..n {
            // half cells on either side of x[i-1] and x[i], and the full cells
            let lo_out = 1.0 / (x[i - 1] - eps[i - 1]);
            let lo_in  = 1.0 / (eps[i] - x[i - 1]);
            let hi_in  = 1.0 / (x[i] - eps[i]);
            let hi_out = 1.0 / (eps[i + 1] - x[i]);
            let cell_lo = 1.0 / (eps[i] - eps[i - 1]);
            let cell_hi = 1.0 / (eps[i + 1] - eps[i]);

            self.left[i]     = lo_out - cell_lo;
            self.diagonal[i] = lo_in + cell_lo + hi_in + cell_hi;
            self.right[i]    = hi_out - cell_hi;
            self.rhs[i]      = (lo_out + lo_in) * y[i - 1] + (hi_in + hi_out) * y[i];
        }

        let first_out  = 1.0 / (x[0] - eps[0]);
        let first_in   = 1.0 / (eps[1] - x[0]);
        let first_cell = 1.0 / (eps[1] - eps[0]);
        self.left[0]     = 0.0;
        self.diagonal[0] = first_cell - first_out;
        self.right[0]    = first_in - first_cell;
        self.rhs[0]      = fp(x[0]) - (first_out - first_in) * y[0];

        let last_in   = 1.0 / (x[n - 1] - eps[n - 1]);
        let last_out  = 1.0 / (eps[n] - x[n - 1]);
        let last_cell = 1.0 / (eps[n] - eps[n - 1]);
        self.left[n]     = last_cell - last_in;
        self.diagonal[n] = last_out - last_cell;
        self.right[n]    = 0.0;
        self.rhs[n]      = fp(x[n - 1]) - y[n - 1] * (last_in - last_out);
    }

    /// Parabola through `(eps[i], u[i])`, `(x[i], y[i])`, `(eps[i+1], u[i+1])`.
    fn fit_cells(&mut self) {
        let n = self.params.number_points;
        let (x, y, eps, u) = (&self.x, &self.y, &self.eps, &self.help);

        for i in 0..n {
            let a = x[i] - eps[i];
            let b = eps[i + 1] - x[i];
            let h = eps[i + 1] - eps[i];

            let slope_lo = (y[i] - u[i]) / a;
            let slope_hi = (u[i + 1] - y[i]) / b;

            self.ans1[i] = u[i];
            self.ans2[i] = slope_lo - (a / h) * (slope_hi - slope_lo);
            self.ans3[i] = (slope_hi - slope_lo) / h;
        }
    }
}


impl Evaluator for StaggeredSpline {
    fn algorithm(&self) -> Algorithm { Algorithm::Spline }

    fn params(&self) -> &Params { &self.params }

    fn set_params(&mut self, params: Params) { self.params = params; }

    fn resize_all(&mut self) {
        let n = self.params.number_points;
        self.x        = vec![0.0; n];
        self.y        = vec![0.0; n];
        self.eps      = vec![0.0; n + 1];
        self.left     = vec![0.0; n + 1];
        self.diagonal = vec![0.0; n + 1];
        self.right    = vec![0.0; n + 1];
        self.rhs      = vec![0.0; n + 1];
        self.help     = vec![0.0; n + 1];
        self.ans1     = vec![0.0; n + 1];
        self.ans2     = vec![0.0; n + 1];
        self.ans3     = vec![0.0; n + 1];
    }

    /// Expects `number_points >= 3`; not checked here.
    fn resolve(&mut self) {
        let Params { left_bound, right_bound, number_points: n, .. } = self.params;
        let step = (right_bound - left_bound) / (n as f64 - 1.0);

        self.sample(step);
        staggered_knots(&self.x, left_bound, right_bound, step, &mut self.eps);
        self.assemble();

        thomas_in_place(&self.left, &mut self.diagonal, &mut self.right, &mut self.rhs);
        self.help.copy_from_slice(&self.rhs);

        self.fit_cells();
    }

    fn get_value(&self, x: f64) -> f64 {
        if self.eps.is_empty() {
            return 0.0;
        }
        self.segment_value(cell_index(&self.eps, x), x)
    }

    fn color(&self) -> Color { SPLINE_COLOR }

    fn line_style(&self) -> LineStyle { SPLINE_LINE_STYLE }
}
