//! Defines the struct returned by sampling an evaluator.
//!
//! [`SampleReport`] summarizes one pass over a set of evaluation points:
//! which evaluator produced it, how many samples it was built from, and the
//! values it returned.

use crate::interpolation::traits::Evaluator;

/// Summary of a sampling pass.
///
/// [`SampleReport`]
/// - `algorithm_name` : name of the evaluator (e.g. `"newton"`)
/// - `n_provided`     : number of samples the evaluator was built from
/// - `n_evaluated`    : number of points evaluated
/// - `evaluated`      : values at each evaluation point
#[derive(Debug, Clone)]
pub struct SampleReport {
    pub algorithm_name: &'static str,
    pub n_provided: usize,
    pub n_evaluated: usize,
    pub evaluated: Vec<f64>,
}

impl SampleReport {
    /// Largest `|value|` in the report, `0` when empty.
    pub fn max_abs(&self) -> f64 {
        self.evaluated.iter().fold(0.0_f64, |acc, v| acc.max(v.abs()))
    }
}

/// Evaluates `evaluator` at every point of `x_eval`.
pub fn sample<E: Evaluator + ?Sized>(evaluator: &E, x_eval: &[f64]) -> SampleReport {
    SampleReport {
        algorithm_name: evaluator.algorithm().algorithm_name(),
        n_provided: evaluator.params().number_points,
        n_evaluated: x_eval.len(),
        evaluated: evaluator.eval_many(x_eval),
    }
}

/// `count` equally spaced points from `from` to `to`, both ends included.
///
/// A single point lands on `from`; zero points give an empty grid.
pub fn uniform_grid(from: f64, to: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![from],
        _ => {
            let step = (to - from) / (count - 1) as f64;
            (0..count).map(|i| from + step * i as f64).collect()
        }
    }
}
