//! View modes and vertical scaling.
//!
//! A [`ViewMode`] selects which evaluators a rendering pass draws. The modes
//! cycle in a fixed order; the ones involving Newton have a spline fallback
//! for point counts the Newton table cannot handle.

use std::fmt;

use crate::interpolation::config::Params;
use crate::interpolation::functions::{range_scan, MATH_EQ_TOL};
use crate::interpolation::traits::Evaluator;

/// Fraction of the value span added above and below by [`scaling_limits`].
pub const SCALING_MARGIN: f64 = 0.01;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum ViewMode {
    Newton,
    NewtonResidual,
    #[default]
    Spline,
    SplineResidual,
    Both,
    BothResidual,
}

impl ViewMode {
    pub const ALL: [ViewMode; 6] = [
        ViewMode::Newton,
        ViewMode::NewtonResidual,
        ViewMode::Spline,
        ViewMode::SplineResidual,
        ViewMode::Both,
        ViewMode::BothResidual,
    ];

    pub fn next(self) -> Self {
        Self::ALL[(self as usize + 1) % Self::ALL.len()]
    }

    pub const fn label(self) -> &'static str {
        match self {
            ViewMode::Newton         => "Newton",
            ViewMode::NewtonResidual => "Newton's residual",
            ViewMode::Spline         => "Spline",
            ViewMode::SplineResidual => "Spline's residual",
            ViewMode::Both           => "Spline and Newton",
            ViewMode::BothResidual   => "Newton's and Spline's residual",
        }
    }

    pub const fn uses_newton(self) -> bool {
        matches!(self, ViewMode::Newton | ViewMode::NewtonResidual | ViewMode::Both | ViewMode::BothResidual)
    }

    pub const fn uses_spline(self) -> bool {
        matches!(self, ViewMode::Spline | ViewMode::SplineResidual | ViewMode::Both | ViewMode::BothResidual)
    }

    pub const fn is_residual(self) -> bool {
        matches!(self, ViewMode::NewtonResidual | ViewMode::SplineResidual | ViewMode::BothResidual)
    }

    /// Spline-only mode shown instead of a Newton mode.
    pub const fn residual_fallback(self) -> Self {
        if self.is_residual() { ViewMode::SplineResidual } else { ViewMode::Spline }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Vertical range to draw `evaluator` in, padded by [`SCALING_MARGIN`].
///
/// A flat curve (span `<= 1e-15`) is padded by an absolute `0.01` instead.
pub fn scaling_limits<E: Evaluator + ?Sized>(evaluator: &E, params: &Params) -> (f64, f64) {
    let (min, max) = range_scan(
        params.left_bound,
        params.right_bound,
        evaluator.value_getter(),
        params.number_points,
    );

    let span = max - min;
    let pad = if span > MATH_EQ_TOL { SCALING_MARGIN * span } else { SCALING_MARGIN };
    (min - pad, max + pad)
}
