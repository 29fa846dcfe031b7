//! Defines the evaluator variants
//!
//! Provides the [`Algorithm`] enum, which tags every [`crate::interpolation::Evaluator`]
//! implementation, and the opaque rendering style identifiers each variant reports.

use std::fmt;

/// Opaque color identifier handed to the rendering collaborator.
pub type Color = u32;

/// Opaque line style identifier handed to the rendering collaborator.
pub type LineStyle = u32;

/// Evaluator variants.
/// - [`Algorithm::Base`]     the sampled function itself
/// - [`Algorithm::Newton`]   global divided-difference polynomial
/// - [`Algorithm::Spline`]   staggered-grid piecewise quadratic
/// - [`Algorithm::Residual`] `|interpolant - f|` over any of the above
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Base,
    Newton,
    Spline,
    Residual,
}

impl Algorithm {
    pub const fn algorithm_name(self) -> &'static str {
        match self {
            Algorithm::Base     => "base",
            Algorithm::Newton   => "newton",
            Algorithm::Spline   => "staggered spline",
            Algorithm::Residual => "residual",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.algorithm_name())
    }
}
