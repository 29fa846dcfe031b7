//! Function registry
//!
//! Closed family of seven analytic test functions, each with its first and
//! second derivative, a numerically safe domain and a display label.
//!
//! ┌ [`FunctionKind`]      : selector, cyclic via [`FunctionKind::next`]
//! ├ [`math_equal`]        : scale-relative equality used for change detection
//! └ [`range_scan`]        : sampled `(min, max)` of a function over an interval
//!
//! The domain bounds keep `f` and `f''` inside `f64` range. Nothing here
//! checks them; callers use [`get_function_bounds_by_type`] before moving
//! bounds or switching functions.

use crate::interpolation::errors::InterpolationError;

/// Relative tolerance of [`math_equal`].
pub const MATH_EQ_TOL: f64 = 1e-15;

/// [`range_scan`] stops once the next sample is within this distance of `to`.
pub const RANGE_SCAN_GUARD: f64 = 1e-6;

/// The analytic test functions.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum FunctionKind {
    /// `1`
    #[default]
    Constant,
    /// `x`
    Linear,
    /// `x^2`
    Quadratic,
    /// `x^3`
    Cubic,
    /// `x^4`
    Quartic,
    /// `e^x`
    Exponential,
    /// `1 / (25x^2 + 1)`, the Runge function
    RationalBump,
}

impl FunctionKind {
    pub const ALL: [FunctionKind; 7] = [
        FunctionKind::Constant,
        FunctionKind::Linear,
        FunctionKind::Quadratic,
        FunctionKind::Cubic,
        FunctionKind::Quartic,
        FunctionKind::Exponential,
        FunctionKind::RationalBump,
    ];

    pub const COUNT: usize = Self::ALL.len();

    #[inline]
    pub fn value(self, x: f64) -> f64 {
        match self {
            FunctionKind::Constant     => 1.0,
            FunctionKind::Linear       => x,
            FunctionKind::Quadratic    => x * x,
            FunctionKind::Cubic        => x * x * x,
            FunctionKind::Quartic      => x * x * x * x,
            FunctionKind::Exponential  => x.exp(),
            FunctionKind::RationalBump => 1.0 / (25.0 * x * x + 1.0),
        }
    }

    #[inline]
    pub fn first_derivative(self, x: f64) -> f64 {
        match self {
            FunctionKind::Constant     => 0.0,
            FunctionKind::Linear       => 1.0,
            FunctionKind::Quadratic    => 2.0 * x,
            FunctionKind::Cubic        => 3.0 * x * x,
            FunctionKind::Quartic      => 4.0 * x * x * x,
            FunctionKind::Exponential  => x.exp(),
            FunctionKind::RationalBump => {
                let q = 25.0 * x * x + 1.0;
                -50.0 * x / (q * q)
            }
        }
    }

    #[inline]
    pub fn second_derivative(self, x: f64) -> f64 {
        match self {
            FunctionKind::Constant     => 0.0,
            FunctionKind::Linear       => 0.0,
            FunctionKind::Quadratic    => 2.0,
            FunctionKind::Cubic        => 6.0 * x,
            FunctionKind::Quartic      => 12.0 * x * x,
            FunctionKind::Exponential  => x.exp(),
            FunctionKind::RationalBump => {
                let q = 25.0 * x * x + 1.0;
                (3750.0 * x * x - 50.0) / (q * q * q)
            }
        }
    }

    /// Interval `(lo, hi)` on which `f` and `f''` stay finite.
    pub const fn domain_bounds(self) -> (f64, f64) {
        match self {
            FunctionKind::Constant | FunctionKind::Linear => (-1e306, 1e306),
            FunctionKind::Quadratic    => (-1e153, 1e153),
            FunctionKind::Cubic        => (-1e100, 1e100),
            FunctionKind::Quartic      => (-1e75, 1e75),
            FunctionKind::Exponential  => (-500.0, 500.0),
            FunctionKind::RationalBump => (-1e50, 1e50),
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            FunctionKind::Constant     => "f (x) = 1",
            FunctionKind::Linear       => "f (x) = x",
            FunctionKind::Quadratic    => "f (x) = x^2",
            FunctionKind::Cubic        => "f (x) = x^3",
            FunctionKind::Quartic      => "f (x) = x^4",
            FunctionKind::Exponential  => "f (x) = exp (x)",
            FunctionKind::RationalBump => "f (x) = 1 / (25x^2 + 1)",
        }
    }

    /// Position in [`FunctionKind::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Result<Self, InterpolationError> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(InterpolationError::UnknownFunction { index, count: Self::COUNT })
    }

    /// Cyclic successor; wraps from the last kind back to [`FunctionKind::Constant`].
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::COUNT]
    }

    /// Whether `[left, right]` lies inside [`FunctionKind::domain_bounds`].
    pub fn admits(self, left: f64, right: f64) -> bool {
        let (lo, hi) = self.domain_bounds();
        left >= lo && right <= hi
    }
}

/// Numerically safe domain of `kind`, as consumed by the UI layer.
#[inline]
pub fn get_function_bounds_by_type(kind: FunctionKind) -> (f64, f64) {
    kind.domain_bounds()
}

/// `|x - y| < 1e-15 * max(|x|, |y|)`.
///
/// Strict and purely relative: two zeros do not compare equal.
#[inline]
pub fn math_equal(x: f64, y: f64) -> bool {
    (x - y).abs() < MATH_EQ_TOL * x.abs().max(y.abs())
}

/// Sampled `(min, max)` of `func` over `[from, to)`.
///
/// Samples `from, from + step, ...` with `step = (to - from) / number_points`
/// while the sample stays more than [`RANGE_SCAN_GUARD`] short of `to`.
///
/// # Returns
/// - `(-1.0, 1.0)` when `from > to`, regardless of `func` and `number_points`.
pub fn range_scan<F>(from: f64, to: f64, func: F, number_points: usize) -> (f64, f64)
where
    F: Fn(f64) -> f64,
{
    if from > to {
        return (-1.0, 1.0);
    }

    let step = (to - from) / number_points as f64;
    let first = func(from);
    let (mut min, mut max) = (first, first);

    let mut cur = from + step;
    while to - cur > RANGE_SCAN_GUARD {
        let value = func(cur);
        if value < min { min = value; }
        if value > max { max = value; }
        cur += step;
    }

    (min, max)
}
