//! Shared parameter set for all evaluators.
//!
//! [`Params`] — the four fields every evaluator compares on `update`
//! - `left_bound`    : left end of the sampled interval
//! - `right_bound`   : right end of the sampled interval
//! - `number_points` : number of samples
//! - `function_kind` : sampled [`FunctionKind`]
//!
//! Evaluators accept any [`Params`] and compute whatever they are asked to.
//! Validation lives here, for the caller: [`ParamsCfg`] builds a checked
//! parameter set and [`Params::validate_for`] checks the per-algorithm limits.

use crate::interpolation::algorithms::Algorithm;
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::functions::FunctionKind;

pub const DEFAULT_LEFT_BOUND: f64 = -10.0;
pub const DEFAULT_RIGHT_BOUND: f64 = 10.0;
pub const DEFAULT_NUMBER_POINTS: usize = 10;

/// Minimum `right_bound - left_bound` accepted by [`ParamsCfg`].
pub const MIN_BOUND_GAP: f64 = 1e-6;

/// Zooming in below this interval length is rejected.
pub const MIN_ZOOM_LENGTH: f64 = 1e-5;

/// Zooming out beyond this interval length is rejected.
pub const MAX_ZOOM_LENGTH: f64 = 1e306;

/// Beyond this the divided-difference table loses all significant digits.
pub const NEWTON_LIMITS_MAX: usize = 40;
pub const NEWTON_LIMITS_MIN: usize = 2;

/// The staggered system needs at least four unknowns.
pub const SPLINE_LIMITS_MIN: usize = 3;


#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Params {
    pub left_bound    : f64,
    pub right_bound   : f64,
    pub number_points : usize,
    pub function_kind : FunctionKind,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            left_bound    : DEFAULT_LEFT_BOUND,
            right_bound   : DEFAULT_RIGHT_BOUND,
            number_points : DEFAULT_NUMBER_POINTS,
            function_kind : FunctionKind::default(),
        }
    }
}

impl Params {
    pub fn new(left_bound: f64, right_bound: f64, number_points: usize, function_kind: FunctionKind) -> Self {
        Self { left_bound, right_bound, number_points, function_kind }
    }

    #[inline] #[must_use] pub fn with_bounds(mut self, left: f64, right: f64) -> Self { self.left_bound = left; self.right_bound = right; self }
    #[inline] #[must_use] pub fn with_number_points(mut self, n: usize) -> Self { self.number_points = n; self }
    #[inline] #[must_use] pub fn with_function(mut self, kind: FunctionKind) -> Self { self.function_kind = kind; self }

    #[inline]
    pub fn length(&self) -> f64 {
        self.right_bound - self.left_bound
    }

    /// Sample count limits of `algorithm`.
    ///
    /// - [`Algorithm::Newton`]  : `[NEWTON_LIMITS_MIN, NEWTON_LIMITS_MAX]`
    /// - [`Algorithm::Spline`]  : `[SPLINE_LIMITS_MIN, ..)`
    /// - [`Algorithm::Base`] and [`Algorithm::Residual`] impose no limit of their own
    pub fn validate_for(&self, algorithm: Algorithm) -> Result<(), InterpolationError> {
        let got = self.number_points;
        match algorithm {
            Algorithm::Newton => {
                if got > NEWTON_LIMITS_MAX {
                    return Err(InterpolationError::TooManyPoints { algorithm, got, max: NEWTON_LIMITS_MAX });
                }
                if got < NEWTON_LIMITS_MIN {
                    return Err(InterpolationError::TooFewPoints { algorithm, got, min: NEWTON_LIMITS_MIN });
                }
            }
            Algorithm::Spline => {
                if got < SPLINE_LIMITS_MIN {
                    return Err(InterpolationError::TooFewPoints { algorithm, got, min: SPLINE_LIMITS_MIN });
                }
            }
            Algorithm::Base | Algorithm::Residual => {}
        }
        Ok(())
    }

    /// Fails if the bounds leave the domain of `kind`.
    pub fn check_domain(&self, kind: FunctionKind) -> Result<(), InterpolationError> {
        check_domain(self.left_bound, self.right_bound, kind)
    }

    /// Interval halved around its midpoint.
    ///
    /// # Errors
    /// - [`InterpolationError::IntervalTooSmall`] below [`MIN_ZOOM_LENGTH`]
    /// - [`InterpolationError::OutOfDomain`] outside the current function's domain
    pub fn zoomed_in(&self) -> Result<Self, InterpolationError> {
        let (left, right) = scale_about_mid(self.left_bound, self.right_bound, 0.5);

        let length = (right - left).abs();
        if length < MIN_ZOOM_LENGTH {
            return Err(InterpolationError::IntervalTooSmall { length, min: MIN_ZOOM_LENGTH });
        }
        check_domain(left, right, self.function_kind)?;

        Ok(self.with_bounds(left, right))
    }

    /// Interval doubled around its midpoint.
    ///
    /// # Errors
    /// - [`InterpolationError::IntervalTooLarge`] beyond [`MAX_ZOOM_LENGTH`]
    /// - [`InterpolationError::OutOfDomain`] outside the current function's domain
    pub fn zoomed_out(&self) -> Result<Self, InterpolationError> {
        let (left, right) = scale_about_mid(self.left_bound, self.right_bound, 2.0);

        let length = (right - left).abs();
        if length > MAX_ZOOM_LENGTH {
            return Err(InterpolationError::IntervalTooLarge { length, max: MAX_ZOOM_LENGTH });
        }
        check_domain(left, right, self.function_kind)?;

        Ok(self.with_bounds(left, right))
    }
}


#[inline]
fn scale_about_mid(left: f64, right: f64, factor: f64) -> (f64, f64) {
    let mid = (left + right) / 2.0;
    ((left - mid) * factor + mid, (right - mid) * factor + mid)
}

fn check_domain(left: f64, right: f64, kind: FunctionKind) -> Result<(), InterpolationError> {
    if kind.admits(left, right) {
        return Ok(());
    }
    let (lo, hi) = kind.domain_bounds();
    Err(InterpolationError::OutOfDomain { left, right, lo, hi, function: kind.label() })
}


/// Validating builder for [`Params`].
///
/// # Construction
/// - Use [`ParamsCfg::new`] then the `set_*` setters, each checked on the spot.
///
/// # Defaults
/// - [`Params::default`]: `[-10, 10]`, 10 points, [`FunctionKind::Constant`].
///
/// # Validation
/// - bounds finite, `left + MIN_BOUND_GAP <= right`
/// - bounds inside the domain of the selected function (checked by `build`,
///   so bounds and function may be set in either order)
/// - sample count against the limits of every algorithm passed to `set_algorithm`
#[derive(Debug, Clone, Default)]
pub struct ParamsCfg {
    params     : Params,
    algorithms : Vec<Algorithm>,
}

impl ParamsCfg {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    pub fn set_bounds(mut self, left: f64, right: f64) -> Result<Self, InterpolationError> {
        for v in [left, right] {
            if !v.is_finite() {
                return Err(InterpolationError::NonFiniteBound { got: v });
            }
        }
        if right - left < MIN_BOUND_GAP {
            return Err(InterpolationError::InvalidBounds { left, right, min_gap: MIN_BOUND_GAP });
        }
        self.params.left_bound  = left;
        self.params.right_bound = right;
        Ok(self)
    }

    pub fn set_number_points(mut self, n: usize) -> Result<Self, InterpolationError> {
        if n == 0 {
            return Err(InterpolationError::TooFewPoints { algorithm: Algorithm::Base, got: n, min: 1 });
        }
        self.params.number_points = n;
        self.check_points()?;
        Ok(self)
    }

    pub fn set_function(mut self, kind: FunctionKind) -> Self {
        self.params.function_kind = kind;
        self
    }

    pub fn set_function_index(self, index: usize) -> Result<Self, InterpolationError> {
        Ok(self.set_function(FunctionKind::from_index(index)?))
    }

    /// Registers an algorithm whose point limits the parameters must satisfy.
    pub fn set_algorithm(mut self, algorithm: Algorithm) -> Result<Self, InterpolationError> {
        if !self.algorithms.contains(&algorithm) {
            self.algorithms.push(algorithm);
        }
        self.check_points()?;
        Ok(self)
    }

    pub fn build(&self) -> Result<Params, InterpolationError> {
        self.params.check_domain(self.params.function_kind)?;
        self.check_points()?;
        Ok(self.params)
    }

    // getters
    pub fn params(&self) -> &Params { &self.params }

    fn check_points(&self) -> Result<(), InterpolationError> {
        for &algorithm in &self.algorithms {
            self.params.validate_for(algorithm)?;
        }
        Ok(())
    }
}
