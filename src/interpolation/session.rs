//! Comparison session.
//!
//! Headless state behind an interactive comparison of the two interpolants:
//! the current parameters, one shared perturbation model, the evaluators, and
//! the [`ViewMode`] choosing which of them a pass draws.
//!
//! ┌ actions   : change function / mode, zoom, raise / reduce points, precision
//! ├ refresh   : `update` on every evaluator of the current mode, in draw order
//! └ status    : summary of the last pass
//!
//! Actions validate against the function domains and per-algorithm point
//! limits and leave the session untouched when they fail. Every accepted
//! parameter change is pushed into the perturbation model, invalidating it.

use std::fmt;

use tracing::{info, warn};

use crate::interpolation::algorithms::Algorithm;
use crate::interpolation::base::BaseEvaluator;
use crate::interpolation::config::{Params, NEWTON_LIMITS_MAX};
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::newton::Newton;
use crate::interpolation::perturbation::{Perturbation, SharedPerturbation};
use crate::interpolation::residual::Residual;
use crate::interpolation::spline::staggered::StaggeredSpline;
use crate::interpolation::traits::Evaluator;
use crate::interpolation::view::{scaling_limits, ViewMode};

#[derive(Debug)]
pub struct Session {
    params       : Params,
    mode         : ViewMode,
    perturbation : SharedPerturbation,
    base         : BaseEvaluator,
    newton       : Residual<Newton>,
    spline       : Residual<StaggeredSpline>,
}

impl Session {
    pub fn new(params: Params) -> Self {
        let perturbation = Perturbation::shared(params);
        Self {
            params,
            mode   : ViewMode::default(),
            base   : BaseEvaluator::new(params),
            newton : Residual::new(params, Newton::new(params, perturbation.clone())),
            spline : Residual::new(params, StaggeredSpline::new(params, perturbation.clone())),
            perturbation,
        }
    }

    #[must_use]
    pub fn with_mode(mut self, mode: ViewMode) -> Self { self.mode = mode; self }

    // getters
    pub fn params(&self) -> &Params { &self.params }
    pub fn mode(&self) -> ViewMode { self.mode }
    pub fn perturbation(&self) -> SharedPerturbation { self.perturbation.clone() }
    pub fn base(&self) -> &BaseEvaluator { &self.base }
    pub fn newton(&self) -> &Newton { self.newton.target() }
    pub fn spline(&self) -> &StaggeredSpline { self.spline.target() }
    pub fn newton_residual(&self) -> &Residual<Newton> { &self.newton }
    pub fn spline_residual(&self) -> &Residual<StaggeredSpline> { &self.spline }

    fn apply(&mut self, params: Params) {
        self.params = params;
        self.perturbation.borrow_mut().set_params(params);
    }

    /// Switches to the next function kind.
    ///
    /// # Errors
    /// - [`InterpolationError::OutOfDomain`] if the current bounds leave the
    ///   next function's domain.
    pub fn change_function(&mut self) -> Result<(), InterpolationError> {
        let next = self.params.function_kind.next();
        self.params.check_domain(next).inspect_err(|e| warn!("change function rejected: {e}"))?;
        self.apply(self.params.with_function(next));
        Ok(())
    }

    /// Switches to the next view mode and returns the mode actually selected.
    ///
    /// A Newton mode with more than [`NEWTON_LIMITS_MAX`] points is replaced
    /// by its spline counterpart.
    pub fn change_mode(&mut self) -> ViewMode {
        let next = self.mode.next();

        if next.uses_newton() && self.params.number_points > NEWTON_LIMITS_MAX {
            let fallback = next.residual_fallback();
            warn!(
                requested     = %next,
                selected      = %fallback,
                number_points = self.params.number_points,
                "too many points for Newton, showing the spline instead"
            );
            self.mode = fallback;
            return fallback;
        }

        self.mode = next;
        next
    }

    pub fn zoom_in(&mut self) -> Result<(), InterpolationError> {
        let zoomed = self.params.zoomed_in().inspect_err(|e| warn!("zoom in rejected: {e}"))?;
        self.apply(zoomed);
        Ok(())
    }

    pub fn zoom_out(&mut self) -> Result<(), InterpolationError> {
        let zoomed = self.params.zoomed_out().inspect_err(|e| warn!("zoom out rejected: {e}"))?;
        self.apply(zoomed);
        Ok(())
    }

    /// Doubles the number of points.
    pub fn raise_points(&mut self) -> Result<(), InterpolationError> {
        self.set_points(self.params.number_points.saturating_mul(2))
    }

    /// Halves the number of points (rounding down).
    pub fn reduce_points(&mut self) -> Result<(), InterpolationError> {
        self.set_points(self.params.number_points / 2)
    }

    fn set_points(&mut self, n: usize) -> Result<(), InterpolationError> {
        let candidate = self.params.with_number_points(n);

        let check = |algorithm| candidate.validate_for(algorithm);
        if self.mode.uses_newton() {
            check(Algorithm::Newton).inspect_err(|e| warn!("point change rejected: {e}"))?;
        }
        if self.mode.uses_spline() {
            check(Algorithm::Spline).inspect_err(|e| warn!("point change rejected: {e}"))?;
        }

        self.apply(candidate);
        Ok(())
    }

    pub fn add_precision(&mut self) {
        self.perturbation.borrow_mut().raise_coefficient();
    }

    pub fn remove_precision(&mut self) {
        self.perturbation.borrow_mut().reduce_coefficient();
    }

    /// Brings every evaluator of the current mode up to date, in draw order.
    pub fn refresh(&mut self) {
        let p = self.params;
        match self.mode {
            ViewMode::Newton => {
                self.newton.target_mut().update(p);
                self.base.update(p);
            }
            ViewMode::NewtonResidual => self.newton.update(p),
            ViewMode::Spline => {
                self.spline.target_mut().update(p);
                self.base.update(p);
            }
            ViewMode::SplineResidual => self.spline.update(p),
            ViewMode::Both => {
                self.spline.target_mut().update(p);
                self.newton.target_mut().update(p);
                self.base.update(p);
            }
            ViewMode::BothResidual => {
                self.spline.update(p);
                self.newton.update(p);
            }
        }
    }

    /// Evaluators of the current mode, in draw order.
    pub fn curves(&self) -> Vec<&dyn Evaluator> {
        let mut curves: Vec<&dyn Evaluator> = Vec::with_capacity(3);
        match self.mode {
            ViewMode::Newton => {
                curves.push(self.newton.target());
                curves.push(&self.base);
            }
            ViewMode::NewtonResidual => curves.push(&self.newton),
            ViewMode::Spline => {
                curves.push(self.spline.target());
                curves.push(&self.base);
            }
            ViewMode::SplineResidual => curves.push(&self.spline),
            ViewMode::Both => {
                curves.push(self.spline.target());
                curves.push(self.newton.target());
                curves.push(&self.base);
            }
            ViewMode::BothResidual => {
                curves.push(&self.spline);
                curves.push(&self.newton);
            }
        }
        curves
    }

    /// Vertical range of the last curve drawn, which sets the scale for the pass.
    pub fn scaling_limits(&self) -> (f64, f64) {
        match self.curves().last() {
            Some(curve) => scaling_limits(*curve, &self.params),
            None => (-1.0, 1.0),
        }
    }

    /// Refreshes, then summarizes the pass.
    pub fn status(&mut self) -> SessionStatus {
        self.refresh();

        let (lo, hi) = self.scaling_limits();
        let status = SessionStatus {
            function_index : self.params.function_kind.index(),
            function_label : self.params.function_kind.label(),
            mode_label     : self.mode.label(),
            number_points  : self.params.number_points,
            left_bound     : self.params.left_bound,
            right_bound    : self.params.right_bound,
            max_abs        : lo.abs().max(hi.abs()),
            precision      : self.perturbation.borrow_mut().get_value(),
        };

        info!(
            function      = status.function_label,
            mode          = status.mode_label,
            number_points = status.number_points,
            left_bound    = status.left_bound,
            right_bound   = status.right_bound,
            max_abs       = status.max_abs,
            precision     = status.precision,
            "pass"
        );
        status
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Params::default())
    }
}


/// Summary of one refresh.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionStatus {
    pub function_index : usize,
    pub function_label : &'static str,
    pub mode_label     : &'static str,
    pub number_points  : usize,
    pub left_bound     : f64,
    pub right_bound    : f64,
    /// `max(|min|, |max|)` of the scaling limits
    pub max_abs        : f64,
    /// current perturbation magnitude
    pub precision      : f64,
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "k = {}  {}", self.function_index, self.function_label)?;
        writeln!(f, "{}", self.mode_label)?;
        writeln!(f, "N = {}", self.number_points)?;
        writeln!(f, "[a;b] = [{};{}]", self.left_bound, self.right_bound)?;
        writeln!(f, "max{{|Fmin|, |Fmax|}} = {:.2e}", self.max_abs)?;
        write!(f, "Precision = {}", self.precision)
    }
}
