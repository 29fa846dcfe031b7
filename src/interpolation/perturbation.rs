//! Perturbation model
//!
//! Injects calibrated noise into one sample so the interpolants can be
//! compared on how they propagate a single measurement error.
//!
//! The magnitude is
//!
//! ```text
//! max f over [left_bound, right_bound) * 0.1 * coefficient
//! ```
//!
//! with the maximum taken by [`range_scan`]. It is computed at most once per
//! change: every mutation marks the model dirty and the next
//! [`Perturbation::get_value`] recomputes and caches it.
//!
//! All evaluators of one comparison must share a single instance through
//! [`SharedPerturbation`] so they see identical noise.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::debug;

use crate::interpolation::config::Params;
use crate::interpolation::functions::range_scan;

/// Scale of the noise relative to the function's maximum.
pub const PERTURBATION_SCALE: f64 = 0.1;

pub type SharedPerturbation = Rc<RefCell<Perturbation>>;

#[derive(Debug, Clone)]
pub struct Perturbation {
    dirty        : bool,
    cached_value : f64,
    coefficient  : i32,
    params       : Params,
}

impl Perturbation {
    pub fn new(params: Params) -> Self {
        Self {
            dirty        : true,
            cached_value : 0.0,
            coefficient  : 0,
            params,
        }
    }

    pub fn shared(params: Params) -> SharedPerturbation {
        Rc::new(RefCell::new(Self::new(params)))
    }

    /// Cached noise magnitude, recomputed first if dirty.
    pub fn get_value(&mut self) -> f64 {
        if self.dirty {
            let kind = self.params.function_kind;
            let (_, max) = range_scan(
                self.params.left_bound,
                self.params.right_bound,
                |x| kind.value(x),
                self.params.number_points,
            );
            self.cached_value = max * PERTURBATION_SCALE * f64::from(self.coefficient);
            self.dirty = false;

            debug!(
                coefficient = self.coefficient,
                max,
                value = self.cached_value,
                "perturbation recomputed"
            );
        }
        self.cached_value
    }

    pub fn set_dirty(&mut self) {
        self.dirty = true;
    }

    /// Replaces the parameters the value range is read from. Always invalidates.
    pub fn set_params(&mut self, params: Params) {
        self.params = params;
        self.set_dirty();
    }

    pub fn raise_coefficient(&mut self) {
        self.coefficient += 1;
        self.set_dirty();
    }

    pub fn reduce_coefficient(&mut self) {
        self.coefficient -= 1;
        self.set_dirty();
    }

    // getters
    pub fn coefficient(&self) -> i32 { self.coefficient }
    pub fn is_dirty(&self) -> bool { self.dirty }
    pub fn params(&self) -> &Params { &self.params }
}
