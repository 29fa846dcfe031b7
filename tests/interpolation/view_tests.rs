use runge::interpolation::base::BaseEvaluator;
use runge::interpolation::config::Params;
use runge::interpolation::functions::FunctionKind;
use runge::interpolation::report::{sample, uniform_grid};
use runge::interpolation::view::{scaling_limits, ViewMode};

use approx::assert_abs_diff_eq;

#[test]
fn modes_cycle_in_order() {
    let mut mode = ViewMode::Newton;
    let mut seen = Vec::new();
    for _ in 0..ViewMode::ALL.len() {
        seen.push(mode);
        mode = mode.next();
    }
    assert_eq!(seen, ViewMode::ALL);
    assert_eq!(mode, ViewMode::Newton);
    assert_eq!(ViewMode::default(), ViewMode::Spline);
}

#[test]
fn mode_flags() {
    assert!(ViewMode::Both.uses_newton() && ViewMode::Both.uses_spline());
    assert!(!ViewMode::SplineResidual.uses_newton());
    assert!(!ViewMode::NewtonResidual.uses_spline());
    assert!(ViewMode::BothResidual.is_residual());
    assert!(!ViewMode::Both.is_residual());
}

#[test]
fn fallbacks_keep_residual_flavour() {
    assert_eq!(ViewMode::Newton.residual_fallback(), ViewMode::Spline);
    assert_eq!(ViewMode::Both.residual_fallback(), ViewMode::Spline);
    assert_eq!(ViewMode::NewtonResidual.residual_fallback(), ViewMode::SplineResidual);
    assert_eq!(ViewMode::BothResidual.residual_fallback(), ViewMode::SplineResidual);
}

#[test]
fn labels() {
    assert_eq!(ViewMode::BothResidual.to_string(), "Newton's and Spline's residual");
    assert_eq!(ViewMode::Spline.label(), "Spline");
}

#[test]
fn flat_curve_gets_absolute_margin() {
    let params = Params::new(-10.0, 10.0, 10, FunctionKind::Constant);
    let (lo, hi) = scaling_limits(&BaseEvaluator::new(params), &params);
    assert_abs_diff_eq!(lo, 0.99, epsilon = 1e-15);
    assert_abs_diff_eq!(hi, 1.01, epsilon = 1e-15);
}

#[test]
fn margin_is_one_percent_of_span() {
    // scan of x peaks at 8
    let params = Params::new(-10.0, 10.0, 10, FunctionKind::Linear);
    let (lo, hi) = scaling_limits(&BaseEvaluator::new(params), &params);
    assert_abs_diff_eq!(lo, -10.18, epsilon = 1e-12);
    assert_abs_diff_eq!(hi, 8.18, epsilon = 1e-12);
}

#[test]
fn uniform_grid_edges() {
    assert!(uniform_grid(0.0, 1.0, 0).is_empty());
    assert_eq!(uniform_grid(3.0, 4.0, 1), vec![3.0]);
    assert_eq!(uniform_grid(0.0, 1.0, 5), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
}

#[test]
fn sample_report_of_base() {
    let params = Params::new(-2.0, 2.0, 6, FunctionKind::Cubic);
    let report = sample(&BaseEvaluator::new(params), &uniform_grid(-2.0, 2.0, 5));

    assert_eq!(report.algorithm_name, "base");
    assert_eq!(report.n_provided, 6);
    assert_eq!(report.n_evaluated, 5);
    assert_eq!(report.evaluated, vec![-8.0, -1.0, 0.0, 1.0, 8.0]);
    assert_eq!(report.max_abs(), 8.0);
}
