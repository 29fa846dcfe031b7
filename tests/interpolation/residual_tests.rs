use runge::interpolation::algorithms::Algorithm;
use runge::interpolation::base::BaseEvaluator;
use runge::interpolation::config::Params;
use runge::interpolation::functions::FunctionKind;
use runge::interpolation::newton::Newton;
use runge::interpolation::perturbation::Perturbation;
use runge::interpolation::residual::{Residual, RESIDUAL_LINE_STYLE};
use runge::interpolation::spline::StaggeredSpline;
use runge::interpolation::Evaluator;

use approx::assert_abs_diff_eq;

fn newton_residual(params: Params) -> Residual<Newton> {
    let mut residual = Residual::new(params, Newton::new(params, Perturbation::shared(params)));
    residual.update(params);
    residual
}

#[test]
fn color_offsets_and_style() {
    let params = Params::default();
    let shared = Perturbation::shared(params);

    let newton = Residual::new(params, Newton::new(params, shared.clone()));
    let spline = Residual::new(params, StaggeredSpline::new(params, shared));

    assert_eq!(newton.color(), 15);
    assert_eq!(spline.color(), 14);
    assert_eq!(newton.line_style(), RESIDUAL_LINE_STYLE);
    assert_eq!(spline.line_style(), 3);
    assert_eq!(newton.algorithm(), Algorithm::Residual);
}

#[test]
fn residual_of_base_vanishes() {
    let params = Params::new(-2.0, 2.0, 10, FunctionKind::Exponential);
    let mut residual = Residual::new(params, BaseEvaluator::new(params));
    residual.update(params);

    for x in [-2.0, -0.3, 0.0, 1.7, 5.0] {
        assert_eq!(residual.get_value(x), 0.0);
    }
}

#[test]
fn absolute_distance_to_function() {
    let kind = FunctionKind::RationalBump;
    let residual = newton_residual(Params::new(-1.0, 1.0, 21, kind));

    for x in [-0.95, -0.5, 0.05, 0.85] {
        let target = residual.target().get_value(x);
        assert_eq!(residual.get_value(x), (target - kind.value(x)).abs());
        assert!(residual.get_value(x) >= 0.0);
    }
    assert!(residual.get_value(0.95) > 10.0);
}

#[test]
fn target_follows_params() {
    let params = Params::new(-10.0, 10.0, 10, FunctionKind::Linear);
    let mut residual = newton_residual(params);
    assert_eq!(residual.target().params(), &params);

    let next = params.with_function(FunctionKind::Quadratic).with_number_points(7);
    residual.update(next);
    assert_eq!(residual.params(), &next);
    assert_eq!(residual.target().params(), &next);
    assert_eq!(residual.target().nodes().len(), 7);
    assert_abs_diff_eq!(residual.get_value(3.0), 0.0, epsilon = 1e-9);
}

#[test]
fn shares_the_gate() {
    let params = Params::new(-10.0, 10.0, 10, FunctionKind::Linear);
    let mut residual = newton_residual(params);

    residual.update(params.with_bounds(-10.0, 30.0));
    assert_eq!(residual.params().right_bound, 10.0);
    assert_eq!(residual.target().params().right_bound, 10.0);
}

#[test]
fn into_inner_returns_resolved_target() {
    let params = Params::new(-1.0, 1.0, 3, FunctionKind::Quadratic);
    let newton = newton_residual(params).into_inner();
    assert_eq!(newton.nodes().len(), 3);
    assert_abs_diff_eq!(newton.get_value(0.5), 0.25, epsilon = 1e-15);
}
