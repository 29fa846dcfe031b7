use runge::interpolation::config::Params;
use runge::interpolation::errors::InterpolationError;
use runge::interpolation::functions::FunctionKind;
use runge::interpolation::session::Session;
use runge::interpolation::view::ViewMode;
use runge::interpolation::Evaluator;

use approx::assert_abs_diff_eq;

type RungeResult = Result<(), InterpolationError>;

fn linear_session(mode: ViewMode) -> Session {
    Session::new(Params::new(-10.0, 10.0, 10, FunctionKind::Linear)).with_mode(mode)
}

#[test]
fn default_session() {
    let session = Session::default();
    assert_eq!(session.mode(), ViewMode::Spline);
    assert_eq!(session.params(), &Params::default());
    assert_eq!(session.perturbation().borrow().coefficient(), 0);
}

#[test]
fn change_mode_cycles() {
    let mut session = Session::default();
    assert_eq!(session.change_mode(), ViewMode::SplineResidual);
    assert_eq!(session.change_mode(), ViewMode::Both);
    assert_eq!(session.change_mode(), ViewMode::BothResidual);
    assert_eq!(session.change_mode(), ViewMode::Newton);
    assert_eq!(session.mode(), ViewMode::Newton);
}

#[test]
fn newton_modes_fall_back_with_many_points() {
    let params = Params::default().with_number_points(80);

    let mut session = Session::new(params).with_mode(ViewMode::SplineResidual);
    assert_eq!(session.change_mode(), ViewMode::Spline);
    assert_eq!(session.change_mode(), ViewMode::SplineResidual);

    let mut session = Session::new(params).with_mode(ViewMode::Newton);
    assert_eq!(session.change_mode(), ViewMode::SplineResidual);
    assert_eq!(session.mode(), ViewMode::SplineResidual);
}

#[test]
fn raise_points_rejected_past_newton_limit() {
    let params = Params::default().with_number_points(40);
    let mut session = Session::new(params).with_mode(ViewMode::Newton);

    let err = session.raise_points().unwrap_err();
    assert!(matches!(err, InterpolationError::TooManyPoints { got: 80, max: 40, .. }));
    assert_eq!(session.params(), &params);
}

#[test]
fn spline_mode_has_no_upper_limit() -> RungeResult {
    let mut session = Session::new(Params::default().with_number_points(40));
    session.raise_points()?;
    session.raise_points()?;
    assert_eq!(session.params().number_points, 160);
    Ok(())
}

#[test]
fn reduce_points_rejected_below_spline_minimum() -> RungeResult {
    let mut session = Session::new(Params::default().with_number_points(11));
    session.reduce_points()?;
    assert_eq!(session.params().number_points, 5);

    let err = session.reduce_points().unwrap_err();
    assert!(matches!(err, InterpolationError::TooFewPoints { got: 2, min: 3, .. }));
    assert_eq!(session.params().number_points, 5);
    Ok(())
}

#[test]
fn change_function_respects_domain() -> RungeResult {
    let mut session = Session::new(Params::new(-1e90, 1e90, 10, FunctionKind::Cubic));
    let err = session.change_function().unwrap_err();
    assert!(matches!(err, InterpolationError::OutOfDomain { .. }));
    assert_eq!(session.params().function_kind, FunctionKind::Cubic);

    let mut session = Session::new(Params::new(-1.0, 1.0, 10, FunctionKind::Cubic));
    session.change_function()?;
    assert_eq!(session.params().function_kind, FunctionKind::Quartic);
    Ok(())
}

#[test]
fn zoom_invalidates_precision() -> RungeResult {
    let mut session = linear_session(ViewMode::Spline);
    session.add_precision();
    assert_abs_diff_eq!(session.status().precision, 0.8, epsilon = 1e-15);

    session.zoom_in()?;
    assert_eq!((session.params().left_bound, session.params().right_bound), (-5.0, 5.0));
    assert_abs_diff_eq!(session.status().precision, 0.4, epsilon = 1e-15);

    session.remove_precision();
    assert_eq!(session.status().precision, 0.0);
    Ok(())
}

#[test]
fn zoom_out_rejected_outside_domain() {
    let mut session = Session::new(Params::new(-400.0, 400.0, 10, FunctionKind::Exponential));
    assert!(session.zoom_out().is_err());
    assert_eq!(session.params().right_bound, 400.0);
}

#[test]
fn refresh_picks_up_new_precision() {
    let mut session = linear_session(ViewMode::Spline);
    session.refresh();
    assert_abs_diff_eq!(session.spline().samples()[5], session.spline().nodes()[5], epsilon = 1e-12);

    session.add_precision();
    session.refresh();
    let offset = session.spline().samples()[5] - session.spline().nodes()[5];
    assert_abs_diff_eq!(offset, 0.8, epsilon = 1e-12);
}

#[test]
fn both_residual_refresh_syncs_targets() -> RungeResult {
    let mut session = linear_session(ViewMode::BothResidual);
    session.zoom_out()?;
    session.refresh();

    let params = *session.params();
    assert_eq!(session.newton().params(), &params);
    assert_eq!(session.spline().params(), &params);
    assert_eq!(session.newton().nodes().len(), 10);
    assert_eq!(session.spline().nodes().len(), 10);
    assert_abs_diff_eq!(session.newton_residual().get_value(3.0), 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(session.spline_residual().get_value(3.0), 0.0, epsilon = 1e-9);
    Ok(())
}

#[test]
fn curves_follow_draw_order() {
    let mut session = linear_session(ViewMode::Both);
    session.refresh();

    let colors: Vec<u32> = session.curves().iter().map(|c| c.color()).collect();
    assert_eq!(colors, vec![8, 9, 7]);

    let session = session.with_mode(ViewMode::BothResidual);
    let colors: Vec<u32> = session.curves().iter().map(|c| c.color()).collect();
    assert_eq!(colors, vec![14, 15]);
}

#[test]
fn status_of_constant_function() {
    let mut session = Session::default();
    let status = session.status();

    assert_eq!(status.function_index, 0);
    assert_eq!(status.number_points, 10);
    assert_abs_diff_eq!(status.max_abs, 1.01, epsilon = 1e-15);

    let text = status.to_string();
    assert!(text.starts_with("k = 0  f (x) = 1\nSpline\n"));
    assert!(text.contains("N = 10"));
    assert!(text.contains("[a;b] = [-10;10]"));
    assert!(text.ends_with("Precision = 0"));
}
