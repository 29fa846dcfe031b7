/// Fills the staggered knots of a uniform primal grid.
///
/// `eps[i] = (x[i] + x[i-1]) / 2` between samples, plus one knot half a step
/// outside each end. `eps.len()` must be `x.len() + 1`.
pub(crate) fn staggered_knots(x: &[f64], left: f64, right: f64, step: f64, eps: &mut [f64]) {
    let n = x.len();

    for i in 1..n {
        eps[i] = (x[i] + x[i - 1]) / 2.0;
    }
    eps[0] = left - step / 2.0;
    eps[n] = right + step / 2.0;
}


/// Thomas algorithm over bands of equal length, in place.
///
/// Row `i` reads `left[i] * u[i-1] + diagonal[i] * u[i] + right[i] * u[i+1] = rhs[i]`;
/// `left[0]` and `right[last]` are ignored. On return `rhs` holds `u`, and
/// `diagonal`/`right` hold the eliminated factors.
pub(crate) fn thomas_in_place(left: &[f64], diagonal: &mut [f64], right: &mut [f64], rhs: &mut [f64]) {
    let Some(last) = rhs.len().checked_sub(1) else {
        return;
    };

    // forward sweep
    for i in 0..last {
        right[i] /= diagonal[i];
        rhs[i]   /= diagonal[i];
        diagonal[i + 1] -= right[i] * left[i + 1];
        rhs[i + 1]      -= rhs[i] * left[i + 1];
    }
    rhs[last] /= diagonal[last];

    // back substitution
    for i in (1..=last).rev() {
        rhs[i - 1] -= rhs[i] * right[i - 1];
    }
}


/// Cell owning `xq` on `n` uniform cells spanning `[eps[0], eps[n]]`.
///
/// Saturates to `0` on the left and clamps to `n` on the right, so a point
/// past the last knot lands on the (zero) trailing slot.
#[inline]
pub(crate) fn cell_index(eps: &[f64], xq: f64) -> usize {
    let n = eps.len() - 1;
    let pos = n as f64 * (xq - eps[0]) / (eps[n] - eps[0]);

    // float -> int `as` saturates: negatives become 0
    (pos.floor() as usize).min(n)
}
