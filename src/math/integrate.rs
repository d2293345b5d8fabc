//! Trapezoidal integration along the span
//!
//! Every cumulative quantity here is accumulated from the wingtip inward, so
//! shear and bending computed from the same stations stay consistent with
//! `dM/dy = -V`.

use super::Diagram;

/// Trapezoidal integral of `f` over the stations `x`
pub fn trapezoid(x: &[f64], f: &[f64]) -> f64 {
    debug_assert_eq!(x.len(), f.len());
    x.windows(2)
        .zip(f.windows(2))
        .map(|(xs, fs)| 0.5 * (fs[0] + fs[1]) * (xs[1] - xs[0]))
        .sum()
}

/// Cumulative trapezoidal integral from each station out to the tip
///
/// `out[i]` is the integral of `f` over `[x[i], x[last]]`, so the last entry
/// is always zero.
pub fn cumulative_from_tip(x: &[f64], f: &[f64]) -> Diagram {
    debug_assert_eq!(x.len(), f.len());
    let n = x.len();
    let mut out = Diagram::zeros(n);
    for i in (0..n.saturating_sub(1)).rev() {
        out[i] = out[i + 1] + 0.5 * (f[i] + f[i + 1]) * (x[i + 1] - x[i]);
    }
    out
}

/// Shear and bending diagrams of a half wing clamped at the root
///
/// # Arguments
/// * `x` - Span stations, root to tip (m)
/// * `force_per_length` - Distributed load at each station (N/m)
/// * `point_forces` - Concentrated load attached to each station (N)
///
/// # Returns
/// `(shear, bending)` where `shear[i]` is the total load outboard of and
/// including station `i` and `bending[i]` is the moment of that load about
/// station `i`. Bending at the tip is exactly zero.
pub fn shear_and_bending(
    x: &[f64],
    force_per_length: &[f64],
    point_forces: &[f64],
) -> (Diagram, Diagram) {
    debug_assert_eq!(x.len(), force_per_length.len());
    debug_assert_eq!(x.len(), point_forces.len());

    let n = x.len();
    let distributed_shear = cumulative_from_tip(x, force_per_length);

    // Integral of f(eta) * eta; the lever arm about station i is then
    // recovered as (f * eta) - x_i * f without an O(n^2) pass.
    let first_moment: Vec<f64> = force_per_length
        .iter()
        .zip(x)
        .map(|(f, y)| f * y)
        .collect();
    let distributed_moment = cumulative_from_tip(x, &first_moment);

    let mut shear = Diagram::zeros(n);
    let mut bending = Diagram::zeros(n);
    let mut point_sum = 0.0;
    let mut point_moment = 0.0;

    for i in (0..n).rev() {
        point_sum += point_forces[i];
        point_moment += point_forces[i] * x[i];
        shear[i] = distributed_shear[i] + point_sum;
        bending[i] = distributed_moment[i] + point_moment - x[i] * shear[i];
    }

    if n > 0 {
        bending[n - 1] = 0.0;
    }

    (shear, bending)
}
