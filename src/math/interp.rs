//! Linear interpolation of tabulated span data

use super::Diagram;

/// Linearly interpolate the table `(xp, fp)` at `x`
///
/// `xp` must be non-decreasing. Outside the table the nearest end value is
/// held constant. An empty table evaluates to zero.
pub fn interp_clamped(xp: &[f64], fp: &[f64], x: f64) -> f64 {
    debug_assert_eq!(xp.len(), fp.len());
    let n = xp.len();
    if n == 0 {
        return 0.0;
    }
    if x <= xp[0] {
        return fp[0];
    }
    if x >= xp[n - 1] {
        return fp[n - 1];
    }

    // First entry strictly beyond x; xp[hi - 1] <= x < xp[hi]
    let hi = xp.partition_point(|&v| v <= x);
    let lo = hi - 1;
    let t = (x - xp[lo]) / (xp[hi] - xp[lo]);
    fp[lo] + t * (fp[hi] - fp[lo])
}

/// Re-map a tabulated distribution onto new stations
pub fn remap(xp: &[f64], fp: &[f64], stations: &[f64]) -> Diagram {
    Diagram::from_iterator(
        stations.len(),
        stations.iter().map(|&y| interp_clamped(xp, fp, y)),
    )
}
