//! Constants for the CDF 9/7 lifting factorization.
//!
//! The four lifting coefficients and the scaling factor are closed-form
//! expressions in the five distinct analysis low-pass taps. They are derived
//! once and shared; recomputing them per call would let rounding drift creep
//! in between decomposition levels.

use std::sync::OnceLock;

/// The five distinct taps of the CDF 9/7 analysis low-pass filter.
pub const FILTER_TAPS: [f64; 5] = [
    0.602949018236,
    0.266864118443,
    -0.078223266529,
    -0.016864118443,
    0.026748757411,
];

/// Lifting-scheme coefficients for the 9/7 filter bank.
///
/// `alpha`/`gamma` drive the two predict steps on odd samples,
/// `beta`/`delta` the two update steps on even samples, and
/// `epsilon` the final sub-band scaling.
#[derive(Debug, Clone, Copy)]
pub struct LiftCoeffs {
    pub alpha: f64,
    pub beta: f64,
    pub gamma: f64,
    pub delta: f64,
    pub epsilon: f64,
    pub inv_epsilon: f64,
}

static LIFT_COEFFS: OnceLock<LiftCoeffs> = OnceLock::new();

/// Returns the lifting coefficients, derived from [`FILTER_TAPS`] on first use.
pub fn lift_coeffs() -> &'static LiftCoeffs {
    LIFT_COEFFS.get_or_init(|| {
        let [h0, h1, h2, h3, h4] = FILTER_TAPS;
        let r0 = h0 - 2.0 * h4 * h1 / h3;
        let r1 = h2 - h4 - h4 * h1 / h3;
        let s0 = h1 - h3 - h3 * r0 / r1;
        let t0 = h0 - 2.0 * (h2 - h4);
        let epsilon = std::f64::consts::SQRT_2 * t0;
        LiftCoeffs {
            alpha: h4 / h3,
            beta: h3 / r1,
            gamma: r1 / s0,
            delta: s0 / t0,
            epsilon,
            inv_epsilon: 1.0 / epsilon,
        }
    })
}
