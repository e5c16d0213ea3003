//! CDF 9/7 lifting kernels with whole-sample symmetric extension.
//!
//! Four in-place variants: analysis and synthesis, each for even- and
//! odd-length runs. The boundary terms differ between the two parities (an
//! odd-length run ends on an even index, so the mirrored-neighbor correction
//! moves from the predict steps to the update steps), which is why the
//! variants are spelled out rather than folded into one loop.
//!
//! All kernels expect a contiguous run of at least two samples; callers
//! validate lengths and pick the parity-correct variant. After analysis the
//! low-pass sub-band sits at even indices and the high-pass at odd indices;
//! synthesis expects that same interleaved layout.

use super::constants::LiftCoeffs;

/// Forward lifting on an even-length run.
///
/// Two predict/update rounds (`alpha`/`beta`, then `gamma`/`delta`) followed
/// by the scaling step: evens by `epsilon`, odds by `-1/epsilon`. The sign
/// flip on the high band is part of the canonical 9/7 polyphase
/// normalization.
pub fn analyze_even(s: &mut [f64], cf: &LiftCoeffs) {
    let n = s.len();
    debug_assert!(n >= 2 && n % 2 == 0);

    for i in (1..n - 2).step_by(2) {
        s[i] += cf.alpha * (s[i - 1] + s[i + 1]);
    }
    s[n - 1] += 2.0 * cf.alpha * s[n - 2];

    s[0] += 2.0 * cf.beta * s[1];
    for i in (2..n).step_by(2) {
        s[i] += cf.beta * (s[i - 1] + s[i + 1]);
    }

    for i in (1..n - 2).step_by(2) {
        s[i] += cf.gamma * (s[i - 1] + s[i + 1]);
    }
    s[n - 1] += 2.0 * cf.gamma * s[n - 2];

    s[0] = cf.epsilon * (s[0] + 2.0 * cf.delta * s[1]);
    for i in (2..n).step_by(2) {
        s[i] = cf.epsilon * (s[i] + cf.delta * (s[i - 1] + s[i + 1]));
    }
    for i in (1..n).step_by(2) {
        s[i] *= -cf.inv_epsilon;
    }
}

/// Forward lifting on an odd-length run.
///
/// Both ends of the run are even indices, so the predict steps need no tail
/// correction while the update steps mirror at both ends.
pub fn analyze_odd(s: &mut [f64], cf: &LiftCoeffs) {
    let n = s.len();
    debug_assert!(n >= 3 && n % 2 == 1);

    for i in (1..n - 1).step_by(2) {
        s[i] += cf.alpha * (s[i - 1] + s[i + 1]);
    }

    s[0] += 2.0 * cf.beta * s[1];
    for i in (2..n - 2).step_by(2) {
        s[i] += cf.beta * (s[i - 1] + s[i + 1]);
    }
    s[n - 1] += 2.0 * cf.beta * s[n - 2];

    for i in (1..n - 1).step_by(2) {
        s[i] += cf.gamma * (s[i - 1] + s[i + 1]);
    }

    s[0] = cf.epsilon * (s[0] + 2.0 * cf.delta * s[1]);
    for i in (2..n - 2).step_by(2) {
        s[i] = cf.epsilon * (s[i] + cf.delta * (s[i - 1] + s[i + 1]));
    }
    s[n - 1] = cf.epsilon * (s[n - 1] + 2.0 * cf.delta * s[n - 2]);

    for i in (1..n).step_by(2) {
        s[i] *= -cf.inv_epsilon;
    }
}

/// Inverse of [`analyze_even`]: unscale, then undo delta, gamma, beta, alpha
/// with the same symmetric-extension stencils and flipped signs.
pub fn synthesize_even(s: &mut [f64], cf: &LiftCoeffs) {
    let n = s.len();
    debug_assert!(n >= 2 && n % 2 == 0);

    for i in (1..n).step_by(2) {
        s[i] *= -cf.epsilon;
    }

    s[0] = s[0] * cf.inv_epsilon - 2.0 * cf.delta * s[1];
    for i in (2..n).step_by(2) {
        s[i] = s[i] * cf.inv_epsilon - cf.delta * (s[i - 1] + s[i + 1]);
    }

    for i in (1..n - 2).step_by(2) {
        s[i] -= cf.gamma * (s[i - 1] + s[i + 1]);
    }
    s[n - 1] -= 2.0 * cf.gamma * s[n - 2];

    s[0] -= 2.0 * cf.beta * s[1];
    for i in (2..n).step_by(2) {
        s[i] -= cf.beta * (s[i - 1] + s[i + 1]);
    }

    for i in (1..n - 2).step_by(2) {
        s[i] -= cf.alpha * (s[i - 1] + s[i + 1]);
    }
    s[n - 1] -= 2.0 * cf.alpha * s[n - 2];
}

/// Inverse of [`analyze_odd`].
pub fn synthesize_odd(s: &mut [f64], cf: &LiftCoeffs) {
    let n = s.len();
    debug_assert!(n >= 3 && n % 2 == 1);

    for i in (1..n).step_by(2) {
        s[i] *= -cf.epsilon;
    }

    s[0] = s[0] * cf.inv_epsilon - 2.0 * cf.delta * s[1];
    for i in (2..n - 2).step_by(2) {
        s[i] = s[i] * cf.inv_epsilon - cf.delta * (s[i - 1] + s[i + 1]);
    }
    s[n - 1] = s[n - 1] * cf.inv_epsilon - 2.0 * cf.delta * s[n - 2];

    for i in (1..n - 1).step_by(2) {
        s[i] -= cf.gamma * (s[i - 1] + s[i + 1]);
    }

    s[0] -= 2.0 * cf.beta * s[1];
    for i in (2..n - 2).step_by(2) {
        s[i] -= cf.beta * (s[i - 1] + s[i + 1]);
    }
    s[n - 1] -= 2.0 * cf.beta * s[n - 2];

    for i in (1..n - 1).step_by(2) {
        s[i] -= cf.alpha * (s[i - 1] + s[i + 1]);
    }
}
