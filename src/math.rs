//! Numeric building blocks for filter design.

use std::f64::consts::PI;

use crate::constants::BESSEL_TERMS;

/// Normalized sinc, `sin(πx) / (πx)`, with `sinc(0) == 1`.
#[inline]
pub fn sinc(x: f64) -> f64 {
    if x.abs() < 1e-8 {
        return 1.0;
    }
    let pi_x = PI * x;
    pi_x.sin() / pi_x
}

/// Modified Bessel function of the first kind, order zero.
///
/// Evaluated by its power series `Σ ((x/2)^k / k!)²`, truncated after
/// [`BESSEL_TERMS`] terms. This converges well for the window shapes used
/// here (β below ~20).
pub fn bessel_i0(x: f64) -> f64 {
    let half_x = x / 2.0;
    let mut sum = 1.0;
    let mut term = 1.0;
    for k in 1..BESSEL_TERMS {
        term *= half_x / k as f64;
        sum += term * term;
    }
    sum
}

/// Kaiser window coefficient `n` of a window `len` samples long.
///
/// `w(n) = I0(β·sqrt(1 - ((n - α) / α)²)) / I0(β)` with `α = (len - 1) / 2`.
/// A single-point window is `1.0`.
pub fn kaiser_window(n: usize, len: usize, beta: f64) -> f64 {
    if len < 2 {
        return 1.0;
    }
    let alpha = (len - 1) as f64 / 2.0;
    let ratio = (n as f64 - alpha) / alpha;
    // Rounding can push the radicand a hair below zero at the edges.
    let radicand = (1.0 - ratio * ratio).max(0.0);
    bessel_i0(beta * radicand.sqrt()) / bessel_i0(beta)
}
