//! Interest arithmetic.

use tracing::debug;

/// Calculates interest for a balance as `balance * rate`.
///
/// The rate is a plain multiplier (`0.05` is 5%). The result is returned
/// unrounded; negative inputs give negative interest and non-finite inputs
/// propagate as IEEE-754 does (`NaN` in, `NaN` out).
pub fn calculate_interest(balance: f64, rate: f64) -> f64 {
    let interest = balance * rate;
    debug!(balance, rate, interest, "calculated interest");
    interest
}
