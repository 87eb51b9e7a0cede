//! Monetary rounding and rate-conversion helpers.
//!
//! Rates enter the engine as percentages (8.0 = 8%) because that is how the
//! records store them; all internal math runs on fractions. Record-level
//! monetary outputs are rounded to cents before being returned so results
//! are stable across platforms; the raw compounding primitives in
//! [`crate::valuation`] are left unrounded so compounding over split time
//! spans stays exact to float tolerance.

/// Round a monetary amount to two decimal places.
#[must_use]
#[inline]
pub fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Convert a percentage rate to a fraction (8.0 → 0.08).
#[must_use]
#[inline]
pub fn pct(rate_pct: f64) -> f64 {
    rate_pct / 100.0
}

/// Convert an annual percentage rate to a monthly fractional rate
/// (3.6 → 0.003). The nominal annual/12 convention used by all amortization
/// and contribution-annuity math.
#[must_use]
#[inline]
pub fn monthly_rate(annual_rate_pct: f64) -> f64 {
    annual_rate_pct / 100.0 / 12.0
}
