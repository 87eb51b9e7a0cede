//! Valuation engine
//!
//! Reconstructs an asset's value at any instant from its recorded facts and
//! projects it forward. The load-bearing rule is the dual baseline: a
//! manually recorded value, when present, fully replaces the acquisition
//! point as the start of compounding — the two baselines are never blended.
//! Contributions made before the active baseline date are likewise never
//! counted in the contribution-accumulation term.
//!
//! Fractional years drive rate compounding; whole calendar months drive
//! contribution counts. See [`crate::date_math`] for why those differ.

use jiff::civil::Date;

use crate::date_math::{months_between, years_between};
use crate::model::{Asset, AssetKind};
use crate::money::{monthly_rate, pct, round_cents};

/// Compound `principal` at `annual_rate_pct` for `years`. Defined for
/// negative `years` (discounting) and zero rate (identity). Unrounded.
#[must_use]
#[inline]
pub fn compound_value(principal: f64, annual_rate_pct: f64, years: f64) -> f64 {
    principal * (1.0 + pct(annual_rate_pct)).powf(years)
}

/// Future value of `principal` plus an ordinary annuity of monthly
/// contributions, both compounding at the monthly-equivalent of
/// `annual_rate_pct`. `months = years * 12`, fractional months allowed.
/// Unrounded.
#[must_use]
pub fn value_with_contributions(
    principal: f64,
    annual_rate_pct: f64,
    years: f64,
    monthly_contribution: f64,
) -> f64 {
    let growth = compound_value(principal, annual_rate_pct, years);
    growth + contribution_value(monthly_contribution, annual_rate_pct, years * 12.0)
}

/// Future value of an ordinary annuity: `c * ((1+r)^m - 1) / r` at the
/// monthly rate, with the closed-form limit `c * m` at zero rate.
fn contribution_value(monthly_contribution: f64, annual_rate_pct: f64, months: f64) -> f64 {
    if monthly_contribution == 0.0 || months <= 0.0 {
        return 0.0;
    }
    let rate = monthly_rate(annual_rate_pct);
    if rate == 0.0 {
        monthly_contribution * months
    } else {
        monthly_contribution * ((1.0 + rate).powf(months) - 1.0) / rate
    }
}

/// Reconstruct the asset's value at `as_of` from its baseline.
///
/// Baseline = the recorded override when present, else the acquisition
/// point. A baseline dated at or after `as_of` is returned unchanged — the
/// engine never extrapolates backward from a recorded value. Fund assets add
/// compounded contributions for the whole months elapsed since the baseline
/// date.
#[must_use]
pub fn reconstructed_current_value(asset: &Asset, as_of: Date) -> f64 {
    let (baseline, baseline_date) = asset.baseline();
    let elapsed = years_between(baseline_date, as_of);
    if elapsed <= 0.0 {
        return round_cents(baseline);
    }

    let value = match asset.kind {
        AssetKind::Fund {
            monthly_contribution,
        } => {
            let months = months_between(baseline_date, as_of).max(0);
            compound_value(baseline, asset.annual_return_pct, elapsed)
                + contribution_value(
                    monthly_contribution,
                    asset.annual_return_pct,
                    f64::from(months),
                )
        }
        _ => compound_value(baseline, asset.annual_return_pct, elapsed),
    };
    round_cents(value)
}

/// Project the asset `years` beyond `as_of`: reconstruct to `as_of` first,
/// then compound that value forward (contributions continuing for funds).
///
/// The composition matters — projecting straight from the acquisition
/// baseline would silently discard any recorded-value correction.
#[must_use]
pub fn projected_value(asset: &Asset, as_of: Date, years: f64) -> f64 {
    let current = reconstructed_current_value(asset, as_of);
    let value = match asset.kind {
        AssetKind::Fund {
            monthly_contribution,
        } => value_with_contributions(
            current,
            asset.annual_return_pct,
            years,
            monthly_contribution,
        ),
        _ => compound_value(current, asset.annual_return_pct, years),
    };
    round_cents(value)
}

/// Sum of reconstructed values across a portfolio.
#[must_use]
pub fn total_current_value(assets: &[Asset], as_of: Date) -> f64 {
    round_cents(
        assets
            .iter()
            .map(|a| reconstructed_current_value(a, as_of))
            .sum(),
    )
}

/// Amount actually put into the asset to date: the original investment plus
/// any fixed contributions made since the baseline date.
#[must_use]
pub fn contributed_to_date(asset: &Asset, as_of: Date) -> f64 {
    let (_, baseline_date) = asset.baseline();
    let months = months_between(baseline_date, as_of).max(0);
    round_cents(asset.invested + asset.monthly_contribution() * f64::from(months))
}

/// Sum of [`contributed_to_date`] across a portfolio.
#[must_use]
pub fn total_contributed(assets: &[Asset], as_of: Date) -> f64 {
    round_cents(assets.iter().map(|a| contributed_to_date(a, as_of)).sum())
}

/// Total gain: current value minus amount contributed.
#[must_use]
pub fn total_gain(assets: &[Asset], as_of: Date) -> f64 {
    round_cents(total_current_value(assets, as_of) - total_contributed(assets, as_of))
}

/// Gain as a percentage of the amount contributed; zero when nothing has
/// been contributed.
#[must_use]
pub fn gain_pct(assets: &[Asset], as_of: Date) -> f64 {
    let contributed = total_contributed(assets, as_of);
    if contributed == 0.0 {
        0.0
    } else {
        total_gain(assets, as_of) / contributed * 100.0
    }
}
