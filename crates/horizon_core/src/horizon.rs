//! Horizon summary engine
//!
//! Portfolio-level projection: monthly passive income against monthly
//! obligations, year by year, plus the crossover search — the first future
//! year at which income covers obligations. The search is a bounded linear
//! scan: the income and obligation curves are piecewise (loans mature,
//! refinancing introduces a discontinuity), so no closed-form inversion
//! exists and bisection buys nothing over 50 evaluations.

use jiff::civil::Date;

use crate::amortization::{balance_at, payment_at};
use crate::date_math::add_years;
use crate::model::{
    Asset, AssetClass, HorizonPoint, HorizonSettings, HorizonSummary, Liability, MonthlyIncome,
    PaymentBreakdown,
};
use crate::money::{pct, round_cents};
use crate::valuation::projected_value;

/// Upper bound of the crossover search, in years. A deliberate design
/// limit: projections beyond half a century are noise, and callers are
/// promised a bounded scan. Not derived from anything.
pub const MAX_HORIZON_YEARS: i32 = 50;

/// Projected monthly passive income `years` from `as_of`, broken down per
/// asset class.
///
/// Real-estate assets contribute their recorded rental income grown by the
/// settings' annual rental growth rate; every other class contributes its
/// projected value times the class withdrawal rate, divided down to a
/// monthly figure.
#[must_use]
pub fn monthly_income_at_year(
    assets: &[Asset],
    as_of: Date,
    years: i32,
    settings: &HorizonSettings,
) -> MonthlyIncome {
    let mut income = MonthlyIncome::default();
    for asset in assets {
        let class = asset.class();
        let monthly = match class {
            AssetClass::RealEstate => {
                asset.monthly_rental_income()
                    * (1.0 + pct(settings.rental_growth_pct)).powi(years)
            }
            _ => {
                projected_value(asset, as_of, f64::from(years))
                    * pct(settings.withdrawal_pct(class))
                    / 12.0
            }
        };
        match class {
            AssetClass::Stock => income.stocks += monthly,
            AssetClass::Fund => income.funds += monthly,
            AssetClass::Crypto => income.crypto += monthly,
            AssetClass::RealEstate => income.rental += monthly,
        }
        income.total += monthly;
    }
    income.stocks = round_cents(income.stocks);
    income.funds = round_cents(income.funds);
    income.crypto = round_cents(income.crypto);
    income.rental = round_cents(income.rental);
    income.total = round_cents(income.total);
    income
}

/// Total monthly obligations `month_offset` months from `as_of`: projected
/// loan payments for every liability under the settings' payment options,
/// plus the flat baseline expense (folded into the total only — it has no
/// interest/principal split).
#[must_use]
pub fn total_obligations_at_month(
    liabilities: &[Liability],
    as_of: Date,
    month_offset: i32,
    settings: &HorizonSettings,
) -> PaymentBreakdown {
    let options = settings.payment_options();
    let mut obligations = PaymentBreakdown::default();
    for liability in liabilities {
        obligations.add(payment_at(liability, as_of, month_offset, &options));
    }
    obligations.total += settings.monthly_expenses;
    obligations.total = round_cents(obligations.total);
    obligations.interest = round_cents(obligations.interest);
    obligations.principal = round_cents(obligations.principal);
    obligations
}

/// Projected net worth `years` from `as_of`: asset values minus liability
/// balances. Balances amortize at each loan's contracted rate — the
/// settings-level rate override is a payment scenario, not a rewritten loan.
#[must_use]
pub fn net_worth_at_year(
    assets: &[Asset],
    liabilities: &[Liability],
    as_of: Date,
    years: i32,
) -> f64 {
    let target = add_years(as_of, years);
    let asset_total: f64 = assets
        .iter()
        .map(|a| projected_value(a, as_of, f64::from(years)))
        .sum();
    let debt_total: f64 = liabilities.iter().map(|l| balance_at(l, None, target)).sum();
    round_cents(asset_total - debt_total)
}

/// One data point per year for `0..=max_years`, fresh on every call.
#[must_use]
pub fn build_horizon_series(
    assets: &[Asset],
    liabilities: &[Liability],
    as_of: Date,
    max_years: i32,
    settings: &HorizonSettings,
) -> Vec<HorizonPoint> {
    let mut series = Vec::with_capacity(max_years.max(0) as usize + 1);
    for year in 0..=max_years.max(0) {
        let income = monthly_income_at_year(assets, as_of, year, settings);
        let obligations = total_obligations_at_month(liabilities, as_of, year * 12, settings);
        series.push(HorizonPoint {
            year,
            surplus: round_cents(income.total - obligations.total),
            net_worth: net_worth_at_year(assets, liabilities, as_of, year),
            income,
            obligations,
        });
    }
    series
}

/// Summarize the portfolio today and locate the crossover year.
///
/// When obligations are already covered at year 0 the search is skipped and
/// the crossover is reported as year 0 on `as_of` itself. Otherwise years 1
/// through [`MAX_HORIZON_YEARS`] are scanned in order and the first year
/// whose projected income meets its projected obligations wins; exhausting
/// the scan yields `None` for both the year and the date.
#[must_use]
pub fn summarize(
    assets: &[Asset],
    liabilities: &[Liability],
    as_of: Date,
    settings: &HorizonSettings,
) -> HorizonSummary {
    let income = monthly_income_at_year(assets, as_of, 0, settings);
    let obligations = total_obligations_at_month(liabilities, as_of, 0, settings);

    let progress_pct = if obligations.total == 0.0 {
        if income.total > 0.0 { 100.0 } else { 0.0 }
    } else {
        (income.total / obligations.total * 100.0).min(100.0)
    };

    let already_crossed = income.total >= obligations.total;
    let (years_to_crossover, crossover_date) = if already_crossed {
        (Some(0), Some(as_of))
    } else {
        find_crossover(assets, liabilities, as_of, settings)
    };

    HorizonSummary {
        surplus: round_cents(income.total - obligations.total),
        net_worth: net_worth_at_year(assets, liabilities, as_of, 0),
        income,
        obligations,
        years_to_crossover,
        crossover_date,
        progress_pct,
        already_crossed,
    }
}

/// Bounded linear scan over years 1..=[`MAX_HORIZON_YEARS`].
fn find_crossover(
    assets: &[Asset],
    liabilities: &[Liability],
    as_of: Date,
    settings: &HorizonSettings,
) -> (Option<i32>, Option<Date>) {
    for year in 1..=MAX_HORIZON_YEARS {
        let income = monthly_income_at_year(assets, as_of, year, settings);
        let obligations = total_obligations_at_month(liabilities, as_of, year * 12, settings);
        if income.total >= obligations.total {
            return (Some(year), Some(add_years(as_of, year)));
        }
    }
    (None, None)
}
