//! Tests for the horizon summary engine
//!
//! These tests verify:
//! - Per-class monthly income (withdrawal rates, rental growth)
//! - Obligation totals with the flat baseline expense
//! - Net worth projection
//! - Series shape and internal consistency
//! - The bounded crossover search and its short-circuits

use jiff::civil::{Date, date};

use crate::date_math::add_years;
use crate::horizon::{
    MAX_HORIZON_YEARS, build_horizon_series, monthly_income_at_year, net_worth_at_year, summarize,
    total_obligations_at_month,
};
use crate::model::{
    Asset, AssetKind, HorizonSettings, Liability, LiabilityKind, RecordedValue, Repayment,
};

const AS_OF: Date = Date::constant(2025, 1, 1);

/// A stock pinned to an exact value today via a recorded baseline at `AS_OF`.
fn stock_worth(value: f64, annual_return_pct: f64) -> Asset {
    Asset {
        id: 1,
        name: "Stock".to_string(),
        acquired: date(2020, 1, 1),
        invested: value,
        annual_return_pct,
        recorded_value: Some(RecordedValue {
            value,
            date: AS_OF,
        }),
        kind: AssetKind::Stock,
    }
}

fn rental(monthly_rental_income: f64) -> Asset {
    Asset {
        id: 2,
        name: "Apartment".to_string(),
        acquired: date(2018, 1, 1),
        invested: 2_000_000.0,
        annual_return_pct: 3.0,
        recorded_value: None,
        kind: AssetKind::RealEstate {
            monthly_rental_income,
        },
    }
}

fn mortgage(principal: f64, term_months: i32) -> Liability {
    Liability {
        id: 1,
        name: "Mortgage".to_string(),
        kind: LiabilityKind::Mortgage,
        principal,
        annual_rate_pct: 3.6,
        start: AS_OF,
        term_months,
        repayment: Repayment::FixedPayment,
        refinance_eligible: false,
        interest_only_eligible: false,
    }
}

fn settings() -> HorizonSettings {
    HorizonSettings {
        stock_withdrawal_pct: 4.0,
        fund_withdrawal_pct: 4.0,
        crypto_withdrawal_pct: 2.0,
        rental_growth_pct: 3.0,
        ..HorizonSettings::default()
    }
}

#[test]
fn test_monthly_income_from_withdrawal_rate() {
    // 100_000 at a 4% withdrawal rate: 333.33/month
    let assets = [stock_worth(100_000.0, 8.0)];
    let income = monthly_income_at_year(&assets, AS_OF, 0, &settings());
    assert!(
        (income.total - 333.33).abs() < 0.01,
        "expected ~333.33/month, got {}",
        income.total
    );
    assert_eq!(income.total, income.stocks);
    assert_eq!(income.rental, 0.0);
}

#[test]
fn test_monthly_income_grows_with_projection() {
    let assets = [stock_worth(100_000.0, 8.0)];
    let year_0 = monthly_income_at_year(&assets, AS_OF, 0, &settings());
    let year_10 = monthly_income_at_year(&assets, AS_OF, 10, &settings());
    let expected = 100_000.0 * 1.08_f64.powi(10) * 0.04 / 12.0;
    assert!(year_10.total > year_0.total);
    assert!(
        (year_10.total - expected).abs() < 0.05,
        "expected ~{expected:.2}, got {}",
        year_10.total
    );
}

#[test]
fn test_rental_income_grows_at_rental_rate() {
    // Rental income ignores withdrawal rates entirely and grows
    // geometrically: 1_000 * 1.03^10
    let assets = [rental(1_000.0)];
    let income = monthly_income_at_year(&assets, AS_OF, 10, &settings());
    assert!(
        (income.rental - 1_343.92).abs() < 0.01,
        "expected ~1343.92, got {}",
        income.rental
    );
    assert_eq!(income.total, income.rental);
}

#[test]
fn test_obligations_fold_expenses_into_total_only() {
    let liabilities = [mortgage(300_000.0, 360)];
    let config = HorizonSettings {
        monthly_expenses: 250.0,
        ..settings()
    };
    let obligations = total_obligations_at_month(&liabilities, AS_OF, 0, &config);

    assert!((obligations.interest - 900.0).abs() < 0.01);
    assert!(
        (obligations.total - (900.0 + obligations.principal + 250.0)).abs() < 0.02,
        "expense must sit in the total, not the split: {obligations:?}"
    );
}

#[test]
fn test_obligations_drop_to_expenses_after_maturity() {
    let liabilities = [mortgage(300_000.0, 360)];
    let config = HorizonSettings {
        monthly_expenses: 250.0,
        ..settings()
    };
    let past = total_obligations_at_month(&liabilities, AS_OF, 400, &config);
    assert_eq!(past.total, 250.0);
    assert_eq!(past.interest, 0.0);
}

#[test]
fn test_net_worth_subtracts_balances() {
    // Zero-return asset worth 100_000, zero-rate loan of 120_000 over 120
    // months: after a year the balance is 108_000.
    let assets = [stock_worth(100_000.0, 0.0)];
    let liabilities = [Liability {
        annual_rate_pct: 0.0,
        ..mortgage(120_000.0, 120)
    }];

    assert_eq!(net_worth_at_year(&assets, &liabilities, AS_OF, 0), -20_000.0);
    assert_eq!(net_worth_at_year(&assets, &liabilities, AS_OF, 1), -8_000.0);
    assert_eq!(net_worth_at_year(&assets, &liabilities, AS_OF, 10), 100_000.0);
}

#[test]
fn test_series_shape_and_consistency() {
    let assets = [stock_worth(100_000.0, 8.0), rental(800.0)];
    let liabilities = [mortgage(300_000.0, 360)];
    let series = build_horizon_series(&assets, &liabilities, AS_OF, 10, &settings());

    assert_eq!(series.len(), 11);
    for (i, point) in series.iter().enumerate() {
        assert_eq!(point.year, i as i32);
        assert!(
            (point.surplus - (point.income.total - point.obligations.total)).abs() < 0.01,
            "surplus inconsistent at year {i}"
        );
    }
    assert_eq!(
        series[0].net_worth,
        net_worth_at_year(&assets, &liabilities, AS_OF, 0)
    );
}

#[test]
fn test_summary_already_crossed_short_circuits() {
    // Positive income, no liabilities, no baseline expense
    let assets = [stock_worth(100_000.0, 8.0)];
    let summary = summarize(&assets, &[], AS_OF, &settings());

    assert!(summary.already_crossed);
    assert_eq!(summary.years_to_crossover, Some(0));
    assert_eq!(summary.crossover_date, Some(AS_OF));
    assert_eq!(summary.progress_pct, 100.0);
    assert!((summary.income.total - 333.33).abs() < 0.01);
}

#[test]
fn test_summary_finds_crossover_year() {
    // Income starts at 333.33 and grows 8%/year against a flat 500/month
    // expense: 1.08^y >= 1.5 first holds at y = 6.
    let assets = [stock_worth(100_000.0, 8.0)];
    let config = HorizonSettings {
        monthly_expenses: 500.0,
        ..settings()
    };
    let summary = summarize(&assets, &[], AS_OF, &config);

    assert!(!summary.already_crossed);
    assert_eq!(summary.years_to_crossover, Some(6));
    assert_eq!(summary.crossover_date, Some(add_years(AS_OF, 6)));
    let expected_progress = 333.33 / 500.0 * 100.0;
    assert!(
        (summary.progress_pct - expected_progress).abs() < 0.01,
        "expected ~{expected_progress:.2}%, got {}",
        summary.progress_pct
    );
}

#[test]
fn test_summary_crossover_on_loan_maturity() {
    // Income never grows past the payment, but the loan matures after two
    // years and obligations collapse to zero.
    let assets = [stock_worth(10_000.0, 0.0)];
    let liabilities = [mortgage(50_000.0, 24)];
    let summary = summarize(&assets, &liabilities, AS_OF, &settings());

    assert_eq!(summary.years_to_crossover, Some(2));
}

#[test]
fn test_summary_no_crossover_within_bound() {
    // No income at all against a flat expense: the scan exhausts
    let config = HorizonSettings {
        monthly_expenses: 10_000.0,
        ..HorizonSettings::default()
    };
    let summary = summarize(&[], &[], AS_OF, &config);

    assert!(!summary.already_crossed);
    assert_eq!(summary.years_to_crossover, None);
    assert_eq!(summary.crossover_date, None);
    assert_eq!(summary.progress_pct, 0.0);
}

#[test]
fn test_summary_progress_guards() {
    // Nothing at all: zero income over zero obligations is 0%, not NaN
    let empty = summarize(&[], &[], AS_OF, &HorizonSettings::default());
    assert_eq!(empty.progress_pct, 0.0);
    assert!(empty.already_crossed, "0 >= 0 counts as covered");
    assert_eq!(empty.years_to_crossover, Some(0));
}

#[test]
fn test_search_bound_is_fifty_years() {
    assert_eq!(MAX_HORIZON_YEARS, 50);

    // An expense that income overtakes only just past the bound stays
    // unreachable: 333.33 * 1.08^50 ≈ 15_633, so pick a larger floor.
    let assets = [stock_worth(100_000.0, 8.0)];
    let config = HorizonSettings {
        monthly_expenses: 20_000.0,
        ..settings()
    };
    let summary = summarize(&assets, &[], AS_OF, &config);
    assert_eq!(summary.years_to_crossover, None);
}

#[test]
fn test_refinancing_toggle_lowers_projected_obligations() {
    let liabilities = [Liability {
        refinance_eligible: true,
        start: date(2015, 1, 1), // 120 months in at AS_OF
        ..mortgage(300_000.0, 360)
    }];

    let plain = total_obligations_at_month(&liabilities, AS_OF, 0, &settings());
    let refi_config = HorizonSettings {
        refinance_eligible_loans: true,
        ..settings()
    };
    let refinanced = total_obligations_at_month(&liabilities, AS_OF, 0, &refi_config);

    assert!(
        refinanced.total < plain.total,
        "stretching the remaining balance over 360 fresh months must lower the payment: {} vs {}",
        refinanced.total,
        plain.total
    );
}
