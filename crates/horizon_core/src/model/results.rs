//! Derived result structures
//!
//! Everything here is a value object: computed fresh on every engine call,
//! carrying no identity and never persisted by the engine. Monetary fields
//! are rounded to cents before the structures are returned; display
//! formatting (currency symbols, locale) is the caller's job.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

/// One period of an amortization schedule. `month` is 0-based from the
/// liability's start date; `remaining_balance` is the balance after this
/// period's payment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub month: i32,
    pub payment: f64,
    pub principal: f64,
    pub interest: f64,
    pub remaining_balance: f64,
}

/// A single projected monthly payment, split into its components.
/// `total` may exceed `interest + principal` at the portfolio level, where
/// the flat baseline expense is folded into the total only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentBreakdown {
    pub total: f64,
    pub interest: f64,
    pub principal: f64,
}

impl PaymentBreakdown {
    pub(crate) fn add(&mut self, other: PaymentBreakdown) {
        self.total += other.total;
        self.interest += other.interest;
        self.principal += other.principal;
    }
}

/// Projected monthly passive income with its per-class breakdown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MonthlyIncome {
    pub total: f64,
    pub stocks: f64,
    pub funds: f64,
    pub crypto: f64,
    pub rental: f64,
}

/// One year of the horizon series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HorizonPoint {
    /// Years from the projection's `as_of` date (0 = today).
    pub year: i32,
    pub income: MonthlyIncome,
    pub obligations: PaymentBreakdown,
    /// `income.total - obligations.total`.
    pub surplus: f64,
    pub net_worth: f64,
}

/// Portfolio-level summary with the crossover search result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HorizonSummary {
    /// Monthly passive income at year 0.
    pub income: MonthlyIncome,
    /// Monthly obligations at month 0.
    pub obligations: PaymentBreakdown,
    pub surplus: f64,
    pub net_worth: f64,
    /// First year (1-based offset from `as_of`) at which income covers
    /// obligations; `Some(0)` when already covered today; `None` when no
    /// crossover occurs within [`crate::horizon::MAX_HORIZON_YEARS`].
    pub years_to_crossover: Option<i32>,
    pub crossover_date: Option<Date>,
    /// Income as a share of obligations, 0–100.
    pub progress_pct: f64,
    pub already_crossed: bool,
}
