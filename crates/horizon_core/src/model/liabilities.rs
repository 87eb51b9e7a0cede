//! Liability records

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LiabilityKind {
    Mortgage,
    StudentLoan,
    CarLoan,
    PersonalLoan,
    Other,
}

/// Repayment convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Repayment {
    /// Annuity loan: constant total payment, interest portion declines and
    /// principal portion grows over the term.
    FixedPayment,
    /// Serial loan: constant principal portion, total payment declines as
    /// interest shrinks.
    FixedPrincipal,
}

/// A user-entered liability record. Immutable input to the engine.
///
/// Principal and term must be strictly positive for a schedule to exist;
/// [`crate::amortization::build_schedule`] rejects anything else. A
/// liability whose elapsed months meet or exceed the term is fully
/// amortized — balance zero — no matter what the schedule would say.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Liability {
    pub id: u64,
    pub name: String,
    pub kind: LiabilityKind,
    pub principal: f64,
    /// Annual interest rate in percent (3.6 = 3.6%).
    pub annual_rate_pct: f64,
    /// Origination date; month 0 of the schedule.
    pub start: Date,
    pub term_months: i32,
    pub repayment: Repayment,
    /// Whether the refinancing toggle in the horizon settings applies to
    /// this loan.
    pub refinance_eligible: bool,
    /// Whether the interest-only toggle in the horizon settings applies to
    /// this loan.
    pub interest_only_eligible: bool,
}

impl Liability {
    /// Monthly fractional interest rate, using the override when supplied.
    #[must_use]
    pub(crate) fn effective_monthly_rate(&self, rate_override_pct: Option<f64>) -> f64 {
        crate::money::monthly_rate(rate_override_pct.unwrap_or(self.annual_rate_pct))
    }
}
