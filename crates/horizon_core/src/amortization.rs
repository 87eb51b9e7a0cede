//! Amortization engine
//!
//! Payment schedules and pointwise payment/balance queries for both
//! repayment conventions. Everything is recomputed fresh per call; the only
//! error surface is [`build_schedule`] on malformed records. Pointwise
//! queries never fail: pre-origination queries clamp to the first period,
//! past-maturity queries report zero, degenerate records report zero.

use jiff::civil::Date;

use crate::date_math::months_between;
use crate::error::ScheduleError;
use crate::model::{Liability, PaymentBreakdown, PaymentOptions, Repayment, ScheduleEntry};
use crate::money::{monthly_rate, round_cents};

/// Fixed horizon for refinanced payment projections. Refinancing always
/// amortizes the remaining balance over a fresh 30-year term, independent of
/// the original loan's remaining term.
pub const REFINANCE_TERM_MONTHS: i32 = 360;

/// Constant total payment for an annuity loan. Zero rate degenerates to
/// straight-line `principal / term`; a non-positive term yields 0.
#[must_use]
pub fn fixed_payment(principal: f64, annual_rate_pct: f64, term_months: i32) -> f64 {
    round_cents(raw_fixed_payment(
        principal,
        monthly_rate(annual_rate_pct),
        term_months,
    ))
}

/// Constant principal portion for a serial loan: `principal / term`, 0 for
/// a non-positive term.
#[must_use]
pub fn fixed_principal_portion(principal: f64, term_months: i32) -> f64 {
    if term_months <= 0 {
        0.0
    } else {
        round_cents(principal / f64::from(term_months))
    }
}

/// Unrounded annuity payment, shared by the schedule builder and the
/// pointwise queries so per-period interest splits stay consistent.
fn raw_fixed_payment(principal: f64, rate: f64, term_months: i32) -> f64 {
    if term_months <= 0 {
        return 0.0;
    }
    let n = f64::from(term_months);
    if rate == 0.0 {
        principal / n
    } else {
        let factor = (1.0 + rate).powf(n);
        principal * rate * factor / (factor - 1.0)
    }
}

/// Build the full payment schedule, one entry per month of the term.
///
/// Fixed-payment loans pay constant totals with interest computed on the
/// running balance; fixed-principal loans pay a constant principal portion
/// with strictly decreasing interest. The running balance is floored at zero
/// so rounding drift cannot leave a residual on the final period.
///
/// # Errors
///
/// A non-positive principal or term violates the record invariants and is
/// rejected rather than amortized into nonsense.
pub fn build_schedule(
    liability: &Liability,
    rate_override_pct: Option<f64>,
) -> Result<Vec<ScheduleEntry>, ScheduleError> {
    if liability.principal <= 0.0 {
        return Err(ScheduleError::NonPositivePrincipal(liability.principal));
    }
    if liability.term_months <= 0 {
        return Err(ScheduleError::NonPositiveTerm(liability.term_months));
    }

    let rate = liability.effective_monthly_rate(rate_override_pct);
    let term = liability.term_months;
    let mut schedule = Vec::with_capacity(term as usize);
    let mut balance = liability.principal;

    match liability.repayment {
        Repayment::FixedPayment => {
            let payment = raw_fixed_payment(liability.principal, rate, term);
            for month in 0..term {
                let interest = balance * rate;
                let principal = payment - interest;
                balance = (balance - principal).max(0.0);
                schedule.push(ScheduleEntry {
                    month,
                    payment: round_cents(payment),
                    principal: round_cents(principal),
                    interest: round_cents(interest),
                    remaining_balance: round_cents(balance),
                });
            }
        }
        Repayment::FixedPrincipal => {
            let principal_portion = liability.principal / f64::from(term);
            for month in 0..term {
                let interest = balance * rate;
                balance = (balance - principal_portion).max(0.0);
                schedule.push(ScheduleEntry {
                    month,
                    payment: round_cents(principal_portion + interest),
                    principal: round_cents(principal_portion),
                    interest: round_cents(interest),
                    remaining_balance: round_cents(balance),
                });
            }
        }
    }

    Ok(schedule)
}

/// Unrounded remaining balance after `months` payments, closed form.
fn balance_after_months(liability: &Liability, rate_override_pct: Option<f64>, months: i32) -> f64 {
    if liability.principal <= 0.0 || liability.term_months <= 0 {
        return 0.0;
    }
    if months <= 0 {
        return liability.principal;
    }
    if months >= liability.term_months {
        return 0.0;
    }

    let rate = liability.effective_monthly_rate(rate_override_pct);
    let m = f64::from(months);
    match liability.repayment {
        Repayment::FixedPayment => {
            if rate == 0.0 {
                liability.principal * (1.0 - m / f64::from(liability.term_months))
            } else {
                let payment = raw_fixed_payment(liability.principal, rate, liability.term_months);
                let factor = (1.0 + rate).powf(m);
                (liability.principal * factor - payment * (factor - 1.0) / rate).max(0.0)
            }
        }
        Repayment::FixedPrincipal => {
            liability.principal * (1.0 - m / f64::from(liability.term_months))
        }
    }
}

/// Remaining balance on `target`: full principal before origination, zero at
/// or past maturity, otherwise the contracted schedule's balance at that
/// whole-month offset.
#[must_use]
pub fn balance_at(liability: &Liability, rate_override_pct: Option<f64>, target: Date) -> f64 {
    let months = months_between(liability.start, target);
    round_cents(balance_after_months(liability, rate_override_pct, months))
}

/// Payment for a refinanced liability `months_ahead` from `as_of`: a fresh
/// fixed-payment amortization of the current remaining balance over
/// [`REFINANCE_TERM_MONTHS`], at the override rate when given, else the
/// liability's own rate. This is an independent schedule starting at the
/// query month, not a continuation of the original one.
#[must_use]
pub fn refinanced_payment(
    liability: &Liability,
    as_of: Date,
    months_ahead: i32,
    rate_override_pct: Option<f64>,
) -> PaymentBreakdown {
    let elapsed = months_between(liability.start, as_of) + months_ahead;
    // Balance comes from the contracted schedule; the scenario rate only
    // shapes the new payment.
    let balance = balance_after_months(liability, None, elapsed.max(0));
    if balance <= 0.0 {
        return PaymentBreakdown::default();
    }

    let rate = liability.effective_monthly_rate(rate_override_pct);
    let total = raw_fixed_payment(balance, rate, REFINANCE_TERM_MONTHS);
    let interest = balance * rate;
    PaymentBreakdown {
        total: round_cents(total),
        interest: round_cents(interest),
        principal: round_cents(total - interest),
    }
}

/// Projected payment `months_ahead` from `as_of` under the given options.
///
/// Dispatch order: refinancing (when requested and the loan is eligible),
/// interest-only (when requested and eligible: interest on the balance at
/// the query month, no principal), otherwise the original schedule's entry
/// at that month — clamped to the first entry before origination and to
/// zero past maturity.
#[must_use]
pub fn payment_at(
    liability: &Liability,
    as_of: Date,
    months_ahead: i32,
    options: &PaymentOptions,
) -> PaymentBreakdown {
    if liability.principal <= 0.0 || liability.term_months <= 0 {
        return PaymentBreakdown::default();
    }

    if options.refinance && liability.refinance_eligible {
        return refinanced_payment(liability, as_of, months_ahead, options.rate_override_pct);
    }

    // Clamp: months before origination behave like the first period.
    let month = (months_between(liability.start, as_of) + months_ahead).max(0);
    if month >= liability.term_months {
        return PaymentBreakdown::default();
    }

    let rate = liability.effective_monthly_rate(options.rate_override_pct);
    let balance = balance_after_months(liability, options.rate_override_pct, month);

    if options.interest_only && liability.interest_only_eligible {
        let interest = round_cents(balance * rate);
        return PaymentBreakdown {
            total: interest,
            interest,
            principal: 0.0,
        };
    }

    let interest = balance * rate;
    let total = match liability.repayment {
        Repayment::FixedPayment => raw_fixed_payment(liability.principal, rate, liability.term_months),
        Repayment::FixedPrincipal => {
            liability.principal / f64::from(liability.term_months) + interest
        }
    };
    PaymentBreakdown {
        total: round_cents(total),
        interest: round_cents(interest),
        principal: round_cents(total - interest),
    }
}
