//! Financial projection engine
//!
//! This crate is the numeric core of a personal financial tracker. It turns
//! point-in-time records — an asset's acquisition value, expected return and
//! optional manually recorded correction; a liability's principal, rate,
//! term and repayment convention — into time-indexed projections:
//! - reconstructed current values from either valuation baseline
//! - compound future values with monthly savings-plan contributions
//! - full amortization schedules for annuity and serial loans, with
//!   refinancing and interest-only payment scenarios
//! - a year-by-year horizon series of passive income vs obligations and the
//!   crossover year at which income first covers them
//!
//! Every function is a pure computation over its explicit inputs: no I/O,
//! no caching, no ambient clock. Callers pass the `as_of` date (use
//! `jiff::Zoned::now().date()` for wall-clock behavior), so results are
//! reproducible under test with a fixed instant, and concurrent callers
//! need no coordination.
//!
//! ```
//! use horizon_core::model::{Asset, AssetKind};
//! use horizon_core::valuation::reconstructed_current_value;
//!
//! let asset = Asset {
//!     id: 1,
//!     name: "Index fund".into(),
//!     acquired: jiff::civil::date(2022, 6, 15),
//!     invested: 10_000.0,
//!     annual_return_pct: 8.0,
//!     recorded_value: None,
//!     kind: AssetKind::Stock,
//! };
//! let value = reconstructed_current_value(&asset, jiff::civil::date(2025, 6, 15));
//! assert!((value - 10_000.0 * 1.08_f64.powf(1096.0 / 365.25)).abs() < 0.01);
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod amortization;
pub mod date_math;
pub mod error;
pub mod horizon;
pub mod money;
pub mod valuation;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use error::ScheduleError;
pub use horizon::MAX_HORIZON_YEARS;
pub use model::{
    Asset, AssetClass, AssetKind, HorizonPoint, HorizonSettings, HorizonSummary, Liability,
    LiabilityKind, MonthlyIncome, PaymentBreakdown, PaymentOptions, RecordedValue, Repayment,
    ScheduleEntry,
};
