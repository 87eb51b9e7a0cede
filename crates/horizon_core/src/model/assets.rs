//! Asset records
//!
//! Assets are point-in-time records entered by the user: what was paid,
//! when, and what annual return is expected. The engine reconstructs any
//! later value from those facts; it never stores a computed value back.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

/// A manually recorded valuation that replaces the acquisition baseline.
///
/// When present, this `(value, date)` pair is the sole starting point for
/// every valuation query — the original invested amount and acquisition date
/// are never blended back in. This is what lets a user correct a stale
/// valuation without losing the acquisition history needed for total-return
/// accounting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RecordedValue {
    pub value: f64,
    pub date: Date,
}

/// Asset class tag, used for per-class withdrawal rates and income
/// breakdowns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssetClass {
    Stock,
    Fund,
    RealEstate,
    Crypto,
}

/// Per-class payload. Funds carry a fixed monthly savings-plan contribution;
/// real estate carries its current recorded monthly rental income.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum AssetKind {
    Stock,
    Fund { monthly_contribution: f64 },
    RealEstate { monthly_rental_income: f64 },
    Crypto,
}

impl AssetKind {
    #[must_use]
    pub fn class(&self) -> AssetClass {
        match self {
            AssetKind::Stock => AssetClass::Stock,
            AssetKind::Fund { .. } => AssetClass::Fund,
            AssetKind::RealEstate { .. } => AssetClass::RealEstate,
            AssetKind::Crypto => AssetClass::Crypto,
        }
    }
}

/// A user-entered asset record. Immutable input to the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    pub id: u64,
    pub name: String,
    /// Acquisition date — the original valuation baseline.
    pub acquired: Date,
    /// Originally invested amount.
    pub invested: f64,
    /// Expected annual return in percent (8.0 = 8%).
    pub annual_return_pct: f64,
    /// Optional manual baseline override; see [`RecordedValue`].
    pub recorded_value: Option<RecordedValue>,
    pub kind: AssetKind,
}

impl Asset {
    #[must_use]
    pub fn class(&self) -> AssetClass {
        self.kind.class()
    }

    /// The valuation baseline: the recorded override when present, otherwise
    /// the acquisition pair.
    #[must_use]
    pub fn baseline(&self) -> (f64, Date) {
        match self.recorded_value {
            Some(rv) => (rv.value, rv.date),
            None => (self.invested, self.acquired),
        }
    }

    /// Fixed monthly contribution, zero for non-fund assets.
    #[must_use]
    pub fn monthly_contribution(&self) -> f64 {
        match self.kind {
            AssetKind::Fund {
                monthly_contribution,
            } => monthly_contribution,
            _ => 0.0,
        }
    }

    /// Recorded monthly rental income, zero for non-real-estate assets.
    #[must_use]
    pub fn monthly_rental_income(&self) -> f64 {
        match self.kind {
            AssetKind::RealEstate {
                monthly_rental_income,
            } => monthly_rental_income,
            _ => 0.0,
        }
    }
}
