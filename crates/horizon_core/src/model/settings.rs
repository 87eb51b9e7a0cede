//! Horizon projection settings
//!
//! The settings are an explicit, immutable configuration value handed into
//! every horizon-engine call. Nothing in the engine reads ambient state; a
//! UI layer that lets the user tweak these knobs rebuilds the value and
//! calls again.

use serde::{Deserialize, Serialize};

use super::assets::AssetClass;

/// Caller-supplied projection configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HorizonSettings {
    /// Annual passive-income withdrawal rate for stocks, percent.
    pub stock_withdrawal_pct: f64,
    /// Annual passive-income withdrawal rate for funds, percent.
    pub fund_withdrawal_pct: f64,
    /// Annual passive-income withdrawal rate for crypto, percent.
    pub crypto_withdrawal_pct: f64,
    /// Annual growth applied to recorded rental income, percent.
    pub rental_growth_pct: f64,
    /// Flat baseline monthly expense added to every obligations total.
    pub monthly_expenses: f64,
    /// Optional interest rate applied uniformly to all liabilities for
    /// payment projections. Scenario-only: contracted balances are
    /// unaffected.
    pub rate_override_pct: Option<f64>,
    /// Project eligible liabilities as refinanced against their remaining
    /// balance.
    pub refinance_eligible_loans: bool,
    /// Project eligible liabilities as interest-only.
    pub interest_only_eligible_loans: bool,
}

impl Default for HorizonSettings {
    fn default() -> Self {
        Self {
            stock_withdrawal_pct: 0.0,
            fund_withdrawal_pct: 0.0,
            crypto_withdrawal_pct: 0.0,
            rental_growth_pct: 0.0,
            monthly_expenses: 0.0,
            rate_override_pct: None,
            refinance_eligible_loans: false,
            interest_only_eligible_loans: false,
        }
    }
}

impl HorizonSettings {
    /// Withdrawal rate for a non-rental asset class, percent. Real estate
    /// produces rental income instead of withdrawals and reports zero here.
    #[must_use]
    pub fn withdrawal_pct(&self, class: AssetClass) -> f64 {
        match class {
            AssetClass::Stock => self.stock_withdrawal_pct,
            AssetClass::Fund => self.fund_withdrawal_pct,
            AssetClass::Crypto => self.crypto_withdrawal_pct,
            AssetClass::RealEstate => 0.0,
        }
    }

    /// The per-liability payment options these settings imply.
    #[must_use]
    pub fn payment_options(&self) -> PaymentOptions {
        PaymentOptions {
            rate_override_pct: self.rate_override_pct,
            refinance: self.refinance_eligible_loans,
            interest_only: self.interest_only_eligible_loans,
        }
    }
}

/// Options for a single projected payment query. Refinancing and
/// interest-only only take effect on liabilities flagged as eligible.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentOptions {
    pub rate_override_pct: Option<f64>,
    pub refinance: bool,
    pub interest_only: bool,
}
