mod assets;
mod liabilities;
mod results;
mod settings;

pub use assets::{Asset, AssetClass, AssetKind, RecordedValue};
pub use liabilities::{Liability, LiabilityKind, Repayment};
pub use results::{HorizonPoint, HorizonSummary, MonthlyIncome, PaymentBreakdown, ScheduleEntry};
pub use settings::{HorizonSettings, PaymentOptions};
