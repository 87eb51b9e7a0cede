use std::fmt;

/// Errors raised when a payment schedule is explicitly requested for a
/// liability that cannot have one.
///
/// This is the only failure surface in the crate. Numeric edge cases (zero
/// rate, pre-origination dates, past-maturity queries) are defined return
/// values, not errors; a non-positive principal or term is malformed input
/// that callers are expected to validate, and producing a schedule for it
/// would yield silently wrong numbers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScheduleError {
    NonPositivePrincipal(f64),
    NonPositiveTerm(i32),
}

impl fmt::Display for ScheduleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScheduleError::NonPositivePrincipal(p) => {
                write!(f, "cannot amortize non-positive principal {p}")
            }
            ScheduleError::NonPositiveTerm(t) => {
                write!(f, "cannot amortize over non-positive term of {t} months")
            }
        }
    }
}

impl std::error::Error for ScheduleError {}
