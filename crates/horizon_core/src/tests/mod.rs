//! Integration tests for the projection engine
//!
//! Tests are organized by topic:
//! - `valuation` - Compounding, dual-baseline reconstruction, aggregates
//! - `amortization` - Payments, schedules, balances, refinancing
//! - `horizon` - Income vs obligations, series, crossover search
//! - `records` - Serde round-trips of the input records

mod horizon;
