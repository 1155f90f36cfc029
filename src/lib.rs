//! NiveshPath Core - financial calculation engine for the NiveshPath app
//!
//! This library provides:
//! - SIP future-value projection with year-by-year breakdown
//! - EMI calculation with a sampled amortization schedule
//! - Budget aggregation over a categorized expense ledger
//! - Explicit input clamping rules shared with the product UI
//! - Scenario runner for rate-sensitivity sweeps

pub mod bounds;
pub mod budget;
pub mod emi;
pub mod scenario;
pub mod sip;

// Re-export commonly used types
pub use bounds::Bounds;
pub use budget::{BudgetError, BudgetLedger, BudgetSummary, Expense};
pub use emi::{amortize, AmortizationResult, EmiInput, ScheduleSampling, TenureUnit};
pub use scenario::ScenarioRunner;
pub use sip::{project, SipInput, SipProjection};
