//! Input bounds and clamping rules shared by the calculators
//!
//! The product recomputes results on every input change, so out-of-range
//! values are clamped to the nearest bound rather than rejected. Non-finite
//! input (a field that failed to parse upstream) falls back to the field's
//! default instead of poisoning the calculation.

use serde::{Deserialize, Serialize};

/// Inclusive numeric range with a fallback default for non-finite input
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
    /// Substituted when the raw value is NaN or infinite
    pub default: f64,
}

impl Bounds {
    pub const fn new(min: f64, max: f64, default: f64) -> Self {
        Self { min, max, default }
    }

    /// Clamp a value into the range
    ///
    /// In-range values pass through unchanged; out-of-range values saturate
    /// at the violated bound; NaN and infinities take the default.
    pub fn clamp(&self, value: f64) -> f64 {
        if !value.is_finite() {
            return self.default;
        }
        value.clamp(self.min, self.max)
    }

    /// Whether a value is already within the range
    pub fn contains(&self, value: f64) -> bool {
        value.is_finite() && value >= self.min && value <= self.max
    }
}

/// SIP monthly investment in rupees
pub const SIP_MONTHLY_INVESTMENT: Bounds = Bounds::new(500.0, 1_000_000.0, 500.0);

/// SIP expected annual return rate in percent
pub const SIP_ANNUAL_RATE: Bounds = Bounds::new(1.0, 30.0, 1.0);

/// SIP investment period in years
pub const SIP_PERIOD_YEARS: Bounds = Bounds::new(1.0, 40.0, 1.0);

/// Loan principal in rupees
pub const EMI_LOAN_AMOUNT: Bounds = Bounds::new(1_000.0, 10_000_000.0, 1_000.0);

/// Loan annual interest rate in percent
pub const EMI_ANNUAL_RATE: Bounds = Bounds::new(1.0, 20.0, 1.0);

/// Loan tenure when expressed in years
pub const EMI_TENURE_YEARS: Bounds = Bounds::new(1.0, 30.0, 1.0);

/// Loan tenure when expressed in months
pub const EMI_TENURE_MONTHS: Bounds = Bounds::new(1.0, 365.0, 1.0);

/// Monthly income in rupees for the budget planner
pub const BUDGET_INCOME: Bounds = Bounds::new(0.0, 10_000_000.0, 0.0);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_range_value_unchanged() {
        assert_eq!(SIP_MONTHLY_INVESTMENT.clamp(5000.0), 5000.0);
        assert_eq!(EMI_ANNUAL_RATE.clamp(8.5), 8.5);
        assert_eq!(BUDGET_INCOME.clamp(0.0), 0.0);
    }

    #[test]
    fn test_out_of_range_saturates_at_bound() {
        assert_eq!(SIP_MONTHLY_INVESTMENT.clamp(100.0), 500.0);
        assert_eq!(SIP_MONTHLY_INVESTMENT.clamp(2_000_000.0), 1_000_000.0);
        assert_eq!(EMI_TENURE_YEARS.clamp(40.0), 30.0);
        assert_eq!(EMI_TENURE_MONTHS.clamp(400.0), 365.0);
    }

    #[test]
    fn test_clamp_is_idempotent() {
        for raw in [-5.0, 0.0, 17.3, 99.0, 1e9] {
            let once = SIP_ANNUAL_RATE.clamp(raw);
            assert_eq!(SIP_ANNUAL_RATE.clamp(once), once);
        }
    }

    #[test]
    fn test_non_finite_takes_default() {
        assert_eq!(SIP_MONTHLY_INVESTMENT.clamp(f64::NAN), 500.0);
        assert_eq!(SIP_ANNUAL_RATE.clamp(f64::INFINITY), 1.0);
        assert_eq!(EMI_LOAN_AMOUNT.clamp(f64::NEG_INFINITY), 1_000.0);
        assert_eq!(BUDGET_INCOME.clamp(f64::NAN), 0.0);
    }

    #[test]
    fn test_contains() {
        assert!(EMI_LOAN_AMOUNT.contains(1_000.0));
        assert!(EMI_LOAN_AMOUNT.contains(10_000_000.0));
        assert!(!EMI_LOAN_AMOUNT.contains(999.0));
        assert!(!EMI_LOAN_AMOUNT.contains(f64::NAN));
    }
}
