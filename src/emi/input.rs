//! Loan input snapshot with per-field clamping and tenure-unit handling

use serde::{Deserialize, Serialize};

use crate::bounds::{
    Bounds, EMI_ANNUAL_RATE, EMI_LOAN_AMOUNT, EMI_TENURE_MONTHS, EMI_TENURE_YEARS,
};

/// Unit in which a loan tenure is expressed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TenureUnit {
    Years,
    Months,
}

impl TenureUnit {
    /// Tenure bounds for this unit
    pub fn tenure_bounds(&self) -> Bounds {
        match self {
            TenureUnit::Years => EMI_TENURE_YEARS,
            TenureUnit::Months => EMI_TENURE_MONTHS,
        }
    }
}

/// Inputs to an amortization run
///
/// Clamped at construction and on every setter. The tenure number is stored
/// in the currently selected unit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmiInput {
    loan_amount: f64,
    annual_interest_rate: f64,
    tenure: f64,
    tenure_unit: TenureUnit,
}

impl EmiInput {
    /// Create a clamped input snapshot
    pub fn new(loan_amount: f64, annual_interest_rate: f64, tenure: f64, unit: TenureUnit) -> Self {
        Self {
            loan_amount: EMI_LOAN_AMOUNT.clamp(loan_amount),
            annual_interest_rate: EMI_ANNUAL_RATE.clamp(annual_interest_rate),
            tenure: unit.tenure_bounds().clamp(tenure),
            tenure_unit: unit,
        }
    }

    pub fn set_loan_amount(&mut self, value: f64) {
        self.loan_amount = EMI_LOAN_AMOUNT.clamp(value);
    }

    pub fn set_annual_interest_rate(&mut self, value: f64) {
        self.annual_interest_rate = EMI_ANNUAL_RATE.clamp(value);
    }

    pub fn set_tenure(&mut self, value: f64) {
        self.tenure = self.tenure_unit.tenure_bounds().clamp(value);
    }

    /// Switch the tenure unit, keeping the tenure number
    ///
    /// The existing value is re-clamped to the new unit's bounds; it is
    /// never converted or rejected. `20` years becomes `20` months.
    pub fn set_tenure_unit(&mut self, unit: TenureUnit) {
        self.tenure_unit = unit;
        self.tenure = unit.tenure_bounds().clamp(self.tenure);
    }

    pub fn loan_amount(&self) -> f64 {
        self.loan_amount
    }

    pub fn annual_interest_rate(&self) -> f64 {
        self.annual_interest_rate
    }

    pub fn tenure(&self) -> f64 {
        self.tenure
    }

    pub fn tenure_unit(&self) -> TenureUnit {
        self.tenure_unit
    }

    /// Tenure converted to whole months; at least 1 by the clamp bounds
    pub fn total_months(&self) -> u32 {
        match self.tenure_unit {
            TenureUnit::Years => (self.tenure * 12.0).round() as u32,
            TenureUnit::Months => self.tenure.round() as u32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_clamps_all_fields() {
        let input = EmiInput::new(500.0, 25.0, 40.0, TenureUnit::Years);
        assert_eq!(input.loan_amount(), 1_000.0);
        assert_eq!(input.annual_interest_rate(), 20.0);
        assert_eq!(input.tenure(), 30.0);
    }

    #[test]
    fn test_non_numeric_falls_back_to_floor() {
        let input = EmiInput::new(f64::NAN, f64::INFINITY, f64::NAN, TenureUnit::Months);
        assert_eq!(input.loan_amount(), 1_000.0);
        assert_eq!(input.annual_interest_rate(), 1.0);
        assert_eq!(input.tenure(), 1.0);
    }

    #[test]
    fn test_tenure_bounds_follow_unit() {
        let years = EmiInput::new(100_000.0, 10.0, 200.0, TenureUnit::Years);
        assert_eq!(years.tenure(), 30.0);

        let months = EmiInput::new(100_000.0, 10.0, 200.0, TenureUnit::Months);
        assert_eq!(months.tenure(), 200.0);

        let months_capped = EmiInput::new(100_000.0, 10.0, 400.0, TenureUnit::Months);
        assert_eq!(months_capped.tenure(), 365.0);
    }

    #[test]
    fn test_unit_switch_keeps_in_range_tenure() {
        let mut input = EmiInput::new(1_000_000.0, 8.5, 20.0, TenureUnit::Years);
        input.set_tenure_unit(TenureUnit::Months);
        // 20 <= 365, so the number carries over untouched
        assert_eq!(input.tenure(), 20.0);
        assert_eq!(input.total_months(), 20);
    }

    #[test]
    fn test_unit_switch_reclamps_only_when_needed() {
        // 40 years is clamped to 30 on entry; switching to months keeps 30
        let mut input = EmiInput::new(1_000_000.0, 8.5, 40.0, TenureUnit::Years);
        assert_eq!(input.tenure(), 30.0);
        input.set_tenure_unit(TenureUnit::Months);
        assert_eq!(input.tenure(), 30.0);

        // 365 months exceeds the years cap when switching back
        let mut input = EmiInput::new(1_000_000.0, 8.5, 365.0, TenureUnit::Months);
        input.set_tenure_unit(TenureUnit::Years);
        assert_eq!(input.tenure(), 30.0);
    }

    #[test]
    fn test_total_months() {
        let years = EmiInput::new(1_000_000.0, 8.5, 20.0, TenureUnit::Years);
        assert_eq!(years.total_months(), 240);

        let months = EmiInput::new(1_000_000.0, 8.5, 18.0, TenureUnit::Months);
        assert_eq!(months.total_months(), 18);
    }
}
