//! SIP input snapshot with per-field clamping

use serde::{Deserialize, Serialize};

use crate::bounds::{SIP_ANNUAL_RATE, SIP_MONTHLY_INVESTMENT, SIP_PERIOD_YEARS};

/// Inputs to a SIP projection
///
/// Fields are clamped at construction and on every setter, so a projection
/// always sees in-range values regardless of what the caller typed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SipInput {
    monthly_investment: f64,
    annual_return_rate: f64,
    period_years: f64,
}

impl SipInput {
    /// Create a clamped input snapshot
    pub fn new(monthly_investment: f64, annual_return_rate: f64, period_years: f64) -> Self {
        Self {
            monthly_investment: SIP_MONTHLY_INVESTMENT.clamp(monthly_investment),
            annual_return_rate: SIP_ANNUAL_RATE.clamp(annual_return_rate),
            period_years: SIP_PERIOD_YEARS.clamp(period_years),
        }
    }

    pub fn set_monthly_investment(&mut self, value: f64) {
        self.monthly_investment = SIP_MONTHLY_INVESTMENT.clamp(value);
    }

    pub fn set_annual_return_rate(&mut self, value: f64) {
        self.annual_return_rate = SIP_ANNUAL_RATE.clamp(value);
    }

    pub fn set_period_years(&mut self, value: f64) {
        self.period_years = SIP_PERIOD_YEARS.clamp(value);
    }

    pub fn monthly_investment(&self) -> f64 {
        self.monthly_investment
    }

    pub fn annual_return_rate(&self) -> f64 {
        self.annual_return_rate
    }

    pub fn period_years(&self) -> f64 {
        self.period_years
    }

    /// Investment period in whole years for the breakdown loop
    pub fn whole_years(&self) -> u32 {
        self.period_years.round() as u32
    }
}
