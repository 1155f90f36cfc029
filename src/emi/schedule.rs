//! Amortization schedule output structures and sampling policy

use serde::{Deserialize, Serialize};

/// Which months of the amortization loop are recorded
///
/// The dashboard keeps a sparse schedule to bound row volume over long
/// tenures; `Full` records every month for callers that need exact detail.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScheduleSampling {
    /// Month 1, the final month, and every 12th month
    #[default]
    Yearly,
    /// Every month
    Full,
}

impl ScheduleSampling {
    /// Whether `month` (1-indexed) is recorded out of `total_months`
    pub fn keeps(&self, month: u32, total_months: u32) -> bool {
        match self {
            ScheduleSampling::Full => true,
            ScheduleSampling::Yearly => {
                month == 1 || month == total_months || month % 12 == 0
            }
        }
    }
}

/// One recorded month of a loan's life
///
/// Values are whole rupees, rounded at the point of recording.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleRow {
    pub month: u32,
    pub year: u32,
    pub emi: u64,
    pub principal: u64,
    pub interest: u64,
    /// Outstanding principal after this month's payment, floored at zero
    pub balance: u64,
}

/// Complete amortization output
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmortizationResult {
    pub emi: u64,
    pub total_interest: u64,
    pub total_payment: u64,
    pub schedule: Vec<ScheduleRow>,
}
