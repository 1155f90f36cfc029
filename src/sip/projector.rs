//! Future value of a recurring monthly investment
//!
//! Contributions post at the start of each month (annuity-due), so the
//! future value carries an extra `(1+r)` factor over the ordinary-annuity
//! formula. This matches the product's published numbers; do not "fix" it.

use serde::{Deserialize, Serialize};

use super::SipInput;

/// Cumulative snapshot at a year boundary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SipYearRow {
    pub year: u32,
    pub investment: u64,
    pub returns: u64,
    pub total_value: u64,
}

/// Complete projection output
///
/// Monetary fields are whole rupees, rounded once at storage; intermediate
/// math stays in unrounded floating point.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SipProjection {
    pub total_investment: u64,
    pub estimated_returns: u64,
    pub total_value: u64,
    pub yearly_breakdown: Vec<SipYearRow>,
}

/// Future value of `months` start-of-month contributions of `p` at monthly rate `r`
///
/// Zero-rate fallback: the rate floor makes `r == 0` unreachable through
/// clamped input, but the guard must survive future bound changes.
fn future_value(p: f64, r: f64, months: u32) -> f64 {
    let n = months as f64;
    if r == 0.0 {
        return p * n;
    }
    p * (((1.0 + r).powi(months as i32) - 1.0) / r) * (1.0 + r)
}

fn round_rupees(value: f64) -> u64 {
    value.round().max(0.0) as u64
}

/// Project the future value of a monthly SIP
///
/// Returns the aggregate totals plus a cumulative year-by-year breakdown
/// (each row re-evaluates the formula at `year * 12` months, it is not an
/// incremental delta).
pub fn project(input: &SipInput) -> SipProjection {
    let p = input.monthly_investment();
    let r = input.annual_return_rate() / 12.0 / 100.0;
    let years = input.whole_years();
    let months = years * 12;

    let invested = p * months as f64;
    let fv = future_value(p, r, months);

    let yearly_breakdown = (1..=years)
        .map(|year| {
            let m = year * 12;
            let year_invested = p * m as f64;
            let year_value = future_value(p, r, m);
            SipYearRow {
                year,
                investment: round_rupees(year_invested),
                returns: round_rupees(year_value - year_invested),
                total_value: round_rupees(year_value),
            }
        })
        .collect();

    SipProjection {
        total_investment: round_rupees(invested),
        estimated_returns: round_rupees(fv - invested),
        total_value: round_rupees(fv),
        yearly_breakdown,
    }
}
