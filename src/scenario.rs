//! Scenario runner for batch calculator runs
//!
//! Holds shared run settings once, then sweeps many input variations
//! without re-stating them per call.

use rayon::prelude::*;

use crate::emi::{amortize, AmortizationResult, EmiInput, ScheduleSampling};
use crate::sip::{project, SipInput, SipProjection};

/// Pre-configured runner for sensitivity sweeps
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::new();
/// let base = SipInput::new(5000.0, 12.0, 10.0);
/// let results = runner.sip_rate_sweep(&base, &[8.0, 10.0, 12.0, 15.0]);
/// ```
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    sampling: ScheduleSampling,
}

impl ScenarioRunner {
    /// Create a runner with the default yearly-sampled schedule
    pub fn new() -> Self {
        Self {
            sampling: ScheduleSampling::default(),
        }
    }

    /// Create a runner with an explicit schedule sampling policy
    pub fn with_sampling(sampling: ScheduleSampling) -> Self {
        Self { sampling }
    }

    pub fn sampling(&self) -> ScheduleSampling {
        self.sampling
    }

    /// Run a single SIP projection
    pub fn run_sip(&self, input: &SipInput) -> SipProjection {
        project(input)
    }

    /// Run a single amortization with the runner's sampling policy
    pub fn run_emi(&self, input: &EmiInput) -> AmortizationResult {
        amortize(input, self.sampling)
    }

    /// Project the same SIP at several expected-return rates
    ///
    /// Each rate is clamped through the normal input path, so out-of-band
    /// sweep points collapse onto the nearest bound.
    pub fn sip_rate_sweep(&self, base: &SipInput, rates: &[f64]) -> Vec<SipProjection> {
        rates
            .par_iter()
            .map(|&rate| {
                let mut scenario = base.clone();
                scenario.set_annual_return_rate(rate);
                project(&scenario)
            })
            .collect()
    }

    /// Amortize the same loan at several interest rates
    pub fn emi_rate_sweep(&self, base: &EmiInput, rates: &[f64]) -> Vec<AmortizationResult> {
        rates
            .par_iter()
            .map(|&rate| {
                let mut scenario = base.clone();
                scenario.set_annual_interest_rate(rate);
                amortize(&scenario, self.sampling)
            })
            .collect()
    }

    /// Amortize a batch of independent loans with the same sampling policy
    pub fn run_emi_batch(&self, inputs: &[EmiInput]) -> Vec<AmortizationResult> {
        inputs
            .par_iter()
            .map(|input| amortize(input, self.sampling))
            .collect()
    }
}

impl Default for ScenarioRunner {
    fn default() -> Self {
        Self::new()
    }
}
