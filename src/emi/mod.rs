//! EMI calculation and loan amortization

mod engine;
mod input;
mod schedule;

pub use engine::amortize;
pub use input::{EmiInput, TenureUnit};
pub use schedule::{AmortizationResult, ScheduleRow, ScheduleSampling};
