//! Rate-sensitivity sweep across the SIP and EMI calculators
//!
//! Runs both engines over a band of annual rates in parallel and prints a
//! comparison table, plus a CSV for spreadsheet review.
//! Supports JSON output via --json flag.
//! Accepts config via environment variables:
//!   SIP_MONTHLY, SIP_YEARS, EMI_AMOUNT, EMI_TENURE_YEARS

use std::env;
use std::fs::File;
use std::io::Write;
use std::time::Instant;

use serde::Serialize;

use niveshpath_core::emi::{EmiInput, TenureUnit};
use niveshpath_core::sip::SipInput;
use niveshpath_core::ScenarioRunner;

#[derive(Serialize)]
struct SweepRow {
    rate_pct: f64,
    sip_total_value: u64,
    sip_estimated_returns: u64,
    emi: u64,
    emi_total_interest: u64,
    emi_total_payment: u64,
}

#[derive(Serialize)]
struct SweepResponse {
    sip_monthly: f64,
    sip_years: f64,
    emi_amount: f64,
    emi_tenure_years: f64,
    rows: Vec<SweepRow>,
    execution_time_ms: u64,
}

fn env_f64(name: &str, default: f64) -> f64 {
    env::var(name)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

fn main() {
    env_logger::init();

    let json_output = env::args().any(|arg| arg == "--json");
    let start = Instant::now();

    let sip_monthly = env_f64("SIP_MONTHLY", 5_000.0);
    let sip_years = env_f64("SIP_YEARS", 10.0);
    let emi_amount = env_f64("EMI_AMOUNT", 1_000_000.0);
    let emi_tenure_years = env_f64("EMI_TENURE_YEARS", 20.0);

    // 6% to 15% in half-point steps, inside both calculators' rate bands
    let rates: Vec<f64> = (12..=30).map(|i| i as f64 / 2.0).collect();

    let runner = ScenarioRunner::new();
    let sip_base = SipInput::new(sip_monthly, rates[0], sip_years);
    let emi_base = EmiInput::new(emi_amount, rates[0], emi_tenure_years, TenureUnit::Years);

    let sip_results = runner.sip_rate_sweep(&sip_base, &rates);
    let emi_results = runner.emi_rate_sweep(&emi_base, &rates);

    let rows: Vec<SweepRow> = rates
        .iter()
        .zip(sip_results.iter().zip(emi_results.iter()))
        .map(|(&rate_pct, (sip, emi))| SweepRow {
            rate_pct,
            sip_total_value: sip.total_value,
            sip_estimated_returns: sip.estimated_returns,
            emi: emi.emi,
            emi_total_interest: emi.total_interest,
            emi_total_payment: emi.total_payment,
        })
        .collect();

    let execution_time_ms = start.elapsed().as_millis() as u64;

    if json_output {
        let response = SweepResponse {
            sip_monthly,
            sip_years,
            emi_amount,
            emi_tenure_years,
            rows,
            execution_time_ms,
        };
        println!("{}", serde_json::to_string_pretty(&response).unwrap());
        return;
    }

    println!("Rate Sensitivity Sweep");
    println!("======================\n");
    println!("  SIP: {:.0}/month over {:.0} years", sip_monthly, sip_years);
    println!("  EMI: {:.0} over {:.0} years\n", emi_amount, emi_tenure_years);

    println!(
        "{:>6} {:>14} {:>14} {:>10} {:>14} {:>14}",
        "Rate%", "SIP Value", "SIP Returns", "EMI", "Interest", "Payment"
    );
    println!("{}", "-".repeat(78));
    for row in &rows {
        println!(
            "{:>6.1} {:>14} {:>14} {:>10} {:>14} {:>14}",
            row.rate_pct,
            row.sip_total_value,
            row.sip_estimated_returns,
            row.emi,
            row.emi_total_interest,
            row.emi_total_payment
        );
    }

    let csv_path = "rate_sweep.csv";
    let mut file = File::create(csv_path).expect("Unable to create CSV file");
    writeln!(
        file,
        "RatePct,SipTotalValue,SipEstimatedReturns,Emi,EmiTotalInterest,EmiTotalPayment"
    )
    .unwrap();
    for row in &rows {
        writeln!(
            file,
            "{},{},{},{},{},{}",
            row.rate_pct,
            row.sip_total_value,
            row.sip_estimated_returns,
            row.emi,
            row.emi_total_interest,
            row.emi_total_payment
        )
        .unwrap();
    }

    println!("\nFull results written to: {}", csv_path);
    println!("Completed in {} ms", execution_time_ms);
}
