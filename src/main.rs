//! NiveshPath calculator CLI
//!
//! Command-line front-end for the SIP, EMI, and budget engines

use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use niveshpath_core::budget::loader::load_ledger;
use niveshpath_core::budget::BudgetLedger;
use niveshpath_core::emi::{amortize, EmiInput, ScheduleSampling, TenureUnit};
use niveshpath_core::sip::{project, SipInput};

#[derive(Parser)]
#[command(name = "niveshpath", version, about = "NiveshPath financial calculators")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Project the future value of a monthly SIP
    Sip {
        /// Monthly investment in rupees
        #[arg(long, default_value_t = 5000.0)]
        monthly: f64,

        /// Expected annual return rate in percent
        #[arg(long, default_value_t = 12.0)]
        rate: f64,

        /// Investment period in years
        #[arg(long, default_value_t = 10.0)]
        years: f64,

        /// Print the result as JSON instead of a table
        #[arg(long)]
        json: bool,

        /// Write the yearly breakdown to a CSV file
        #[arg(long)]
        csv: Option<PathBuf>,
    },

    /// Compute the EMI and amortization schedule for a loan
    Emi {
        /// Loan principal in rupees
        #[arg(long, default_value_t = 1_000_000.0)]
        amount: f64,

        /// Annual interest rate in percent
        #[arg(long, default_value_t = 8.5)]
        rate: f64,

        /// Loan tenure, interpreted per --unit
        #[arg(long, default_value_t = 20.0)]
        tenure: f64,

        /// Tenure unit: years or months
        #[arg(long, default_value = "years")]
        unit: String,

        /// Record every month instead of the yearly-sampled schedule
        #[arg(long)]
        full_schedule: bool,

        /// Print the result as JSON instead of a table
        #[arg(long)]
        json: bool,

        /// Write the schedule to a CSV file
        #[arg(long)]
        csv: Option<PathBuf>,
    },

    /// Summarize a monthly budget
    Budget {
        /// Monthly income in rupees
        #[arg(long)]
        income: f64,

        /// CSV file of category,amount expense rows
        #[arg(long)]
        expenses: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    match Cli::parse().command {
        Command::Sip {
            monthly,
            rate,
            years,
            json,
            csv,
        } => run_sip(monthly, rate, years, json, csv),
        Command::Emi {
            amount,
            rate,
            tenure,
            unit,
            full_schedule,
            json,
            csv,
        } => run_emi(amount, rate, tenure, &unit, full_schedule, json, csv),
        Command::Budget { income, expenses } => run_budget(income, expenses),
    }
}

fn run_sip(monthly: f64, rate: f64, years: f64, json: bool, csv: Option<PathBuf>) -> Result<()> {
    let input = SipInput::new(monthly, rate, years);
    let result = project(&input);

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("SIP Projection");
        println!("==============\n");
        println!("  Monthly Investment: {:.2}", input.monthly_investment());
        println!("  Expected Return:    {:.2}% p.a.", input.annual_return_rate());
        println!("  Period:             {} years\n", input.whole_years());

        println!("{:>5} {:>14} {:>14} {:>14}", "Year", "Invested", "Returns", "Value");
        println!("{}", "-".repeat(50));
        for row in &result.yearly_breakdown {
            println!(
                "{:>5} {:>14} {:>14} {:>14}",
                row.year, row.investment, row.returns, row.total_value
            );
        }

        println!("\nSummary:");
        println!("  Total Investment:  {}", result.total_investment);
        println!("  Estimated Returns: {}", result.estimated_returns);
        println!("  Total Value:       {}", result.total_value);
    }

    if let Some(path) = csv {
        let mut file = File::create(&path)
            .with_context(|| format!("unable to create {}", path.display()))?;
        writeln!(file, "Year,Investment,Returns,TotalValue")?;
        for row in &result.yearly_breakdown {
            writeln!(
                file,
                "{},{},{},{}",
                row.year, row.investment, row.returns, row.total_value
            )?;
        }
        println!("\nYearly breakdown written to: {}", path.display());
    }

    Ok(())
}

fn run_emi(
    amount: f64,
    rate: f64,
    tenure: f64,
    unit: &str,
    full_schedule: bool,
    json: bool,
    csv: Option<PathBuf>,
) -> Result<()> {
    let unit = match unit {
        "years" => TenureUnit::Years,
        "months" => TenureUnit::Months,
        other => bail!("unknown tenure unit '{}', expected 'years' or 'months'", other),
    };
    let sampling = if full_schedule {
        ScheduleSampling::Full
    } else {
        ScheduleSampling::Yearly
    };

    let input = EmiInput::new(amount, rate, tenure, unit);
    let result = amortize(&input, sampling);

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("Loan Amortization");
        println!("=================\n");
        println!("  Principal: {:.2}", input.loan_amount());
        println!("  Rate:      {:.2}% p.a.", input.annual_interest_rate());
        println!("  Tenure:    {} months\n", input.total_months());

        println!(
            "{:>5} {:>4} {:>10} {:>12} {:>12} {:>14}",
            "Month", "Year", "EMI", "Principal", "Interest", "Balance"
        );
        println!("{}", "-".repeat(62));
        for row in &result.schedule {
            println!(
                "{:>5} {:>4} {:>10} {:>12} {:>12} {:>14}",
                row.month, row.year, row.emi, row.principal, row.interest, row.balance
            );
        }

        println!("\nSummary:");
        println!("  EMI:            {}", result.emi);
        println!("  Total Interest: {}", result.total_interest);
        println!("  Total Payment:  {}", result.total_payment);
    }

    if let Some(path) = csv {
        let mut file = File::create(&path)
            .with_context(|| format!("unable to create {}", path.display()))?;
        writeln!(file, "Month,Year,EMI,Principal,Interest,Balance")?;
        for row in &result.schedule {
            writeln!(
                file,
                "{},{},{},{},{},{}",
                row.month, row.year, row.emi, row.principal, row.interest, row.balance
            )?;
        }
        println!("\nSchedule written to: {}", path.display());
    }

    Ok(())
}

fn run_budget(income: f64, expenses: Option<PathBuf>) -> Result<()> {
    let ledger = match expenses {
        Some(path) => load_ledger(income, &path)
            .map_err(|e| anyhow::anyhow!("failed to load {}: {}", path.display(), e))?,
        None => BudgetLedger::with_income(income),
    };

    let summary = ledger.summarize();

    println!("Budget Summary");
    println!("==============\n");

    if !ledger.expenses().is_empty() {
        println!("{:>4} {:<20} {:>12}", "Id", "Category", "Amount");
        println!("{}", "-".repeat(38));
        for expense in ledger.expenses() {
            println!(
                "{:>4} {:<20} {:>12.2}",
                expense.id, expense.category, expense.amount
            );
        }
        println!();
    }

    println!("  Income:         {:.2}", ledger.income());
    println!("  Total Expenses: {:.2}", summary.total_expenses);
    println!("  Balance:        {:.2}", summary.balance);
    println!("  Savings Rate:   {:.1}%", summary.savings_rate);

    Ok(())
}
