//! CSV-based expense loader
//!
//! Reads `category,amount` records exported from a spreadsheet so a ledger
//! can be seeded from a file instead of entered row by row.

use std::error::Error;
use std::fs::File;
use std::path::Path;

use super::BudgetLedger;

/// Load `category,amount` expense records from a CSV file
///
/// Rows with a non-numeric amount are skipped with a warning so one bad line
/// does not lose the rest of the sheet. Validation against the ledger rules
/// happens at insertion, not here.
pub fn load_expenses(path: &Path) -> Result<Vec<(String, f64)>, Box<dyn Error>> {
    let file = File::open(path)?;
    let mut reader = csv::Reader::from_reader(file);

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        let category = record.get(0).unwrap_or("").to_string();
        let amount: f64 = match record.get(1).map(str::parse) {
            Some(Ok(value)) => value,
            _ => {
                log::warn!("skipping expense row with non-numeric amount: {:?}", record);
                continue;
            }
        };
        rows.push((category, amount));
    }

    Ok(rows)
}

/// Build a ledger from an income figure and a CSV expense file
pub fn load_ledger(income: f64, path: &Path) -> Result<BudgetLedger, Box<dyn Error>> {
    let mut ledger = BudgetLedger::with_income(income);

    for (category, amount) in load_expenses(path)? {
        if let Err(e) = ledger.add_expense(&category, amount) {
            log::warn!("skipping expense row {:?}: {}", category, e);
        }
    }

    log::info!(
        "loaded {} expense rows from {}",
        ledger.expenses().len(),
        path.display()
    );
    Ok(ledger)
}
