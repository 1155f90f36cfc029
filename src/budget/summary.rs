//! Income-versus-expenses aggregation

use serde::{Deserialize, Serialize};

use super::ledger::Expense;

/// Aggregated view of a budget snapshot
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BudgetSummary {
    pub total_expenses: f64,
    /// May be negative: overspending is a valid state, not an error
    pub balance: f64,
    /// Percent of income left over; 0 when income is 0
    pub savings_rate: f64,
}

/// Aggregate income against the tracked expenses
pub fn summarize(income: f64, expenses: &[Expense]) -> BudgetSummary {
    let total_expenses: f64 = expenses.iter().map(|e| e.amount).sum();
    let balance = income - total_expenses;
    let savings_rate = if income > 0.0 {
        balance / income * 100.0
    } else {
        0.0
    };

    BudgetSummary {
        total_expenses,
        balance,
        savings_rate,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::budget::BudgetLedger;
    use approx::assert_relative_eq;

    #[test]
    fn test_reference_budget() {
        // Income 50k, expenses totalling 37k: 13k left, 26% saved
        let mut ledger = BudgetLedger::with_income(50_000.0);
        ledger.add_expense("Rent", 18_000.0).unwrap();
        ledger.add_expense("Groceries", 9_000.0).unwrap();
        ledger.add_expense("Transport", 4_000.0).unwrap();
        ledger.add_expense("Utilities", 6_000.0).unwrap();

        let summary = ledger.summarize();
        assert_eq!(summary.total_expenses, 37_000.0);
        assert_eq!(summary.balance, 13_000.0);
        assert_relative_eq!(summary.savings_rate, 26.0);
    }

    #[test]
    fn test_no_expenses_means_full_savings() {
        let ledger = BudgetLedger::with_income(50_000.0);
        let summary = ledger.summarize();
        assert_eq!(summary.balance, 50_000.0);
        assert_relative_eq!(summary.savings_rate, 100.0);
    }

    #[test]
    fn test_zero_income_has_zero_savings_rate() {
        let mut ledger = BudgetLedger::new();
        ledger.add_expense("Rent", 10_000.0).unwrap();

        let summary = ledger.summarize();
        assert_eq!(summary.balance, -10_000.0);
        assert_eq!(summary.savings_rate, 0.0);
    }

    #[test]
    fn test_overspend_goes_negative() {
        let mut ledger = BudgetLedger::with_income(10_000.0);
        ledger.add_expense("Rent", 15_000.0).unwrap();

        let summary = ledger.summarize();
        assert_eq!(summary.balance, -5_000.0);
        assert_relative_eq!(summary.savings_rate, -50.0);
    }
}
