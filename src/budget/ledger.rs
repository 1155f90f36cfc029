//! Expense ledger behind the budget planner

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::summary::{summarize, BudgetSummary};
use crate::bounds::BUDGET_INCOME;

/// Cyclic display palette for expense rows; purely cosmetic
const COLOR_PALETTE: [&str; 8] = [
    "#6366f1", "#f59e0b", "#10b981", "#ef4444", "#8b5cf6", "#06b6d4", "#ec4899", "#84cc16",
];

/// Why an expense mutation was refused
///
/// Invalid entries leave the ledger untouched; the caller decides whether to
/// surface the error or drop it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BudgetError {
    #[error("expense category must not be empty")]
    EmptyCategory,
    #[error("expense amount must be a positive number")]
    InvalidAmount,
    #[error("no expense with id {0}")]
    NotFound(u64),
}

/// A single tracked expense line-item
///
/// Category labels are freeform; duplicate categories stay as independent
/// entries identified by id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    pub id: u64,
    pub category: String,
    pub amount: f64,
    /// Display color assigned at insertion
    pub color: String,
    pub created_at: DateTime<Utc>,
}

/// Income plus the current expense collection
///
/// Holds the only mutable state in the crate. Summaries are recomputed from
/// scratch on request; the collection stays small (dozens of entries).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetLedger {
    income: f64,
    expenses: Vec<Expense>,
    next_id: u64,
}

impl BudgetLedger {
    pub fn new() -> Self {
        Self {
            income: 0.0,
            expenses: Vec::new(),
            next_id: 1,
        }
    }

    /// Create a ledger with a clamped starting income
    pub fn with_income(income: f64) -> Self {
        let mut ledger = Self::new();
        ledger.set_income(income);
        ledger
    }

    pub fn set_income(&mut self, income: f64) {
        self.income = BUDGET_INCOME.clamp(income);
    }

    pub fn income(&self) -> f64 {
        self.income
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    fn validate(category: &str, amount: f64) -> Result<(), BudgetError> {
        if category.trim().is_empty() {
            return Err(BudgetError::EmptyCategory);
        }
        if !amount.is_finite() || amount <= 0.0 {
            return Err(BudgetError::InvalidAmount);
        }
        Ok(())
    }

    /// Add a line-item and return its fresh id
    pub fn add_expense(&mut self, category: &str, amount: f64) -> Result<u64, BudgetError> {
        Self::validate(category, amount)?;

        let id = self.next_id;
        self.next_id += 1;

        let color = COLOR_PALETTE[self.expenses.len() % COLOR_PALETTE.len()];
        self.expenses.push(Expense {
            id,
            category: category.trim().to_string(),
            amount,
            color: color.to_string(),
            created_at: Utc::now(),
        });

        Ok(id)
    }

    /// Replace the category and amount of an existing entry
    ///
    /// Id, color, and timestamp are preserved.
    pub fn update_expense(
        &mut self,
        id: u64,
        category: &str,
        amount: f64,
    ) -> Result<(), BudgetError> {
        Self::validate(category, amount)?;

        let expense = self
            .expenses
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(BudgetError::NotFound(id))?;

        expense.category = category.trim().to_string();
        expense.amount = amount;
        Ok(())
    }

    pub fn remove_expense(&mut self, id: u64) -> Result<(), BudgetError> {
        let index = self
            .expenses
            .iter()
            .position(|e| e.id == id)
            .ok_or(BudgetError::NotFound(id))?;

        self.expenses.remove(index);
        Ok(())
    }

    /// Aggregate the current income and expense snapshot
    pub fn summarize(&self) -> BudgetSummary {
        summarize(self.income, &self.expenses)
    }
}

impl Default for BudgetLedger {
    fn default() -> Self {
        Self::new()
    }
}
