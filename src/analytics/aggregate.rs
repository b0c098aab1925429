use std::cmp::Ordering;

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::domain::Expense;

/// One category's summed spend inside an aggregate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryAmount {
    pub category: String,
    pub amount: f64,
}

/// Spending totals for one calendar month.
///
/// `month` is zero-based (0 = January), matching the calendar widgets
/// consuming it. `category_totals` keeps first-encounter order and only
/// lists categories with at least one matching expense.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonthlyAggregate {
    pub month: u32,
    pub year: i32,
    pub total_spent: f64,
    pub category_totals: Vec<CategoryAmount>,
}

impl MonthlyAggregate {
    /// Summed spend for one category, if it had any expenses this month.
    pub fn category_total(&self, category_id: &str) -> Option<f64> {
        self.category_totals
            .iter()
            .find(|entry| entry.category == category_id)
            .map(|entry| entry.amount)
    }
}

/// Sums the expenses falling in the given calendar month. Linear over
/// the snapshot and recomputed fresh on every call.
pub fn monthly_aggregate(expenses: &[Expense], month: u32, year: i32) -> MonthlyAggregate {
    let mut total_spent = 0.0;
    let mut category_totals: Vec<CategoryAmount> = Vec::new();
    for expense in expenses {
        if expense.date.month0() != month || expense.date.year() != year {
            continue;
        }
        total_spent += expense.amount;
        match category_totals
            .iter_mut()
            .find(|entry| entry.category == expense.category)
        {
            Some(entry) => entry.amount += expense.amount,
            None => category_totals.push(CategoryAmount {
                category: expense.category.clone(),
                amount: expense.amount,
            }),
        }
    }
    MonthlyAggregate {
        month,
        year,
        total_spent,
        category_totals,
    }
}

/// Ranks category totals descending by amount; equal amounts keep their
/// first-encounter order. `n` larger than the entry count returns all.
pub fn top_categories(aggregate: &MonthlyAggregate, n: usize) -> Vec<CategoryAmount> {
    let mut ranked = aggregate.category_totals.clone();
    ranked.sort_by(|a, b| b.amount.partial_cmp(&a.amount).unwrap_or(Ordering::Equal));
    ranked.truncate(n);
    ranked
}
