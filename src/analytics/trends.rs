use serde::{Deserialize, Serialize};

use crate::domain::Expense;

use super::aggregate::monthly_aggregate;

/// Spend in one calendar month measured against the month before.
///
/// `percentage_difference` is `0.0` whenever the previous month had no
/// spend; callers that need to tell "no prior data" apart from "equal
/// spend" inspect `previous_total`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrendComparison {
    pub current_total: f64,
    pub previous_total: f64,
    pub percentage_difference: f64,
}

/// Calendar rollback: January steps into December of the prior year.
pub fn previous_month(month: u32, year: i32) -> (u32, i32) {
    if month == 0 {
        (11, year - 1)
    } else {
        (month - 1, year)
    }
}

// Defined-zero on an empty denominator; never NaN or infinite.
fn percentage_change(current: f64, previous: f64) -> f64 {
    if previous > 0.0 {
        ((current - previous) / previous) * 100.0
    } else {
        0.0
    }
}

/// Compares total spend in the given month (zero-based) against the
/// month before it.
pub fn compare_months(expenses: &[Expense], month: u32, year: i32) -> TrendComparison {
    let (prev_month, prev_year) = previous_month(month, year);
    let current_total = monthly_aggregate(expenses, month, year).total_spent;
    let previous_total = monthly_aggregate(expenses, prev_month, prev_year).total_spent;
    TrendComparison {
        current_total,
        previous_total,
        percentage_difference: percentage_change(current_total, previous_total),
    }
}

/// Category-scoped variant, defined only when the category saw spend in
/// both months. A zero previous total would turn any spend into an
/// unbounded jump, so those cases yield `None`.
pub fn compare_category_months(
    expenses: &[Expense],
    category_id: &str,
    month: u32,
    year: i32,
) -> Option<TrendComparison> {
    let (prev_month, prev_year) = previous_month(month, year);
    let current_total = monthly_aggregate(expenses, month, year)
        .category_total(category_id)
        .unwrap_or(0.0);
    let previous_total = monthly_aggregate(expenses, prev_month, prev_year)
        .category_total(category_id)
        .unwrap_or(0.0);
    if current_total > 0.0 && previous_total > 0.0 {
        Some(TrendComparison {
            current_total,
            previous_total,
            percentage_difference: percentage_change(current_total, previous_total),
        })
    } else {
        None
    }
}
