use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::currency::format_currency;
use crate::domain::{Category, Expense};
use crate::time::Clock;

use super::trends::{compare_category_months, compare_months};

/// Expenses below this amount count as "small".
pub const SMALL_EXPENSE_LIMIT: f64 = 50.0;

/// Small-expense count that triggers the frequent-small rule.
pub const FREQUENT_SMALL_COUNT: usize = 5;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum RuleKind {
    CategoryIncrease,
    TotalIncrease,
    FrequentSmall,
}

/// A static advisory rule. The set is fixed configuration, not
/// user-editable; templates carry `{percentage}`, `{category}` and
/// `{amount}` placeholders.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RecommendationRule {
    pub kind: RuleKind,
    pub threshold: f64,
    pub message: &'static str,
}

const RULES: &[RecommendationRule] = &[
    RecommendationRule {
        kind: RuleKind::CategoryIncrease,
        threshold: 20.0,
        message: "Você gastou {percentage}% a mais com {category} este mês. \
                  Que tal estabelecer um limite para esta categoria?",
    },
    RecommendationRule {
        kind: RuleKind::TotalIncrease,
        threshold: 15.0,
        message: "Seus gastos aumentaram {percentage}% comparado ao mês passado. \
                  Considere revisar suas despesas.",
    },
    RecommendationRule {
        kind: RuleKind::FrequentSmall,
        threshold: 10.0,
        message: "Você fez muitas pequenas despesas em {category}. \
                  Estas pequenas compras somaram {amount}.",
    },
];

/// The full static rule set, in configuration order.
pub fn recommendation_rules() -> &'static [RecommendationRule] {
    RULES
}

fn rule(kind: RuleKind) -> Option<&'static RecommendationRule> {
    RULES.iter().find(|rule| rule.kind == kind)
}

/// Evaluates every advisory rule over the clock's current calendar
/// month. All applicable messages are emitted in evaluation order (total
/// increase, per-category increase, frequent small); an empty result
/// means no threshold was crossed and is expected, not an error.
pub fn recommendations(
    expenses: &[Expense],
    categories: &[Category],
    clock: &dyn Clock,
) -> Vec<String> {
    let today = clock.today();
    let (month, year) = (today.month0(), today.year());
    let mut messages = Vec::new();

    if let Some(rule) = rule(RuleKind::TotalIncrease) {
        let comparison = compare_months(expenses, month, year);
        if comparison.percentage_difference > rule.threshold {
            messages.push(rule.message.replace(
                "{percentage}",
                &format!("{:.1}", comparison.percentage_difference),
            ));
        }
    }

    if let Some(rule) = rule(RuleKind::CategoryIncrease) {
        for category in categories {
            if let Some(comparison) = compare_category_months(expenses, &category.id, month, year)
            {
                if comparison.percentage_difference > rule.threshold {
                    messages.push(
                        rule.message
                            .replace(
                                "{percentage}",
                                &format!("{:.1}", comparison.percentage_difference),
                            )
                            .replace("{category}", &category.name.to_lowercase()),
                    );
                }
            }
        }
    }

    if let Some(rule) = rule(RuleKind::FrequentSmall) {
        for category in categories {
            let small: Vec<&Expense> = expenses
                .iter()
                .filter(|expense| {
                    expense.category == category.id
                        && expense.date.month0() == month
                        && expense.date.year() == year
                        && expense.amount < SMALL_EXPENSE_LIMIT
                })
                .collect();
            if small.len() >= FREQUENT_SMALL_COUNT {
                let total: f64 = small.iter().map(|expense| expense.amount).sum();
                messages.push(
                    rule.message
                        .replace("{category}", &category.name.to_lowercase())
                        .replace("{amount}", &format_currency(total)),
                );
            }
        }
    }

    tracing::debug!(count = messages.len(), "evaluated recommendation rules");
    messages
}
