//! Derived views over the expense snapshot: monthly aggregation,
//! month-over-month trends, and rule-based recommendations.
//!
//! Everything here is recomputed from the caller's snapshot on every
//! call; nothing is cached across mutations.

pub mod aggregate;
pub mod recommend;
pub mod trends;

pub use aggregate::{monthly_aggregate, top_categories, CategoryAmount, MonthlyAggregate};
pub use recommend::{
    recommendation_rules, recommendations, RecommendationRule, RuleKind, FREQUENT_SMALL_COUNT,
    SMALL_EXPENSE_LIMIT,
};
pub use trends::{compare_category_months, compare_months, previous_month, TrendComparison};
