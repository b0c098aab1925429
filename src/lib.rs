#![doc(test(attr(deny(warnings))))]

//! Expense Core offers the expense-text interpretation and spending
//! analytics primitives that power personal finance tracker UIs.
//!
//! The crate owns no state: callers pass snapshots of expenses and
//! categories and receive parsed drafts, aggregates, trend comparisons,
//! and advisory strings back.

pub mod analytics;
pub mod currency;
pub mod domain;
pub mod errors;
pub mod interpreter;
pub mod time;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Expense Core tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
