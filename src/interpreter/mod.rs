//! Turns free-text expense descriptions into structured drafts.
//!
//! The interpreter is deliberately heuristic: one amount token, a fixed
//! stop-word strip, and keyword scoring against a static hint table. It
//! performs no real natural-language analysis.

mod hints;

pub use hints::FALLBACK_CATEGORY_ID;

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::domain::Category;
use crate::errors::ParseError;
use crate::time::Clock;

use hints::CATEGORY_HINTS;

/// Substituted when the stripped description is shorter than 3 chars.
pub const DEFAULT_DESCRIPTION: &str = "Despesa";

static AMOUNT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)R?\$\s?(\d+[.,]?\d*)").expect("amount pattern is valid")
});

// Stop words are removed as bare substrings, so occurrences inside
// longer words are stripped too. Long-standing tracker behavior; keep
// in sync with the hint table's locale.
static STOP_WORDS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)gastei|paguei|comprei|em|no|na|para").expect("stop-word pattern is valid")
});

/// Structured draft produced from free text; not yet a persisted record.
///
/// `category` is always an id from the hint table; the caller resolves
/// it against the live category set (degrading to the unknown
/// placeholder if it is no longer there).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ParsedExpense {
    pub amount: f64,
    pub description: String,
    pub category: String,
    pub date: NaiveDate,
}

/// Parses a free-text expense like "Gastei R$50 no mercado" into a
/// draft. The only failure mode is an unrecognized or non-finite amount
/// token; callers re-prompt on it.
pub fn parse_expense_text(
    text: &str,
    categories: &[Category],
    clock: &dyn Clock,
) -> Result<ParsedExpense, ParseError> {
    let captures = AMOUNT.captures(text).ok_or(ParseError::NoAmount)?;
    let token = &captures[0];
    let amount: f64 = captures[1]
        .replace(',', ".")
        .parse()
        .map_err(|_| ParseError::NoAmount)?;
    if !amount.is_finite() {
        return Err(ParseError::NoAmount);
    }

    let without_amount = text.replacen(token, "", 1);
    let mut description = STOP_WORDS
        .replace_all(&without_amount, "")
        .trim()
        .to_string();
    if description.chars().count() < 3 {
        description = DEFAULT_DESCRIPTION.to_string();
    }

    let category = classify(&description);
    tracing::debug!(
        category,
        live_categories = categories.len(),
        "parsed expense draft"
    );

    Ok(ParsedExpense {
        amount,
        description,
        category: category.to_string(),
        date: clock.today(),
    })
}

/// Picks the category with the strictly highest hint score. Ties at the
/// top and all-zero scores both resolve to the fallback id.
fn classify(description: &str) -> &'static str {
    let lowered = description.to_lowercase();
    let mut best = FALLBACK_CATEGORY_ID;
    let mut best_score = 0usize;
    let mut contested = false;
    for (id, hints) in CATEGORY_HINTS.iter().copied() {
        let score = hints.iter().filter(|hint| lowered.contains(**hint)).count();
        if score > best_score {
            best = id;
            best_score = score;
            contested = false;
        } else if score == best_score && best_score > 0 {
            contested = true;
        }
    }
    if contested {
        FALLBACK_CATEGORY_ID
    } else {
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::default_categories;
    use crate::time::FixedClock;

    fn clock() -> FixedClock {
        FixedClock(NaiveDate::from_ymd_opt(2024, 3, 15).expect("valid date"))
    }

    #[test]
    fn parses_amount_description_and_category() {
        let draft = parse_expense_text("Gastei R$50 no mercado", &default_categories(), &clock())
            .expect("parse succeeds");
        assert_eq!(draft.amount, 50.0);
        assert_eq!(draft.description, "mercado");
        assert_eq!(draft.category, "1");
        assert_eq!(draft.date, clock().0);
    }

    #[test]
    fn normalizes_comma_decimal_separator() {
        let draft = parse_expense_text("Paguei R$ 12,50 no restaurante", &default_categories(), &clock())
            .expect("parse succeeds");
        assert_eq!(draft.amount, 12.5);
        assert_eq!(draft.category, "2");
    }

    #[test]
    fn bare_dollar_marker_is_accepted() {
        let draft = parse_expense_text("$ 30 uber", &default_categories(), &clock())
            .expect("parse succeeds");
        assert_eq!(draft.amount, 30.0);
        assert_eq!(draft.category, "3");
    }

    #[test]
    fn fails_without_an_amount_token() {
        let err = parse_expense_text("café", &default_categories(), &clock())
            .expect_err("no amount present");
        assert_eq!(err, ParseError::NoAmount);
    }

    #[test]
    fn fails_when_digits_lack_a_currency_marker() {
        let err = parse_expense_text("gastei 50 no mercado", &default_categories(), &clock())
            .expect_err("marker is required");
        assert_eq!(err, ParseError::NoAmount);
    }

    #[test]
    fn fails_on_non_finite_amount() {
        let text = format!("R${}", "9".repeat(400));
        let err = parse_expense_text(&text, &default_categories(), &clock())
            .expect_err("overflowing token is rejected");
        assert_eq!(err, ParseError::NoAmount);
    }

    #[test]
    fn short_descriptions_fall_back_to_placeholder() {
        let draft = parse_expense_text("R$ 9", &default_categories(), &clock())
            .expect("parse succeeds");
        assert_eq!(draft.description, DEFAULT_DESCRIPTION);
        assert_eq!(draft.category, FALLBACK_CATEGORY_ID);
    }

    #[test]
    fn stop_words_strip_inside_longer_words() {
        // "banana" loses both "na" occurrences, leaving a too-short rest.
        let draft = parse_expense_text("R$10 banana", &default_categories(), &clock())
            .expect("parse succeeds");
        assert_eq!(draft.description, DEFAULT_DESCRIPTION);
    }

    #[test]
    fn tied_scores_resolve_to_fallback() {
        let draft = parse_expense_text("R$30 mercado restaurante", &default_categories(), &clock())
            .expect("parse succeeds");
        assert_eq!(draft.category, FALLBACK_CATEGORY_ID);
    }

    #[test]
    fn higher_score_beats_single_hint() {
        let draft = parse_expense_text("R$60 uber gasolina", &default_categories(), &clock())
            .expect("parse succeeds");
        assert_eq!(draft.category, "3");
    }

    #[test]
    fn category_is_always_a_hint_table_id() {
        for text in ["R$1 xyz", "R$2 farmácia", "R$3 hotel spa", "R$4 zzz compras"] {
            let draft = parse_expense_text(text, &default_categories(), &clock())
                .expect("parse succeeds");
            assert!(
                super::CATEGORY_HINTS.iter().any(|(id, _)| *id == draft.category),
                "unexpected category {}",
                draft.category
            );
        }
    }
}
