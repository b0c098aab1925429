//! Fixed pt-BR money and date formatting for the tracker's BRL amounts.
//!
//! The locale is deliberately hard-wired: the rule set, hint table and
//! message templates all assume Brazilian Portuguese input and output.

use chrono::{Datelike, NaiveDate};

pub const CURRENCY_SYMBOL: &str = "R$";

const DECIMAL_SEPARATOR: char = ',';
const GROUPING_SEPARATOR: char = '.';

/// Month names indexed zero-based, January first.
pub const MONTH_NAMES: [&str; 12] = [
    "Janeiro",
    "Fevereiro",
    "Março",
    "Abril",
    "Maio",
    "Junho",
    "Julho",
    "Agosto",
    "Setembro",
    "Outubro",
    "Novembro",
    "Dezembro",
];

/// Palette cycled by report charts.
pub const CHART_COLORS: [&str; 8] = [
    "#3B82F6", "#10B981", "#F59E0B", "#EF4444", "#8B5CF6", "#EC4899", "#06B6D4", "#F97316",
];

/// Name of a zero-based month index; out-of-range indices render empty.
pub fn month_name(month: u32) -> &'static str {
    MONTH_NAMES.get(month as usize).copied().unwrap_or("")
}

/// Formats an amount as BRL, e.g. `R$ 1.234,56`.
pub fn format_currency(amount: f64) -> String {
    format!("{} {}", CURRENCY_SYMBOL, format_number(amount, 2))
}

/// Formats a number with pt-BR separators at the given precision.
pub fn format_number(value: f64, precision: usize) -> String {
    let mut body = format!("{:.*}", precision, value);
    if let Some(pos) = body.find('.') {
        body.replace_range(pos..=pos, &DECIMAL_SEPARATOR.to_string());
    }
    let int_end = body.find(DECIMAL_SEPARATOR).unwrap_or(body.len());
    let grouped = group_integer(&body[..int_end]);
    format!("{}{}", grouped, &body[int_end..])
}

fn group_integer(int_part: &str) -> String {
    if let Some(digits) = int_part.strip_prefix('-') {
        format!("-{}", group_digits(digits))
    } else {
        group_digits(int_part)
    }
}

fn group_digits(digits: &str) -> String {
    let mut grouped = String::new();
    let mut count = 0;
    for ch in digits.chars().rev() {
        if count != 0 && count % 3 == 0 {
            grouped.insert(0, GROUPING_SEPARATOR);
        }
        grouped.insert(0, ch);
        count += 1;
    }
    grouped
}

/// dd/mm/yyyy, the tracker's display format.
pub fn format_date(date: NaiveDate) -> String {
    format!("{:02}/{:02}/{}", date.day(), date.month(), date.year())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_brl_with_grouping_and_comma_decimal() {
        assert_eq!(format_currency(1234.56), "R$ 1.234,56");
        assert_eq!(format_currency(180.0), "R$ 180,00");
        assert_eq!(format_currency(0.5), "R$ 0,50");
        assert_eq!(format_currency(1_000_000.0), "R$ 1.000.000,00");
    }

    #[test]
    fn negative_amounts_keep_the_sign_outside_grouping() {
        assert_eq!(format_currency(-1234.5), "R$ -1.234,50");
    }

    #[test]
    fn zero_precision_has_no_decimal_part() {
        assert_eq!(format_number(1234.56, 0), "1.235");
    }

    #[test]
    fn month_names_are_zero_based() {
        assert_eq!(month_name(0), "Janeiro");
        assert_eq!(month_name(11), "Dezembro");
        assert_eq!(month_name(12), "");
    }

    #[test]
    fn dates_render_as_day_month_year() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).expect("valid date");
        assert_eq!(format_date(date), "05/03/2024");
    }
}
