use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::i18n::Language;

/// Formats a monetary amount for display: rounded half-up to whole units,
/// thousands-separated, `$`-prefixed. English groups with `,`, Spanish with
/// `.`. Intermediate sums are never rounded, only this display boundary.
pub fn money(language: Language, amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let value = rounded.to_i64().unwrap_or(0);
    let separator = match language {
        Language::English => ',',
        Language::Spanish => '.',
    };
    format!("${}", group_thousands(value, separator))
}

/// Margin display, one decimal place.
pub fn percent(margin: Decimal) -> String {
    let rounded = margin.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
    format!("{rounded:.1}%")
}

fn group_thousands(value: i64, separator: char) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 && c != '-' {
            grouped.push(separator);
        }
        grouped.push(c);
    }
    grouped.chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn english_groups_with_commas() {
        assert_eq!(money(Language::English, dec("1234567")), "$1,234,567");
        assert_eq!(money(Language::English, dec("999")), "$999");
        assert_eq!(money(Language::English, dec("0")), "$0");
    }

    #[test]
    fn spanish_groups_with_dots() {
        assert_eq!(money(Language::Spanish, dec("1234567")), "$1.234.567");
        assert_eq!(money(Language::Spanish, dec("1000")), "$1.000");
    }

    #[test]
    fn rounds_half_up_on_display_only() {
        assert_eq!(money(Language::English, dec("10.5")), "$11");
        assert_eq!(money(Language::English, dec("10.49")), "$10");
        assert_eq!(money(Language::English, dec("2.5")), "$3");
    }

    #[test]
    fn negative_amounts_keep_the_sign_inside() {
        assert_eq!(money(Language::English, dec("-1234")), "$-1,234");
        assert_eq!(money(Language::Spanish, dec("-100")), "$-100");
    }

    #[test]
    fn percent_keeps_one_decimal() {
        assert_eq!(percent(dec("50")), "50.0%");
        assert_eq!(percent(dec("12.34")), "12.3%");
        assert_eq!(percent(dec("-7.25")), "-7.3%");
    }
}
