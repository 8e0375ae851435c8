//! Labelled number inputs shared by the product rows and the fixed-cost
//! form. Parsing is forgiving while the user types: an unparseable
//! intermediate value leaves the state untouched, an empty field reads as
//! zero, and the `min` floor keeps the widgets non-negative.

use dioxus::prelude::*;
use rust_decimal::Decimal;

use crate::ui::theme;

#[component]
pub fn MoneyField(
    label: &'static str,
    value: String,
    step: &'static str,
    on_change: EventHandler<Decimal>,
) -> Element {
    rsx! {
        div { class: "w-40",
            label { class: "{theme::label_class()}", "{label}" }
            input {
                class: "{theme::input_class()}",
                r#type: "number",
                min: "0",
                step: "{step}",
                inputmode: "decimal",
                value: "{value}",
                oninput: move |evt| {
                    if let Some(amount) = parse_amount(&evt.value()) {
                        on_change.call(amount);
                    }
                },
            }
        }
    }
}

#[component]
pub fn UnitsField(label: &'static str, value: String, on_change: EventHandler<u32>) -> Element {
    rsx! {
        div { class: "w-40",
            label { class: "{theme::label_class()}", "{label}" }
            input {
                class: "{theme::input_class()}",
                r#type: "number",
                min: "0",
                step: "1",
                inputmode: "numeric",
                value: "{value}",
                oninput: move |evt| {
                    if let Some(units) = parse_units(&evt.value()) {
                        on_change.call(units);
                    }
                },
            }
        }
    }
}

pub fn parse_amount(raw: &str) -> Option<Decimal> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Some(Decimal::ZERO);
    }
    raw.parse().ok()
}

pub fn parse_units(raw: &str) -> Option<u32> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Some(0);
    }
    raw.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_reads_as_zero() {
        assert_eq!(parse_amount(""), Some(Decimal::ZERO));
        assert_eq!(parse_amount("  "), Some(Decimal::ZERO));
        assert_eq!(parse_units(""), Some(0));
    }

    #[test]
    fn partial_input_is_ignored_not_zeroed() {
        assert_eq!(parse_amount("12."), None);
        assert_eq!(parse_amount("abc"), None);
        assert_eq!(parse_units("-3"), None);
    }

    #[test]
    fn valid_values_parse() {
        assert_eq!(parse_amount("49.90"), Some("49.90".parse().unwrap()));
        assert_eq!(parse_amount("-5"), Some(Decimal::from(-5)));
        assert_eq!(parse_units("42"), Some(42));
    }
}
