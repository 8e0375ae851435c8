use dioxus::prelude::*;

use super::fields::{MoneyField, UnitsField};
use crate::domain::{ProductEntry, ProductField};
use crate::i18n::{self, Label, Language};
use crate::ui::theme;

/// One editable product row: name, price, units and the three variable cost
/// components. All edits flow up as `(index, field)` pairs; the page owns
/// the state.
#[component]
pub fn ProductEditor(
    index: usize,
    entry: ProductEntry,
    language: Language,
    on_update: EventHandler<(usize, ProductField)>,
    on_remove: EventHandler<usize>,
) -> Element {
    rsx! {
        div {
            class: "{theme::panel()} p-4 space-y-3",
            div {
                class: "flex flex-wrap items-end gap-4",
                div { class: "flex-1",
                    label { class: "{theme::label_class()}", {i18n::text(language, Label::Name)} }
                    input {
                        class: "{theme::input_class()}",
                        value: "{entry.name}",
                        oninput: move |evt| on_update.call((index, ProductField::Name(evt.value()))),
                    }
                }
                MoneyField {
                    label: i18n::text(language, Label::Price),
                    value: entry.price.normalize().to_string(),
                    step: "50",
                    on_change: move |amount| on_update.call((index, ProductField::Price(amount))),
                }
                UnitsField {
                    label: i18n::text(language, Label::Units),
                    value: entry.units.to_string(),
                    on_change: move |units| on_update.call((index, ProductField::Units(units))),
                }
            }
            p { class: "text-xs {theme::text_muted()}", {i18n::text(language, Label::VariableCosts)} }
            div {
                class: "flex flex-wrap items-end gap-4",
                MoneyField {
                    label: i18n::text(language, Label::Materials),
                    value: entry.materials.normalize().to_string(),
                    step: "50",
                    on_change: move |amount| on_update.call((index, ProductField::Materials(amount))),
                }
                MoneyField {
                    label: i18n::text(language, Label::Shipping),
                    value: entry.shipping.normalize().to_string(),
                    step: "50",
                    on_change: move |amount| on_update.call((index, ProductField::Shipping(amount))),
                }
                MoneyField {
                    label: i18n::text(language, Label::Fees),
                    value: entry.fees.normalize().to_string(),
                    step: "50",
                    on_change: move |amount| on_update.call((index, ProductField::Fees(amount))),
                }
                div { class: "ml-auto",
                    button {
                        class: "{theme::btn_danger_small()}",
                        onclick: move |_| on_remove.call(index),
                        {i18n::text(language, Label::RemoveProduct)}
                    }
                }
            }
        }
    }
}
