use dioxus::prelude::*;
use rust_decimal::Decimal;

use crate::domain::{build_tables, classify, evaluate, AppState, Band, FixedCostField, ProductField};
use crate::i18n::{self, Label, Language};
use crate::infra::spreadsheet;
use crate::ui::components::{
    band_card::BandCard,
    fields::MoneyField,
    kpi_card::KpiCard,
    product_editor::ProductEditor,
    toast::{push_toast, ToastKind, ToastMessage},
};
use crate::ui::theme;
use crate::util::format;

#[component]
pub fn CalculatorPage() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    let language = state.with(|st| st.language);
    let products = state.with(|st| st.products.clone());
    let fixed_costs = state.with(|st| st.fixed_costs.clone());

    // Derived fresh on every render, so each input event is reflected in the
    // totals before the next paint.
    let aggregate = evaluate(&products, &fixed_costs);
    let band = classify(aggregate.margin_percent);
    let profitable = aggregate.profit > Decimal::ZERO;

    let verdict = if profitable {
        Label::Profitable
    } else {
        Label::NotProfitable
    };
    let verdict_style = if profitable {
        "rounded-lg border border-emerald-500/30 bg-emerald-500/10 px-4 py-3 text-sm text-emerald-200"
    } else {
        "rounded-lg border border-rose-500/30 bg-rose-500/10 px-4 py-3 text-sm text-rose-200"
    };

    let on_update = move |(index, field): (usize, ProductField)| {
        state.with_mut(|st| {
            let _ = st.update_entry(index, field);
        });
    };
    // Indexes come straight from the render loop, so the only interesting
    // case is the floor-of-one no-op handled inside the state.
    let on_remove = move |index: usize| {
        state.with_mut(|st| {
            let _ = st.remove_entry(index);
        });
    };
    let on_add = move |_| state.with_mut(|st| st.add_entry());

    let on_export = move |_| {
        let (products, fixed_costs, language) =
            state.with(|st| (st.products.clone(), st.fixed_costs.clone(), st.language));
        let aggregate = evaluate(&products, &fixed_costs);
        let mut tables = Vec::new();
        for export_language in Language::ALL {
            tables.extend(build_tables(export_language, &products, &aggregate));
        }
        let dir = spreadsheet::default_export_dir();
        match spreadsheet::write_workbook(&dir, &tables) {
            Ok(_) => push_toast(
                toasts.clone(),
                ToastKind::Success,
                format!("{} {}", i18n::text(language, Label::ExportDone), dir.display()),
            ),
            Err(err) => push_toast(
                toasts.clone(),
                ToastKind::Error,
                format!("{}: {err}", i18n::text(language, Label::ExportFailed)),
            ),
        }
    };

    rsx! {
        div { class: "grid gap-6 lg:grid-cols-3",
            div { class: "lg:col-span-2 space-y-8",
                section {
                    class: "space-y-4",
                    h2 { class: "text-xl font-semibold {theme::text_secondary()}", {i18n::text(language, Label::Products)} }
                    for (index, entry) in products.iter().enumerate() {
                        ProductEditor {
                            key: "{index}",
                            index,
                            entry: entry.clone(),
                            language,
                            on_update,
                            on_remove,
                        }
                    }
                    button {
                        class: "{theme::btn_secondary()}",
                        onclick: on_add,
                        {i18n::text(language, Label::AddProduct)}
                    }
                }

                section {
                    class: "space-y-4",
                    h2 { class: "text-xl font-semibold {theme::text_secondary()}", {i18n::text(language, Label::FixedCosts)} }
                    div {
                        class: "{theme::panel()} flex flex-wrap items-end gap-4 p-4",
                        MoneyField {
                            label: i18n::text(language, Label::Rent),
                            value: fixed_costs.rent.normalize().to_string(),
                            step: "1000",
                            on_change: move |amount| state.with_mut(|st| st.update_fixed(FixedCostField::Rent, amount)),
                        }
                        MoneyField {
                            label: i18n::text(language, Label::Internet),
                            value: fixed_costs.internet.normalize().to_string(),
                            step: "1000",
                            on_change: move |amount| state.with_mut(|st| st.update_fixed(FixedCostField::Internet, amount)),
                        }
                        MoneyField {
                            label: i18n::text(language, Label::Advertising),
                            value: fixed_costs.advertising.normalize().to_string(),
                            step: "1000",
                            on_change: move |amount| state.with_mut(|st| st.update_fixed(FixedCostField::Advertising, amount)),
                        }
                        MoneyField {
                            label: i18n::text(language, Label::Other),
                            value: fixed_costs.other.normalize().to_string(),
                            step: "1000",
                            on_change: move |amount| state.with_mut(|st| st.update_fixed(FixedCostField::Other, amount)),
                        }
                    }
                }

                section {
                    class: "space-y-4",
                    h2 { class: "text-xl font-semibold {theme::text_secondary()}", {i18n::text(language, Label::Results)} }
                    div {
                        class: "grid gap-4 sm:grid-cols-2",
                        KpiCard {
                            title: i18n::text(language, Label::Revenue),
                            value: format::money(language, aggregate.total_revenue),
                        }
                        KpiCard {
                            title: i18n::text(language, Label::Expenses),
                            value: format::money(language, aggregate.total_expenses),
                        }
                        KpiCard {
                            title: i18n::text(language, Label::Profit),
                            value: format::money(language, aggregate.profit),
                        }
                        BandCard {
                            band,
                            margin_display: format::percent(aggregate.margin_percent),
                            language,
                        }
                    }
                    div { class: "{verdict_style}", {i18n::text(language, verdict)} }
                    div {
                        class: "flex flex-wrap items-center gap-3",
                        button {
                            class: "{theme::btn_primary()}",
                            onclick: on_export,
                            {i18n::text(language, Label::Export)}
                        }
                        span { class: "text-xs {theme::text_muted()}",
                            "{spreadsheet::default_export_dir().display()}"
                        }
                    }
                }
            }

            aside { class: "space-y-4",
                div {
                    class: "{theme::panel()} p-4",
                    h2 { class: "{theme::section_title()}", {i18n::text(language, Label::Levels)} }
                    ul {
                        class: "mt-3 space-y-2 text-sm",
                        for legend_band in Band::ALL {
                            li {
                                class: if legend_band == band {
                                    "flex items-center justify-between rounded-lg border border-indigo-500/40 bg-indigo-500/10 px-3 py-2"
                                } else {
                                    "flex items-center justify-between rounded-lg border border-slate-800 bg-slate-900/60 px-3 py-2"
                                },
                                span { class: "{theme::text_muted()}", "{legend_band.range_label()}" }
                                span { class: "{theme::text_secondary()}", {i18n::band_label(language, legend_band)} }
                            }
                        }
                    }
                }
                p { class: "text-xs {theme::text_muted()}", {i18n::text(language, Label::Disclaimer)} }
            }
        }
    }
}
