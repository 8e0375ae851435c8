use dioxus::prelude::*;

use crate::domain::Band;
use crate::i18n::{self, Label, Language};

/// Colored card showing the margin and its qualitative band.
#[component]
pub fn BandCard(band: Band, margin_display: String, language: Language) -> Element {
    let style = match band {
        Band::Loss => "border-rose-500/40 bg-rose-500/10 text-rose-200",
        Band::VeryLow => "border-orange-500/40 bg-orange-500/10 text-orange-200",
        Band::Fragile => "border-amber-500/40 bg-amber-500/10 text-amber-200",
        Band::Healthy => "border-emerald-500/40 bg-emerald-500/10 text-emerald-200",
        Band::VeryProfitable => "border-sky-500/40 bg-sky-500/10 text-sky-200",
    };
    let label = i18n::band_label(language, band);

    rsx! {
        div {
            class: "rounded-xl border px-4 py-3 {style}",
            div {
                class: "flex items-center justify-between",
                span { class: "text-xs font-semibold uppercase tracking-wide", {i18n::text(language, Label::Margin)} }
                span { class: "text-xs font-semibold uppercase", "{band.range_label()}" }
            }
            p { class: "mt-2 text-2xl font-semibold", "{margin_display}" }
            p { class: "mt-1 text-xs opacity-80", "{label}" }
        }
    }
}
