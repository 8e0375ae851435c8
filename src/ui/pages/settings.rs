use dioxus::prelude::*;

use crate::domain::AppState;
use crate::i18n::{self, Label};
use crate::infra::spreadsheet;
use crate::ui::components::toast::{push_toast, ToastKind, ToastMessage};
use crate::ui::theme;

#[component]
pub fn SettingsPage() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let language = state.with(|st| st.language);

    let version = env!("CARGO_PKG_VERSION");

    let on_lock = move |_| {
        state.with_mut(|st| st.authenticated = false);
        push_toast(
            toasts.clone(),
            ToastKind::Info,
            i18n::text(language, Label::SessionLocked),
        );
    };

    rsx! {
        div { class: "space-y-8",
            section {
                class: "{theme::panel()} p-6",
                h2 { class: "{theme::section_title()}", {i18n::text(language, Label::ExportDestination)} }
                p { class: "mt-3 text-sm {theme::text_secondary()}",
                    "{spreadsheet::default_export_dir().display()}"
                }
                p { class: "mt-1 text-xs {theme::text_muted()}",
                    "Products_EN.csv · Summary_EN.csv · Productos_ES.csv · Resumen_ES.csv"
                }
            }

            section {
                class: "{theme::panel()} p-6",
                h2 { class: "{theme::section_title()}", {i18n::text(language, Label::Version)} }
                p { class: "mt-3 text-sm {theme::text_secondary()}", "v{version}" }
                p { class: "mt-1 text-xs {theme::text_muted()}", {i18n::text(language, Label::Disclaimer)} }
            }

            section {
                class: "{theme::panel()} p-6",
                button {
                    class: "{theme::btn_secondary()}",
                    onclick: on_lock,
                    {i18n::text(language, Label::LockSession)}
                }
            }
        }
    }
}
