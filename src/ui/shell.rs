use dioxus::prelude::*;

use crate::app::Route;
use crate::domain::AppState;
use crate::i18n::{self, Label, Language};
use crate::ui::pages::UnlockPage;
use crate::ui::theme;

#[component]
pub fn Shell(children: Element) -> Element {
    let state = use_context::<Signal<AppState>>();
    let authenticated = state.with(|st| st.authenticated);
    let language = state.with(|st| st.language);

    // Everything behind the shell requires the gate to be passed first.
    if !authenticated {
        return rsx! {
            div { class: "min-h-screen bg-slate-950 text-slate-100 font-sans",
                UnlockPage {}
            }
        };
    }

    let current_route = use_route::<Route>();
    let nav = use_navigator();
    let mut state_mut = state;

    rsx! {
        div { class: "min-h-screen bg-slate-950 text-slate-100 font-sans",
            header {
                class: "border-b border-slate-900/60 bg-slate-950/80 backdrop-blur px-6 py-4",
                div { class: "mx-auto grid max-w-6xl grid-cols-3 items-center gap-4",
                    div {
                        h1 { class: "text-xl font-semibold tracking-tight", {i18n::text(language, Label::Title)} }
                        p { class: "text-xs {theme::text_muted()}", {i18n::text(language, Label::Subtitle)} }
                    }

                    div { class: "flex gap-1 justify-center",
                        for option in Language::ALL {
                            button {
                                class: if language == option { theme::lang_active() } else { theme::lang_inactive() },
                                onclick: move |_| state_mut.with_mut(|st| st.language = option),
                                "🌐 {option.display_name()}"
                            }
                        }
                    }

                    nav { class: "flex gap-2 text-sm justify-end",
                        NavButton {
                            active: matches!(current_route, Route::Calculator {}),
                            onclick: move |_| { nav.push(Route::Calculator {}); },
                            label: i18n::text(language, Label::NavCalculator),
                        }
                        NavButton {
                            active: matches!(current_route, Route::Settings {}),
                            onclick: move |_| { nav.push(Route::Settings {}); },
                            label: i18n::text(language, Label::NavSettings),
                        }
                    }
                }
            }
            main { class: "mx-auto max-w-6xl px-6 py-10",
                {children}
            }
        }
    }
}

#[component]
fn NavButton(active: bool, onclick: EventHandler<()>, label: &'static str) -> Element {
    let class = if active {
        theme::nav_active()
    } else {
        theme::nav_inactive()
    };

    rsx! {
        button {
            class: "{class}",
            onclick: move |_| onclick.call(()),
            "{label}"
        }
    }
}
