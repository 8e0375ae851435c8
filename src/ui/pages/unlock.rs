//! Access gate shown before the calculator. A plain equality check against
//! the configured password; wrong input re-prompts, it never exits.

use dioxus::prelude::*;

use crate::domain::AppState;
use crate::i18n::{self, Label};
use crate::ui::theme;
use crate::util::config;

#[component]
pub fn UnlockPage() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let language = state.with(|st| st.language);

    let mut password = use_signal(String::new);
    let mut failed = use_signal(|| false);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if password() == config::config().access_password() {
            failed.set(false);
            state.with_mut(|st| st.authenticated = true);
        } else {
            failed.set(true);
        }
    };

    rsx! {
        div {
            class: "min-h-screen flex items-center justify-center p-8",
            div {
                class: "w-full max-w-md {theme::panel()} p-8",
                h1 { class: "text-3xl font-bold text-slate-100", {i18n::text(language, Label::Access)} }
                p { class: "mt-2 text-sm {theme::text_muted()}", {i18n::text(language, Label::Title)} }
                form {
                    class: "mt-6 space-y-4",
                    onsubmit: on_submit,
                    div {
                        label { class: "{theme::label_class()}", {i18n::text(language, Label::Password)} }
                        input {
                            class: "{theme::input_class()}",
                            r#type: "password",
                            value: "{password}",
                            oninput: move |evt| {
                                password.set(evt.value());
                                failed.set(false);
                            },
                        }
                    }
                    if failed() {
                        p { class: "text-sm text-rose-300", {i18n::text(language, Label::WrongPassword)} }
                    }
                    button {
                        class: "{theme::btn_primary()} w-full",
                        r#type: "submit",
                        {i18n::text(language, Label::Enter)}
                    }
                }
            }
        }
    }
}
