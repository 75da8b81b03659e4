//! Live support: a minimal polling chat. Messages refresh on a fixed 5 s
//! interval while the view is mounted; the poll task dies with it.

use api::SupportMessageInfo;
use dioxus::prelude::*;

use ui::components::{Button, ButtonVariant};
use ui::i18n::strings;
use ui::sleep_secs;

use crate::Route;

const POLL_SECS: u64 = 5;

#[component]
pub fn Support() -> Element {
    let auth = ui::use_auth();
    let lang = ui::use_language();
    let nav = use_navigator();

    let mut messages = use_signal(Vec::<SupportMessageInfo>::new);
    let mut draft = use_signal(String::new);
    let mut sending = use_signal(|| false);

    use_effect(move || {
        let state = auth();
        if !state.loading && state.user.is_none() {
            nav.replace(Route::Login {});
        }
    });

    // Poll the conversation while the view is open.
    use_effect(move || {
        spawn(async move {
            loop {
                if auth().user.is_some() {
                    match api::get_support_messages().await {
                        Ok(list) => {
                            if list != messages() {
                                messages.set(list);
                            }
                        }
                        Err(e) => tracing::error!("failed to fetch support messages: {e}"),
                    }
                }
                sleep_secs(POLL_SECS).await;
            }
        });
    });

    let handle_send = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            let body = draft().trim().to_string();
            if body.is_empty() {
                return;
            }

            sending.set(true);
            match api::send_support_message(body).await {
                Ok(()) => {
                    draft.set(String::new());
                    if let Ok(list) = api::get_support_messages().await {
                        messages.set(list);
                    }
                }
                Err(e) => tracing::error!("failed to send support message: {e}"),
            }
            sending.set(false);
        });
    };

    let s = strings(lang());
    if auth().user.is_none() {
        return rsx! {};
    }

    rsx! {
        div { class: "support-page",
            div { class: "support-card",
                div { class: "support-header",
                    h2 { "{s.support_title}" }
                    p { "{s.support_sub}" }
                }

                div { class: "support-thread",
                    if messages().is_empty() {
                        p { class: "support-empty", "{s.support_empty}" }
                    } else {
                        for msg in messages() {
                            div {
                                key: "{msg.id}",
                                class: if msg.is_admin { "bubble bubble-staff" } else { "bubble bubble-user" },
                                div { class: "bubble-sender", "{msg.sender_name}" }
                                p { "{msg.body}" }
                            }
                        }
                    }
                }

                form { class: "support-compose", onsubmit: handle_send,
                    input {
                        class: "input",
                        placeholder: "{s.support_ph}",
                        value: draft(),
                        oninput: move |evt| draft.set(evt.value()),
                    }
                    Button {
                        variant: ButtonVariant::Primary,
                        r#type: "submit",
                        loading: sending(),
                        "{s.support_send}"
                    }
                }
            }
        }
    }
}
