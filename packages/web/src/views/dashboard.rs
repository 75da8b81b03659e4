//! Signed-in user's dashboard: request history and profile editing.

use api::RequestInfo;
use dioxus::prelude::*;

use ui::components::{Button, ButtonVariant, Input, StatusBadge};
use ui::i18n::{project_type_label, strings};
use ui::{use_auth, AuthState};

use super::format_date;
use crate::Route;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Tab {
    Requests,
    Profile,
}

#[component]
pub fn Dashboard() -> Element {
    let mut auth = use_auth();
    let lang = ui::use_language();
    let nav = use_navigator();

    let mut tab = use_signal(|| Tab::Requests);
    let mut requests = use_signal(Vec::<RequestInfo>::new);
    let mut loading_requests = use_signal(|| false);

    let mut profile_name = use_signal(String::new);
    let mut profile_email = use_signal(String::new);
    let mut saving = use_signal(|| false);
    let mut save_message = use_signal(|| Option::<Result<String, String>>::None);

    // Guests go to the login view.
    use_effect(move || {
        let state = auth();
        if !state.loading && state.user.is_none() {
            nav.replace(Route::Login {});
        }
    });

    // Prefill the profile form from the session.
    use_effect(move || {
        if let Some(user) = auth().user {
            profile_name.set(user.name);
            profile_email.set(user.email);
        }
    });

    // The request list follows the active tab; the UI simply re-fetches.
    let _ = use_resource(move || async move {
        if tab() != Tab::Requests {
            return;
        }
        loading_requests.set(true);
        match api::get_my_requests().await {
            Ok(list) => requests.set(list),
            Err(e) => tracing::error!("failed to fetch requests: {e}"),
        }
        loading_requests.set(false);
    });

    let save_profile = move |evt: FormEvent| {
        evt.prevent_default();
        let lang = lang;
        spawn(async move {
            saving.set(true);
            save_message.set(None);

            match api::update_profile(profile_name(), profile_email()).await {
                Ok(updated) => {
                    auth.set(AuthState {
                        user: Some(updated),
                        loading: false,
                    });
                    save_message.set(Some(Ok(strings(lang()).dash_saved.to_string())));
                }
                Err(e) => save_message.set(Some(Err(e.to_string()))),
            }
            saving.set(false);
        });
    };

    let s = strings(lang());
    let Some(user) = auth().user else {
        return rsx! {};
    };

    rsx! {
        div { class: "dash-page",
            div { class: "dash-card",
                aside { class: "dash-sidebar",
                    div { class: "dash-identity",
                        span { class: "dash-avatar", {user.initial()} }
                        div {
                            div { class: "dash-name", "{user.name}" }
                            div { class: "dash-joined",
                                "{s.dash_member_since} "
                                {format_date(&user.joined_at)}
                            }
                        }
                    }

                    nav { class: "dash-tabs",
                        button {
                            class: if tab() == Tab::Requests { "dash-tab dash-tab-active" } else { "dash-tab" },
                            onclick: move |_| tab.set(Tab::Requests),
                            "{s.dash_requests_tab}"
                        }
                        button {
                            class: if tab() == Tab::Profile { "dash-tab dash-tab-active" } else { "dash-tab" },
                            onclick: move |_| tab.set(Tab::Profile),
                            "{s.dash_profile_tab}"
                        }
                    }
                }

                section { class: "dash-content",
                    if tab() == Tab::Requests {
                        h2 { "{s.dash_requests_title}" }

                        if loading_requests() {
                            div { class: "dash-loading", span { class: "btn-spinner" } }
                        } else if requests().is_empty() {
                            div { class: "dash-empty",
                                h3 { "{s.dash_no_requests}" }
                                p { "{s.dash_no_requests_sub}" }
                            }
                        } else {
                            div { class: "request-list",
                                for req in requests() {
                                    div { key: "{req.id}", class: "request-item",
                                        div { class: "request-item-head",
                                            div {
                                                div { class: "request-id",
                                                    "#"
                                                    {req.short_id()}
                                                }
                                                h3 { {project_type_label(lang(), req.project_type)} }
                                            }
                                            StatusBadge { status: req.status }
                                        }
                                        p { class: "request-desc", "{req.description}" }
                                        div { class: "request-meta",
                                            span {
                                                "{s.dash_request_date} "
                                                {format_date(&req.created_at)}
                                            }
                                            if let Some(budget) = &req.budget {
                                                span { "{s.dash_budget} {budget}" }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    } else {
                        h2 { "{s.dash_profile_title}" }

                        form { class: "profile-form", onsubmit: save_profile,
                            label { "{s.auth_name}" }
                            Input {
                                value: profile_name(),
                                required: true,
                                oninput: move |evt: FormEvent| profile_name.set(evt.value()),
                            }

                            label { "{s.auth_email}" }
                            Input {
                                r#type: "email",
                                value: profile_email(),
                                required: true,
                                oninput: move |evt: FormEvent| profile_email.set(evt.value()),
                            }

                            match save_message() {
                                Some(Ok(msg)) => rsx! { div { class: "form-success", "{msg}" } },
                                Some(Err(msg)) => rsx! { div { class: "form-error", "{msg}" } },
                                None => rsx! {},
                            }

                            Button {
                                variant: ButtonVariant::Primary,
                                r#type: "submit",
                                loading: saving(),
                                "{s.dash_save}"
                            }
                        }
                    }
                }
            }
        }
    }
}
