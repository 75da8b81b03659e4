//! Login page view with the email/password form.

use dioxus::prelude::*;

use ui::components::{Button, ButtonVariant, Input};
use ui::i18n::strings;
use ui::{use_auth, AuthState};

use crate::Route;

/// Login page component.
#[component]
pub fn Login() -> Element {
    let mut auth = use_auth();
    let lang = ui::use_language();
    let nav = use_navigator();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    // Already signed in: straight to the right dashboard.
    use_effect(move || {
        let state = auth();
        if !state.loading {
            if let Some(user) = state.user {
                if user.is_admin() {
                    nav.replace(Route::Admin {});
                } else {
                    nav.replace(Route::Dashboard {});
                }
            }
        }
    });

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);
            loading.set(true);

            match api::login(email().trim().to_string(), password()).await {
                Ok(user) => {
                    let admin = user.is_admin();
                    auth.set(AuthState {
                        user: Some(user),
                        loading: false,
                    });
                    if admin {
                        nav.push(Route::Admin {});
                    } else {
                        nav.push(Route::Dashboard {});
                    }
                }
                Err(e) => {
                    loading.set(false);
                    error.set(Some(e.to_string()));
                }
            }
        });
    };

    let s = strings(lang());

    rsx! {
        div { class: "auth-page",
            div { class: "auth-card",
                div { class: "auth-card-header",
                    h2 { "{s.auth_login_title}" }
                    p { "{s.auth_login_sub}" }
                }

                form { class: "auth-form", onsubmit: handle_login,
                    if let Some(err) = error() {
                        div { class: "form-error", "{err}" }
                    }

                    label { "{s.auth_email}" }
                    Input {
                        r#type: "email",
                        placeholder: "name@example.com",
                        value: email(),
                        required: true,
                        oninput: move |evt: FormEvent| email.set(evt.value()),
                    }

                    label { "{s.auth_password}" }
                    Input {
                        r#type: "password",
                        placeholder: "••••••••",
                        value: password(),
                        required: true,
                        oninput: move |evt: FormEvent| password.set(evt.value()),
                    }

                    Button {
                        variant: ButtonVariant::Primary,
                        r#type: "submit",
                        class: "auth-submit",
                        loading: loading(),
                        "{s.auth_login_action}"
                    }

                    Link { class: "auth-switch", to: Route::Register {}, "{s.auth_switch_to_register}" }
                }
            }
        }
    }
}
