//! Design request intake form, with the optional AI brief enhancement.

use api::ProjectType;
use dioxus::prelude::*;

use ui::components::{Button, ButtonVariant, Input};
use ui::i18n::{project_type_label, strings};
use ui::icons::FaWandMagicSparkles;
use ui::Icon;

use crate::Route;

#[component]
pub fn RequestForm() -> Element {
    let auth = ui::use_auth();
    let lang = ui::use_language();
    let nav = use_navigator();
    let mut selected = use_context::<Signal<Option<ProjectType>>>();

    let mut client_name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut project_type = use_signal(|| selected().unwrap_or(ProjectType::Logo));
    let mut description = use_signal(String::new);
    let mut budget = use_signal(String::new);

    let mut enhancing = use_signal(|| false);
    let mut submitting = use_signal(|| false);
    let mut ai_error = use_signal(|| Option::<String>::None);

    // Signed-in users submit under their own identity.
    use_effect(move || {
        if let Some(user) = auth().user {
            client_name.set(user.name);
            email.set(user.email);
        }
    });

    let s = strings(lang());
    let signed_in = auth().user.is_some();
    let greeting = auth()
        .user
        .map(|u| format!("{} {}،", s.form_greeting, u.name))
        .unwrap_or_else(|| s.form_sub_guest.to_string());

    let enhance = move |_| {
        let lang = lang;
        spawn(async move {
            let raw = description().trim().to_string();
            if raw.chars().count() < 10 {
                ai_error.set(Some(strings(lang()).form_enhance_min.to_string()));
                return;
            }

            ai_error.set(None);
            enhancing.set(true);

            match api::refine_design_brief(raw, project_type()).await {
                Ok(refined) => description.set(refined),
                Err(e) => ai_error.set(Some(e.to_string())),
            }
            enhancing.set(false);
        });
    };

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            submitting.set(true);

            let budget = {
                let value = budget().trim().to_string();
                if value.is_empty() {
                    None
                } else {
                    Some(value)
                }
            };

            match api::create_request(
                client_name().trim().to_string(),
                email().trim().to_string(),
                project_type(),
                description().trim().to_string(),
                budget,
            )
            .await
            {
                Ok(_) => {
                    selected.set(None);
                    nav.push(Route::Success {});
                }
                Err(e) => {
                    submitting.set(false);
                    ai_error.set(Some(e.to_string()));
                }
            }
        });
    };

    let cancel = move |_| {
        selected.set(None);
        nav.push(Route::Home {});
    };

    rsx! {
        div { class: "form-page",
            div { class: "form-card",
                div { class: "form-card-header",
                    h2 { "{s.form_title}" }
                    p { "{greeting}" }
                }

                form { class: "request-form", onsubmit: handle_submit,
                    div { class: "form-row",
                        div { class: "form-field",
                            label { "{s.form_client_name}" }
                            Input {
                                value: client_name(),
                                required: true,
                                disabled: signed_in,
                                oninput: move |evt: FormEvent| client_name.set(evt.value()),
                            }
                        }
                        div { class: "form-field",
                            label { "{s.form_email}" }
                            Input {
                                r#type: "email",
                                placeholder: "name@example.com",
                                value: email(),
                                required: true,
                                disabled: signed_in,
                                oninput: move |evt: FormEvent| email.set(evt.value()),
                            }
                        }
                    }

                    div { class: "form-field",
                        label { "{s.form_project_type}" }
                        select {
                            class: "input",
                            onchange: move |evt: FormEvent| {
                                if let Some(t) = ProjectType::from_str(&evt.value()) {
                                    project_type.set(t);
                                }
                            },
                            for t in ProjectType::ALL {
                                option {
                                    value: t.as_str(),
                                    selected: t == project_type(),
                                    {project_type_label(lang(), t)}
                                }
                            }
                        }
                    }

                    div { class: "form-field",
                        div { class: "form-field-head",
                            label { "{s.form_description}" }
                            button {
                                class: "enhance-btn",
                                r#type: "button",
                                disabled: enhancing(),
                                onclick: enhance,
                                Icon { icon: FaWandMagicSparkles, width: 14, height: 14 }
                                "{s.form_enhance}"
                            }
                        }
                        textarea {
                            class: "input",
                            rows: 6,
                            required: true,
                            placeholder: "{s.form_desc_ph}",
                            disabled: enhancing(),
                            value: description(),
                            oninput: move |evt: FormEvent| description.set(evt.value()),
                        }
                        if let Some(err) = ai_error() {
                            div { class: "form-error", "{err}" }
                        }
                        p { class: "form-hint", "{s.form_enhance_hint}" }
                    }

                    div { class: "form-field",
                        label { "{s.form_budget}" }
                        Input {
                            placeholder: "{s.form_budget_ph}",
                            value: budget(),
                            oninput: move |evt: FormEvent| budget.set(evt.value()),
                        }
                    }

                    div { class: "form-actions",
                        Button { variant: ButtonVariant::Ghost, onclick: cancel, "{s.form_cancel}" }
                        Button {
                            variant: ButtonVariant::Primary,
                            r#type: "submit",
                            loading: submitting(),
                            "{s.form_submit}"
                        }
                    }
                }
            }
        }
    }
}
