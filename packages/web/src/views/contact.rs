//! Public contact view: studio details plus the write-once message form.

use dioxus::prelude::*;

use ui::components::{Button, ButtonVariant, Input};
use ui::i18n::strings;
use ui::icons::{FaEnvelope, FaLocationDot, FaPhone};
use ui::Icon;

#[component]
pub fn Contact() -> Element {
    let lang = ui::use_language();

    let mut name = use_signal(String::new);
    let mut phone = use_signal(String::new);
    let mut message = use_signal(String::new);
    let mut sending = use_signal(|| false);
    let mut sent = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            sending.set(true);
            error.set(None);

            match api::send_message(name(), phone(), message()).await {
                Ok(()) => {
                    sent.set(true);
                    name.set(String::new());
                    phone.set(String::new());
                    message.set(String::new());
                }
                Err(e) => error.set(Some(e.to_string())),
            }
            sending.set(false);
        });
    };

    let s = strings(lang());

    rsx! {
        div { class: "contact-page",
            div { class: "contact-header",
                h2 { "{s.contact_title}" }
                p { "{s.contact_sub}" }
            }

            div { class: "contact-grid",
                div { class: "contact-cards",
                    div { class: "contact-card contact-card-featured",
                        div { class: "contact-card-icon", Icon { icon: FaPhone, width: 24, height: 24 } }
                        div {
                            h3 { "{s.contact_call}" }
                            p { class: "contact-value", "01027833873" }
                        }
                    }
                    div { class: "contact-card",
                        div { class: "contact-card-icon", Icon { icon: FaEnvelope, width: 24, height: 24 } }
                        div {
                            h3 { "{s.contact_email}" }
                            p { class: "contact-value", "contact@flexdesign.com" }
                        }
                    }
                    div { class: "contact-card",
                        div { class: "contact-card-icon", Icon { icon: FaLocationDot, width: 24, height: 24 } }
                        div {
                            h3 { "{s.contact_address}" }
                            p { class: "contact-value", "القرية الذكية، القاهرة" }
                        }
                    }
                }

                form { class: "contact-form", onsubmit: handle_submit,
                    if sent() {
                        div { class: "form-success", "{s.contact_sent}" }
                    }
                    if let Some(err) = error() {
                        div { class: "form-error", "{err}" }
                    }

                    Input {
                        placeholder: "{s.contact_name_ph}",
                        value: name(),
                        required: true,
                        oninput: move |evt: FormEvent| name.set(evt.value()),
                    }
                    Input {
                        r#type: "tel",
                        placeholder: "{s.contact_phone_ph}",
                        value: phone(),
                        required: true,
                        oninput: move |evt: FormEvent| phone.set(evt.value()),
                    }
                    textarea {
                        class: "input",
                        rows: 6,
                        required: true,
                        placeholder: "{s.contact_message_ph}",
                        value: message(),
                        oninput: move |evt: FormEvent| message.set(evt.value()),
                    }

                    Button {
                        variant: ButtonVariant::Primary,
                        r#type: "submit",
                        loading: sending(),
                        "{s.contact_send}"
                    }
                }
            }
        }
    }
}
