use dioxus::prelude::*;

use crate::i18n::{strings, use_language};

#[component]
pub fn Footer() -> Element {
    let lang = use_language();
    let s = strings(lang());

    rsx! {
        footer { class: "footer",
            div { class: "footer-inner",
                div { class: "footer-brand",
                    span { class: "footer-logo", "Flex Design" }
                    p { class: "footer-tagline", "{s.footer_tagline}" }
                }
                div { class: "footer-meta",
                    span { "© 2026 Flex Design — {s.footer_rights}" }
                }
            }
        }
    }
}
