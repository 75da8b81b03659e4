//! Confirmation view shown after a request submission.

use dioxus::prelude::*;

use ui::components::{Button, ButtonVariant};
use ui::i18n::strings;
use ui::icons::FaCircleCheck;
use ui::Icon;

use crate::Route;

#[component]
pub fn Success() -> Element {
    let auth = ui::use_auth();
    let lang = ui::use_language();
    let nav = use_navigator();

    let s = strings(lang());
    let signed_in = auth().user.is_some();

    rsx! {
        div { class: "success-page",
            div { class: "success-icon",
                Icon { icon: FaCircleCheck, width: 48, height: 48 }
            }
            h2 { "{s.success_title}" }
            p { class: "success-desc",
                "{s.success_desc}"
                if signed_in {
                    " {s.success_track}"
                }
            }

            div { class: "success-actions",
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| { nav.push(Route::Home {}); },
                    "{s.nav_home}"
                }
                if signed_in {
                    Button {
                        onclick: move |_| { nav.push(Route::Dashboard {}); },
                        "{s.nav_dashboard}"
                    }
                } else {
                    Button {
                        onclick: move |_| { nav.push(Route::RequestForm {}); },
                        "{s.success_new_request}"
                    }
                }
            }
        }
    }
}
