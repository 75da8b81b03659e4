//! Top navigation bar: route links, theme toggle, language picker, and the
//! session menu.

use dioxus::prelude::*;

use ui::i18n::strings;
use ui::icons::{FaMoon, FaSun};
use ui::{apply_language, apply_theme, sign_out, Icon, Language};

use crate::Route;

#[component]
pub fn Navbar() -> Element {
    let auth = ui::use_auth();
    let mut theme = ui::use_theme();
    let mut language = ui::use_language();
    let nav = use_navigator();

    let s = strings(language());
    let user = auth().user;

    let toggle_theme = move |_| {
        let next = theme().toggled();
        apply_theme(next);
        theme.set(next);
    };

    let change_language = move |evt: FormEvent| {
        let next = Language::from_str(&evt.value());
        apply_language(next);
        language.set(next);
    };

    let logout = move |_| {
        let auth = auth;
        async move {
            sign_out(auth).await;
            nav.push(Route::Home {});
        }
    };

    rsx! {
        header { class: "navbar",
            Link { class: "navbar-brand", to: Route::Home {}, "Flex Design" }

            nav { class: "navbar-links",
                Link { to: Route::Home {}, "{s.nav_home}" }
                Link { to: Route::Contact {}, "{s.nav_contact}" }

                if let Some(user) = user.clone() {
                    if user.is_admin() {
                        Link { to: Route::Admin {}, "{s.nav_admin}" }
                    } else {
                        Link { to: Route::Dashboard {}, "{s.nav_dashboard}" }
                    }
                    Link { to: Route::Messages {}, "{s.nav_messages}" }
                    Link { to: Route::Support {}, "{s.nav_support}" }
                }
            }

            div { class: "navbar-actions",
                select {
                    class: "navbar-lang",
                    onchange: change_language,
                    for l in Language::ALL {
                        option {
                            value: l.as_str(),
                            selected: l == language(),
                            {l.native_name()}
                        }
                    }
                }

                button {
                    class: "navbar-theme",
                    onclick: toggle_theme,
                    if theme() == ui::Theme::Dark {
                        Icon { icon: FaSun, width: 16, height: 16 }
                    } else {
                        Icon { icon: FaMoon, width: 16, height: 16 }
                    }
                }

                if let Some(user) = user {
                    span { class: "navbar-user",
                        span { class: "navbar-avatar", {user.initial()} }
                        "{user.name}"
                    }
                    button { class: "navbar-logout", onclick: logout, "{s.nav_logout}" }
                } else {
                    Link { class: "navbar-login", to: Route::Login {}, "{s.nav_login}" }
                    Link { class: "navbar-register", to: Route::Register {}, "{s.nav_register}" }
                }
            }
        }
    }
}
