//! Signed-in user's notification feed. Opening the view marks everything
//! as read.

use api::{NotificationInfo, NotificationKind};
use dioxus::prelude::*;

use ui::i18n::strings;

use super::format_date;
use crate::Route;

fn kind_class(kind: NotificationKind) -> &'static str {
    match kind {
        NotificationKind::Info => "notif notif-info",
        NotificationKind::Success => "notif notif-success",
        NotificationKind::Warning => "notif notif-warning",
        NotificationKind::Error => "notif notif-error",
    }
}

#[component]
pub fn Messages() -> Element {
    let auth = ui::use_auth();
    let lang = ui::use_language();
    let nav = use_navigator();

    let mut notifications = use_signal(Vec::<NotificationInfo>::new);
    let mut loading = use_signal(|| true);

    use_effect(move || {
        let state = auth();
        if !state.loading && state.user.is_none() {
            nav.replace(Route::Login {});
        }
    });

    let _ = use_resource(move || async move {
        if auth().user.is_none() {
            return;
        }
        match api::get_notifications().await {
            Ok(list) => {
                notifications.set(list);
                if let Err(e) = api::mark_notifications_read().await {
                    tracing::error!("failed to mark notifications read: {e}");
                }
            }
            Err(e) => tracing::error!("failed to fetch notifications: {e}"),
        }
        loading.set(false);
    });

    let s = strings(lang());
    if auth().user.is_none() {
        return rsx! {};
    }

    rsx! {
        div { class: "messages-page",
            h2 { "{s.msgs_title}" }

            if loading() {
                div { class: "dash-loading", span { class: "btn-spinner" } }
            } else if notifications().is_empty() {
                div { class: "dash-empty", p { "{s.msgs_empty}" } }
            } else {
                div { class: "notif-list",
                    for n in notifications() {
                        div {
                            key: "{n.id}",
                            class: {
                                let base = kind_class(n.kind);
                                if n.is_read {
                                    base.to_string()
                                } else {
                                    format!("notif-unread {base}")
                                }
                            },
                            div { class: "notif-head",
                                h3 { "{n.title}" }
                                span { class: "notif-date", {format_date(&n.created_at)} }
                            }
                            p { "{n.body}" }
                        }
                    }
                }
            }
        }
    }
}
