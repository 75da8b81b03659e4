//! Staff dashboard: request triage, user administration, banner management
//! and the contact-message inbox. Every mutation re-fetches the affected
//! lists; there is no optimistic state to reconcile.

use api::{BannerInfo, MessageInfo, RequestInfo, RequestStatus, UploadPayload, UserInfo, UserStatus};
use dioxus::prelude::*;

use ui::components::{Button, ButtonVariant, StatusBadge};
use ui::i18n::{project_type_label, strings};
use ui::icons::{FaCheck, FaEye, FaEyeSlash, FaLock, FaLockOpen, FaSpinner, FaTrash, FaXmark};
use ui::Icon;

use super::{confirm, format_date};
use crate::Route;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Tab {
    Requests,
    Users,
    Banners,
    Messages,
}

/// Content type for an upload, from the file extension. The browser's
/// multipart metadata is not available through the bytes API, so this is
/// what gates the server-side `image/*` check.
fn content_type_for(file_name: &str) -> &'static str {
    let ext = file_name.rsplit('.').next().unwrap_or_default().to_ascii_lowercase();
    match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        _ => "application/octet-stream",
    }
}

#[component]
pub fn Admin() -> Element {
    let auth = ui::use_auth();
    let lang = ui::use_language();
    let nav = use_navigator();

    let mut tab = use_signal(|| Tab::Requests);
    let mut requests = use_signal(Vec::<RequestInfo>::new);
    let mut users = use_signal(Vec::<UserInfo>::new);
    let mut banners = use_signal(Vec::<BannerInfo>::new);
    let mut messages = use_signal(Vec::<MessageInfo>::new);
    let mut loading = use_signal(|| false);

    // New banner form state.
    let mut banner_title = use_signal(String::new);
    let mut banner_file = use_signal(|| Option::<(String, Vec<u8>)>::None);
    let mut uploading = use_signal(|| false);
    let mut banner_error = use_signal(|| Option::<String>::None);

    // Guests to login; non-admins to their own dashboard.
    use_effect(move || {
        let state = auth();
        if state.loading {
            return;
        }
        match state.user {
            None => {
                nav.replace(Route::Login {});
            }
            Some(user) if !user.is_admin() => {
                nav.replace(Route::Dashboard {});
            }
            Some(_) => {}
        }
    });

    let fetch_all = move || async move {
        loading.set(true);
        match api::get_all_requests().await {
            Ok(list) => requests.set(list),
            Err(e) => tracing::error!("admin fetch failed: {e}"),
        }
        match api::get_all_users().await {
            Ok(list) => users.set(list),
            Err(e) => tracing::error!("admin fetch failed: {e}"),
        }
        match api::get_banners(false).await {
            Ok(list) => banners.set(list),
            Err(e) => tracing::error!("admin fetch failed: {e}"),
        }
        match api::get_messages().await {
            Ok(list) => messages.set(list),
            Err(e) => tracing::error!("admin fetch failed: {e}"),
        }
        loading.set(false);
    };

    let _ = use_resource(move || async move {
        if auth().user.as_ref().is_some_and(|u| u.is_admin()) {
            fetch_all().await;
        }
    });

    let set_status = move |request_id: String, status: RequestStatus| {
        spawn(async move {
            if let Err(e) = api::update_request_status(request_id, status).await {
                tracing::error!("status update failed: {e}");
            }
            fetch_all().await;
        });
    };

    let toggle_ban = move |user: UserInfo| {
        let lang = lang;
        spawn(async move {
            let s = strings(lang());
            let prompt = if user.status == UserStatus::Banned {
                s.admin_confirm_unban
            } else {
                s.admin_confirm_ban
            };
            if !confirm(prompt) {
                return;
            }
            if let Err(e) = api::toggle_user_ban(user.id).await {
                tracing::error!("ban toggle failed: {e}");
            }
            fetch_all().await;
        });
    };

    let delete_user = move |user_id: String| {
        let lang = lang;
        spawn(async move {
            if !confirm(strings(lang()).admin_confirm_delete_user) {
                return;
            }
            if let Err(e) = api::delete_user(user_id).await {
                tracing::error!("user delete failed: {e}");
            }
            fetch_all().await;
        });
    };

    let pick_file = move |evt: FormEvent| {
        spawn(async move {
            let files = evt.files();
            if let Some(file) = files.first() {
                let name = file.name();
                if let Ok(bytes) = file.read_bytes().await {
                    banner_file.set(Some((name, bytes.to_vec())));
                    banner_error.set(None);
                }
            }
        });
    };

    let publish_banner = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            let Some((file_name, data)) = banner_file() else {
                return;
            };
            let title = banner_title().trim().to_string();
            if title.is_empty() {
                return;
            }

            uploading.set(true);
            banner_error.set(None);

            let payload = UploadPayload {
                content_type: content_type_for(&file_name).to_string(),
                file_name,
                data,
            };

            let published = match api::upload_banner_image(payload).await {
                Ok(url) => api::add_banner(url, title).await,
                Err(e) => Err(e),
            };

            match published {
                Ok(()) => {
                    banner_title.set(String::new());
                    banner_file.set(None);
                    fetch_all().await;
                }
                Err(e) => banner_error.set(Some(e.to_string())),
            }
            uploading.set(false);
        });
    };

    let toggle_banner = move |banner_id: String| {
        spawn(async move {
            if let Err(e) = api::toggle_banner_status(banner_id).await {
                tracing::error!("banner toggle failed: {e}");
            }
            fetch_all().await;
        });
    };

    let delete_banner = move |banner_id: String| {
        let lang = lang;
        spawn(async move {
            if !confirm(strings(lang()).admin_confirm_delete_banner) {
                return;
            }
            if let Err(e) = api::delete_banner(banner_id).await {
                tracing::error!("banner delete failed: {e}");
            }
            fetch_all().await;
        });
    };

    let s = strings(lang());
    if !auth().user.as_ref().is_some_and(|u| u.is_admin()) {
        return rsx! {};
    }

    let user_count = users().len();
    let request_count = requests().len();
    let message_count = messages().len();
    let active_banners = banners().iter().filter(|b| b.is_active).count();

    rsx! {
        div { class: "admin-page",
            div { class: "admin-stats",
                div { class: "stat-card",
                    div { class: "stat-label", "{s.admin_stat_users}" }
                    div { class: "stat-value", "{user_count}" }
                }
                div { class: "stat-card",
                    div { class: "stat-label", "{s.admin_stat_requests}" }
                    div { class: "stat-value", "{request_count}" }
                }
                div { class: "stat-card",
                    div { class: "stat-label", "{s.admin_stat_messages}" }
                    div { class: "stat-value", "{message_count}" }
                }
                div { class: "stat-card",
                    div { class: "stat-label", "{s.admin_stat_banners}" }
                    div { class: "stat-value", "{active_banners}" }
                }
            }

            div { class: "admin-card",
                aside { class: "admin-sidebar",
                    div { class: "admin-brand",
                        div { class: "admin-brand-title", "{s.admin_panel}" }
                        div { class: "admin-brand-sub", "ADMIN PANEL" }
                    }

                    nav { class: "admin-tabs",
                        button {
                            class: if tab() == Tab::Requests { "admin-tab admin-tab-active" } else { "admin-tab" },
                            onclick: move |_| tab.set(Tab::Requests),
                            "{s.admin_tab_requests}"
                        }
                        button {
                            class: if tab() == Tab::Users { "admin-tab admin-tab-active" } else { "admin-tab" },
                            onclick: move |_| tab.set(Tab::Users),
                            "{s.admin_tab_users}"
                        }
                        button {
                            class: if tab() == Tab::Banners { "admin-tab admin-tab-active" } else { "admin-tab" },
                            onclick: move |_| tab.set(Tab::Banners),
                            "{s.admin_tab_banners}"
                        }
                        button {
                            class: if tab() == Tab::Messages { "admin-tab admin-tab-active" } else { "admin-tab" },
                            onclick: move |_| tab.set(Tab::Messages),
                            span { "{s.admin_tab_messages}" }
                            span { class: "admin-tab-count", "{message_count}" }
                        }
                    }
                }

                section { class: "admin-content",
                    match tab() {
                        Tab::Requests => rsx! {
                            div { class: "admin-section",
                                div { class: "admin-section-head",
                                    h2 { "{s.admin_requests_title}" }
                                    button {
                                        class: "admin-refresh",
                                        onclick: move |_| { spawn(async move { fetch_all().await; }); },
                                        Icon { icon: FaSpinner, width: 18, height: 18 }
                                    }
                                }

                                if requests().is_empty() {
                                    div { class: "admin-empty", "{s.admin_no_requests}" }
                                } else {
                                    table { class: "admin-table",
                                        thead {
                                            tr {
                                                th { "{s.admin_col_client}" }
                                                th { "{s.admin_col_type}" }
                                                th { "{s.admin_col_desc}" }
                                                th { "{s.admin_col_status}" }
                                                th { "{s.admin_col_actions}" }
                                            }
                                        }
                                        tbody {
                                            for req in requests() {
                                                tr { key: "{req.id}",
                                                    td {
                                                        div { class: "cell-client", "{req.client_name}" }
                                                        div { class: "cell-email", "{req.email}" }
                                                        div { class: "cell-date", {format_date(&req.created_at)} }
                                                    }
                                                    td {
                                                        span { class: "cell-type", {project_type_label(lang(), req.project_type)} }
                                                    }
                                                    td {
                                                        div { class: "cell-desc",
                                                            p { "{req.description}" }
                                                            if let Some(budget) = &req.budget {
                                                                div { class: "cell-budget", "{s.dash_budget} {budget}" }
                                                            }
                                                        }
                                                    }
                                                    td { StatusBadge { status: req.status } }
                                                    td {
                                                        div { class: "cell-actions",
                                                            button {
                                                                class: "action action-progress",
                                                                title: "{s.status_in_progress}",
                                                                onclick: {
                                                                    let id = req.id.clone();
                                                                    move |_| set_status(id.clone(), RequestStatus::InProgress)
                                                                },
                                                                Icon { icon: FaSpinner, width: 16, height: 16 }
                                                            }
                                                            button {
                                                                class: "action action-complete",
                                                                title: "{s.status_completed}",
                                                                onclick: {
                                                                    let id = req.id.clone();
                                                                    move |_| set_status(id.clone(), RequestStatus::Completed)
                                                                },
                                                                Icon { icon: FaCheck, width: 16, height: 16 }
                                                            }
                                                            button {
                                                                class: "action action-reject",
                                                                title: "{s.status_rejected}",
                                                                onclick: {
                                                                    let id = req.id.clone();
                                                                    move |_| set_status(id.clone(), RequestStatus::Rejected)
                                                                },
                                                                Icon { icon: FaXmark, width: 16, height: 16 }
                                                            }
                                                        }
                                                    }
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        },
                        Tab::Users => rsx! {
                            div { class: "admin-section",
                                h2 { "{s.admin_users_title} ({user_count})" }

                                div { class: "user-list",
                                    for user in users() {
                                        div {
                                            key: "{user.id}",
                                            class: if user.status == UserStatus::Banned { "user-item user-item-banned" } else { "user-item" },

                                            div { class: "user-identity",
                                                span { class: "user-avatar", {user.initial()} }
                                                div {
                                                    div { class: "user-name",
                                                        "{user.name}"
                                                        if user.status == UserStatus::Banned {
                                                            span { class: "tag tag-banned", "{s.admin_banned}" }
                                                        }
                                                        if user.is_admin() {
                                                            span { class: "tag tag-admin", "{s.admin_badge}" }
                                                        }
                                                    }
                                                    div { class: "user-email", "{user.email}" }
                                                }
                                            }

                                            div { class: "user-meta",
                                                span { class: "user-joined", {format_date(&user.joined_at)} }
                                                if !user.is_admin() {
                                                    div { class: "cell-actions",
                                                        button {
                                                            class: if user.status == UserStatus::Banned { "action action-complete" } else { "action action-warn" },
                                                            onclick: {
                                                                let user = user.clone();
                                                                move |_| toggle_ban(user.clone())
                                                            },
                                                            if user.status == UserStatus::Banned {
                                                                Icon { icon: FaLockOpen, width: 16, height: 16 }
                                                            } else {
                                                                Icon { icon: FaLock, width: 16, height: 16 }
                                                            }
                                                        }
                                                        button {
                                                            class: "action action-reject",
                                                            onclick: {
                                                                let id = user.id.clone();
                                                                move |_| delete_user(id.clone())
                                                            },
                                                            Icon { icon: FaTrash, width: 16, height: 16 }
                                                        }
                                                    }
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        },
                        Tab::Banners => rsx! {
                            div { class: "admin-section",
                                h2 { "{s.admin_banners_title}" }

                                form { class: "banner-form", onsubmit: publish_banner,
                                    h3 { "{s.admin_add_banner}" }
                                    div { class: "form-row",
                                        input {
                                            class: "input",
                                            placeholder: "{s.admin_banner_title_ph}",
                                            required: true,
                                            value: banner_title(),
                                            oninput: move |evt| banner_title.set(evt.value()),
                                        }
                                        label { class: "file-pick",
                                            input {
                                                r#type: "file",
                                                accept: "image/*",
                                                onchange: pick_file,
                                            }
                                            if let Some((name, _)) = banner_file() {
                                                span { class: "file-pick-name", "{name}" }
                                            } else {
                                                span { "{s.admin_pick_image}" }
                                            }
                                        }
                                    }

                                    if let Some(err) = banner_error() {
                                        div { class: "form-error", "{err}" }
                                    }

                                    Button {
                                        variant: ButtonVariant::Primary,
                                        r#type: "submit",
                                        loading: uploading(),
                                        disabled: banner_file().is_none() || banner_title().trim().is_empty(),
                                        if uploading() { "{s.admin_uploading}" } else { "{s.admin_publish}" }
                                    }
                                }

                                if banners().is_empty() {
                                    div { class: "admin-empty", "{s.admin_no_banners}" }
                                } else {
                                    div { class: "banner-list",
                                        for banner in banners() {
                                            div {
                                                key: "{banner.id}",
                                                class: if banner.is_active { "banner-item" } else { "banner-item banner-item-inactive" },

                                                img { src: "{banner.image_url}", alt: "{banner.title}" }
                                                div { class: "banner-item-overlay",
                                                    div {
                                                        h4 { "{banner.title}" }
                                                        span { class: if banner.is_active { "banner-state banner-state-active" } else { "banner-state" },
                                                            if banner.is_active { "{s.admin_active}" } else { "{s.admin_inactive}" }
                                                        }
                                                    }
                                                }
                                                div { class: "banner-item-actions",
                                                    button {
                                                        class: "action",
                                                        onclick: {
                                                            let id = banner.id.clone();
                                                            move |_| toggle_banner(id.clone())
                                                        },
                                                        if banner.is_active {
                                                            Icon { icon: FaEye, width: 16, height: 16 }
                                                        } else {
                                                            Icon { icon: FaEyeSlash, width: 16, height: 16 }
                                                        }
                                                    }
                                                    button {
                                                        class: "action action-reject",
                                                        onclick: {
                                                            let id = banner.id.clone();
                                                            move |_| delete_banner(id.clone())
                                                        },
                                                        Icon { icon: FaTrash, width: 16, height: 16 }
                                                    }
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        },
                        Tab::Messages => rsx! {
                            div { class: "admin-section",
                                h2 { "{s.admin_messages_title}" }

                                div { class: "message-list",
                                    for msg in messages() {
                                        div { key: "{msg.id}", class: "message-item",
                                            div { class: "message-head",
                                                div {
                                                    div { class: "message-name", "{msg.name}" }
                                                    div { class: "message-phone", "{msg.phone}" }
                                                }
                                                span { class: "message-date", {format_date(&msg.sent_at)} }
                                            }
                                            p { class: "message-body", "{msg.body}" }
                                        }
                                    }
                                }
                            }
                        },
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::content_type_for;

    #[test]
    fn known_image_extensions_are_mapped() {
        assert_eq!(content_type_for("banner.PNG"), "image/png");
        assert_eq!(content_type_for("photo.jpeg"), "image/jpeg");
        assert_eq!(content_type_for("anim.webp"), "image/webp");
    }

    #[test]
    fn unknown_extensions_fall_through() {
        assert_eq!(content_type_for("notes.txt"), "application/octet-stream");
        assert_eq!(content_type_for("no_extension"), "application/octet-stream");
    }
}
