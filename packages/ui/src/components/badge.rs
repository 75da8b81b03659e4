use api::RequestStatus;
use dioxus::prelude::*;

use crate::i18n::{status_label, use_language};

/// Colored pill showing a request's triage state in the current language.
#[component]
pub fn StatusBadge(status: RequestStatus) -> Element {
    let lang = use_language();

    let class = match status {
        RequestStatus::Pending => "badge badge-pending",
        RequestStatus::InProgress => "badge badge-progress",
        RequestStatus::Completed => "badge badge-completed",
        RequestStatus::Rejected => "badge badge-rejected",
    };

    rsx! {
        span { class: "{class}", {status_label(lang(), status)} }
    }
}
