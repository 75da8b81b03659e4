//! Landing view: hero copy, banner carousel, and the services grid.

use api::ProjectType;
use dioxus::prelude::*;

use ui::i18n::strings;
use ui::icons::{FaMicrophone, FaPalette, FaShareNodes, FaTableColumns, FaVideo, FaWandMagicSparkles};
use ui::{BannerCarousel, Icon};

use crate::Route;

#[component]
pub fn Home() -> Element {
    let auth = ui::use_auth();
    let lang = ui::use_language();
    let nav = use_navigator();
    let mut selected = use_context::<Signal<Option<ProjectType>>>();

    let s = strings(lang());

    let start = move |_| {
        if auth().user.is_some() {
            nav.push(Route::RequestForm {});
        } else {
            nav.push(Route::Register {});
        }
    };

    let mut pick_service = move |service: ProjectType| {
        selected.set(Some(service));
        nav.push(Route::RequestForm {});
    };

    rsx! {
        div { class: "hero",
            div { class: "hero-badge",
                Icon { icon: FaWandMagicSparkles, width: 16, height: 16 }
                span { "{s.hero_badge}" }
            }

            p { class: "hero-intro", "{s.hero_intro}" }

            div { class: "hero-actions",
                button { class: "btn btn-primary hero-cta", onclick: start, "{s.hero_cta_start}" }
            }

            BannerCarousel {}

            section { class: "services",
                div { class: "services-header",
                    h2 { "{s.services_title}" }
                    p { "{s.services_sub}" }
                }

                div { class: "services-grid",
                    div {
                        class: "svc-card svc-voice",
                        onclick: move |_| pick_service(ProjectType::VoiceAgencies),
                        div { class: "svc-icon", Icon { icon: FaMicrophone, width: 26, height: 26 } }
                        h3 { "{s.svc_voice_title}" }
                        p { "{s.svc_voice_desc}" }
                    }
                    div {
                        class: "svc-card svc-brand",
                        onclick: move |_| pick_service(ProjectType::Branding),
                        div { class: "svc-icon", Icon { icon: FaPalette, width: 26, height: 26 } }
                        h3 { "{s.svc_brand_title}" }
                        p { "{s.svc_brand_desc}" }
                    }
                    div {
                        class: "svc-card svc-web",
                        onclick: move |_| pick_service(ProjectType::WebDesign),
                        div { class: "svc-icon", Icon { icon: FaTableColumns, width: 26, height: 26 } }
                        h3 { "{s.svc_web_title}" }
                        p { "{s.svc_web_desc}" }
                    }
                    div {
                        class: "svc-card svc-social",
                        onclick: move |_| pick_service(ProjectType::SocialMedia),
                        div { class: "svc-icon", Icon { icon: FaShareNodes, width: 26, height: 26 } }
                        h3 { "{s.svc_social_title}" }
                        p { "{s.svc_social_desc}" }
                    }
                    div {
                        class: "svc-card svc-video",
                        onclick: move |_| pick_service(ProjectType::VideoEditing),
                        div { class: "svc-icon", Icon { icon: FaVideo, width: 26, height: 26 } }
                        h3 { "{s.svc_video_title}" }
                        p { "{s.svc_video_desc}" }
                    }
                }
            }
        }
    }
}
