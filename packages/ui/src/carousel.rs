//! Rotating banner carousel for the landing view.
//!
//! Two component-scoped timers drive it: a 10 s poll that refetches the
//! active banner set (so a freshly published banner appears without a
//! reload) and a 5 s auto-advance that only runs with more than one slide.
//! Both die with the component.

use api::BannerInfo;
use dioxus::prelude::*;

use crate::icons::{FaChevronLeft, FaChevronRight};
use crate::Icon;

use crate::task::sleep_secs;

const POLL_SECS: u64 = 10;
const ADVANCE_SECS: u64 = 5;

/// Index of the slide after `current`, wrapping around.
pub(crate) fn next_index(current: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (current + 1) % len
    }
}

/// Index of the slide before `current`, wrapping around.
pub(crate) fn prev_index(current: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (current + len - 1) % len
    }
}

#[component]
pub fn BannerCarousel() -> Element {
    let mut banners = use_signal(Vec::<BannerInfo>::new);
    let mut current = use_signal(|| 0usize);

    // Fetch on mount, then keep polling for new banners.
    use_effect(move || {
        spawn(async move {
            loop {
                match api::get_banners(true).await {
                    Ok(data) => {
                        if data != banners() {
                            if current() >= data.len() {
                                current.set(0);
                            }
                            banners.set(data);
                        }
                    }
                    Err(e) => tracing::error!("failed to fetch banners: {e}"),
                }
                sleep_secs(POLL_SECS).await;
            }
        });
    });

    // Auto-advance the visible slide.
    use_effect(move || {
        spawn(async move {
            loop {
                sleep_secs(ADVANCE_SECS).await;
                let len = banners().len();
                if len > 1 {
                    current.set(next_index(current(), len));
                }
            }
        });
    });

    if banners().is_empty() {
        return rsx! {};
    }

    let slides = banners();
    let active = current();

    rsx! {
        div { class: "carousel",
            div { class: "carousel-frame",
                for (index, banner) in slides.iter().enumerate() {
                    div {
                        key: "{banner.id}",
                        class: if index == active { "carousel-slide carousel-slide-active" } else { "carousel-slide" },
                        img { src: "{banner.image_url}", alt: "{banner.title}" }
                        div { class: "carousel-caption",
                            h3 { "{banner.title}" }
                            div { class: "carousel-caption-bar" }
                        }
                    }
                }

                if slides.len() > 1 {
                    button {
                        class: "carousel-control carousel-prev",
                        onclick: move |_| {
                            let len = banners().len();
                            current.set(prev_index(current(), len));
                        },
                        Icon { icon: FaChevronLeft, width: 20, height: 20 }
                    }
                    button {
                        class: "carousel-control carousel-next",
                        onclick: move |_| {
                            let len = banners().len();
                            current.set(next_index(current(), len));
                        },
                        Icon { icon: FaChevronRight, width: 20, height: 20 }
                    }

                    div { class: "carousel-dots",
                        for index in 0..slides.len() {
                            button {
                                key: "{index}",
                                class: if index == active { "carousel-dot carousel-dot-active" } else { "carousel-dot" },
                                onclick: move |_| current.set(index),
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_wraps_around() {
        assert_eq!(next_index(0, 3), 1);
        assert_eq!(next_index(2, 3), 0);
        assert_eq!(prev_index(0, 3), 2);
        assert_eq!(prev_index(1, 3), 0);
    }

    #[test]
    fn empty_set_stays_at_zero() {
        assert_eq!(next_index(0, 0), 0);
        assert_eq!(prev_index(0, 0), 0);
    }

    #[test]
    fn single_slide_is_a_fixed_point() {
        assert_eq!(next_index(0, 1), 0);
        assert_eq!(prev_index(0, 1), 0);
    }
}
