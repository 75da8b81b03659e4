//! This crate contains all shared UI for the workspace.

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod auth;
pub use auth::{sign_out, use_auth, AuthProvider, AuthState};

mod persist;

mod task;
pub use task::sleep_secs;

mod theme;
pub use theme::{apply_theme, load_theme_from_storage, use_theme, Theme, ThemeSignal};

pub mod i18n;
pub use i18n::{
    apply_language, load_language_from_storage, use_language, Language, LanguageSignal,
};

mod carousel;
pub use carousel::BannerCarousel;

mod footer;
pub use footer::Footer;
