//! Theme selection, persisted in `localStorage["theme"]` and applied as a
//! `dark` class on the document element.

use dioxus::prelude::*;

use crate::persist;

pub const THEME_STORAGE_KEY: &str = "theme";

/// The two presentation themes. Dark is the studio default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    /// Stored value → theme. Anything unrecognized falls back to dark.
    pub fn from_str(value: &str) -> Theme {
        match value {
            "light" => Theme::Light,
            _ => Theme::Dark,
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

pub type ThemeSignal = Signal<Theme>;

/// Get the theme signal provided at the application root.
pub fn use_theme() -> ThemeSignal {
    use_context::<ThemeSignal>()
}

/// Read the persisted theme choice, defaulting to dark.
pub fn load_theme_from_storage() -> Theme {
    persist::get(THEME_STORAGE_KEY)
        .map(|v| Theme::from_str(&v))
        .unwrap_or_default()
}

/// Persist a theme choice and reflect it on the document element.
pub fn apply_theme(theme: Theme) {
    persist::set(THEME_STORAGE_KEY, theme.as_str());

    #[cfg(target_arch = "wasm32")]
    {
        if let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            let classes = root.class_list();
            let _ = match theme {
                Theme::Dark => classes.add_1("dark"),
                Theme::Light => classes.remove_1("dark"),
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_twice_returns_to_the_original() {
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
    }

    #[test]
    fn unknown_stored_values_fall_back_to_dark() {
        assert_eq!(Theme::from_str("light"), Theme::Light);
        assert_eq!(Theme::from_str("dark"), Theme::Dark);
        assert_eq!(Theme::from_str("solarized"), Theme::Dark);
    }
}
