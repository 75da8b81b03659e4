use dioxus::prelude::*;

/// Visual flavor of a [`Button`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Outline,
    Ghost,
    Glass,
    Danger,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn btn-primary",
            ButtonVariant::Outline => "btn btn-outline",
            ButtonVariant::Ghost => "btn btn-ghost",
            ButtonVariant::Glass => "btn btn-glass",
            ButtonVariant::Danger => "btn btn-danger",
        }
    }
}

/// Standard action button with an optional busy state.
#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    #[props(default = false)] loading: bool,
    #[props(default = false)] disabled: bool,
    #[props(default = String::new())] class: String,
    #[props(default = "button".to_string())] r#type: String,
    onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    let variant_class = variant.class();

    rsx! {
        button {
            class: "{variant_class} {class}",
            r#type: "{r#type}",
            disabled: disabled || loading,
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
            if loading {
                span { class: "btn-spinner" }
            }
            {children}
        }
    }
}
