use dioxus::prelude::*;

/// Text input with the shared form styling.
#[component]
pub fn Input(
    #[props(default = "text".to_string())] r#type: String,
    #[props(default = String::new())] placeholder: String,
    #[props(default = String::new())] value: String,
    #[props(default = String::new())] class: String,
    #[props(default = false)] required: bool,
    #[props(default = false)] disabled: bool,
    oninput: EventHandler<FormEvent>,
) -> Element {
    rsx! {
        input {
            class: "input {class}",
            r#type: "{r#type}",
            placeholder: "{placeholder}",
            value: "{value}",
            required: required,
            disabled: disabled,
            oninput: move |evt| oninput.call(evt),
        }
    }
}
