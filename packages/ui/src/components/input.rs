use dioxus::prelude::*;

/// Single-line text input.
#[component]
pub fn Input(
    #[props(default, into)] id: String,
    #[props(default, into)] class: String,
    /// HTML input type, e.g. `"password"` or `"tel"`.
    #[props(default = "text".to_string(), into)] kind: String,
    #[props(default, into)] placeholder: String,
    #[props(into)] value: String,
    oninput: EventHandler<FormEvent>,
) -> Element {
    rsx! {
        input {
            id: "{id}",
            class: "input {class}",
            r#type: "{kind}",
            placeholder: "{placeholder}",
            autocomplete: "off",
            value: "{value}",
            oninput: move |evt| oninput.call(evt),
        }
    }
}
