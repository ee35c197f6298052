use dioxus::prelude::*;
use record::{EntryForm, Field, Transition};

use crate::components::{Button, ButtonVariant, Input, Label};
use crate::Clock;

/// Entry screen: four member fields and a submit button.
///
/// Each field owns its own signal, created when the view mounts and dropped with it.
/// `on_submit` fires with the encoded transition once all fields are filled; the
/// platform package decides how to navigate.
#[component]
pub fn EntryView(on_submit: EventHandler<Transition>) -> Element {
    let id = use_signal(String::new);
    let secret = use_signal(String::new);
    let display_name = use_signal(String::new);
    let phone = use_signal(String::new);

    let form = EntryForm::new(id(), secret(), display_name(), phone());
    let can_submit = form.can_submit();

    let handle_submit = move |_: MouseEvent| {
        let form = EntryForm::new(id(), secret(), display_name(), phone());
        match form.submit() {
            Some(transition) => {
                tracing::info!("Submitting member info for {}", form.id);
                on_submit.call(transition);
            }
            None => tracing::debug!("Submit ignored, form incomplete"),
        }
    };

    rsx! {
        div {
            class: "screen",

            h1 { class: "screen-title", "Member Information" }
            Clock {}

            FormField { field: Field::Id, value: id }
            FormField { field: Field::Secret, value: secret }
            FormField { field: Field::DisplayName, value: display_name }
            FormField { field: Field::Phone, value: phone }

            Button {
                variant: ButtonVariant::Primary,
                class: "w-full",
                disabled: !can_submit,
                onclick: handle_submit,
                "Go to review"
            }
        }
    }
}

#[component]
fn FormField(field: Field, value: Signal<String>) -> Element {
    let mut value = value;

    rsx! {
        div {
            class: "form-field",
            Label { html_for: field.element_id(), "{field.label()}" }
            Input {
                id: field.element_id(),
                class: "w-full",
                kind: field.input_type(),
                placeholder: field.placeholder(),
                value: value(),
                oninput: move |evt: FormEvent| value.set(evt.value()),
            }
        }
    }
}
