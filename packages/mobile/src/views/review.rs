use dioxus::prelude::*;
use ui::views::ReviewView;

#[component]
pub fn Review(payload: String) -> Element {
    rsx! {
        ReviewView { payload: Some(payload) }
    }
}

/// Review reached without a payload, e.g. by direct navigation.
#[component]
pub fn ReviewBlank() -> Element {
    rsx! {
        ReviewView { payload: None }
    }
}
