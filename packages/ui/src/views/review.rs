use dioxus::prelude::*;
use record::{DecodeOutcome, InfoRow, ReviewScreen};

use crate::use_app_config;

/// Review screen: the submitted record rendered as label/value rows.
///
/// `payload` is the encoded record from the transition path, or `None` when the
/// screen was reached without one. An absent or unreadable payload renders the
/// blank record.
#[component]
pub fn ReviewView(#[props(!optional)] payload: Option<String>) -> Element {
    let mask_symbol = use_app_config().review.mask_symbol;
    let screen = ReviewScreen::from_payload(payload.as_deref());
    match screen.outcome() {
        DecodeOutcome::Decoded(record) if !record.is_blank() => {
            tracing::debug!("Reviewing member info for {}", record.id);
        }
        _ => tracing::debug!("Reviewing blank member info"),
    }
    let rows = screen.rows(mask_symbol);

    rsx! {
        div {
            class: "screen",

            h1 { class: "screen-title", "Check Your Information" }

            for row in rows {
                InfoRowView { key: "{row.label}", row: row.clone() }
            }
        }
    }
}

#[component]
fn InfoRowView(row: InfoRow) -> Element {
    rsx! {
        div {
            class: "info-row",
            span { class: "info-row-label", "{row.label}" }
            span { class: "info-row-value", "{row.value}" }
        }
    }
}
