use dioxus::prelude::*;
use record::Transition;
use ui::views::EntryView;

use crate::Route;

#[component]
pub fn Entry() -> Element {
    let nav = use_navigator();

    let handle_submit = move |transition: Transition| match review_route(&transition) {
        Ok(route) => {
            tracing::info!("Navigating to /{}", record::REVIEW_ROUTE);
            nav.push(route);
        }
        Err(e) => tracing::warn!("Review route rejected the transition path: {e}"),
    };

    rsx! {
        EntryView { on_submit: handle_submit }
    }
}

/// Resolve a transition's `review/{payload}` path against the route table.
pub(crate) fn review_route(
    transition: &Transition,
) -> Result<Route, <Route as std::str::FromStr>::Err> {
    format!("/{}", transition.path()).parse()
}
