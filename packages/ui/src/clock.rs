//! Live timestamp label for the entry screen.

use dioxus::prelude::*;
use record::config::ClockConfig;

use crate::use_app_config;

/// Renders the current local time and refreshes it on a timer.
///
/// Hidden when `clock.enabled` is off in the app config.
#[component]
pub fn Clock() -> Element {
    let config = use_app_config().clock;
    let format = config.format.clone();
    let period = timer_period(&config);
    let mut now = use_signal({
        let format = format.clone();
        move || current_time(&format)
    });

    use_future(move || {
        let format = format.clone();
        async move {
            let Some(period) = period else {
                return;
            };
            loop {
                sleep_secs(period).await;
                now.set(current_time(&format));
            }
        }
    });

    if !config.enabled {
        return rsx! {};
    }

    rsx! {
        p {
            class: "clock",
            "{now}"
        }
    }
}

/// Seconds between refreshes, or `None` when the clock is off and no timer runs.
fn timer_period(config: &ClockConfig) -> Option<u64> {
    config.enabled.then(|| config.refresh_period_secs())
}

async fn sleep_secs(secs: u64) {
    tokio::time::sleep(std::time::Duration::from_secs(secs)).await;
}

fn current_time(format: &str) -> String {
    use std::fmt::Write;

    let mut out = String::new();
    // An invalid strftime string makes the formatter error instead of panicking.
    if write!(out, "{}", chrono::Local::now().format(format)).is_err() {
        return chrono::Local::now().format("%H:%M:%S").to_string();
    }
    out
}
