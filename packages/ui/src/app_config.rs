use dioxus::prelude::*;
use record::AppConfig;

/// Read the [`AppConfig`] provided by the platform app.
///
/// Falls back to defaults when no provider exists, so views also render standalone.
pub fn use_app_config() -> AppConfig {
    try_use_context::<AppConfig>().unwrap_or_default()
}
