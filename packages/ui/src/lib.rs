//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

pub mod components;

pub mod views;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

mod app_config;
pub use app_config::use_app_config;

mod clock;
pub use clock::Clock;
