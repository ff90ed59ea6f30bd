use leptos::*;
use wasm_bindgen::prelude::*;

use crate::app::App;
use crate::domain::logging::LogComponent;
use crate::infrastructure::services::{BrowserTimeProvider, ConsoleLogger};
use crate::presentation::ForecastPage;

pub mod macros;

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod event_utils;
pub mod global_state;
pub mod infrastructure;
pub mod presentation;
pub mod time_utils;

/// Set up logging, build the page and mount the UI
#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();

    let loaded = presentation::load_config();
    let config = loaded.clone().unwrap_or_default();

    domain::logging::init_time_provider(Box::new(BrowserTimeProvider::new()));
    domain::logging::init_logger(Box::new(ConsoleLogger::new(config.log_level)));

    if let Err(e) = loaded {
        log_warn!(LogComponent::Presentation("Initialize"), "Ignoring page configuration: {}", e);
    }

    let page = ForecastPage::new(config);
    ForecastPage::install(page.clone());

    mount_to_body(move || view! { <App page=page.clone()/> });

    log_info!(
        LogComponent::Presentation("Initialize"),
        "🚀 Wind forecast viewer initialized"
    );
}
