//! PetAid Hub Frontend Entry Point

mod app;
mod components;
mod context;
mod pages;
mod store;

use app::App;
use leptos::prelude::*;
use log::LevelFilter;
use petaid_core::AppConfig;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_build_env();
    let level = config
        .as_ref()
        .map(|c| c.log_level)
        .unwrap_or(LevelFilter::Info);
    if let Err(e) = console_logger::init_logger("PetAid", level) {
        web_sys::console::warn_1(&format!("Logger not installed: {}", e).into());
    }
    let config = config.unwrap_or_else(|e| {
        log::warn!("Ignoring build-time configuration: {}", e);
        AppConfig::default()
    });
    log::info!("Starting PetAid Hub (prediction endpoint {})", config.predict_url);

    mount_to_body(move || view! { <App config=config.clone() /> });
}
