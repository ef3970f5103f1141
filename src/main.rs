//! Shop & Notes Frontend Entry Point

mod app;
mod commands;
mod components;
mod config;
mod context;
mod error;
mod list_model;
mod logging;
mod models;
mod note_form;
mod screen_state;
mod store;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::load();
    logging::init(config.log_level_filter());
    log::info!("[app] starting, backend {}", config.api_base_url);

    mount_to_body(move || view! { <App config=config.clone() /> });
}
