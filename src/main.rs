//! Todo Widget Entry Point

mod models;
mod config;
mod logging;
mod storage;
mod todos;
mod view_state;
mod store;
mod context;
mod components;
mod app;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::default();
    logging::init(config.level_filter());

    mount_to_body(move || view! { <App config=config /> });
}
