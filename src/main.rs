//! Catalog Admin Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod models;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = config::load_config();
    wasm_logger::init(wasm_logger::Config::new(config.level()));
    log::info!("catalog admin using API at {:?}", config.base_url);

    mount_to_body(move || view! { <App config=config /> });
}
