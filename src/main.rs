mod api;
mod app;
mod auth;
mod components;
mod config;
mod dashboard;
mod error;
mod format;
mod http;
mod logging;
mod pages;
mod session;
mod store;
#[cfg(test)]
mod test_support;

use leptos::prelude::*;

use app::App;
use config::AppConfig;

fn main() {
    let config = AppConfig::load();
    if let Err(e) = logging::init(&config) {
        web_sys::console::warn_1(&e.to_string().into());
    }
    tracing::info!("EstatePanel starting, API at {}", config.api_base_url);

    leptos::mount::mount_to_body(move || view! { <App config=config /> });
}
