//! Entry point for the WASM application

use leptos::*;
use pecas_frontend::{endpoints, App};

pub fn main() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 Peças - Starting Leptos App");
    log::info!("Backend API: {}", endpoints().base());

    mount_to_body(|| view! { <App/> })
}
