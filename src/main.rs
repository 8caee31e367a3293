//! Pros/Cons Frontend Entry Point

mod app;
mod click_outside;
mod components;
mod config;
mod context;
mod hooks;
mod logger;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logger::init();
    mount_to_body(App);
}
