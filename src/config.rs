//! Host Page Configuration
//!
//! Reads `AppConfig` from `<script id="app-config" type="application/json">`.

use log::{debug, warn};
use pros_cons_core::AppConfig;

const CONFIG_ELEMENT_ID: &str = "app-config";

pub fn load() -> AppConfig {
    let raw = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content());

    let Some(raw) = raw else {
        debug!("[CONFIG] no #{} block, using defaults", CONFIG_ELEMENT_ID);
        return AppConfig::default();
    };

    match AppConfig::from_json(&raw) {
        Ok(config) => {
            debug!("[CONFIG] loaded {:?}", config);
            config
        }
        Err(e) => {
            warn!("[CONFIG] {}; using defaults", e);
            AppConfig::default()
        }
    }
}
