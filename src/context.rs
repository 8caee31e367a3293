//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;
use pros_cons_core::{AppConfig, Weight};

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Bumped on every pointer-down outside a weight menu - read
    pub dismiss_trigger: ReadSignal<u32>,
    /// Bumped on every pointer-down outside a weight menu - write
    set_dismiss_trigger: WriteSignal<u32>,
    config: StoredValue<AppConfig>,
}

impl AppContext {
    pub fn new(dismiss_trigger: (ReadSignal<u32>, WriteSignal<u32>), config: AppConfig) -> Self {
        Self {
            dismiss_trigger: dismiss_trigger.0,
            set_dismiss_trigger: dismiss_trigger.1,
            config: StoredValue::new(config),
        }
    }

    /// Ask every board to close its open weight menu
    pub fn dismiss_menus(&self) {
        self.set_dismiss_trigger.update(|v| *v = v.wrapping_add(1));
    }

    /// Initial weight for the detailed add form
    pub fn default_weight(&self) -> Weight {
        self.config.with_value(|config| config.default_weight)
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
