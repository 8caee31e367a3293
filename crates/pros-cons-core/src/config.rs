//! Runtime configuration
//!
//! The frontend reads this from an inline JSON block in the host page. Every
//! field has a default, so an empty object (or no block at all) is valid.

use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, DomainResult, Weight, UNTITLED_LIST};

pub const DEFAULT_SAMPLE_TITLE: &str = UNTITLED_LIST;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    /// Start with one sample list instead of the "Create a new list" panel
    pub seed_sample_list: bool,
    pub sample_title: String,
    /// Initial weight in the add-item form
    pub default_weight: Weight,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed_sample_list: true,
            sample_title: DEFAULT_SAMPLE_TITLE.to_string(),
            default_weight: Weight::default(),
        }
    }
}

impl AppConfig {
    pub fn from_json(raw: &str) -> DomainResult<Self> {
        serde_json::from_str(raw).map_err(|e| DomainError::invalid(format!("app config: {}", e)))
    }
}
