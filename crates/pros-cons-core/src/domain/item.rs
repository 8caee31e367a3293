//! Item Entity
//!
//! A single pro or con argument with text and an importance weight.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::weight::Weight;

/// Item identifier, unique within its list for the list's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which column an item belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Pro,
    Con,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Pro => "pro",
            Side::Con => "con",
        }
    }

    /// Prefix of the auto-generated label, e.g. "Pros Argument 2"
    pub fn placeholder_prefix(&self) -> &'static str {
        match self {
            Side::Pro => "Pros",
            Side::Con => "Cons",
        }
    }

    /// Column heading
    pub fn label(&self) -> &'static str {
        match self {
            Side::Pro => "Pros",
            Side::Con => "Cons",
        }
    }
}

/// A pro or con argument
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProsConsItem {
    /// Stable identifier, never changes across edits
    pub id: ItemId,
    /// Argument text, never empty after trimming
    pub text: String,
    /// Importance, 1-5
    pub weight: Weight,
    /// Serialized as `type` to keep the `{ id, text, weight, type }` shape
    #[serde(rename = "type")]
    pub side: Side,
}

impl ProsConsItem {
    pub fn new(id: ItemId, text: String, weight: Weight, side: Side) -> Self {
        Self { id, text, weight, side }
    }
}
