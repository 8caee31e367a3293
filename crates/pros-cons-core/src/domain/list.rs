//! List Entity
//!
//! A titled collection of items representing one decision being weighed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::item::ProsConsItem;

/// Label shown for a list whose title is blank
pub const UNTITLED_LIST: &str = "New pros and cons list";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListId(pub u64);

impl fmt::Display for ListId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A pros/cons list
///
/// `items` is in insertion order; filtering by side yields each column's
/// display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProsConsList {
    pub id: ListId,
    pub title: String,
    pub items: Vec<ProsConsItem>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProsConsList {
    /// Create an empty list stamped with `now`
    pub fn new(id: ListId, title: String, now: DateTime<Utc>) -> Self {
        Self {
            id,
            title,
            items: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn display_title(&self) -> &str {
        if self.title.trim().is_empty() {
            UNTITLED_LIST
        } else {
            &self.title
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_list_is_empty() {
        let now = Utc::now();
        let list = ProsConsList::new(ListId(1), "Move to Lisbon?".to_string(), now);
        assert!(list.items.is_empty());
        assert_eq!(list.created_at, list.updated_at);
        assert_eq!(list.display_title(), "Move to Lisbon?");
    }

    #[test]
    fn test_blank_title_falls_back() {
        let list = ProsConsList::new(ListId(1), "   ".to_string(), Utc::now());
        assert_eq!(list.display_title(), UNTITLED_LIST);
        assert_eq!(list.display_title(), "New pros and cons list");
    }
}
