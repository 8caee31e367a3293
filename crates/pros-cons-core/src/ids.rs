//! Identifier generation
//!
//! A single monotonic counter hands out list and item ids, so an id is never
//! reused while the store is alive (even after the entity is deleted).

use crate::domain::{ItemId, ListId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdSequence {
    next: u64,
}

impl Default for IdSequence {
    fn default() -> Self {
        Self { next: 1 }
    }
}

impl IdSequence {
    pub fn new() -> Self {
        Self::default()
    }

    fn bump(&mut self) -> u64 {
        let id = self.next;
        self.next += 1;
        id
    }

    pub fn next_list_id(&mut self) -> ListId {
        ListId(self.bump())
    }

    pub fn next_item_id(&mut self) -> ItemId {
        ItemId(self.bump())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_never_repeat() {
        let mut ids = IdSequence::new();
        let a = ids.next_item_id();
        let b = ids.next_list_id();
        let c = ids.next_item_id();
        assert_eq!(a, ItemId(1));
        assert_eq!(b, ListId(2));
        assert_eq!(c, ItemId(3));
    }
}
