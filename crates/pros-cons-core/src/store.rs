//! List Store
//!
//! Owns every list and the active selection. All item mutations go through
//! `update_items` / `apply`, which also refresh `updated_at`. No I/O; a
//! persistence backend would wrap this type rather than live inside it.

use chrono::Utc;
use log::{debug, info};

use crate::domain::{DomainError, DomainResult, ItemId, ListId, ProsConsItem, ProsConsList, Side, Weight};
use crate::editor::{apply_intent, ItemIntent};
use crate::ids::IdSequence;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListStore {
    lists: Vec<ProsConsList>,
    active: Option<ListId>,
    ids: IdSequence,
}

impl ListStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store holding one active list with a single placeholder argument
    /// per side
    pub fn with_sample(title: &str) -> Self {
        let mut store = Self::new();
        let id = store.create(title);
        let pro = store.ids.next_item_id();
        let con = store.ids.next_item_id();
        let items = vec![
            ProsConsItem::new(pro, "Pros Argument 1".to_string(), Weight::default(), Side::Pro),
            ProsConsItem::new(con, "Cons Argument 1".to_string(), Weight::default(), Side::Con),
        ];
        if let Some(list) = store.get_mut(id) {
            list.items = items;
        }
        store
    }

    pub fn lists(&self) -> &[ProsConsList] {
        &self.lists
    }

    pub fn active_id(&self) -> Option<ListId> {
        self.active
    }

    pub fn active(&self) -> Option<&ProsConsList> {
        self.active.and_then(|id| self.get(id))
    }

    pub fn get(&self, id: ListId) -> Option<&ProsConsList> {
        self.lists.iter().find(|list| list.id == id)
    }

    fn get_mut(&mut self, id: ListId) -> Option<&mut ProsConsList> {
        self.lists.iter_mut().find(|list| list.id == id)
    }

    /// Append a new empty list and make it active. Blank titles are kept
    /// as is; `display_title` supplies the fallback label.
    pub fn create(&mut self, title: &str) -> ListId {
        let id = self.ids.next_list_id();
        info!("create list {} ({:?})", id, title);
        self.lists.push(ProsConsList::new(id, title.to_string(), Utc::now()));
        self.active = Some(id);
        id
    }

    pub fn select(&mut self, id: ListId) -> DomainResult<()> {
        if self.get(id).is_none() {
            return Err(DomainError::not_found("list", id));
        }
        debug!("select list {}", id);
        self.active = Some(id);
        Ok(())
    }

    /// Replace a list's items wholesale
    pub fn update_items(&mut self, id: ListId, items: Vec<ProsConsItem>) -> DomainResult<()> {
        let list = self.get_mut(id).ok_or_else(|| DomainError::not_found("list", id))?;
        debug!("update list {}: {} items", id, items.len());
        list.items = items;
        list.updated_at = Utc::now();
        Ok(())
    }

    /// Run an item intent against a list. Returns the id of the new item
    /// for the add intents.
    pub fn apply(&mut self, id: ListId, intent: ItemIntent) -> DomainResult<Option<ItemId>> {
        if self.get(id).is_none() {
            return Err(DomainError::not_found("list", id));
        }
        let new_id = if intent.allocates() {
            Some(self.ids.next_item_id())
        } else {
            None
        };
        // Unused by the non-allocating intents
        let placeholder = new_id.unwrap_or(ItemId(0));
        let current = self.get(id).ok_or_else(|| DomainError::not_found("list", id))?;
        let items = apply_intent(&current.items, intent, placeholder)?;
        self.update_items(id, items)?;
        Ok(new_id)
    }

    /// Remove a list. Deleting the active list leaves nothing selected.
    pub fn delete(&mut self, id: ListId) -> DomainResult<()> {
        let before = self.lists.len();
        self.lists.retain(|list| list.id != id);
        if self.lists.len() == before {
            return Err(DomainError::not_found("list", id));
        }
        info!("delete list {}", id);
        if self.active == Some(id) {
            self.active = None;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::UNTITLED_LIST;

    #[test]
    fn test_create_makes_active() {
        let mut store = ListStore::new();
        let first = store.create("Buy a car?");
        let second = store.create("");
        assert_ne!(first, second);
        assert_eq!(store.active_id(), Some(second));
        assert_eq!(store.lists().len(), 2);
        assert!(store.active().unwrap().items.is_empty());
        assert_eq!(store.active().unwrap().display_title(), UNTITLED_LIST);
    }

    #[test]
    fn test_select() {
        let mut store = ListStore::new();
        let first = store.create("a");
        store.create("b");
        store.select(first).unwrap();
        assert_eq!(store.active_id(), Some(first));
        assert!(store.select(ListId(999)).is_err());
        assert_eq!(store.active_id(), Some(first));
    }

    fn pause() {
        std::thread::sleep(std::time::Duration::from_millis(5));
    }

    #[test]
    fn test_update_items_refreshes_timestamp() {
        let mut store = ListStore::new();
        let id = store.create("a");
        let created = store.get(id).unwrap().updated_at;
        pause();
        let items = vec![ProsConsItem::new(ItemId(50), "x".into(), Weight::One, Side::Con)];
        store.update_items(id, items.clone()).unwrap();

        let list = store.get(id).unwrap();
        assert_eq!(list.items, items);
        assert!(list.updated_at > created);
        assert_eq!(list.created_at, created);
    }

    #[test]
    fn test_apply_refreshes_timestamp_only_on_success() {
        let mut store = ListStore::new();
        let id = store.create("a");
        let created = store.get(id).unwrap().updated_at;
        pause();
        store.apply(id, ItemIntent::Add { side: Side::Pro }).unwrap();
        let touched = store.get(id).unwrap().updated_at;
        assert!(touched > created);

        pause();
        let rejected = ItemIntent::AddWith { text: " ".into(), weight: Weight::Two, side: Side::Con };
        assert!(store.apply(id, rejected).is_err());
        let list = store.get(id).unwrap();
        assert_eq!(list.updated_at, touched);
        assert_eq!(list.items.len(), 1);
    }

    #[test]
    fn test_update_items_unknown_list() {
        let mut store = ListStore::new();
        let err = store.update_items(ListId(3), Vec::new()).unwrap_err();
        assert!(matches!(err, DomainError::NotFound(_)));
    }

    #[test]
    fn test_delete_active_clears_selection() {
        let mut store = ListStore::new();
        let first = store.create("a");
        let second = store.create("b");
        store.delete(second).unwrap();
        assert_eq!(store.active_id(), None);
        assert_eq!(store.lists().len(), 1);

        store.select(first).unwrap();
        assert!(store.delete(ListId(999)).is_err());
        assert_eq!(store.active_id(), Some(first));
    }

    #[test]
    fn test_delete_inactive_keeps_selection() {
        let mut store = ListStore::new();
        let first = store.create("a");
        let second = store.create("b");
        store.delete(first).unwrap();
        assert_eq!(store.active_id(), Some(second));
    }

    #[test]
    fn test_apply_allocates_unique_ids() {
        let mut store = ListStore::new();
        let id = store.create("a");
        let a = store.apply(id, ItemIntent::Add { side: Side::Pro }).unwrap().unwrap();
        store.apply(id, ItemIntent::Delete { id: a }).unwrap();
        let b = store.apply(id, ItemIntent::Add { side: Side::Pro }).unwrap().unwrap();
        assert_ne!(a, b);
        assert_eq!(store.get(id).unwrap().items.len(), 1);
    }

    #[test]
    fn test_apply_rejected_intent_leaves_items() {
        let mut store = ListStore::with_sample("Sample");
        let id = store.active_id().unwrap();
        let before = store.get(id).unwrap().items.clone();
        let target = before[0].id;

        let err = store.apply(id, ItemIntent::UpdateText { id: target, text: "  ".into() });
        assert!(err.is_err());
        assert_eq!(store.get(id).unwrap().items, before);
    }

    #[test]
    fn test_with_sample() {
        let store = ListStore::with_sample("New pros and cons list");
        let list = store.active().unwrap();
        assert_eq!(list.title, "New pros and cons list");
        let texts: Vec<_> = list.items.iter().map(|i| i.text.as_str()).collect();
        assert_eq!(texts, vec!["Pros Argument 1", "Cons Argument 1"]);
        assert!(list.items.iter().all(|i| i.weight == Weight::Three));
    }
}
