//! Edit-Mode State Machine
//!
//! Which item's text or weight is being edited in one list. A single tracker
//! per field means at most one text editor and one weight editor are open at
//! a time; opening a new one settles the previous one by that field's own
//! rule (text commits on blur, weight cancels).
//!
//! Transitions that commit hand back an `ItemIntent`; the caller applies it
//! through the store.

use log::debug;

use crate::domain::{ItemId, ProsConsItem, Weight};
use crate::editor::ItemIntent;

/// Open text editor: target item and the uncommitted draft
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextEdit {
    pub item_id: ItemId,
    pub draft: String,
}

/// Open weight editor: target item, the value shown on the chip, and
/// whether the five-value menu is currently dropped down
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeightEdit {
    pub item_id: ItemId,
    pub shown: Weight,
    pub menu_open: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListEditState {
    pub text: Option<TextEdit>,
    pub weight: Option<WeightEdit>,
}

impl ListEditState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_editing_text(&self, item_id: ItemId) -> bool {
        self.text.as_ref().is_some_and(|edit| edit.item_id == item_id)
    }

    pub fn is_editing_weight(&self, item_id: ItemId) -> bool {
        self.weight.is_some_and(|edit| edit.item_id == item_id)
    }

    pub fn is_menu_open(&self, item_id: ItemId) -> bool {
        self.weight.is_some_and(|edit| edit.item_id == item_id && edit.menu_open)
    }

    pub fn draft(&self) -> Option<&str> {
        self.text.as_ref().map(|edit| edit.draft.as_str())
    }

    // ========================
    // Text field
    // ========================

    /// display -> editing, seeded with the item's current text.
    ///
    /// A text editor already open on another item is blurred first; its
    /// commit (if any) is returned.
    pub fn begin_text(&mut self, item: &ProsConsItem) -> Option<ItemIntent> {
        if self.is_editing_text(item.id) {
            return None;
        }
        let previous = self.blur_text();
        debug!("edit text: begin {}", item.id);
        self.text = Some(TextEdit {
            item_id: item.id,
            draft: item.text.clone(),
        });
        previous
    }

    /// editing -> editing while typing
    pub fn set_draft(&mut self, draft: String) {
        if let Some(edit) = self.text.as_mut() {
            edit.draft = draft;
        }
    }

    /// Enter: commit a non-empty draft and return to display. A blank draft
    /// keeps the editor open.
    pub fn commit_text(&mut self) -> Option<ItemIntent> {
        let edit = self.text.as_ref()?;
        if edit.draft.trim().is_empty() {
            return None;
        }
        self.take_text_commit()
    }

    /// Focus loss: commit a non-empty draft, otherwise revert. Always
    /// returns to display.
    pub fn blur_text(&mut self) -> Option<ItemIntent> {
        let edit = self.text.as_ref()?;
        if edit.draft.trim().is_empty() {
            self.cancel_text();
            return None;
        }
        self.take_text_commit()
    }

    /// Escape: drop the draft
    pub fn cancel_text(&mut self) {
        if let Some(edit) = self.text.take() {
            debug!("edit text: cancel {}", edit.item_id);
        }
    }

    fn take_text_commit(&mut self) -> Option<ItemIntent> {
        let edit = self.text.take()?;
        debug!("edit text: commit {}", edit.item_id);
        Some(ItemIntent::UpdateText {
            id: edit.item_id,
            text: edit.draft,
        })
    }

    // ========================
    // Weight field
    // ========================

    /// display -> editing with the menu open. Any other open weight editor
    /// is cancelled.
    pub fn open_weight(&mut self, item: &ProsConsItem) {
        debug!("edit weight: open {}", item.id);
        self.weight = Some(WeightEdit {
            item_id: item.id,
            shown: item.weight,
            menu_open: true,
        });
    }

    /// Click on the chip of the item being edited
    pub fn toggle_weight_menu(&mut self) {
        if let Some(edit) = self.weight.as_mut() {
            edit.menu_open = !edit.menu_open;
        }
    }

    /// Pick one of the five values: commits and returns to display
    pub fn select_weight(&mut self, weight: Weight) -> Option<ItemIntent> {
        let edit = self.weight.take()?;
        debug!("edit weight: {} -> {}", edit.item_id, weight);
        Some(ItemIntent::Reweight {
            id: edit.item_id,
            weight,
        })
    }

    /// Pointer-down outside the menu: back to display without committing
    pub fn dismiss_weight(&mut self) {
        if let Some(edit) = self.weight.take() {
            debug!("edit weight: dismiss {}", edit.item_id);
        }
    }

    /// Drop any editor that points at an item no longer in `items`
    pub fn forget_missing(&mut self, items: &[ProsConsItem]) {
        let exists = |id: ItemId| items.iter().any(|item| item.id == id);
        if self.text.as_ref().is_some_and(|edit| !exists(edit.item_id)) {
            self.text = None;
        }
        if self.weight.is_some_and(|edit| !exists(edit.item_id)) {
            self.weight = None;
        }
    }
}
