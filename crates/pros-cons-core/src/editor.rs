//! Item Editor
//!
//! Pure transformations of a list's item collection. Every function takes the
//! current items and returns a new collection; the caller decides whether to
//! store it. An `Err` means "nothing changed" and is never surfaced to the
//! user.

use log::debug;

use crate::domain::{DomainError, DomainResult, ItemId, ProsConsItem, Side, Weight};

/// A discrete user edit against one list's items
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemIntent {
    /// Append a placeholder item ("Pros Argument N") with the default weight
    Add { side: Side },
    /// Append an item with user-supplied text and weight
    AddWith { text: String, weight: Weight, side: Side },
    UpdateText { id: ItemId, text: String },
    Reweight { id: ItemId, weight: Weight },
    Delete { id: ItemId },
}

impl ItemIntent {
    /// Whether applying this intent needs a fresh item id
    pub fn allocates(&self) -> bool {
        matches!(self, ItemIntent::Add { .. } | ItemIntent::AddWith { .. })
    }
}

/// Apply `intent` to `items`; `new_id` is only used by the add intents.
pub fn apply_intent(
    items: &[ProsConsItem],
    intent: ItemIntent,
    new_id: ItemId,
) -> DomainResult<Vec<ProsConsItem>> {
    match intent {
        ItemIntent::Add { side } => Ok(add_item(items, side, new_id)),
        ItemIntent::AddWith { text, weight, side } => add_item_with(items, &text, weight, side, new_id),
        ItemIntent::UpdateText { id, text } => update_text(items, id, &text),
        ItemIntent::Reweight { id, weight } => update_weight(items, id, weight),
        ItemIntent::Delete { id } => Ok(delete_item(items, id)),
    }
}

/// Items of one side, in display order
pub fn side_items(items: &[ProsConsItem], side: Side) -> impl Iterator<Item = &ProsConsItem> + '_ {
    items.iter().filter(move |item| item.side == side)
}

/// "Pros Argument N" where N is the current count of that side plus one.
///
/// Numbering is cosmetic: after a deletion the next label can repeat one
/// that is already displayed.
pub fn placeholder_label(items: &[ProsConsItem], side: Side) -> String {
    let count = side_items(items, side).count();
    format!("{} Argument {}", side.placeholder_prefix(), count + 1)
}

/// Append a placeholder item at the end of the full collection
pub fn add_item(items: &[ProsConsItem], side: Side, id: ItemId) -> Vec<ProsConsItem> {
    let text = placeholder_label(items, side);
    debug!("add_item: {} as {} ({})", id, side.as_str(), text);
    let mut next = items.to_vec();
    next.push(ProsConsItem::new(id, text, Weight::default(), side));
    next
}

/// Append an item with custom text; rejects blank text
pub fn add_item_with(
    items: &[ProsConsItem],
    text: &str,
    weight: Weight,
    side: Side,
    id: ItemId,
) -> DomainResult<Vec<ProsConsItem>> {
    let text = non_empty(text)?;
    debug!("add_item_with: {} as {} weight {}", id, side.as_str(), weight);
    let mut next = items.to_vec();
    next.push(ProsConsItem::new(id, text, weight, side));
    Ok(next)
}

/// Replace an item's text, keeping its weight, side and position
pub fn update_text(items: &[ProsConsItem], id: ItemId, text: &str) -> DomainResult<Vec<ProsConsItem>> {
    let text = non_empty(text)?;
    replace(items, id, |item| item.text = text)
}

/// Replace an item's weight, keeping its text, side and position
pub fn update_weight(items: &[ProsConsItem], id: ItemId, weight: Weight) -> DomainResult<Vec<ProsConsItem>> {
    replace(items, id, |item| item.weight = weight)
}

/// Remove the item with `id`; unknown ids leave the collection as is
pub fn delete_item(items: &[ProsConsItem], id: ItemId) -> Vec<ProsConsItem> {
    items.iter().filter(|item| item.id != id).cloned().collect()
}

fn non_empty(text: &str) -> DomainResult<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(DomainError::invalid("item text must not be empty"));
    }
    Ok(trimmed.to_string())
}

fn replace<F>(items: &[ProsConsItem], id: ItemId, edit: F) -> DomainResult<Vec<ProsConsItem>>
where
    F: FnOnce(&mut ProsConsItem),
{
    let mut next = items.to_vec();
    let target = next
        .iter_mut()
        .find(|item| item.id == id)
        .ok_or_else(|| DomainError::not_found("item", id))?;
    edit(target);
    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_item(id: u64, side: Side, weight: Weight) -> ProsConsItem {
        ProsConsItem::new(ItemId(id), format!("Item {}", id), weight, side)
    }

    fn sample() -> Vec<ProsConsItem> {
        vec![
            make_item(1, Side::Pro, Weight::Three),
            make_item(2, Side::Con, Weight::Three),
            make_item(3, Side::Pro, Weight::Five),
        ]
    }

    #[test]
    fn test_side_items_keeps_order() {
        let items = sample();
        let pros: Vec<_> = side_items(&items, Side::Pro).map(|i| i.id).collect();
        assert_eq!(pros, vec![ItemId(1), ItemId(3)]);
        let cons: Vec<_> = side_items(&items, Side::Con).map(|i| i.id).collect();
        assert_eq!(cons, vec![ItemId(2)]);
    }

    #[test]
    fn test_add_item_appends_placeholder() {
        let items = sample();
        let next = add_item(&items, Side::Pro, ItemId(10));

        assert_eq!(next.len(), 4);
        assert_eq!(&next[..3], &items[..]);
        let added = &next[3];
        assert_eq!(added.id, ItemId(10));
        assert_eq!(added.text, "Pros Argument 3");
        assert_eq!(added.weight, Weight::Three);
        assert_eq!(added.side, Side::Pro);
    }

    #[test]
    fn test_placeholder_counts_per_side() {
        let items = sample();
        assert_eq!(placeholder_label(&items, Side::Con), "Cons Argument 2");
        assert_eq!(placeholder_label(&[], Side::Pro), "Pros Argument 1");
    }

    #[test]
    fn test_placeholder_repeats_after_delete() {
        let items = vec![make_item(1, Side::Pro, Weight::Three), make_item(2, Side::Pro, Weight::Three)];
        let items = delete_item(&items, ItemId(1));
        let items = add_item(&items, Side::Pro, ItemId(3));
        // one pro remains, so the new placeholder is numbered 2 again
        assert_eq!(items[1].text, "Pros Argument 2");
    }

    #[test]
    fn test_add_item_with_trims_and_rejects_blank() {
        let next = add_item_with(&[], "  Better pay ", Weight::Five, Side::Pro, ItemId(1)).unwrap();
        assert_eq!(next[0].text, "Better pay");
        assert_eq!(next[0].weight, Weight::Five);

        let err = add_item_with(&[], "   ", Weight::One, Side::Con, ItemId(2)).unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput(_)));
    }

    #[test]
    fn test_update_text_preserves_position_and_weight() {
        let items = sample();
        let next = update_text(&items, ItemId(2), " Noisy street ").unwrap();
        assert_eq!(next[1].text, "Noisy street");
        assert_eq!(next[1].weight, Weight::Three);
        assert_eq!(next[1].side, Side::Con);
        assert_eq!(next[0], items[0]);
        assert_eq!(next[2], items[2]);
    }

    #[test]
    fn test_update_text_rejects_whitespace() {
        let items = sample();
        assert!(update_text(&items, ItemId(1), " \t ").is_err());
        assert!(update_text(&items, ItemId(1), "").is_err());
    }

    #[test]
    fn test_update_text_unknown_id() {
        let err = update_text(&sample(), ItemId(99), "x").unwrap_err();
        assert!(matches!(err, DomainError::NotFound(_)));
    }

    #[test]
    fn test_reweight_twice_keeps_last() {
        let items = sample();
        let items = update_weight(&items, ItemId(1), Weight::Five).unwrap();
        let items = update_weight(&items, ItemId(1), Weight::Two).unwrap();
        assert_eq!(items[0].weight, Weight::Two);
        assert_eq!(items[0].text, "Item 1");
    }

    #[test]
    fn test_delete_item_keeps_order() {
        let items = sample();
        let next = delete_item(&items, ItemId(2));
        let ids: Vec<_> = next.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![ItemId(1), ItemId(3)]);
    }

    #[test]
    fn test_delete_unknown_is_noop() {
        let items = sample();
        assert_eq!(delete_item(&items, ItemId(42)), items);
    }

    #[test]
    fn test_apply_intent_dispatch() {
        let items = sample();
        let next = apply_intent(&items, ItemIntent::Add { side: Side::Con }, ItemId(7)).unwrap();
        assert_eq!(next.last().unwrap().text, "Cons Argument 2");

        let next = apply_intent(&next, ItemIntent::Delete { id: ItemId(7) }, ItemId(0)).unwrap();
        assert_eq!(next, items);

        assert!(ItemIntent::Add { side: Side::Pro }.allocates());
        assert!(!ItemIntent::Delete { id: ItemId(1) }.allocates());
    }
}
