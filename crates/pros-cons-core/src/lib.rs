//! Pros/Cons Core
//!
//! Layered architecture:
//! - domain: items, lists, weights and the shared error type
//! - editor: pure item-collection mutations driven by `ItemIntent`
//! - score: weighted pro/con tally and percentage split
//! - edit_state: per-list text/weight edit-mode state machine
//! - store: the in-memory set of lists and the active selection
//! - config: runtime options read by the frontend

pub mod config;
pub mod domain;
pub mod edit_state;
pub mod editor;
pub mod ids;
pub mod score;
pub mod store;

pub use config::AppConfig;
pub use domain::{
    DomainError, DomainResult, ItemId, ListId, ProsConsItem, ProsConsList, Side, Weight,
};
pub use edit_state::{ListEditState, TextEdit, WeightEdit};
pub use editor::{apply_intent, side_items, ItemIntent};
pub use ids::IdSequence;
pub use score::{LabelPlacement, Tally};
pub use store::ListStore;
