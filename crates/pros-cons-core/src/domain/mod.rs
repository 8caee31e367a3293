//! Domain Layer
//!
//! Contains the pros/cons entities and core abstractions.
//! This layer has NO external dependencies (except serde and chrono).

mod error;
mod item;
mod list;
mod weight;

pub use error::{DomainError, DomainResult};
pub use item::{ItemId, ProsConsItem, Side};
pub use list::{ListId, ProsConsList, UNTITLED_LIST};
pub use weight::Weight;
