//! Screen Commands
//!
//! Remote calls behind each screen action, organized by screen.
//! Every command catches its own failure: it is logged and turned into a
//! notice on the screen model. Loads and submits also return the outcome,
//! which drives the load status and the navigation after a create.

mod list;
mod note;

#[cfg(test)]
mod tests;

use rest_collection::HttpCollection;

use crate::config::AppConfig;
use crate::models::{Note, Shop};

// Re-export all public items
pub use list::*;
pub use note::*;

/// `/notes` client for the configured backend
pub fn notes_client(config: &AppConfig) -> HttpCollection<Note> {
    HttpCollection::new(config.api_base_url.as_str())
}

/// `/shops` client for the configured backend
pub fn shops_client(config: &AppConfig) -> HttpCollection<Shop> {
    HttpCollection::new(config.api_base_url.as_str())
}

/// "note" -> "Note"
fn capitalized(noun: &str) -> String {
    let mut chars = noun.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
