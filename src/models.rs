//! Frontend Models
//!
//! Records served by the backend collections.

use rest_collection::{Record, RecordId};
use serde::{Deserialize, Serialize};

/// Record shown in a list screen
pub trait Listed: Record {
    /// Singular name used in user-facing messages
    const NOUN: &'static str;

    /// Availability flag, for records that have one
    fn availability(&self) -> Option<bool> {
        None
    }
}

/// Record with one user-editable text field
pub trait Editable: Listed {
    fn edit_text(&self) -> &str;

    /// Copy with the editable field replaced; the id is kept as is
    fn with_edit_text(&self, text: String) -> Self;
}

/// Note (`/notes`)
///
/// Field order is the wire order: `id` goes first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub id: RecordId,
    #[serde(default)]
    pub content: String,
}

impl Note {
    pub fn new(id: impl Into<RecordId>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
        }
    }
}

impl Record for Note {
    const RESOURCE: &'static str = "notes";

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn search_text(&self) -> &str {
        &self.content
    }
}

impl Listed for Note {
    const NOUN: &'static str = "note";
}

impl Editable for Note {
    fn edit_text(&self) -> &str {
        &self.content
    }

    fn with_edit_text(&self, text: String) -> Self {
        Self {
            id: self.id.clone(),
            content: text,
        }
    }
}

/// Shop (`/shops`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shop {
    pub id: RecordId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub address: String,
    /// Image URL
    #[serde(default)]
    pub image: String,
    #[serde(rename = "isAvailable", default)]
    pub is_available: bool,
    /// Status label shown next to the availability icon
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub delivery_time: String,
}

impl Record for Shop {
    const RESOURCE: &'static str = "shops";

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn search_text(&self) -> &str {
        &self.name
    }
}

impl Listed for Shop {
    const NOUN: &'static str = "shop";

    fn availability(&self) -> Option<bool> {
        Some(self.is_available)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shop_from_backend_json() {
        let json = r#"{
            "id": 2,
            "name": "Kitanda Espresso",
            "address": "1 Main St",
            "image": "https://example.com/k.png",
            "isAvailable": false,
            "status": "Temporary Unavailable",
            "delivery_time": "10-15 minutes"
        }"#;
        let shop: Shop = serde_json::from_str(json).unwrap();
        assert_eq!(shop.id.as_str(), "2");
        assert!(!shop.is_available);
        assert_eq!(shop.availability(), Some(false));
        assert_eq!(shop.search_text(), "Kitanda Espresso");
    }

    #[test]
    fn test_note_edit_keeps_id() {
        let note = Note::new("5", "buy milk");
        let edited = note.with_edit_text("buy bread".to_string());
        assert_eq!(edited.id, note.id);
        assert_eq!(edited.content, "buy bread");
        assert_eq!(
            serde_json::to_string(&edited).unwrap(),
            r#"{"id":"5","content":"buy bread"}"#
        );
    }

    #[test]
    fn test_note_has_no_availability() {
        assert_eq!(Note::new("1", "x").availability(), None);
    }
}
