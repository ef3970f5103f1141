//! Record Contract
//!
//! What a collection item must provide to travel through the client.

use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

/// Core trait for every collection item
pub trait Record: Clone + Serialize + DeserializeOwned + 'static {
    /// Path segment of the collection endpoint, e.g. `"notes"`
    const RESOURCE: &'static str;

    /// Server-assigned identifier
    fn id(&self) -> &RecordId;

    /// Field matched by list search
    fn search_text(&self) -> &str;
}

/// Record identifier, always held as a string.
///
/// Backends send either `"3"` or `3`; both decode to the same id so
/// comparisons never depend on the wire type. Encodes as a JSON string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Integer value of the leading digits, ignoring leading whitespace.
    ///
    /// One leading `+` or `-` is honoured: `"12abc"` gives 12, `"-1"` gives
    /// -1, `"abc"` and `"-"` give `None`.
    pub fn numeric_prefix(&self) -> Option<i64> {
        let trimmed = self.0.trim_start();
        let unsigned = trimmed.strip_prefix(['+', '-']).unwrap_or(trimmed);
        let digits = unsigned
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(unsigned.len());
        let end = trimmed.len() - unsigned.len() + digits;
        if digits == 0 {
            return None;
        }
        trimmed[..end].parse().ok()
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for RecordId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<i64> for RecordId {
    fn from(id: i64) -> Self {
        Self(id.to_string())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum WireId {
    Text(String),
    Signed(i64),
    Unsigned(u64),
    Float(f64),
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let id = match WireId::deserialize(deserializer)? {
            WireId::Text(s) => s,
            WireId::Signed(n) => n.to_string(),
            WireId::Unsigned(n) => n.to_string(),
            // 3.0 is the same record as 3
            WireId::Float(f) if f.fract() == 0.0 && f.abs() < 1e15 => (f as i64).to_string(),
            WireId::Float(f) => f.to_string(),
        };
        Ok(Self(id))
    }
}
