//! Value truncation for safe display
//!
//! Pathologically large field values would blow up token budgets downstream,
//! so every top-level value passes through here before rendering.

use mongodb::bson::{Bson, Document};

/// Marker appended to truncated string values
const ELLIPSIS: &str = "...";

/// Truncate an oversized string value for display
///
/// Strings longer than `max_length` characters are cut to the first
/// `max_length` characters plus `"..."`. Every other value is returned
/// unchanged, including nested documents and arrays (only top-level mapping
/// values are truncated by the callers).
pub fn truncate_value(value: &Bson, max_length: usize) -> Bson {
    match value {
        Bson::String(s) if s.chars().count() > max_length => {
            let head: String = s.chars().take(max_length).collect();
            Bson::String(format!("{head}{ELLIPSIS}"))
        }
        other => other.clone(),
    }
}

/// Apply [`truncate_value`] to each top-level field of a document
///
/// Field order is preserved.
pub fn truncate_document(doc: &Document, max_length: usize) -> Document {
    let mut truncated = Document::new();
    for (key, value) in doc {
        truncated.insert(key.clone(), truncate_value(value, max_length));
    }
    truncated
}
