//! The note record

use serde::{Deserialize, Serialize};

/// A single user-authored entry
///
/// Field names are part of the persisted format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Trimmed, never empty
    pub text: String,
    /// Locale-formatted creation time, fixed at creation
    pub timestamp: String,
}

impl Note {
    /// Build a note from raw input, or `None` if the trimmed text is empty
    pub fn new(text: &str, timestamp: impl Into<String>) -> Option<Self> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        Some(Self {
            text: text.to_string(),
            timestamp: timestamp.into(),
        })
    }
}
