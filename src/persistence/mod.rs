//! Persisted note list format
//!
//! The whole list is a single JSON array of `{ "text", "timestamp" }` objects,
//! with no envelope or version field. Unreadable data is never fatal: it
//! decodes to an empty list plus a warning the caller can surface.

use crate::error::Result;
use crate::note::Note;

/// Serialize the full note sequence
pub fn encode(notes: &[Note]) -> Result<String> {
    Ok(serde_json::to_string(notes)?)
}

/// Parse a persisted value
pub fn decode(raw: &str) -> Result<Vec<Note>> {
    Ok(serde_json::from_str(raw)?)
}

/// Result of reading a persisted value that may be absent or corrupt
#[derive(Debug)]
pub struct Recovered {
    pub notes: Vec<Note>,
    /// Set when the value existed but could not be parsed
    pub warning: Option<String>,
}

/// Decode `raw`, falling back to an empty list on absence or corruption
pub fn decode_or_empty(raw: Option<&str>) -> Recovered {
    let Some(raw) = raw else {
        return Recovered {
            notes: Vec::new(),
            warning: None,
        };
    };

    match decode(raw) {
        Ok(notes) => Recovered {
            notes,
            warning: None,
        },
        Err(e) => {
            log::warn!("Ignoring unreadable saved notes ({} bytes): {}", raw.len(), e);
            Recovered {
                notes: Vec::new(),
                warning: Some(e.to_string()),
            }
        }
    }
}
