//! Widget settings and preferences
//!
//! Persisted separately from the notes, through the same key/value storage.

use serde::{Deserialize, Serialize};

use crate::consts::{EXPORT_FILENAME, NOTES_STORAGE_KEY, SETTINGS_STORAGE_KEY};
use crate::exit_guard::UnloadPolicy;
use crate::platform::KeyValueStorage;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Key the note list is stored under
    pub storage_key: String,
    /// Name of the exported text file
    pub export_filename: String,
    /// What happens when the page is about to unload
    pub unload_policy: UnloadPolicy,
    /// Put focus back in the input after adding a note
    pub refocus_input: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            storage_key: NOTES_STORAGE_KEY.to_string(),
            export_filename: EXPORT_FILENAME.to_string(),
            unload_policy: UnloadPolicy::default(),
            refocus_input: true,
        }
    }
}

impl Settings {
    /// Load settings, or defaults if absent or unreadable
    pub fn load(storage: &impl KeyValueStorage) -> Self {
        match storage.get_item(SETTINGS_STORAGE_KEY) {
            Ok(Some(json)) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings");
                    return settings;
                }
                Err(e) => log::warn!("Ignoring unreadable settings: {}", e),
            },
            Ok(None) => {}
            Err(e) => log::warn!("Could not read settings: {}", e),
        }

        log::info!("Using default settings");
        Self::default()
    }
}
