//! Error type shared by every layer of the widget

use thiserror::Error;

#[derive(Debug, Error)]
pub enum NotesError {
    #[error("Storage unavailable: {reason}")]
    StorageUnavailable { reason: String },

    #[error("Failed to read storage key {key}: {reason}")]
    StorageRead { key: String, reason: String },

    #[error("Failed to write storage key {key}: {reason}")]
    StorageWrite { key: String, reason: String },

    #[error("Malformed persisted data: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("{}", crate::consts::NOTHING_TO_EXPORT_MESSAGE)]
    NothingToExport,

    #[error("Download of {filename} failed: {reason}")]
    Download { filename: String, reason: String },

    #[error("UI element missing: {id}")]
    MissingElement { id: String },
}

pub type Result<T> = std::result::Result<T, NotesError>;

#[cfg(target_arch = "wasm32")]
pub(crate) fn js_reason(value: &wasm_bindgen::JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
