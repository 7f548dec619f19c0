//! Write-through note store
//!
//! The in-memory list is the source of truth and is mirrored to one storage
//! key after every mutation. A failed write rolls the mutation back, so memory
//! and storage never disagree once a call returns.

use crate::consts::CLEAR_CONFIRM_MESSAGE;
use crate::error::Result;
use crate::note::Note;
use crate::persistence;
use crate::platform::{Clock, KeyValueStorage, SystemClock};
use crate::ui::Prompt;

pub struct NoteStore<S: KeyValueStorage, C: Clock = SystemClock> {
    notes: Vec<Note>,
    storage: S,
    key: String,
    clock: C,
    load_warning: Option<String>,
}

impl<S: KeyValueStorage, C: Clock> NoteStore<S, C> {
    /// Read the persisted list under `key`
    ///
    /// Missing data gives an empty store. Unreadable data (or a failed read)
    /// also gives an empty store, with a warning kept for `take_load_warning`.
    pub fn load(storage: S, key: impl Into<String>, clock: C) -> Self {
        let key = key.into();
        let (notes, load_warning) = match storage.get_item(&key) {
            Ok(raw) => {
                let recovered = persistence::decode_or_empty(raw.as_deref());
                (recovered.notes, recovered.warning)
            }
            Err(e) => {
                log::warn!("Could not read saved notes: {}", e);
                (Vec::new(), Some(e.to_string()))
            }
        };

        log::info!("Loaded {} notes from {:?}", notes.len(), key);
        Self {
            notes,
            storage,
            key,
            clock,
            load_warning,
        }
    }

    /// Append a note built from `text`
    ///
    /// Returns `Ok(None)` without touching storage when `text` is blank.
    pub fn add(&mut self, text: &str) -> Result<Option<&Note>> {
        let Some(note) = Note::new(text, self.clock.now_string()) else {
            return Ok(None);
        };

        self.notes.push(note);
        if let Err(e) = self.persist() {
            self.notes.pop();
            return Err(e);
        }
        Ok(self.notes.last())
    }

    /// Empty the store after the user confirms
    ///
    /// Returns whether the store was cleared.
    pub fn clear(&mut self, prompt: &impl Prompt) -> Result<bool> {
        if !prompt.confirm(CLEAR_CONFIRM_MESSAGE) {
            return Ok(false);
        }

        let previous = std::mem::take(&mut self.notes);
        if let Err(e) = self.persist() {
            self.notes = previous;
            return Err(e);
        }
        log::info!("Cleared {} notes", previous.len());
        Ok(true)
    }

    pub fn serialize(&self) -> Result<String> {
        persistence::encode(&self.notes)
    }

    /// Overwrite the storage key with the full list
    pub fn persist(&mut self) -> Result<()> {
        let json = self.serialize()?;
        self.storage.set_item(&self.key, &json).inspect_err(|e| {
            log::error!("Failed to save notes: {}", e);
        })
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Problem found while loading, reported once
    pub fn take_load_warning(&mut self) -> Option<String> {
        self.load_warning.take()
    }
}
