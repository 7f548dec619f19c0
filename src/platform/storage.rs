//! String-keyed key/value slots
//!
//! The browser build persists to `window.localStorage`; native builds keep one
//! file per key in a directory. Both overwrite the whole value on every write.

use std::collections::HashMap;

use crate::error::Result;

pub trait KeyValueStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>>;
    fn set_item(&mut self, key: &str, value: &str) -> Result<()>;
}

impl<S: KeyValueStorage + ?Sized> KeyValueStorage for Box<S> {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set_item(key, value)
    }
}

/// Process-local storage, lost on exit
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    items: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-seeded with one value
    pub fn with_item(key: &str, value: &str) -> Self {
        let mut storage = Self::new();
        storage.items.insert(key.to_string(), value.to_string());
        storage
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// `window.localStorage`
#[cfg(target_arch = "wasm32")]
pub struct LocalStorage {
    inner: web_sys::Storage,
}

#[cfg(target_arch = "wasm32")]
impl LocalStorage {
    pub fn open() -> Result<Self> {
        use crate::error::{NotesError, js_reason};

        let window = web_sys::window().ok_or_else(|| NotesError::StorageUnavailable {
            reason: "no window".into(),
        })?;
        let inner = window
            .local_storage()
            .map_err(|e| NotesError::StorageUnavailable {
                reason: js_reason(&e),
            })?
            .ok_or_else(|| NotesError::StorageUnavailable {
                reason: "localStorage disabled".into(),
            })?;
        Ok(Self { inner })
    }
}

#[cfg(target_arch = "wasm32")]
impl KeyValueStorage for LocalStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        use crate::error::{NotesError, js_reason};

        self.inner
            .get_item(key)
            .map_err(|e| NotesError::StorageRead {
                key: key.to_string(),
                reason: js_reason(&e),
            })
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        use crate::error::{NotesError, js_reason};

        // Throws on quota exhaustion
        self.inner
            .set_item(key, value)
            .map_err(|e| NotesError::StorageWrite {
                key: key.to_string(),
                reason: js_reason(&e),
            })
    }
}

/// One `<key>.json` file per key under a directory
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: std::path::PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl FileStorage {
    /// Open (and create if needed) the storage directory
    pub fn open(dir: impl Into<std::path::PathBuf>) -> Result<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir).map_err(|e| crate::NotesError::StorageUnavailable {
            reason: format!("{}: {e}", dir.display()),
        })?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &std::path::Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> std::path::PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl KeyValueStorage for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        match std::fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(crate::error::NotesError::StorageRead {
                key: key.to_string(),
                reason: e.to_string(),
            }),
        }
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        // tmp -> rename so a crash never leaves a half-written value
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, value)
            .and_then(|_| std::fs::rename(&tmp, &path))
            .map_err(|e| crate::NotesError::StorageWrite {
                key: key.to_string(),
                reason: e.to_string(),
            })
    }
}

/// Storage whose writes always fail, for exercising rollback paths
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct ReadOnlyStorage {
    pub(crate) inner: MemoryStorage,
}

#[cfg(test)]
impl KeyValueStorage for ReadOnlyStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        self.inner.get_item(key)
    }

    fn set_item(&mut self, key: &str, _value: &str) -> Result<()> {
        Err(crate::NotesError::StorageWrite {
            key: key.to_string(),
            reason: "quota exceeded".into(),
        })
    }
}

/// Storage whose reads always fail
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct UnreadableStorage {
    pub(crate) inner: MemoryStorage,
}

#[cfg(test)]
impl KeyValueStorage for UnreadableStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Err(crate::error::NotesError::StorageRead {
            key: key.to_string(),
            reason: "access denied".into(),
        })
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        self.inner.set_item(key, value)
    }
}

#[cfg(test)]
pub(crate) fn scratch_dir(name: &str) -> std::path::PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "local-notes-{}-{}",
        name,
        std::process::id()
    ));
    let _ = std::fs::remove_dir_all(&dir);
    dir
}
