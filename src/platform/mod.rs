//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Storage (LocalStorage on web, a directory of files natively)
//! - Timestamps
//! - UI bindings (DOM on web, terminal natively)
//! - Command-line parsing (native only)

pub mod clock;
pub mod storage;

#[cfg(target_arch = "wasm32")]
pub mod dom;

#[cfg(not(target_arch = "wasm32"))]
pub mod cli;

#[cfg(not(target_arch = "wasm32"))]
pub mod native;

pub use clock::{Clock, SystemClock};
pub use storage::{KeyValueStorage, MemoryStorage};

#[cfg(target_arch = "wasm32")]
pub use storage::LocalStorage;

#[cfg(not(target_arch = "wasm32"))]
pub use storage::FileStorage;
