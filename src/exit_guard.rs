//! Unload-signal handling
//!
//! Two states: `Idle`, and `Confirming` while a leave attempt is being
//! questioned. Nothing survives past one attempt: the modal buttons (or the
//! next unload signal) start over from `Idle`.

use serde::{Deserialize, Serialize};

use crate::consts::UNLOAD_MESSAGE;
use crate::error::Result;
use crate::export;
use crate::note::Note;
use crate::ui::{Downloader, ExitModal, Prompt};

/// Reaction to leaving the page with notes present
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum UnloadPolicy {
    /// Block the unload and show the exit modal
    Confirm,
    /// Download the export file and let the page go
    AutoExport,
    /// Both of the above
    #[default]
    ConfirmAndExport,
}

impl UnloadPolicy {
    pub fn confirms(&self) -> bool {
        matches!(self, UnloadPolicy::Confirm | UnloadPolicy::ConfirmAndExport)
    }

    pub fn exports(&self) -> bool {
        matches!(self, UnloadPolicy::AutoExport | UnloadPolicy::ConfirmAndExport)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GuardState {
    #[default]
    Idle,
    Confirming,
}

/// What the unload listener should tell the browser
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnloadVerdict {
    Allow,
    /// Call `preventDefault()` and set `returnValue`
    Prevent { message: &'static str },
}

#[derive(Debug, Clone)]
pub struct ExitGuard {
    policy: UnloadPolicy,
    state: GuardState,
}

impl ExitGuard {
    pub fn new(policy: UnloadPolicy) -> Self {
        Self {
            policy,
            state: GuardState::Idle,
        }
    }

    pub fn policy(&self) -> UnloadPolicy {
        self.policy
    }

    pub fn state(&self) -> GuardState {
        self.state
    }

    /// Handle the page-unload signal
    ///
    /// With no notes the unload goes ahead untouched. Otherwise the policy
    /// decides whether to block and show the modal, and whether to attempt an
    /// export; the export runs regardless of what the user later answers.
    pub fn on_unload<U>(&mut self, notes: &[Note], filename: &str, ui: &U) -> UnloadVerdict
    where
        U: Prompt + Downloader + ExitModal,
    {
        if notes.is_empty() {
            self.state = GuardState::Idle;
            return UnloadVerdict::Allow;
        }

        let mut verdict = UnloadVerdict::Allow;
        if self.policy.confirms() {
            self.state = GuardState::Confirming;
            ui.set_exit_modal_visible(true);
            verdict = UnloadVerdict::Prevent {
                message: UNLOAD_MESSAGE,
            };
        }

        if self.policy.exports() {
            if let Err(e) = export::export(notes, filename, ui) {
                log::warn!("Export on unload failed: {}", e);
            }
        }

        log::info!("Unload with {} notes: {:?}", notes.len(), verdict);
        verdict
    }

    /// Modal "download" button: export, then close the modal
    pub fn download_and_dismiss<U>(&mut self, notes: &[Note], filename: &str, ui: &U) -> Result<()>
    where
        U: Prompt + Downloader + ExitModal,
    {
        let result = export::export(notes, filename, ui);
        self.dismiss(ui);
        result
    }

    /// Modal "cancel" button: the user stays
    pub fn dismiss(&mut self, ui: &impl ExitModal) {
        ui.set_exit_modal_visible(false);
        self.state = GuardState::Idle;
    }
}

impl Default for ExitGuard {
    fn default() -> Self {
        Self::new(UnloadPolicy::default())
    }
}
