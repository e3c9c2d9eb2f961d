//! Show-once gate for the hero welcome popup.
//!
//! The gate reads a durable flag once when the page mounts and writes it
//! once when the visitor dismisses the popup. Storage failures never reach
//! the visitor: an unreadable flag means the popup shows again, an
//! unwritable one means it only stays hidden for this session.

#[cfg(test)]
use std::sync::atomic::{AtomicUsize, Ordering};

use thiserror::Error;

use crate::content::anchor;

/// Storage key of the dismissal flag.
pub const POPUP_FLAG_KEY: &str = "heroPopupSeen";
/// Value written on dismissal.
pub const SEEN: &str = "true";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("storage is not available")]
    Unavailable,
    #[error("couldn't read flag: {0}")]
    Read(String),
    #[error("couldn't write flag: {0}")]
    Write(String),
}

/// Durable storage for the single popup flag.
pub trait FlagStore {
    fn read(&self) -> Result<Option<String>, StoreError>;
    fn write(&mut self, value: &str) -> Result<(), StoreError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupState {
    Unseen,
    Seen,
}

/// The two controls inside the popup. Both dismiss it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupAction {
    Connect,
    Decline,
}

impl PopupAction {
    /// In-page anchor the control jumps to, if any.
    pub const fn target(self) -> Option<&'static str> {
        match self {
            PopupAction::Connect => Some(anchor::CONTACT),
            PopupAction::Decline => None,
        }
    }
}

/// Any stored, non-empty value counts as seen.
fn is_seen(value: Option<&str>) -> bool {
    matches!(value, Some(v) if !v.is_empty())
}

#[derive(Debug)]
pub struct VisibilityGate<S> {
    store: S,
    state: PopupState,
}

impl<S: FlagStore> VisibilityGate<S> {
    pub fn initialize(store: S) -> Self {
        let state = match store.read() {
            Ok(value) if is_seen(value.as_deref()) => PopupState::Seen,
            Ok(_) => PopupState::Unseen,
            Err(e) => {
                log::warn!("popup flag unreadable, treating as unseen: {e}");
                PopupState::Unseen
            }
        };
        log::debug!("popup gate initialized as {state:?}");
        Self { store, state }
    }

    pub fn state(&self) -> PopupState {
        self.state
    }

    pub fn should_show(&self) -> bool {
        self.state == PopupState::Unseen
    }

    /// Persists the flag and hides the popup. No-op once seen.
    pub fn dismiss(&mut self) {
        if self.state == PopupState::Seen {
            return;
        }
        if let Err(e) = self.store.write(SEEN) {
            log::warn!("popup flag not persisted, hiding for this session only: {e}");
        }
        self.state = PopupState::Seen;
    }

    /// Dismisses on behalf of a popup control and returns where to scroll.
    pub fn respond(&mut self, action: PopupAction) -> Option<&'static str> {
        self.dismiss();
        action.target()
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

/// In-process store that counts its accesses and can be told to fail.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct MemoryFlagStore {
    pub value: Option<String>,
    pub reads: AtomicUsize,
    pub writes: usize,
    pub fail_reads: bool,
    pub fail_writes: bool,
}

#[cfg(test)]
impl MemoryFlagStore {
    pub fn with_value(value: &str) -> Self {
        Self {
            value: Some(value.to_string()),
            ..Default::default()
        }
    }

    pub fn read_count(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
impl FlagStore for MemoryFlagStore {
    fn read(&self) -> Result<Option<String>, StoreError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        if self.fail_reads {
            return Err(StoreError::Unavailable);
        }
        Ok(self.value.clone())
    }

    fn write(&mut self, value: &str) -> Result<(), StoreError> {
        self.writes += 1;
        if self.fail_writes {
            return Err(StoreError::Write("quota exceeded".to_string()));
        }
        self.value = Some(value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_visit_shows_popup() {
        let gate = VisibilityGate::initialize(MemoryFlagStore::default());
        assert!(gate.should_show());
        assert_eq!(gate.state(), PopupState::Unseen);
        assert_eq!(gate.store().read_count(), 1);
        assert_eq!(gate.store().writes, 0);
    }

    #[test]
    fn test_repeat_visit_hides_popup() {
        let gate = VisibilityGate::initialize(MemoryFlagStore::with_value("true"));
        assert!(!gate.should_show());
        assert_eq!(gate.state(), PopupState::Seen);
    }

    #[test]
    fn test_flag_truthiness() {
        // empty string is falsy, anything else counts
        let gate = VisibilityGate::initialize(MemoryFlagStore::with_value(""));
        assert!(gate.should_show());
        let gate = VisibilityGate::initialize(MemoryFlagStore::with_value("1"));
        assert!(!gate.should_show());
    }

    #[test]
    fn test_unreadable_flag_shows_popup() {
        let store = MemoryFlagStore {
            value: Some(SEEN.to_string()),
            fail_reads: true,
            ..Default::default()
        };
        let gate = VisibilityGate::initialize(store);
        assert!(gate.should_show());
    }

    #[test]
    fn test_dismiss_writes_once() {
        let mut gate = VisibilityGate::initialize(MemoryFlagStore::default());
        gate.dismiss();
        assert!(!gate.should_show());
        assert_eq!(gate.store().value.as_deref(), Some(SEEN));
        assert_eq!(gate.store().writes, 1);

        gate.dismiss();
        assert!(!gate.should_show());
        assert_eq!(gate.store().value.as_deref(), Some(SEEN));
        assert_eq!(gate.store().writes, 1);
        assert_eq!(gate.store().read_count(), 1);
    }

    #[test]
    fn test_dismiss_when_already_seen_is_silent() {
        let mut gate = VisibilityGate::initialize(MemoryFlagStore::with_value(SEEN));
        gate.dismiss();
        assert_eq!(gate.store().writes, 0);
        assert_eq!(gate.state(), PopupState::Seen);
    }

    #[test]
    fn test_unwritable_flag_still_hides_for_session() {
        let store = MemoryFlagStore {
            fail_writes: true,
            ..Default::default()
        };
        let mut gate = VisibilityGate::initialize(store);
        gate.dismiss();
        assert!(!gate.should_show());
        assert_eq!(gate.store().value, None);
    }

    #[test]
    fn test_no_way_back_to_visible() {
        let mut gate = VisibilityGate::initialize(MemoryFlagStore::default());
        gate.respond(PopupAction::Decline);
        for action in [PopupAction::Connect, PopupAction::Decline] {
            gate.respond(action);
            gate.dismiss();
            assert!(!gate.should_show());
        }
    }

    #[test]
    fn test_connect_dismisses_and_targets_contact() {
        let mut gate = VisibilityGate::initialize(MemoryFlagStore::default());
        let target = gate.respond(PopupAction::Connect);
        assert_eq!(target, Some("contact"));
        assert!(!gate.should_show());
        assert_eq!(gate.store().value.as_deref(), Some("true"));
    }

    #[test]
    fn test_decline_dismisses_without_navigation() {
        let mut gate = VisibilityGate::initialize(MemoryFlagStore::default());
        let target = gate.respond(PopupAction::Decline);
        assert_eq!(target, None);
        assert!(!gate.should_show());
        assert_eq!(gate.store().value.as_deref(), Some("true"));
    }
}
