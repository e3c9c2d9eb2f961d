use codee::string::FromToStringCodec;
use leptos::prelude::*;
use leptos_use::storage::{use_local_storage_with_options, UseStorageOptions};

use crate::popup::{FlagStore, StoreError};

/// Popup flag kept in `window.localStorage`.
///
/// The initial read is synchronous. Writes are handed to leptos-use, which
/// persists them from a deferred effect, so `write` cannot see a failing
/// `setItem`. Storage errors (disabled storage, private mode quota) arrive
/// through `on_error`, get logged there, and make later reads report the
/// store unavailable.
#[derive(Debug, Clone, Copy)]
pub struct LocalStorageFlag {
    value: Signal<String>,
    set_value: WriteSignal<String>,
    failed: ReadSignal<bool>,
}

impl LocalStorageFlag {
    pub fn new(key: &'static str) -> Self {
        let (failed, set_failed) = signal(false);
        let (value, set_value, _) = use_local_storage_with_options::<String, FromToStringCodec>(
            key,
            UseStorageOptions::default().on_error(move |err| {
                log::warn!("local storage error for {key}: {err:?}");
                set_failed.set(true);
            }),
        );
        Self {
            value,
            set_value,
            failed,
        }
    }
}

impl FlagStore for LocalStorageFlag {
    fn read(&self) -> Result<Option<String>, StoreError> {
        if self.failed.get_untracked() {
            return Err(StoreError::Unavailable);
        }
        let value = self.value.get_untracked();
        Ok((!value.is_empty()).then_some(value))
    }

    fn write(&mut self, value: &str) -> Result<(), StoreError> {
        self.set_value.set(value.to_string());
        Ok(())
    }
}
