//! Transient toast notifications.
//!
//! One toast at a time; showing a new one replaces the current. Toasts
//! auto-dismiss after a few seconds unless a newer toast already took their
//! place.

#[cfg(test)]
#[path = "notify_test.rs"]
mod notify_test;

use leptos::prelude::*;

use crate::util::delay::after;

/// How long a toast stays visible.
pub const DISMISS_AFTER_MS: u32 = 3_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

/// Injectable handle to the single toast slot.
#[derive(Clone, Copy, Default)]
pub struct NotifyStore {
    current: RwSignal<Option<Notification>>,
}

impl NotifyStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<Notification> {
        self.current.get()
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(NotificationKind::Success, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(NotificationKind::Error, message);
    }

    pub fn show(&self, kind: NotificationKind, message: impl Into<String>) {
        let notification = Notification {
            kind,
            message: message.into(),
        };
        self.current.set(Some(notification.clone()));

        let slot = self.current;
        after(DISMISS_AFTER_MS, move || {
            slot.update(|current| {
                if current.as_ref() == Some(&notification) {
                    *current = None;
                }
            });
        });
    }

    pub fn dismiss(&self) {
        self.current.set(None);
    }
}
