//! Toast notifications.
//!
//! Other systems emit [`ToastEvent`]s; a collector folds them into
//! [`ToastLog`], where each toast lives for [`config::TOAST_LIFETIME_MS`]
//! unless dismissed earlier. The UI renders the log bottom-right.

use std::time::Duration;

use bevy::prelude::*;

use crate::config;

// =============================================================================
// Types
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

/// Event emitted by other systems to show a toast.
#[derive(Event, Debug, Clone)]
pub struct ToastEvent {
    pub kind: ToastKind,
    pub text: String,
}

impl ToastEvent {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Error,
            text: text.into(),
        }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Info,
            text: text.into(),
        }
    }
}

/// A live toast with its expiry timer.
#[derive(Debug)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub text: String,
    expiry: Timer,
}

// =============================================================================
// Log
// =============================================================================

#[derive(Resource, Default)]
pub struct ToastLog {
    toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastLog {
    pub fn push(&mut self, kind: ToastKind, text: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            kind,
            text: text.into(),
            expiry: Timer::new(
                Duration::from_millis(config::TOAST_LIFETIME_MS),
                TimerMode::Once,
            ),
        });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|toast| toast.id != id);
    }

    /// Tick every toast and drop the expired ones.
    pub fn advance(&mut self, delta: Duration) {
        for toast in &mut self.toasts {
            toast.expiry.tick(delta);
        }
        self.toasts.retain(|toast| !toast.expiry.finished());
    }

    /// Oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

// =============================================================================
// Systems + Plugin
// =============================================================================

fn collect_toast_events(mut events: EventReader<ToastEvent>, mut log: ResMut<ToastLog>) {
    for event in events.read() {
        log.push(event.kind, event.text.clone());
    }
}

fn expire_toasts(time: Res<Time>, mut log: ResMut<ToastLog>) {
    log.advance(time.delta());
}

pub struct ToastPlugin;

impl Plugin for ToastPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<ToastEvent>();
        app.init_resource::<ToastLog>();
        app.add_systems(Update, (collect_toast_events, expire_toasts).chain());
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_assigns_unique_ids() {
        let mut log = ToastLog::default();
        let a = log.push(ToastKind::Info, "one");
        let b = log.push(ToastKind::Error, "two");
        assert_ne!(a, b);
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn test_dismiss_removes_only_target() {
        let mut log = ToastLog::default();
        let a = log.push(ToastKind::Success, "keep");
        let b = log.push(ToastKind::Error, "drop");
        log.dismiss(b);
        assert_eq!(log.len(), 1);
        assert_eq!(log.iter().next().map(|t| t.id), Some(a));
    }

    #[test]
    fn test_toasts_expire_after_lifetime() {
        let mut log = ToastLog::default();
        log.push(ToastKind::Info, "short-lived");

        log.advance(Duration::from_millis(config::TOAST_LIFETIME_MS - 1));
        assert_eq!(log.len(), 1);

        log.advance(Duration::from_millis(1));
        assert!(log.is_empty());
    }

    #[test]
    fn test_staggered_expiry_keeps_newer_toasts() {
        let mut log = ToastLog::default();
        log.push(ToastKind::Info, "old");
        log.advance(Duration::from_millis(config::TOAST_LIFETIME_MS / 2));
        log.push(ToastKind::Info, "new");

        log.advance(Duration::from_millis(config::TOAST_LIFETIME_MS / 2));
        assert_eq!(log.len(), 1, "older toast should have expired first");
        assert_eq!(log.iter().next().map(|t| t.text.as_str()), Some("new"));
    }
}
