//! Toast notifications.
//!
//! At most one toast is live. Showing a new toast replaces the current one
//! outright, which also discards the old toast's pending hide and removal.
//! Timing is evaluated against caller-supplied instants via [`Notifier::tick`].

use std::time::{Duration, Instant};

/// Visibility phase of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPhase {
    /// Fully shown.
    Visible,
    /// Fading out; removed once the fade elapses.
    Hiding,
}

/// A transient notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    /// Text shown to the user.
    pub message: String,
    /// Current phase.
    pub phase: ToastPhase,
    shown_at: Instant,
}

/// Single-slot toast notifier.
#[derive(Debug, Clone)]
pub struct Notifier {
    visible_for: Duration,
    fade: Duration,
    current: Option<Toast>,
}

impl Notifier {
    /// Create a notifier whose toasts stay visible for `visible_for` and then
    /// fade out over `fade`.
    #[must_use]
    pub const fn new(visible_for: Duration, fade: Duration) -> Self {
        Self {
            visible_for,
            fade,
            current: None,
        }
    }

    /// Show `message`, replacing any live toast.
    pub fn show(&mut self, message: impl Into<String>, now: Instant) {
        let message = message.into();
        tracing::debug!(%message, "Showing toast");
        self.current = Some(Toast {
            message,
            phase: ToastPhase::Visible,
            shown_at: now,
        });
    }

    /// Advance the live toast to the phase it should be in at `now`.
    pub fn tick(&mut self, now: Instant) {
        let Some(toast) = &mut self.current else {
            return;
        };
        let elapsed = now.saturating_duration_since(toast.shown_at);

        if elapsed >= self.visible_for + self.fade {
            self.current = None;
        } else if elapsed >= self.visible_for {
            toast.phase = ToastPhase::Hiding;
        }
    }

    /// The live toast, if any.
    #[must_use]
    pub const fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }
}
