//! Short-lived visual effects driven by deadlines.

use std::time::{Duration, Instant};

/// An effect that stays on for a fixed duration after each trigger.
///
/// Re-triggering while active restarts the clock; only the latest trigger's
/// deadline counts.
#[derive(Debug, Clone, Copy)]
pub struct Flash {
    duration: Duration,
    until: Option<Instant>,
}

impl Flash {
    /// Create an inactive flash lasting `duration` per trigger.
    #[must_use]
    pub const fn new(duration: Duration) -> Self {
        Self {
            duration,
            until: None,
        }
    }

    /// Start (or restart) the effect at `now`.
    pub fn trigger(&mut self, now: Instant) {
        self.until = Some(now + self.duration);
    }

    /// Whether the effect is showing at `now`.
    #[must_use]
    pub fn is_active(&self, now: Instant) -> bool {
        self.until.is_some_and(|until| now < until)
    }

    /// Drop an expired deadline.
    pub fn tick(&mut self, now: Instant) {
        if !self.is_active(now) {
            self.until = None;
        }
    }
}

/// An add-to-cart button, which reads "Added!" briefly after a click.
#[derive(Debug, Clone, Copy)]
pub struct AddButton {
    flash: Flash,
}

impl AddButton {
    /// Resting label.
    pub const LABEL: &'static str = "Add to Cart";
    /// Label while flashing.
    pub const ADDED_LABEL: &'static str = "Added!";

    /// Create a button whose confirmation lasts `flash_for`.
    #[must_use]
    pub const fn new(flash_for: Duration) -> Self {
        Self {
            flash: Flash::new(flash_for),
        }
    }

    /// Record a click at `now`.
    pub fn clicked(&mut self, now: Instant) {
        self.flash.trigger(now);
    }

    /// Label to show at `now`.
    #[must_use]
    pub fn label(&self, now: Instant) -> &'static str {
        if self.flash.is_active(now) {
            Self::ADDED_LABEL
        } else {
            Self::LABEL
        }
    }

    /// Whether the confirmation styling applies at `now`.
    #[must_use]
    pub fn is_flashing(&self, now: Instant) -> bool {
        self.flash.is_active(now)
    }

    /// Drop an expired confirmation.
    pub fn tick(&mut self, now: Instant) {
        self.flash.tick(now);
    }
}
