//! Popover open/close timing.
//!
//! Hover-triggered popovers debounce both opening and closing with a fixed
//! delay so quick pointer passes don't flicker. The two timers are
//! independently cancelable and the most recent intent always wins. A
//! separate close-fade delay keeps a closed popover in the render tree
//! until its fade-out finishes.
//!
//! Everything is deadline-based and polled once per frame; there are no
//! threads or callbacks, so dropping the owning widget drops any pending
//! deadline with it.

use std::time::{Duration, Instant};

/// Debounced open/close intent for a hover-triggered popover.
#[derive(Debug)]
pub struct HoverDelay {
    open_after: Duration,
    close_after: Duration,
    pending_open: Option<Instant>,
    pending_close: Option<Instant>,
    open: bool,
}

impl HoverDelay {
    pub fn new(open_after: Duration, close_after: Duration) -> Self {
        Self {
            open_after,
            close_after,
            pending_open: None,
            pending_close: None,
            open: false,
        }
    }

    /// Pointer entered the trigger: cancel any pending close, and schedule
    /// an open if not already open.
    pub fn request_open(&mut self, now: Instant) {
        self.pending_close = None;
        if !self.open && self.pending_open.is_none() {
            self.pending_open = Some(now + self.open_after);
        }
    }

    /// Pointer left the trigger: cancel any pending open, and schedule a
    /// close if currently open.
    pub fn request_close(&mut self, now: Instant) {
        self.pending_open = None;
        if self.open && self.pending_close.is_none() {
            self.pending_close = Some(now + self.close_after);
        }
    }

    /// Fire any expired deadline. Call once per frame; returns whether the
    /// popover should be shown.
    pub fn tick(&mut self, now: Instant) -> bool {
        if let Some(deadline) = self.pending_open {
            if now >= deadline {
                self.pending_open = None;
                self.open = true;
            }
        }
        if let Some(deadline) = self.pending_close {
            if now >= deadline {
                self.pending_close = None;
                self.open = false;
            }
        }
        self.open
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Earliest pending deadline, for repaint scheduling.
    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.pending_open, self.pending_close) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (Some(a), None) => Some(a),
            (None, Some(b)) => Some(b),
            (None, None) => None,
        }
    }

    /// Drop all pending intents, e.g. when the owning widget is disposed
    /// while a delay is still running.
    pub fn cancel_pending(&mut self) {
        self.pending_open = None;
        self.pending_close = None;
    }
}

/// Keeps a closed popover rendered until its fade-out animation finishes.
/// The duration must match the visual transition.
#[derive(Debug)]
pub struct CloseFade {
    duration: Duration,
    closing_until: Option<Instant>,
}

impl CloseFade {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            closing_until: None,
        }
    }

    /// Start the fade. Re-entrant: a second begin while fading restarts
    /// the clock.
    pub fn begin(&mut self, now: Instant) {
        self.closing_until = Some(now + self.duration);
    }

    /// Whether the popover must still be rendered (fade in progress).
    pub fn still_rendered(&mut self, now: Instant) -> bool {
        match self.closing_until {
            Some(deadline) if now >= deadline => {
                self.closing_until = None;
                false
            }
            Some(_) => true,
            None => false,
        }
    }

    /// Abort the fade, e.g. when the popover reopens before removal.
    pub fn cancel(&mut self) {
        self.closing_until = None;
    }
}
