//! Notification toast center.
//!
//! Collects `(severity, title, message)` toasts and manages their expiry
//! lifecycle. Toasts live for a fixed TTL and are pruned on every tick;
//! rendering (bottom-right overlay, newest last) is the TUI's concern.
//!
//! The center is orthogonal to layout state: nothing here reads or
//! writes the layout stores.

use crate::Severity;
use std::time::{Duration, Instant};

/// Default time a toast stays on screen.
pub const DEFAULT_TOAST_TTL: Duration = Duration::from_secs(5);

/// A single on-screen notification.
#[derive(Debug, Clone)]
pub struct Toast {
    /// Severity band, drives the accent color.
    pub severity: Severity,
    /// Short uppercase title.
    pub title: String,
    /// One-line body.
    pub message: String,
    /// When the toast should disappear.
    expires_at: Instant,
}

/// In-memory toast queue with TTL-based expiry.
#[derive(Debug)]
pub struct Notifier {
    toasts: Vec<Toast>,
    ttl: Duration,
}

impl Notifier {
    /// Creates a notifier with the given toast TTL.
    pub fn new(ttl: Duration) -> Self {
        Self {
            toasts: Vec::new(),
            ttl,
        }
    }

    /// Queues a toast. Newest toasts render last (bottom of the stack).
    pub fn push(&mut self, severity: Severity, title: &str, message: &str) {
        tracing::debug!(severity = severity.label(), title, "toast pushed");
        self.toasts.push(Toast {
            severity,
            title: title.to_string(),
            message: message.to_string(),
            expires_at: Instant::now() + self.ttl,
        });
    }

    /// Drops every toast whose TTL has elapsed as of `now`.
    pub fn expire_at(&mut self, now: Instant) {
        self.toasts.retain(|t| t.expires_at > now);
    }

    /// Drops expired toasts. Called once per tick.
    pub fn expire(&mut self) {
        self.expire_at(Instant::now());
    }

    /// Currently visible toasts, oldest first.
    pub fn active(&self) -> &[Toast] {
        &self.toasts
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new(DEFAULT_TOAST_TTL)
    }
}
