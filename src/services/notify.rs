//! Transient operator notifications (toasts).

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// How long an entry stays visible.
pub const NOTIFICATION_TTL: Duration = Duration::from_secs(4);

/// Queue bound; under rapid repeated failures the oldest entries are
/// dropped instead of flooding the screen.
pub const MAX_QUEUE_DEPTH: usize = 16;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

#[derive(Clone, Debug)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    expires_at: Instant,
}

impl Notification {
    pub fn expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

/// Bounded queue of self-expiring notifications.
#[derive(Debug)]
pub struct Notifier {
    queue: VecDeque<Notification>,
    ttl: Duration,
    depth: usize,
}

impl Notifier {
    pub fn new() -> Self {
        Self::with_limits(NOTIFICATION_TTL, MAX_QUEUE_DEPTH)
    }

    pub fn with_limits(ttl: Duration, depth: usize) -> Self {
        Self {
            queue: VecDeque::new(),
            ttl,
            depth: depth.max(1),
        }
    }

    pub fn notify(&mut self, message: impl Into<String>, kind: NotificationKind, now: Instant) {
        self.queue.push_back(Notification {
            message: message.into(),
            kind,
            expires_at: now + self.ttl,
        });
        while self.queue.len() > self.depth {
            self.queue.pop_front();
        }
    }

    pub fn success(&mut self, message: impl Into<String>, now: Instant) {
        self.notify(message, NotificationKind::Success, now);
    }

    pub fn error(&mut self, message: impl Into<String>, now: Instant) {
        self.notify(message, NotificationKind::Error, now);
    }

    pub fn info(&mut self, message: impl Into<String>, now: Instant) {
        self.notify(message, NotificationKind::Info, now);
    }

    /// Drops entries whose display window has elapsed.
    pub fn sweep(&mut self, now: Instant) {
        self.queue.retain(|entry| !entry.expired(now));
    }

    pub fn entries(&self) -> impl Iterator<Item = &Notification> {
        self.queue.iter()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}
