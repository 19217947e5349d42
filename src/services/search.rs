//! Debounced search with stale-response rejection.
//!
//! Firing a server call on every keystroke with no cancellation lets a
//! slow early response overwrite a newer result. Here every keystroke
//! takes a ticket carrying a generation number; a result may only be
//! applied while its ticket is still the newest, and the network call
//! itself waits out a debounce window first.

use std::time::{Duration, Instant};

/// Delay between the last keystroke and the server call.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// Proof of which keystroke a search result belongs to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchTicket {
    generation: u64,
    query: String,
}

impl SearchTicket {
    /// Trimmed query text for this keystroke.
    pub fn query(&self) -> &str {
        &self.query
    }
}

#[derive(Debug)]
pub struct SearchDebouncer {
    generation: u64,
    deadline: Option<Instant>,
    debounce: Duration,
}

impl SearchDebouncer {
    pub fn new(debounce: Duration) -> Self {
        Self {
            generation: 0,
            deadline: None,
            debounce,
        }
    }

    pub fn debounce(&self) -> Duration {
        self.debounce
    }

    /// Records a keystroke and returns its ticket. Any ticket handed out
    /// earlier is stale from this moment on.
    pub fn input(&mut self, query: &str, now: Instant) -> SearchTicket {
        self.generation += 1;
        self.deadline = Some(now + self.debounce);
        SearchTicket {
            generation: self.generation,
            query: query.trim().to_string(),
        }
    }

    /// True once the debounce window of the newest keystroke has elapsed.
    pub fn ready(&self, now: Instant) -> bool {
        matches!(self.deadline, Some(deadline) if now >= deadline)
    }

    /// True while the ticket still reflects the newest keystroke.
    pub fn is_current(&self, ticket: &SearchTicket) -> bool {
        ticket.generation == self.generation
    }
}

impl Default for SearchDebouncer {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}
