//! Trailing-edge debounce keyed by tickets.
//!
//! Each `push` hands out a ticket for the timer the caller arms. When a timer
//! fires it presents its ticket; only the most recent one releases the value.
//! The timer elapsing is the quiet period, so no clock is read here.

#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    delay_ms: u32,
    latest: u64,
    pending: Option<T>,
}

/// Handle for one armed timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

impl<T> Debouncer<T> {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            delay_ms,
            latest: 0,
            pending: None,
        }
    }

    pub fn delay_ms(&self) -> u32 {
        self.delay_ms
    }

    /// Record a new value, superseding any pending one and every ticket
    /// issued before.
    pub fn push(&mut self, value: T) -> Ticket {
        self.latest = self.latest.wrapping_add(1);
        self.pending = Some(value);
        Ticket(self.latest)
    }

    /// Timer for `ticket` elapsed. Releases the pending value if no newer
    /// push happened since.
    pub fn fire(&mut self, ticket: Ticket) -> Option<T> {
        if ticket.0 == self.latest {
            self.pending.take()
        } else {
            None
        }
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }
}
