use crate::{ChatLog, HEAD_SEQ};

/// A subscriber's bookmark: the sequence of the last entry already delivered.
///
/// Starts at the head. Only the owning session moves it, and only forward;
/// a resync jumps back to the head, whose successor is the oldest live entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    last: u64,
}

impl Cursor {
    pub fn new() -> Self {
        Self { last: HEAD_SEQ }
    }

    pub fn last(&self) -> u64 {
        self.last
    }

    pub fn is_at_head(&self) -> bool {
        self.last == HEAD_SEQ
    }

    /// The last delivered entry has since been evicted.
    pub fn is_stale(&self, log: &ChatLog) -> bool {
        log.is_evicted(self.last)
    }

    pub(crate) fn advance(&mut self, seq: u64) {
        debug_assert!(seq > self.last, "cursor moved backwards");
        self.last = seq;
    }

    pub(crate) fn resync(&mut self) {
        self.last = HEAD_SEQ;
    }
}

impl Default for Cursor {
    fn default() -> Self {
        Self::new()
    }
}
