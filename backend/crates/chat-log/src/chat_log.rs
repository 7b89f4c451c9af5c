use crate::{Entry, LogCapacity, LogStats, PushOutcome};

use std::collections::VecDeque;

use bytes::Bytes;
use log::{debug, trace};

/// Sequence number of the sentinel head. Never carries a payload, never evicted.
pub const HEAD_SEQ: u64 = 0;

/// Append-only, capacity-bounded message log.
///
/// Entries are addressed by a sequence number that starts at 1 and grows by
/// one per append. Eviction drops entries from the front and raises the
/// low-water mark (`first_seq`); any sequence below it is evicted. The live
/// entries are always exactly `first_seq..next_seq`.
#[derive(Debug)]
pub struct ChatLog {
    entries: VecDeque<Entry>,
    /// Sequence of the oldest live entry (low-water mark)
    first_seq: u64,
    /// Sequence the next append receives
    next_seq: u64,
    /// Sum of live payload lengths
    byte_total: usize,
    capacity: LogCapacity,
}

impl ChatLog {
    pub fn new(capacity: LogCapacity) -> Self {
        Self {
            entries: VecDeque::new(),
            first_seq: HEAD_SEQ + 1,
            next_seq: HEAD_SEQ + 1,
            byte_total: 0,
            capacity,
        }
    }

    /// Append `payload`, then evict from the front until both bounds hold.
    ///
    /// A payload longer than the byte capacity could never be stored and is
    /// dropped without touching the log.
    pub fn push(&mut self, payload: impl Into<Bytes>) -> PushOutcome {
        let payload = payload.into();

        if payload.len() > self.capacity.byte_capacity {
            return PushOutcome::Rejected {
                len: payload.len(),
                byte_capacity: self.capacity.byte_capacity,
            };
        }

        let seq = self.next_seq;
        self.next_seq += 1;
        self.byte_total += payload.len();
        self.entries.push_back(Entry::new(seq, payload));
        trace!("Appended entry {seq} ({} bytes live)", self.byte_total);

        let evicted = self.evict();

        PushOutcome::Appended { seq, evicted }
    }

    fn evict(&mut self) -> usize {
        let mut evicted = 0;

        while self.byte_total > self.capacity.byte_capacity
            || self.entries.len() > self.capacity.entry_capacity
        {
            let Some(oldest) = self.entries.pop_front() else {
                break;
            };

            self.byte_total -= oldest.len();
            self.first_seq = oldest.seq() + 1;
            evicted += 1;
        }

        if evicted > 0 {
            debug!(
                "Evicted {evicted} entries, oldest live is now {} ({} entries, {} bytes)",
                self.first_seq,
                self.entries.len(),
                self.byte_total
            );
        }

        evicted
    }

    /// The sentinel position a fresh or resynchronized cursor points at.
    pub fn head(&self) -> u64 {
        HEAD_SEQ
    }

    /// True once the entry at `seq` has been dropped by eviction.
    ///
    /// The head is never evicted, and sequences not yet assigned are not
    /// evicted either.
    pub fn is_evicted(&self, seq: u64) -> bool {
        seq != HEAD_SEQ && seq < self.first_seq
    }

    /// Live entry at `seq`, if any.
    pub fn get(&self, seq: u64) -> Option<&Entry> {
        if seq < self.first_seq || seq >= self.next_seq {
            return None;
        }
        self.entries.get((seq - self.first_seq) as usize)
    }

    /// The entry that follows position `after`.
    ///
    /// From the head this is the oldest live entry. Callers resynchronize a
    /// stale (evicted) position to the head before asking.
    pub fn next_after(&self, after: u64) -> Option<&Entry> {
        if after == HEAD_SEQ {
            self.entries.front()
        } else {
            self.get(after + 1)
        }
    }

    /// Live entries, oldest first.
    pub fn live(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }

    pub fn byte_total(&self) -> usize {
        self.byte_total
    }

    pub fn entry_total(&self) -> usize {
        self.entries.len()
    }

    pub fn capacity(&self) -> LogCapacity {
        self.capacity
    }

    pub fn first_seq(&self) -> u64 {
        self.first_seq
    }

    /// Sequence of the tail, or the head when the log has never held anything.
    pub fn last_seq(&self) -> u64 {
        self.next_seq - 1
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn stats(&self) -> LogStats {
        LogStats {
            byte_total: self.byte_total,
            entry_total: self.entries.len(),
            byte_capacity: self.capacity.byte_capacity,
            entry_capacity: self.capacity.entry_capacity,
            first_seq: self.first_seq,
            last_seq: self.last_seq(),
        }
    }
}

impl Default for ChatLog {
    fn default() -> Self {
        Self::new(LogCapacity::default())
    }
}
