use serde::Serialize;

/// Point-in-time view of the log counters, used by health reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LogStats {
    pub byte_total: usize,
    pub entry_total: usize,
    pub byte_capacity: usize,
    pub entry_capacity: usize,
    pub first_seq: u64,
    pub last_seq: u64,
}
