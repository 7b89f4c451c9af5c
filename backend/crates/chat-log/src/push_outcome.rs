/// What a single push did to the log.
///
/// Producers are free to ignore it; the dispatch layer uses it for logging
/// and metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PushOutcome {
    /// Stored at `seq`; `evicted` older entries were dropped to make room.
    Appended { seq: u64, evicted: usize },
    /// Payload larger than the whole byte budget, nothing changed.
    Rejected { len: usize, byte_capacity: usize },
}

impl PushOutcome {
    pub fn is_appended(&self) -> bool {
        matches!(self, Self::Appended { .. })
    }

    pub fn evicted(&self) -> usize {
        match self {
            Self::Appended { evicted, .. } => *evicted,
            Self::Rejected { .. } => 0,
        }
    }
}
