/// Counters from one catch-up run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CatchUpReport {
    /// Payloads handed to the transport
    pub delivered: usize,
    /// Times the cursor was found stale and sent back to the head
    pub resyncs: usize,
}
