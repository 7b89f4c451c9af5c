use metrics::{counter, gauge, histogram};

/// Metrics collector for chat connections and the shared history
#[derive(Clone)]
pub struct Metrics {
    prefix: &'static str,
}

impl Metrics {
    pub fn new() -> Self {
        Self { prefix: "chat_ws" }
    }

    /// Record new connection established
    pub fn connection_established(&self) {
        counter!(format!("{}.connections.established", self.prefix)).increment(1);
        gauge!(format!("{}.connections.active", self.prefix)).increment(1.0);
    }

    /// Record connection closed
    pub fn connection_closed(&self, reason: &str) {
        counter!(format!("{}.connections.closed", self.prefix)).increment(1);
        counter!(format!("{}.connections.closed.{}", self.prefix, reason)).increment(1);
        gauge!(format!("{}.connections.active", self.prefix)).decrement(1.0);
    }

    /// Record connection refused by admission control
    pub fn connection_rejected(&self) {
        counter!(format!("{}.connections.rejected", self.prefix)).increment(1);
    }

    /// Record message received from client
    pub fn message_received(&self, message_type: &str) {
        counter!(format!("{}.messages.received", self.prefix)).increment(1);
        counter!(format!(
            "{}.messages.received.{}",
            self.prefix, message_type
        ))
        .increment(1);
    }

    /// Record entry appended to the history, and how many it displaced
    pub fn entry_appended(&self, evicted: usize) {
        counter!(format!("{}.history.appended", self.prefix)).increment(1);
        if evicted > 0 {
            counter!(format!("{}.history.evicted", self.prefix)).increment(evicted as u64);
        }
    }

    /// Record payload too large for the history
    pub fn payload_rejected(&self) {
        counter!(format!("{}.history.rejected", self.prefix)).increment(1);
    }

    /// Record one catch-up run
    pub fn catch_up_completed(&self, delivered: usize, resyncs: usize) {
        counter!(format!("{}.delivery.entries", self.prefix)).increment(delivered as u64);
        if resyncs > 0 {
            counter!(format!("{}.delivery.resyncs", self.prefix)).increment(resyncs as u64);
        }
    }

    /// Record roster update sent to a client
    pub fn roster_sent(&self) {
        counter!(format!("{}.roster.sent", self.prefix)).increment(1);
    }

    /// Record error occurrence
    pub fn error_occurred(&self, error_type: &str) {
        counter!(format!("{}.errors.total", self.prefix)).increment(1);
        counter!(format!("{}.errors.{}", self.prefix, error_type)).increment(1);
    }

    /// Record catch-up latency
    pub fn catch_up_latency(&self, duration: std::time::Duration) {
        histogram!(format!("{}.delivery.latency_ms", self.prefix))
            .record(duration.as_millis() as f64);
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}
