use crate::Metrics;

use std::time::Instant;

use chat_log::CatchUpReport;

/// Times one catch-up run and records its outcome
pub struct MetricsTimer {
    start: Instant,
    metrics: Metrics,
}

impl MetricsTimer {
    pub fn new(metrics: Metrics) -> Self {
        Self {
            start: Instant::now(),
            metrics,
        }
    }

    /// Record elapsed time and what the run delivered
    pub fn finish(self, report: &CatchUpReport) {
        self.metrics.catch_up_latency(self.start.elapsed());
        self.metrics
            .catch_up_completed(report.delivered, report.resyncs);
    }
}
