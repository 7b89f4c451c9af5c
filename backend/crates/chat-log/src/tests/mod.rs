
use crate::{ChatLog, LogCapacity, SharedLog, Transport};

use async_trait::async_trait;
use bytes::Bytes;

pub(crate) fn capacity(byte_capacity: usize, entry_capacity: usize) -> LogCapacity {
    LogCapacity::new(byte_capacity, entry_capacity).unwrap()
}

pub(crate) fn payloads(log: &ChatLog) -> Vec<Bytes> {
    log.live().map(|e| e.payload().clone()).collect()
}

/// Transport that records every payload, optionally failing on the Nth send
/// and optionally pushing into the log while a send is "in flight".
#[derive(Default)]
pub(crate) struct RecordingTransport {
    pub sent: Vec<Bytes>,
    pub fail_on_send: Option<usize>,
    pub push_during_send: Vec<(usize, &'static str)>,
    pub log: Option<SharedLog>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_on(send_index: usize) -> Self {
        Self {
            fail_on_send: Some(send_index),
            ..Self::default()
        }
    }

    /// Push `payload` into `log` while send number `send_index` is suspended.
    pub fn pushing_during(log: SharedLog, pushes: Vec<(usize, &'static str)>) -> Self {
        Self {
            push_during_send: pushes,
            log: Some(log),
            ..Self::default()
        }
    }

    pub fn sent_strings(&self) -> Vec<String> {
        self.sent
            .iter()
            .map(|b| String::from_utf8(b.to_vec()).unwrap())
            .collect()
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    type Error = String;

    async fn send(&mut self, payload: Bytes) -> Result<(), Self::Error> {
        let index = self.sent.len();

        if self.fail_on_send == Some(index) {
            return Err(format!("send {index} failed"));
        }

        if let Some(log) = &self.log {
            for (at, extra) in &self.push_during_send {
                if *at == index {
                    log.push(*extra).await;
                }
            }
        }

        self.sent.push(payload);
        Ok(())
    }
}
