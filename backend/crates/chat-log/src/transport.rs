use async_trait::async_trait;
use bytes::Bytes;

/// Outbound half of a subscriber connection.
///
/// `send` suspends until the payload is handed to the peer or fails.
#[async_trait]
pub trait Transport: Send {
    type Error: Send;

    async fn send(&mut self, payload: Bytes) -> Result<(), Self::Error>;
}
