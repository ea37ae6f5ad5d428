//! In-memory transport backend.

use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;

use crate::error::BoxError;
use crate::message::PostingMessage;
use crate::transport::Transport;

/// Transport that records every message instead of sending it.
///
/// Useful in tests and local development; the recorded messages can be
/// inspected after the fact.
#[derive(Debug, Default)]
pub struct InMemoryTransport {
    sent: Mutex<Vec<PostingMessage>>,
}

impl InMemoryTransport {
    /// Creates an empty recording transport.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every message sent so far, in send order.
    #[must_use]
    pub fn sent(&self) -> Vec<PostingMessage> {
        self.sent
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of messages sent so far.
    #[must_use]
    pub fn sent_count(&self) -> usize {
        self.sent
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

#[async_trait]
impl Transport for InMemoryTransport {
    async fn send(&self, message: &PostingMessage) -> Result<(), BoxError> {
        self.sent
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(message.clone());
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::message::DEFAULT_ENCODING;
    use crate::postcard::Address;

    #[tokio::test]
    async fn test_records_sent_messages() {
        let transport = InMemoryTransport::new();
        let mut message = PostingMessage::new();
        message.set_from(Address::new("a@x.com").unwrap());
        message.set_subject("Hi", DEFAULT_ENCODING);
        message.set_plain_body("hello", DEFAULT_ENCODING);

        transport.send(&message).await.unwrap();

        assert_eq!(transport.sent_count(), 1);
        assert_eq!(transport.sent()[0].subject(), Some("Hi"));
    }
}
