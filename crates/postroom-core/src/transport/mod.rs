//! Transport boundary and delivery actions.
//!
//! The pipeline never owns a connection. It borrows a live session through
//! the [`Transport`] trait for the duration of one delivery and hands it the
//! fully-built [`PostingMessage`]. Concrete backends (SMTP, queues) live
//! outside this crate; [`InMemoryTransport`] is provided as a recording
//! backend for tests and dry runs.

mod inmemory;

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::BoxError;
use crate::message::PostingMessage;

pub use inmemory::InMemoryTransport;

/// Live send session supplied by the caller.
///
/// Implementations must tolerate concurrent `send` calls; the pipeline
/// places no locking discipline around the handle.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends one message through the underlying mechanism.
    ///
    /// The message arrives in its transport-neutral form. A wire backend
    /// converts it to the native representation here, at the last moment
    /// before the send, via
    /// [`PostingMessage::to_rfc5322`](crate::PostingMessage::to_rfc5322);
    /// recording backends such as [`InMemoryTransport`] may store the
    /// structured form as-is.
    ///
    /// # Errors
    ///
    /// Returns the backend's own error; the delivery agent wraps it before
    /// it reaches callers.
    async fn send(&self, message: &PostingMessage) -> Result<(), BoxError>;
}

/// One deferred transport send: a zero-argument action that owns everything
/// it needs.
///
/// An [`AsyncStrategy`](crate::supplement::AsyncStrategy) may move the
/// action to another execution context; it must run it exactly once.
pub struct DeliveryAction {
    transport: Arc<dyn Transport>,
    message: PostingMessage,
}

impl DeliveryAction {
    pub(crate) fn new(transport: Arc<dyn Transport>, message: PostingMessage) -> Self {
        Self { transport, message }
    }

    /// The message this action will send.
    #[must_use]
    pub fn message(&self) -> &PostingMessage {
        &self.message
    }

    /// Performs the send, consuming the action.
    ///
    /// # Errors
    ///
    /// Returns the transport's error unchanged.
    pub async fn run(self) -> Result<(), BoxError> {
        self.transport.send(&self.message).await
    }
}

impl std::fmt::Debug for DeliveryAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeliveryAction")
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}
