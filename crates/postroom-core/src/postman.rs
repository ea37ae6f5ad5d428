//! The postman: builds one outgoing message and delivers it.

use std::sync::Arc;

use crate::error::{BoxError, Error, Result};
use crate::message::{DEFAULT_ENCODING, PostingMessage};
use crate::postcard::{Address, Postcard};
use crate::supplement::{AddressFilter, AsyncStrategy, LoggingStrategy, SubjectFilter};
use crate::transport::{DeliveryAction, Transport};

/// Delivery agent for one transport session.
///
/// Created fresh per delivery context (usually by
/// [`Personnel::select_postman`](crate::Personnel::select_postman)),
/// optionally decorated with filters and strategies, and bound to one
/// [`Transport`] it reads from but does not own.
///
/// In training mode every step runs as in production except the last one:
/// the fully-built message is rendered to the log sink instead of being
/// handed to the transport.
pub struct Postman {
    transport: Arc<dyn Transport>,
    training: bool,
    address_filter: Option<Arc<dyn AddressFilter>>,
    subject_filter: Option<Arc<dyn SubjectFilter>>,
    async_strategy: Option<Arc<dyn AsyncStrategy>>,
    logging_strategy: Option<Arc<dyn LoggingStrategy>>,
}

impl Postman {
    /// Creates an undecorated postman bound to `transport`.
    #[must_use]
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            training: false,
            address_filter: None,
            subject_filter: None,
            async_strategy: None,
            logging_strategy: None,
        }
    }

    /// Decorates the postman with a recipient filter.
    #[must_use]
    pub fn with_address_filter(mut self, filter: Arc<dyn AddressFilter>) -> Self {
        self.address_filter = Some(filter);
        self
    }

    /// Decorates the postman with a subject filter.
    #[must_use]
    pub fn with_subject_filter(mut self, filter: Arc<dyn SubjectFilter>) -> Self {
        self.subject_filter = Some(filter);
        self
    }

    /// Decorates the postman with an async dispatch strategy.
    #[must_use]
    pub fn with_async_strategy(mut self, strategy: Arc<dyn AsyncStrategy>) -> Self {
        self.async_strategy = Some(strategy);
        self
    }

    /// Decorates the postman with a logging strategy.
    #[must_use]
    pub fn with_logging_strategy(mut self, strategy: Arc<dyn LoggingStrategy>) -> Self {
        self.logging_strategy = Some(strategy);
        self
    }

    /// Switches the postman into training mode. One-way.
    #[must_use]
    pub fn as_training(mut self) -> Self {
        self.training = true;
        self
    }

    /// Whether the postman is in training mode.
    #[must_use]
    pub fn is_training(&self) -> bool {
        self.training
    }

    /// Builds the outgoing message and delivers it.
    ///
    /// Runs entirely on the caller's task: message assembly, filters, then
    /// a single transport send (or the training sink). No internal retry.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Delivery`] wrapping the transport cause when the
    /// send fails. Message-construction failures propagate before any
    /// transport contact.
    pub async fn deliver(&self, postcard: &Postcard) -> Result<()> {
        let message = self.build_message(postcard);
        if self.training {
            tracing::info!(rendered = %message, "Training delivery, transport skipped");
            if let Some(logging) = &self.logging_strategy {
                logging.log_posting(postcard, &message, true);
            }
            return Ok(());
        }
        let action = DeliveryAction::new(Arc::clone(&self.transport), message.clone());
        let outcome = match &self.async_strategy {
            Some(strategy) => strategy.dispatch(action).await,
            None => action.run().await,
        };
        outcome.map_err(|cause| Error::Delivery {
            postcard: postcard.to_string(),
            cause,
        })?;
        if let Some(logging) = &self.logging_strategy {
            logging.log_posting(postcard, &message, false);
        }
        Ok(())
    }

    /// Reports an outer retry layer's eventual success to the logging
    /// strategy. No-op when none is configured.
    pub fn notify_retry_success(&self, postcard: &Postcard, attempts: u32, first_cause: &BoxError) {
        if let Some(logging) = &self.logging_strategy {
            logging.log_retry_success(postcard, self.training, attempts, first_cause);
        }
    }

    /// Reports a failure an outer layer caught and discarded. No-op when no
    /// logging strategy is configured; the cause is never re-raised.
    pub fn notify_suppressed(&self, postcard: &Postcard, cause: &BoxError) {
        if let Some(logging) = &self.logging_strategy {
            logging.log_suppressed_cause(postcard, self.training, cause);
        }
    }

    /// Populates a fresh outgoing message from the postcard.
    ///
    /// The sender is set unconditionally and never filtered; each recipient
    /// category and the subject pass through their filter when one is
    /// configured. Encodings come from the agent, not the request.
    fn build_message(&self, postcard: &Postcard) -> PostingMessage {
        let mut message = PostingMessage::new();
        message.set_from(postcard.from().clone());
        for to in self.filter_recipients(postcard.to()) {
            message.add_to(to);
        }
        for cc in self.filter_recipients(postcard.cc()) {
            message.add_cc(cc);
        }
        for bcc in self.filter_recipients(postcard.bcc()) {
            message.add_bcc(bcc);
        }
        let subject = match &self.subject_filter {
            Some(filter) => filter.filter(postcard.subject().to_string()),
            None => postcard.subject().to_string(),
        };
        message.set_subject(subject, Self::encoding());
        if let Some(plain) = postcard.plain_body() {
            message.set_plain_body(plain, Self::encoding());
        }
        if let Some(html) = postcard.html_body() {
            message.set_html_body(html, Self::encoding());
        }
        message
    }

    fn filter_recipients(&self, recipients: &[Address]) -> Vec<Address> {
        match &self.address_filter {
            Some(filter) => filter.filter(recipients.to_vec()),
            None => recipients.to_vec(),
        }
    }

    const fn encoding() -> &'static str {
        DEFAULT_ENCODING
    }
}

impl std::fmt::Debug for Postman {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Postman")
            .field("training", &self.training)
            .field("address_filter", &self.address_filter.is_some())
            .field("subject_filter", &self.subject_filter.is_some())
            .field("async_strategy", &self.async_strategy.is_some())
            .field("logging_strategy", &self.logging_strategy.is_some())
            .finish_non_exhaustive()
    }
}
