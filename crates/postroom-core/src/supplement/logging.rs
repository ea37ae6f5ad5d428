//! Delivery outcome logging hooks.

use crate::error::BoxError;
use crate::message::PostingMessage;
use crate::postcard::Postcard;

/// Receives delivery outcome notifications.
///
/// Three independent notification paths: a completed posting, an eventual
/// success reported by an outer retry layer, and a failure an outer layer
/// caught and discarded. The delivery agent never infers the latter two; the
/// outer layer reports them explicitly through
/// [`Postman::notify_retry_success`](crate::Postman::notify_retry_success)
/// and [`Postman::notify_suppressed`](crate::Postman::notify_suppressed).
///
/// Hard delivery failures are *not* reported here; they propagate to the
/// caller, whose responsibility logging them remains.
pub trait LoggingStrategy: Send + Sync {
    /// A message was posted (sent, or routed to the training sink).
    fn log_posting(&self, postcard: &Postcard, message: &PostingMessage, training: bool);

    /// An outer retry layer eventually succeeded after `attempts` tries.
    fn log_retry_success(
        &self,
        postcard: &Postcard,
        training: bool,
        attempts: u32,
        first_cause: &BoxError,
    );

    /// An outer layer caught and discarded a failure.
    fn log_suppressed_cause(&self, postcard: &Postcard, training: bool, cause: &BoxError);
}
