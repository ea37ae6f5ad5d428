//! Asynchronous dispatch hook.

use async_trait::async_trait;

use crate::error::BoxError;
use crate::transport::DeliveryAction;

/// Decides whether, when, and where a delivery action executes.
///
/// The pipeline itself contains no threads, queues, or timers; when a
/// strategy is configured, every non-training send is handed to it instead
/// of being run inline. Under normal operation the strategy must execute
/// the action exactly once, or fail if it cannot schedule it. Retry policy,
/// if any, also lives here, using the postman's notification hooks to
/// report eventual success or suppressed causes.
#[async_trait]
pub trait AsyncStrategy: Send + Sync {
    /// Executes (or schedules) `action`.
    ///
    /// # Errors
    ///
    /// Returns the action's transport error, or the strategy's own error if
    /// the action could not be scheduled.
    async fn dispatch(&self, action: DeliveryAction) -> Result<(), BoxError>;
}
