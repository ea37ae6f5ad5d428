//! Error types for the delivery pipeline.

use postroom_template::{TemplateError, TransformError};
use thiserror::Error;

/// Boxed error type used at the transport boundary.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors that can occur in the delivery pipeline.
#[derive(Debug, Error)]
pub enum Error {
    /// Selection was attempted on disposed personnel.
    #[error("Personnel already disposed, cannot resolve strategies")]
    Disposed,

    /// Template resolution failed.
    #[error("Template error: {0}")]
    Template(#[from] TemplateError),

    /// A text transformation stage failed.
    #[error("Transform error: {0}")]
    Transform(#[from] TransformError),

    /// A supplied email address is malformed.
    #[error("Invalid email address: {0}")]
    InvalidAddress(String),

    /// The postcard names no recipient in any category.
    #[error("Postcard has no recipients (to, cc, and bcc are all empty)")]
    NoRecipients,

    /// The postcard carries neither a plain nor an HTML body.
    #[error("Postcard has neither plain nor HTML body text")]
    MissingBody,

    /// The transport send failed.
    ///
    /// The raw transport error is never surfaced directly; it is carried as
    /// the source cause alongside the postcard's diagnostic rendering.
    #[error("Failed to deliver mail: {postcard}")]
    Delivery {
        /// Diagnostic rendering of the postcard that failed.
        postcard: String,
        /// Underlying transport cause.
        #[source]
        cause: BoxError,
    },
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
