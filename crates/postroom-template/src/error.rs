//! Error types for template resolution and transformation.

use std::io;
use std::path::PathBuf;

/// Errors that can occur while resolving raw template text.
#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    /// No candidate file exists for the requested template.
    #[error("Template not found: {name} (tried {tried:?})")]
    NotFound {
        /// Logical template name that was requested.
        name: String,
        /// Candidate paths that were checked, in lookup order.
        tried: Vec<PathBuf>,
    },

    /// A candidate file exists but could not be read.
    #[error("I/O error reading template: {0}")]
    Io(#[from] io::Error),
}

/// Errors that can occur in a text transformation stage.
#[derive(Debug, thiserror::Error)]
pub enum TransformError {
    /// The template references a variable the context does not define.
    #[error("Unknown template variable: {name}")]
    UnknownVariable {
        /// Name of the missing variable.
        name: String,
    },

    /// A comment or substitution opened but never closed.
    #[error("Unterminated {construct} in template text")]
    Unterminated {
        /// The construct that was left open (e.g. "comment").
        construct: &'static str,
    },
}
