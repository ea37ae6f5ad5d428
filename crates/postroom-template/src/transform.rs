//! Text transformation boundary and stage chaining.

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::TransformError;

/// One text transformation stage.
///
/// Stages rewrite raw template text into (closer to) final text. They are
/// pure with respect to their inputs and compose left-to-right inside a
/// [`TransformChain`].
pub trait TextTransform: Send + Sync {
    /// Transforms `text` using the supplied context variables.
    ///
    /// # Errors
    ///
    /// Returns a stage-specific [`TransformError`] when the text cannot be
    /// rewritten.
    fn transform(
        &self,
        text: &str,
        vars: &HashMap<String, String>,
    ) -> Result<String, TransformError>;

    /// Releases any resources held by the stage; the default is a no-op.
    fn dispose(&self) {}
}

/// Applies an ordered list of stages to raw template text.
///
/// A chain with zero stages is the identity transform.
pub struct TransformChain {
    stages: Vec<Arc<dyn TextTransform>>,
}

impl TransformChain {
    /// Creates a chain from stages applied in order.
    #[must_use]
    pub fn new(stages: Vec<Arc<dyn TextTransform>>) -> Self {
        Self { stages }
    }

    /// Creates an identity chain.
    #[must_use]
    pub fn empty() -> Self {
        Self { stages: Vec::new() }
    }

    /// Number of stages in the chain.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// Whether the chain has no stages.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Runs every stage over `text`, left-to-right.
    ///
    /// # Errors
    ///
    /// Returns the first stage error encountered; later stages do not run.
    pub fn proofread(
        &self,
        text: &str,
        vars: &HashMap<String, String>,
    ) -> Result<String, TransformError> {
        let mut current = text.to_string();
        for stage in &self.stages {
            current = stage.transform(&current, vars)?;
        }
        Ok(current)
    }

    /// Propagates disposal to every stage.
    pub fn dispose(&self) {
        for stage in &self.stages {
            stage.dispose();
        }
    }
}

impl std::fmt::Debug for TransformChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransformChain")
            .field("stages", &self.stages.len())
            .finish()
    }
}
