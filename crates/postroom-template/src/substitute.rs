//! Default transform stage: comment stripping and variable substitution.

use std::collections::HashMap;

use crate::error::TransformError;
use crate::transform::TextTransform;

const COMMENT_OPEN: &str = "{#";
const COMMENT_CLOSE: &str = "#}";
const VAR_OPEN: &str = "${";
const VAR_CLOSE: char = '}';

/// Strips `{# ... #}` comment spans and substitutes `${name}` variables.
///
/// Comments may span lines and are removed entirely. Every `${name}` must be
/// defined in the context map; a missing variable is an error rather than a
/// silent blank, so a typo in a template never reaches a recipient.
#[derive(Debug, Default)]
pub struct SubstituteTransform;

impl SubstituteTransform {
    /// Creates the stage.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn strip_comments(text: &str) -> Result<String, TransformError> {
        let mut out = String::with_capacity(text.len());
        let mut rest = text;
        while let Some(open) = rest.find(COMMENT_OPEN) {
            out.push_str(&rest[..open]);
            let after = &rest[open + COMMENT_OPEN.len()..];
            let close = after
                .find(COMMENT_CLOSE)
                .ok_or(TransformError::Unterminated {
                    construct: "comment",
                })?;
            rest = &after[close + COMMENT_CLOSE.len()..];
        }
        out.push_str(rest);
        Ok(out)
    }

    fn substitute(
        text: &str,
        vars: &HashMap<String, String>,
    ) -> Result<String, TransformError> {
        let mut out = String::with_capacity(text.len());
        let mut rest = text;
        while let Some(open) = rest.find(VAR_OPEN) {
            out.push_str(&rest[..open]);
            let after = &rest[open + VAR_OPEN.len()..];
            let close = after.find(VAR_CLOSE).ok_or(TransformError::Unterminated {
                construct: "variable reference",
            })?;
            let name = &after[..close];
            let value = vars.get(name).ok_or_else(|| TransformError::UnknownVariable {
                name: name.to_string(),
            })?;
            out.push_str(value);
            rest = &after[close + VAR_CLOSE.len_utf8()..];
        }
        out.push_str(rest);
        Ok(out)
    }
}

impl TextTransform for SubstituteTransform {
    fn transform(
        &self,
        text: &str,
        vars: &HashMap<String, String>,
    ) -> Result<String, TransformError> {
        let stripped = Self::strip_comments(text)?;
        Self::substitute(&stripped, vars)
    }
}
