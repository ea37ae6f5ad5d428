//! Template resolver boundary.

use crate::error::TemplateError;

/// Identifies one template to resolve.
///
/// The logical name maps to a file (or other storage key) by the resolver's
/// own convention; the optional locale selects a localized variant when one
/// exists.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TemplateId {
    /// Logical template name, e.g. `"member_registration"`.
    pub name: String,
    /// Locale tag for localized lookup, e.g. `"ja"`.
    pub locale: Option<String>,
}

impl TemplateId {
    /// Creates an identifier without a locale.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            locale: None,
        }
    }

    /// Sets the locale for localized lookup.
    #[must_use]
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }
}

impl std::fmt::Display for TemplateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.locale {
            Some(locale) => write!(f, "{}_{locale}", self.name),
            None => write!(f, "{}", self.name),
        }
    }
}

/// Locates raw template text by identifier.
///
/// Implementations must fail with [`TemplateError::NotFound`] when nothing
/// matches; an empty or silent result is never a valid outcome.
pub trait TemplateResolver: Send + Sync {
    /// Resolves the raw template text for `id`.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::NotFound`] if no candidate matches, or
    /// [`TemplateError::Io`] if a candidate exists but cannot be read.
    fn resolve(&self, id: &TemplateId) -> Result<String, TemplateError>;

    /// Releases any resources held by the resolver (caches, handles).
    ///
    /// Called exactly once at pipeline shutdown; the default is a no-op.
    fn dispose(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_id_display_without_locale() {
        assert_eq!(TemplateId::new("welcome").to_string(), "welcome");
    }

    #[test]
    fn test_template_id_display_with_locale() {
        let id = TemplateId::new("welcome").with_locale("ja");
        assert_eq!(id.to_string(), "welcome_ja");
    }
}
