//! Convention-based filesystem template resolver.

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use crate::error::TemplateError;
use crate::resolver::{TemplateId, TemplateResolver};

/// Default base directory for template lookup.
pub const DEFAULT_BASE_DIR: &str = "mail";

/// File extension used by the naming convention.
pub const TEMPLATE_EXT: &str = "mail";

/// Resolves templates from disk by naming convention.
///
/// A template `welcome` with locale `ja` is looked up as
/// `{base}/welcome_ja.mail`, falling back to `{base}/welcome.mail` when the
/// localized variant does not exist. Resolved text is cached until
/// [`dispose`](TemplateResolver::dispose).
#[derive(Debug)]
pub struct ConventionResolver {
    base_dir: PathBuf,
    cache: Mutex<HashMap<TemplateId, String>>,
}

impl ConventionResolver {
    /// Creates a resolver rooted at `base_dir`.
    #[must_use]
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Returns the base directory templates are resolved under.
    #[must_use]
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Candidate paths for `id`, most specific first.
    fn candidates(&self, id: &TemplateId) -> Vec<PathBuf> {
        let mut paths = Vec::with_capacity(2);
        if let Some(locale) = &id.locale {
            paths.push(
                self.base_dir
                    .join(format!("{}_{locale}.{TEMPLATE_EXT}", id.name)),
            );
        }
        paths.push(self.base_dir.join(format!("{}.{TEMPLATE_EXT}", id.name)));
        paths
    }
}

impl Default for ConventionResolver {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_DIR)
    }
}

impl TemplateResolver for ConventionResolver {
    fn resolve(&self, id: &TemplateId) -> Result<String, TemplateError> {
        if let Some(text) = self
            .cache
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(id)
        {
            return Ok(text.clone());
        }
        let tried = self.candidates(id);
        for path in &tried {
            match std::fs::read_to_string(path) {
                Ok(text) => {
                    tracing::debug!(template = %id, path = %path.display(), "Template loaded");
                    self.cache
                        .lock()
                        .unwrap_or_else(PoisonError::into_inner)
                        .insert(id.clone(), text.clone());
                    return Ok(text);
                }
                Err(e) if e.kind() == io::ErrorKind::NotFound => {}
                Err(e) => return Err(TemplateError::Io(e)),
            }
        }
        Err(TemplateError::NotFound {
            name: id.to_string(),
            tried,
        })
    }

    fn dispose(&self) {
        self.cache
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::fs;

    use super::*;

    fn write_template(dir: &Path, file: &str, text: &str) {
        fs::write(dir.join(file), text).unwrap();
    }

    #[test]
    fn test_resolve_plain_name() {
        let dir = tempfile::tempdir().unwrap();
        write_template(dir.path(), "welcome.mail", "hello");
        let resolver = ConventionResolver::new(dir.path());
        let text = resolver.resolve(&TemplateId::new("welcome")).unwrap();
        assert_eq!(text, "hello");
    }

    #[test]
    fn test_locale_variant_wins() {
        let dir = tempfile::tempdir().unwrap();
        write_template(dir.path(), "welcome.mail", "hello");
        write_template(dir.path(), "welcome_ja.mail", "konnichiwa");
        let resolver = ConventionResolver::new(dir.path());
        let id = TemplateId::new("welcome").with_locale("ja");
        assert_eq!(resolver.resolve(&id).unwrap(), "konnichiwa");
    }

    #[test]
    fn test_locale_falls_back_to_plain() {
        let dir = tempfile::tempdir().unwrap();
        write_template(dir.path(), "welcome.mail", "hello");
        let resolver = ConventionResolver::new(dir.path());
        let id = TemplateId::new("welcome").with_locale("fr");
        assert_eq!(resolver.resolve(&id).unwrap(), "hello");
    }

    #[test]
    fn test_not_found_lists_candidates() {
        let dir = tempfile::tempdir().unwrap();
        let resolver = ConventionResolver::new(dir.path());
        let id = TemplateId::new("missing").with_locale("ja");
        match resolver.resolve(&id) {
            Err(TemplateError::NotFound { name, tried }) => {
                assert_eq!(name, "missing_ja");
                assert_eq!(tried.len(), 2);
            }
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_cache_survives_file_removal_until_dispose() {
        let dir = tempfile::tempdir().unwrap();
        write_template(dir.path(), "welcome.mail", "hello");
        let resolver = ConventionResolver::new(dir.path());
        let id = TemplateId::new("welcome");
        assert_eq!(resolver.resolve(&id).unwrap(), "hello");

        fs::remove_file(dir.path().join("welcome.mail")).unwrap();
        assert_eq!(resolver.resolve(&id).unwrap(), "hello");

        resolver.dispose();
        assert!(resolver.resolve(&id).is_err());
    }
}
