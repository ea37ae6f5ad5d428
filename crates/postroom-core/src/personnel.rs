//! The personnel: per-request strategy resolution.

use std::sync::Arc;

use postroom_template::{
    ConventionResolver, SubstituteTransform, TemplateResolver, TextTransform, TransformChain,
};

use crate::error::{Error, Result};
use crate::postcard::Postcard;
use crate::postman::Postman;
use crate::supplement::{AddressFilter, AsyncStrategy, LoggingStrategy, SubjectFilter};
use crate::transport::Transport;

/// One slot per collaborator, passed once to [`Personnel::new`].
///
/// Every slot is independently optional. Unset slots fall back to the
/// defaults: a [`ConventionResolver`] rooted at
/// [`DEFAULT_BASE_DIR`](postroom_template::DEFAULT_BASE_DIR) and a single
/// [`SubstituteTransform`] stage; the filter and strategy slots simply stay
/// absent.
#[derive(Default)]
pub struct PersonnelConfig {
    template_resolver: Option<Arc<dyn TemplateResolver>>,
    transform_stages: Option<Vec<Arc<dyn TextTransform>>>,
    address_filter: Option<Arc<dyn AddressFilter>>,
    subject_filter: Option<Arc<dyn SubjectFilter>>,
    async_strategy: Option<Arc<dyn AsyncStrategy>>,
    logging_strategy: Option<Arc<dyn LoggingStrategy>>,
    training: bool,
}

impl PersonnelConfig {
    /// Creates a config with every slot unset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the default template resolver.
    #[must_use]
    pub fn with_template_resolver(mut self, resolver: Arc<dyn TemplateResolver>) -> Self {
        self.template_resolver = Some(resolver);
        self
    }

    /// Replaces the default transform stages. An empty vector yields an
    /// identity chain.
    #[must_use]
    pub fn with_transform_stages(mut self, stages: Vec<Arc<dyn TextTransform>>) -> Self {
        self.transform_stages = Some(stages);
        self
    }

    /// Sets the recipient filter.
    #[must_use]
    pub fn with_address_filter(mut self, filter: Arc<dyn AddressFilter>) -> Self {
        self.address_filter = Some(filter);
        self
    }

    /// Sets the subject filter.
    #[must_use]
    pub fn with_subject_filter(mut self, filter: Arc<dyn SubjectFilter>) -> Self {
        self.subject_filter = Some(filter);
        self
    }

    /// Sets the async dispatch strategy.
    #[must_use]
    pub fn with_async_strategy(mut self, strategy: Arc<dyn AsyncStrategy>) -> Self {
        self.async_strategy = Some(strategy);
        self
    }

    /// Sets the logging strategy.
    #[must_use]
    pub fn with_logging_strategy(mut self, strategy: Arc<dyn LoggingStrategy>) -> Self {
        self.logging_strategy = Some(strategy);
        self
    }

    /// Starts the personnel in training mode.
    #[must_use]
    pub fn training(mut self) -> Self {
        self.training = true;
        self
    }
}

impl std::fmt::Debug for PersonnelConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PersonnelConfig")
            .field("template_resolver", &self.template_resolver.is_some())
            .field("transform_stages", &self.transform_stages.as_ref().map(Vec::len))
            .field("address_filter", &self.address_filter.is_some())
            .field("subject_filter", &self.subject_filter.is_some())
            .field("async_strategy", &self.async_strategy.is_some())
            .field("logging_strategy", &self.logging_strategy.is_some())
            .field("training", &self.training)
            .finish()
    }
}

/// Selects the concrete strategy objects used for each request.
///
/// Owns the resolved collaborators for its whole lifetime: the template
/// resolver, the transform chain, and the optional filter/strategy slots.
/// All of it is immutable after construction except the one-way training
/// flag. Safe to share read-only across concurrent deliveries.
pub struct Personnel {
    resolver: Arc<dyn TemplateResolver>,
    chain: Arc<TransformChain>,
    address_filter: Option<Arc<dyn AddressFilter>>,
    subject_filter: Option<Arc<dyn SubjectFilter>>,
    async_strategy: Option<Arc<dyn AsyncStrategy>>,
    logging_strategy: Option<Arc<dyn LoggingStrategy>>,
    training: bool,
    disposed: bool,
}

impl Personnel {
    /// Creates personnel from `config`, filling defaults for unset slots.
    #[must_use]
    pub fn new(config: PersonnelConfig) -> Self {
        let resolver = config
            .template_resolver
            .unwrap_or_else(|| Arc::new(ConventionResolver::default()));
        let stages = config
            .transform_stages
            .unwrap_or_else(|| vec![Arc::new(SubstituteTransform::new())]);
        Self {
            resolver,
            chain: Arc::new(TransformChain::new(stages)),
            address_filter: config.address_filter,
            subject_filter: config.subject_filter,
            async_strategy: config.async_strategy,
            logging_strategy: config.logging_strategy,
            training: config.training,
            disposed: false,
        }
    }

    /// Switches into training mode. One-way and idempotent; chainable.
    ///
    /// Only postmen selected afterwards are affected; agents created before
    /// the switch keep the flag they were born with.
    #[must_use]
    pub fn as_training(mut self) -> Self {
        self.training = true;
        self
    }

    /// Whether the personnel is in training mode.
    #[must_use]
    pub fn is_training(&self) -> bool {
        self.training
    }

    /// Selects the template resolver for `postcard`.
    ///
    /// The default implementation returns the shared instance for every
    /// request; the per-request parameter exists so callers can route on it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Disposed`] after [`dispose`](Self::dispose).
    pub fn select_template_resolver(
        &self,
        _postcard: &Postcard,
    ) -> Result<Arc<dyn TemplateResolver>> {
        self.check_alive()?;
        Ok(Arc::clone(&self.resolver))
    }

    /// Selects the transform chain for `postcard`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Disposed`] after [`dispose`](Self::dispose).
    pub fn select_transform_chain(&self, _postcard: &Postcard) -> Result<Arc<TransformChain>> {
        self.check_alive()?;
        Ok(Arc::clone(&self.chain))
    }

    /// Constructs a fresh postman for `postcard`, bound to `transport`.
    ///
    /// Present collaborators decorate the postman in a fixed order: address
    /// filter, subject filter, async strategy, logging strategy. The
    /// training flag is copied onto the postman at this moment and not
    /// observed dynamically afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Disposed`] after [`dispose`](Self::dispose).
    pub fn select_postman(
        &self,
        _postcard: &Postcard,
        transport: Arc<dyn Transport>,
    ) -> Result<Postman> {
        self.check_alive()?;
        let mut postman = Postman::new(transport);
        if let Some(filter) = &self.address_filter {
            postman = postman.with_address_filter(Arc::clone(filter));
        }
        if let Some(filter) = &self.subject_filter {
            postman = postman.with_subject_filter(Arc::clone(filter));
        }
        if let Some(strategy) = &self.async_strategy {
            postman = postman.with_async_strategy(Arc::clone(strategy));
        }
        if let Some(strategy) = &self.logging_strategy {
            postman = postman.with_logging_strategy(Arc::clone(strategy));
        }
        Ok(if self.training {
            postman.as_training()
        } else {
            postman
        })
    }

    /// Shuts the personnel down, releasing collaborator resources.
    ///
    /// Propagates synchronously to the template resolver and every
    /// transform stage before returning. Selecting anything afterwards is a
    /// signaled error, never a silent no-op.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.resolver.dispose();
        self.chain.dispose();
        self.disposed = true;
        tracing::debug!("Personnel disposed");
    }

    fn check_alive(&self) -> Result<()> {
        if self.disposed {
            return Err(Error::Disposed);
        }
        Ok(())
    }
}

impl std::fmt::Debug for Personnel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Personnel")
            .field("chain", &self.chain)
            .field("training", &self.training)
            .field("disposed", &self.disposed)
            .finish_non_exhaustive()
    }
}
