//! # postroom-template
//!
//! Template resolution and text transformation for the postroom mail
//! delivery pipeline.
//!
//! ## Features
//!
//! - **Convention-based resolution**: Locate raw template text on disk by
//!   logical name with locale fallback
//! - **Transform chains**: Ordered, composable text transformation stages
//! - **Default stage**: Comment stripping and `${variable}` substitution
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::collections::HashMap;
//! use std::sync::Arc;
//!
//! use postroom_template::{
//!     ConventionResolver, SubstituteTransform, TemplateId, TemplateResolver,
//!     TransformChain,
//! };
//!
//! let resolver = ConventionResolver::new("mail");
//! let raw = resolver.resolve(&TemplateId::new("welcome").with_locale("ja"))?;
//!
//! let chain = TransformChain::new(vec![Arc::new(SubstituteTransform::new())]);
//! let mut vars = HashMap::new();
//! vars.insert("name".to_string(), "sea".to_string());
//! let body = chain.proofread(&raw, &vars)?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod convention;
mod error;
mod resolver;
mod substitute;
mod transform;

pub use convention::{ConventionResolver, DEFAULT_BASE_DIR, TEMPLATE_EXT};
pub use error::{TemplateError, TransformError};
pub use resolver::{TemplateId, TemplateResolver};
pub use substitute::SubstituteTransform;
pub use transform::{TextTransform, TransformChain};
