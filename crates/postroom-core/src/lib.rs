//! # postroom-core
//!
//! A pluggable mail delivery pipeline. A structured request (the
//! [`Postcard`]) is assembled into a transport-ready message, passed through
//! optional cross-cutting filters, and handed to a transport — or, in
//! training mode, to a log sink that is indistinguishable from production
//! except for the final send.
//!
//! ## Components
//!
//! - [`Postcard`]: one immutable message request
//! - [`PostingMessage`]: the per-delivery outgoing message builder
//! - [`Postman`]: the delivery agent
//! - [`Personnel`]: per-request strategy resolution and decoration
//! - [`supplement`]: optional collaborators (filters, async dispatch,
//!   outcome logging)
//! - [`transport`]: the send boundary and an in-memory backend
//!
//! Template resolution and text transformation live in `postroom-template`
//! and are re-exported here.
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//!
//! use postroom_core::{
//!     Address, InMemoryTransport, Personnel, PersonnelConfig, Postcard,
//! };
//!
//! #[tokio::main]
//! async fn main() -> postroom_core::Result<()> {
//!     let personnel = Personnel::new(PersonnelConfig::new()).as_training();
//!
//!     let postcard = Postcard::builder(Address::new("alice@x.com")?, "Hi")
//!         .to(Address::new("bob@x.com")?)
//!         .plain_body("hello")
//!         .build()?;
//!
//!     let transport = Arc::new(InMemoryTransport::new());
//!     let postman = personnel.select_postman(&postcard, transport)?;
//!     postman.deliver(&postcard).await
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod error;
mod message;
mod personnel;
mod postcard;
mod postman;
pub mod supplement;
pub mod transport;

pub use error::{BoxError, Error, Result};
pub use message::{DEFAULT_ENCODING, PostingMessage};
pub use personnel::{Personnel, PersonnelConfig};
pub use postcard::{Address, Postcard, PostcardBuilder};
pub use postman::Postman;
pub use supplement::{AddressFilter, AsyncStrategy, LoggingStrategy, SubjectFilter};
pub use transport::{DeliveryAction, InMemoryTransport, Transport};

pub use postroom_template::{
    ConventionResolver, SubstituteTransform, TemplateError, TemplateId, TemplateResolver,
    TextTransform, TransformChain, TransformError,
};
