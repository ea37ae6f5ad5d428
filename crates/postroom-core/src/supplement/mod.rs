//! Optional cross-cutting collaborators.
//!
//! Every trait in this module is an independently optional slot on the
//! [`Personnel`](crate::Personnel) configuration. Absence is a normal,
//! fully-supported state; present collaborators decorate the
//! [`Postman`](crate::Postman) at construction time.

mod async_strategy;
mod filter;
mod logging;

pub use async_strategy::AsyncStrategy;
pub use filter::{AddressFilter, SubjectFilter};
pub use logging::LoggingStrategy;
