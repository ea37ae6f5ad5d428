//! Recipient and subject filters.

use crate::postcard::Address;

/// Rewrites a recipient list before it reaches the outgoing message.
///
/// Applied independently to each of to, cc, and bcc — never to the sender.
/// Filters are pure: no side effects, no errors for well-formed input. A
/// filter may drop entries, including all of them; an empty result
/// legitimately suppresses that recipient category.
pub trait AddressFilter: Send + Sync {
    /// Returns the filtered list; output order is preserved as returned.
    fn filter(&self, recipients: Vec<Address>) -> Vec<Address>;
}

/// Rewrites subject text before it reaches the outgoing message.
///
/// Pure, like [`AddressFilter`]. Typical use: environment prefixes such as
/// `[staging]`.
pub trait SubjectFilter: Send + Sync {
    /// Returns the rewritten subject.
    fn filter(&self, subject: String) -> String;
}
