//! The postcard: one caller-supplied message request.

use crate::error::{Error, Result};

/// Validated email address.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Address(String);

impl Address {
    /// Creates a new address from a string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidAddress`] if the address is malformed.
    pub fn new(addr: impl Into<String>) -> Result<Self> {
        let addr = addr.into();
        Self::validate(&addr)?;
        Ok(Self(addr))
    }

    /// Returns the address as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Validates an email address (basic validation).
    fn validate(addr: &str) -> Result<()> {
        if addr.is_empty() {
            return Err(Error::InvalidAddress("Address cannot be empty".into()));
        }
        let mut parts = addr.split('@');
        let local = parts.next().unwrap_or_default();
        let Some(domain) = parts.next() else {
            return Err(Error::InvalidAddress(format!("Address must contain @: {addr}")));
        };
        if parts.next().is_some() {
            return Err(Error::InvalidAddress(format!(
                "Address must have exactly one @: {addr}"
            )));
        }
        if local.is_empty() || domain.is_empty() {
            return Err(Error::InvalidAddress(format!(
                "Local and domain parts cannot be empty: {addr}"
            )));
        }
        Ok(())
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One message request: addresses, subject, and already-rendered body text.
///
/// Immutable once built. [`PostcardBuilder::build`] enforces the request
/// invariants: at least one recipient across to/cc/bcc, and at least one
/// body variant present.
#[derive(Debug, Clone)]
pub struct Postcard {
    from: Address,
    to: Vec<Address>,
    cc: Vec<Address>,
    bcc: Vec<Address>,
    subject: String,
    plain: Option<String>,
    html: Option<String>,
}

impl Postcard {
    /// Starts building a postcard from the sender and subject.
    #[must_use]
    pub fn builder(from: Address, subject: impl Into<String>) -> PostcardBuilder {
        PostcardBuilder {
            from,
            to: Vec::new(),
            cc: Vec::new(),
            bcc: Vec::new(),
            subject: subject.into(),
            plain: None,
            html: None,
        }
    }

    /// Sender address.
    #[must_use]
    pub fn from(&self) -> &Address {
        &self.from
    }

    /// Direct recipients, in insertion order.
    #[must_use]
    pub fn to(&self) -> &[Address] {
        &self.to
    }

    /// Carbon-copy recipients, in insertion order.
    #[must_use]
    pub fn cc(&self) -> &[Address] {
        &self.cc
    }

    /// Blind-carbon-copy recipients, in insertion order.
    #[must_use]
    pub fn bcc(&self) -> &[Address] {
        &self.bcc
    }

    /// Subject text.
    #[must_use]
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// Rendered plain-text body, if any.
    #[must_use]
    pub fn plain_body(&self) -> Option<&str> {
        self.plain.as_deref()
    }

    /// Rendered HTML body, if any.
    #[must_use]
    pub fn html_body(&self) -> Option<&str> {
        self.html.as_deref()
    }
}

fn join(addresses: &[Address]) -> String {
    if addresses.is_empty() {
        return "-".to_string();
    }
    addresses
        .iter()
        .map(Address::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Diagnostic view used in delivery-failure messages and logging.
impl std::fmt::Display for Postcard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "postcard:{{from={}, to=[{}], cc=[{}], bcc=[{}], subject={}}}",
            self.from,
            join(&self.to),
            join(&self.cc),
            join(&self.bcc),
            self.subject
        )
    }
}

/// Builder for [`Postcard`].
#[derive(Debug)]
pub struct PostcardBuilder {
    from: Address,
    to: Vec<Address>,
    cc: Vec<Address>,
    bcc: Vec<Address>,
    subject: String,
    plain: Option<String>,
    html: Option<String>,
}

impl PostcardBuilder {
    /// Adds a direct recipient.
    #[must_use]
    pub fn to(mut self, recipient: Address) -> Self {
        self.to.push(recipient);
        self
    }

    /// Adds a carbon-copy recipient.
    #[must_use]
    pub fn cc(mut self, recipient: Address) -> Self {
        self.cc.push(recipient);
        self
    }

    /// Adds a blind-carbon-copy recipient.
    #[must_use]
    pub fn bcc(mut self, recipient: Address) -> Self {
        self.bcc.push(recipient);
        self
    }

    /// Sets the plain-text body.
    #[must_use]
    pub fn plain_body(mut self, text: impl Into<String>) -> Self {
        self.plain = Some(text.into());
        self
    }

    /// Sets the HTML body.
    #[must_use]
    pub fn html_body(mut self, text: impl Into<String>) -> Self {
        self.html = Some(text.into());
        self
    }

    /// Builds the postcard, enforcing the request invariants.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoRecipients`] when to, cc, and bcc are all empty,
    /// or [`Error::MissingBody`] when neither body variant is set. Both are
    /// raised here, before any filter or transport is ever involved.
    pub fn build(self) -> Result<Postcard> {
        if self.to.is_empty() && self.cc.is_empty() && self.bcc.is_empty() {
            return Err(Error::NoRecipients);
        }
        if self.plain.is_none() && self.html.is_none() {
            return Err(Error::MissingBody);
        }
        Ok(Postcard {
            from: self.from,
            to: self.to,
            cc: self.cc,
            bcc: self.bcc,
            subject: self.subject,
            plain: self.plain,
            html: self.html,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn addr(s: &str) -> Address {
        Address::new(s).unwrap()
    }

    #[test]
    fn test_valid_address() {
        assert_eq!(addr("user@example.com").as_str(), "user@example.com");
    }

    #[test]
    fn test_invalid_address_no_at() {
        assert!(Address::new("userexample.com").is_err());
    }

    #[test]
    fn test_invalid_address_two_ats() {
        assert!(Address::new("user@host@example.com").is_err());
    }

    #[test]
    fn test_invalid_address_empty_parts() {
        assert!(Address::new("@example.com").is_err());
        assert!(Address::new("user@").is_err());
    }

    #[test]
    fn test_build_requires_a_recipient() {
        let result = Postcard::builder(addr("a@x.com"), "Hi")
            .plain_body("hello")
            .build();
        assert!(matches!(result, Err(Error::NoRecipients)));
    }

    #[test]
    fn test_build_requires_a_body() {
        let result = Postcard::builder(addr("a@x.com"), "Hi")
            .to(addr("b@x.com"))
            .build();
        assert!(matches!(result, Err(Error::MissingBody)));
    }

    #[test]
    fn test_build_with_bcc_only_is_enough() {
        let postcard = Postcard::builder(addr("a@x.com"), "Hi")
            .bcc(addr("b@x.com"))
            .html_body("<p>hello</p>")
            .build()
            .unwrap();
        assert!(postcard.to().is_empty());
        assert_eq!(postcard.bcc().len(), 1);
        assert!(postcard.plain_body().is_none());
    }

    #[test]
    fn test_recipient_order_preserved() {
        let postcard = Postcard::builder(addr("a@x.com"), "Hi")
            .to(addr("one@x.com"))
            .to(addr("two@x.com"))
            .to(addr("three@x.com"))
            .plain_body("hello")
            .build()
            .unwrap();
        let names: Vec<_> = postcard.to().iter().map(Address::as_str).collect();
        assert_eq!(names, ["one@x.com", "two@x.com", "three@x.com"]);
    }

    #[test]
    fn test_display_includes_addresses_and_subject() {
        let postcard = Postcard::builder(addr("alice@x.com"), "Hi")
            .to(addr("bob@x.com"))
            .plain_body("hello")
            .build()
            .unwrap();
        let view = postcard.to_string();
        assert!(view.contains("alice@x.com"));
        assert!(view.contains("bob@x.com"));
        assert!(view.contains("subject=Hi"));
    }
}
