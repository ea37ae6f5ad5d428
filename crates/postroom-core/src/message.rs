//! Outgoing message builder and transport-native conversion.

use std::fmt::Write as _;

use crate::postcard::Address;

/// Character encoding applied by the default delivery agent.
pub const DEFAULT_ENCODING: &str = "UTF-8";

/// One encoded text part of an outgoing message.
#[derive(Debug, Clone, PartialEq, Eq)]
struct EncodedText {
    text: String,
    encoding: String,
}

/// Transport-neutral outgoing message, populated field-by-field.
///
/// Created fresh for every delivery and discarded after the send succeeds or
/// fails; never reused. Conversion to the transport-native form happens at
/// the last moment via [`to_rfc5322`](Self::to_rfc5322).
#[derive(Debug, Clone, Default)]
pub struct PostingMessage {
    from: Option<Address>,
    to: Vec<Address>,
    cc: Vec<Address>,
    bcc: Vec<Address>,
    subject: Option<EncodedText>,
    plain: Option<EncodedText>,
    html: Option<EncodedText>,
}

impl PostingMessage {
    /// Creates an empty message.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the sender.
    pub fn set_from(&mut self, from: Address) {
        self.from = Some(from);
    }

    /// Appends a direct recipient.
    pub fn add_to(&mut self, to: Address) {
        self.to.push(to);
    }

    /// Appends a carbon-copy recipient.
    pub fn add_cc(&mut self, cc: Address) {
        self.cc.push(cc);
    }

    /// Appends a blind-carbon-copy recipient.
    pub fn add_bcc(&mut self, bcc: Address) {
        self.bcc.push(bcc);
    }

    /// Sets the subject with its encoding.
    pub fn set_subject(&mut self, subject: impl Into<String>, encoding: impl Into<String>) {
        self.subject = Some(EncodedText {
            text: subject.into(),
            encoding: encoding.into(),
        });
    }

    /// Sets the plain-text body with its encoding.
    pub fn set_plain_body(&mut self, text: impl Into<String>, encoding: impl Into<String>) {
        self.plain = Some(EncodedText {
            text: text.into(),
            encoding: encoding.into(),
        });
    }

    /// Sets the HTML body with its encoding.
    pub fn set_html_body(&mut self, text: impl Into<String>, encoding: impl Into<String>) {
        self.html = Some(EncodedText {
            text: text.into(),
            encoding: encoding.into(),
        });
    }

    /// Sender, if set.
    #[must_use]
    pub fn from(&self) -> Option<&Address> {
        self.from.as_ref()
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

    /// Subject text, if set.
    #[must_use]
    pub fn subject(&self) -> Option<&str> {
        self.subject.as_ref().map(|s| s.text.as_str())
    }

    /// Plain body text, if set.
    #[must_use]
    pub fn plain_body(&self) -> Option<&str> {
        self.plain.as_ref().map(|s| s.text.as_str())
    }

    /// HTML body text, if set.
    #[must_use]
    pub fn html_body(&self) -> Option<&str> {
        self.html.as_ref().map(|s| s.text.as_str())
    }

    /// All recipients across to, cc, and bcc, in category order.
    #[must_use]
    pub fn all_recipients(&self) -> Vec<&Address> {
        self.to
            .iter()
            .chain(self.cc.iter())
            .chain(self.bcc.iter())
            .collect()
    }

    /// Builds the RFC 5322 formatted message.
    ///
    /// When both body variants are present the result is a
    /// `multipart/alternative` message with the plain part first. Bcc
    /// recipients are intentionally absent from the headers; they travel in
    /// the envelope only.
    #[must_use]
    pub fn to_rfc5322(&self) -> String {
        // Static boundary: bodies are text supplied by our own templates,
        // not arbitrary attachments.
        const BOUNDARY: &str = "=_postroom_alternative";

        let mut message = String::new();
        if let Some(from) = &self.from {
            let _ = write!(message, "From: {from}\r\n");
        }
        if !self.to.is_empty() {
            let _ = write!(message, "To: {}\r\n", join_header(&self.to));
        }
        if !self.cc.is_empty() {
            let _ = write!(message, "Cc: {}\r\n", join_header(&self.cc));
        }
        if let Some(subject) = &self.subject {
            let _ = write!(message, "Subject: {}\r\n", subject.text);
        }
        message.push_str("MIME-Version: 1.0\r\n");

        match (&self.plain, &self.html) {
            (Some(plain), Some(html)) => {
                let _ = write!(
                    message,
                    "Content-Type: multipart/alternative; boundary=\"{BOUNDARY}\"\r\n\r\n"
                );
                push_part(&mut message, BOUNDARY, "text/plain", plain);
                push_part(&mut message, BOUNDARY, "text/html", html);
                let _ = write!(message, "--{BOUNDARY}--\r\n");
            }
            (Some(plain), None) => push_single(&mut message, "text/plain", plain),
            (None, Some(html)) => push_single(&mut message, "text/html", html),
            (None, None) => message.push_str("\r\n"),
        }
        message
    }
}

fn join_header(addresses: &[Address]) -> String {
    addresses
        .iter()
        .map(Address::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

fn push_single(message: &mut String, content_type: &str, body: &EncodedText) {
    let _ = write!(
        message,
        "Content-Type: {content_type}; charset={}\r\nContent-Transfer-Encoding: 8bit\r\n\r\n",
        body.encoding.to_lowercase()
    );
    message.push_str(&body.text);
}

fn push_part(message: &mut String, boundary: &str, content_type: &str, body: &EncodedText) {
    let _ = write!(
        message,
        "--{boundary}\r\nContent-Type: {content_type}; charset={}\r\nContent-Transfer-Encoding: 8bit\r\n\r\n{}\r\n",
        body.encoding.to_lowercase(),
        body.text
    );
}

/// Full rendering used by the training-mode sink and logging strategies.
///
/// Unlike the RFC form, bcc recipients and both bodies are all visible here.
impl std::fmt::Display for PostingMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "from: {}",
            self.from.as_ref().map_or("-", Address::as_str)
        )?;
        writeln!(f, "to: {}", display_list(&self.to))?;
        writeln!(f, "cc: {}", display_list(&self.cc))?;
        writeln!(f, "bcc: {}", display_list(&self.bcc))?;
        writeln!(
            f,
            "subject: {}",
            self.subject.as_ref().map_or("-", |s| s.text.as_str())
        )?;
        if let Some(plain) = &self.plain {
            writeln!(f, ">>> plain body:")?;
            writeln!(f, "{}", plain.text)?;
        }
        if let Some(html) = &self.html {
            writeln!(f, ">>> html body:")?;
            writeln!(f, "{}", html.text)?;
        }
        Ok(())
    }
}

fn display_list(addresses: &[Address]) -> String {
    if addresses.is_empty() {
        "-".to_string()
    } else {
        join_header(addresses)
    }
}
