//! Fluent construction of send requests.
//!
//! [`EmailBuilder`] assembles a [`SendEmailRequest`] step by step. Only the
//! sender is required; recipients are deliberately not validated, matching
//! the permissive behavior of the wire protocol.
//!
//! # Examples
//!
//! ```rust
//! use integrations_aws_ses_query::EmailBuilder;
//!
//! let request = EmailBuilder::new()
//!     .source("sender@example.com")
//!     .to("recipient@example.com")
//!     .cc("copy@example.com")
//!     .subject("Hello")
//!     .text("Plain text body")
//!     .html("<p>HTML body</p>")
//!     .build()?;
//!
//! assert_eq!(request.source, "sender@example.com");
//! # Ok::<(), integrations_aws_ses_query::BuilderError>(())
//! ```

use crate::types::{AddressList, EmailMessage, SendEmailRequest};
use thiserror::Error;

/// Errors from request builders.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuilderError {
    /// A required field was not set before `build()`.
    #[error("missing required field: {field}")]
    MissingField {
        /// Name of the missing field.
        field: &'static str,
    },
}

/// Builder for [`SendEmailRequest`].
#[derive(Debug, Clone, Default)]
pub struct EmailBuilder {
    source: Option<String>,
    to: Vec<String>,
    cc: Vec<String>,
    bcc: Vec<String>,
    reply_to: Vec<String>,
    return_path: Option<String>,
    subject: Option<String>,
    text: Option<String>,
    html: Option<String>,
    charset: Option<String>,
}

impl EmailBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the sender address. Required.
    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Add a `To` recipient. May be called repeatedly.
    pub fn to(mut self, address: impl Into<String>) -> Self {
        self.to.push(address.into());
        self
    }

    /// Add a `Cc` recipient. May be called repeatedly.
    pub fn cc(mut self, address: impl Into<String>) -> Self {
        self.cc.push(address.into());
        self
    }

    /// Add a `Bcc` recipient. May be called repeatedly.
    pub fn bcc(mut self, address: impl Into<String>) -> Self {
        self.bcc.push(address.into());
        self
    }

    /// Add a reply-to address. May be called repeatedly.
    pub fn reply_to(mut self, address: impl Into<String>) -> Self {
        self.reply_to.push(address.into());
        self
    }

    /// Set the bounce return path. Defaults to the source when unset.
    pub fn return_path(mut self, return_path: impl Into<String>) -> Self {
        self.return_path = Some(return_path.into());
        self
    }

    /// Set the subject.
    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Set the plain text body.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Set the HTML body.
    pub fn html(mut self, html: impl Into<String>) -> Self {
        self.html = Some(html.into());
        self
    }

    /// Set a custom charset. Defaults to UTF-8.
    pub fn charset(mut self, charset: impl Into<String>) -> Self {
        self.charset = Some(charset.into());
        self
    }

    /// Build the request.
    ///
    /// # Errors
    ///
    /// Returns [`BuilderError::MissingField`] if the source was not set.
    pub fn build(self) -> Result<SendEmailRequest, BuilderError> {
        let source = self.source.ok_or(BuilderError::MissingField { field: "source" })?;

        let mut message = EmailMessage::new();
        if let Some(charset) = self.charset {
            message.charset = charset;
        }
        message.subject = self.subject;
        message.body_text = self.text;
        message.body_html = self.html;

        Ok(SendEmailRequest {
            source,
            to_addresses: AddressList::Multiple(self.to),
            cc_addresses: if self.cc.is_empty() {
                None
            } else {
                Some(AddressList::Multiple(self.cc))
            },
            bcc_addresses: if self.bcc.is_empty() {
                None
            } else {
                Some(AddressList::Multiple(self.bcc))
            },
            reply_to_addresses: self.reply_to,
            return_path: self.return_path,
            message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_full_request() {
        let request = EmailBuilder::new()
            .source("a@x.com")
            .to("b@x.com")
            .to("c@x.com")
            .cc("cc@x.com")
            .bcc("bcc@x.com")
            .reply_to("reply@x.com")
            .return_path("bounce@x.com")
            .subject("Hi")
            .text("Hello")
            .html("<p>Hello</p>")
            .charset("ISO-8859-1")
            .build()
            .unwrap();

        assert_eq!(request.source, "a@x.com");
        assert_eq!(request.to_addresses, vec!["b@x.com", "c@x.com"].into());
        assert_eq!(request.cc_addresses, Some(vec!["cc@x.com"].into()));
        assert_eq!(request.bcc_addresses, Some(vec!["bcc@x.com"].into()));
        assert_eq!(request.reply_to_addresses, vec!["reply@x.com"]);
        assert_eq!(request.return_path.as_deref(), Some("bounce@x.com"));
        assert_eq!(request.message.charset, "ISO-8859-1");
        assert_eq!(request.message.subject.as_deref(), Some("Hi"));
        assert_eq!(request.message.body_text.as_deref(), Some("Hello"));
        assert_eq!(request.message.body_html.as_deref(), Some("<p>Hello</p>"));
    }

    #[test]
    fn test_missing_source_fails() {
        let error = EmailBuilder::new().to("b@x.com").build().unwrap_err();
        assert_eq!(error, BuilderError::MissingField { field: "source" });
    }

    #[test]
    fn test_recipients_are_not_required() {
        let request = EmailBuilder::new().source("a@x.com").build().unwrap();
        assert!(request.to_addresses.is_empty());
        assert!(request.cc_addresses.is_none());
        assert!(request.bcc_addresses.is_none());
    }

    #[test]
    fn test_defaults() {
        let request = EmailBuilder::new().source("a@x.com").build().unwrap();
        assert_eq!(request.message.charset, "UTF-8");
        assert!(request.return_path.is_none());
        assert!(request.reply_to_addresses.is_empty());
    }
}
