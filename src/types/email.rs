//! Email message and send-request types.

use crate::http::RequestParameters;
use serde::{Deserialize, Serialize};

/// Recipients for one category: a single address or an ordered list.
///
/// The Query API flattens both cases to 1-based `member.<n>` keys; a single
/// address is a singleton list, never iterated character by character.
///
/// # Examples
///
/// ```
/// use integrations_aws_ses_query::AddressList;
///
/// let one: AddressList = "b@x.com".into();
/// let many: AddressList = vec!["b@x.com".to_string(), "c@x.com".to_string()].into();
///
/// assert_eq!(one.len(), 1);
/// assert_eq!(many.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AddressList {
    /// One address.
    Single(String),
    /// An ordered list of addresses.
    Multiple(Vec<String>),
}

impl AddressList {
    /// Iterate the addresses in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        match self {
            AddressList::Single(address) => std::slice::from_ref(address).iter(),
            AddressList::Multiple(addresses) => addresses.iter(),
        }
        .map(String::as_str)
    }

    /// Number of addresses.
    pub fn len(&self) -> usize {
        match self {
            AddressList::Single(_) => 1,
            AddressList::Multiple(addresses) => addresses.len(),
        }
    }

    /// True if there are no addresses.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<&str> for AddressList {
    fn from(address: &str) -> Self {
        AddressList::Single(address.to_string())
    }
}

impl From<String> for AddressList {
    fn from(address: String) -> Self {
        AddressList::Single(address)
    }
}

impl From<Vec<String>> for AddressList {
    fn from(addresses: Vec<String>) -> Self {
        AddressList::Multiple(addresses)
    }
}

impl From<Vec<&str>> for AddressList {
    fn from(addresses: Vec<&str>) -> Self {
        AddressList::Multiple(addresses.into_iter().map(str::to_string).collect())
    }
}

/// An email message: charset, optional subject, optional bodies.
///
/// At least one of the two bodies should be present for a meaningful send;
/// this is not enforced. The charset defaults to UTF-8 and applies to the
/// subject and both bodies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailMessage {
    /// Character set for subject and bodies.
    pub charset: String,
    /// Message subject.
    pub subject: Option<String>,
    /// HTML body.
    pub body_html: Option<String>,
    /// Plain text body.
    pub body_text: Option<String>,
}

impl EmailMessage {
    /// Create an empty message with the UTF-8 charset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the subject.
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Set the plain text body.
    pub fn with_text(mut self, body_text: impl Into<String>) -> Self {
        self.body_text = Some(body_text.into());
        self
    }

    /// Set the HTML body.
    pub fn with_html(mut self, body_html: impl Into<String>) -> Self {
        self.body_html = Some(body_html.into());
        self
    }

    /// Set a custom charset.
    pub fn with_charset(mut self, charset: impl Into<String>) -> Self {
        self.charset = charset.into();
        self
    }
}

impl Default for EmailMessage {
    fn default() -> Self {
        Self {
            charset: "UTF-8".to_string(),
            subject: None,
            body_html: None,
            body_text: None,
        }
    }
}

/// A fully specified send request.
///
/// Construct directly or through
/// [`EmailBuilder`](crate::builders::EmailBuilder).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendEmailRequest {
    /// Sender address.
    pub source: String,
    /// `To` recipients.
    pub to_addresses: AddressList,
    /// `Cc` recipients.
    pub cc_addresses: Option<AddressList>,
    /// `Bcc` recipients.
    pub bcc_addresses: Option<AddressList>,
    /// Reply-to addresses, in order.
    pub reply_to_addresses: Vec<String>,
    /// Bounce return path. Defaults to `source` when unset.
    pub return_path: Option<String>,
    /// The message to send.
    pub message: EmailMessage,
}

impl SendEmailRequest {
    /// Create a request with the required fields.
    pub fn new(
        source: impl Into<String>,
        to_addresses: impl Into<AddressList>,
        message: EmailMessage,
    ) -> Self {
        Self {
            source: source.into(),
            to_addresses: to_addresses.into(),
            cc_addresses: None,
            bcc_addresses: None,
            reply_to_addresses: Vec::new(),
            return_path: None,
            message,
        }
    }

    /// Flatten the request into Query API parameters.
    ///
    /// Recipient categories emit 1-based `Destination.<Category>.member.<n>`
    /// keys; absent or empty categories emit nothing. `ReturnPath` falls
    /// back to `source`. Subject and body keys are emitted only for the
    /// parts that are actually present; an omitted body kind omits its keys
    /// entirely rather than sending an empty value.
    pub fn to_parameters(&self) -> RequestParameters {
        let mut params = RequestParameters::new();
        params.insert("Source", &self.source);

        for (index, address) in self.reply_to_addresses.iter().enumerate() {
            params.insert(format!("ReplyToAddresses.member.{}", index + 1), address);
        }

        let categories = [
            ("ToAddresses", Some(&self.to_addresses)),
            ("CcAddresses", self.cc_addresses.as_ref()),
            ("BccAddresses", self.bcc_addresses.as_ref()),
        ];
        for (category, addresses) in categories {
            let Some(addresses) = addresses else { continue };
            for (index, address) in addresses.iter().enumerate() {
                params.insert(
                    format!("Destination.{}.member.{}", category, index + 1),
                    address,
                );
            }
        }

        let return_path = self.return_path.as_deref().unwrap_or(&self.source);
        params.insert("ReturnPath", return_path);

        if let Some(subject) = &self.message.subject {
            params.insert("Message.Subject.Charset", &self.message.charset);
            params.insert("Message.Subject.Data", subject);
        }
        if let Some(text) = self.message.body_text.as_deref().filter(|t| !t.is_empty()) {
            params.insert("Message.Body.Text.Charset", &self.message.charset);
            params.insert("Message.Body.Text.Data", text);
        }
        if let Some(html) = self.message.body_html.as_deref().filter(|h| !h.is_empty()) {
            params.insert("Message.Body.Html.Charset", &self.message.charset);
            params.insert("Message.Body.Html.Data", html);
        }

        params
    }
}
