//! SES Query API client facade.
//!
//! [`SesClient`] exposes one method per supported action. Each method builds
//! the parameter set for its action, hands it to the transport for one
//! signed round trip, and runs the response through the parser to a typed
//! result. There is no shared mutable state across calls and no connection
//! reuse, so one client can be shared freely across threads.
//!
//! # Example
//!
//! ```rust,no_run
//! use integrations_aws_ses_query::{Credentials, EmailBuilder, SesClient};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = SesClient::new(Credentials::new("AKID", "SECRET"))?;
//!
//!     let request = EmailBuilder::new()
//!         .source("sender@example.com")
//!         .to("recipient@example.com")
//!         .subject("Hello")
//!         .text("Hello from the Query API")
//!         .build()?;
//!
//!     let result = client.send_email(request)?;
//!     println!("message id: {}", result.message_id);
//!     Ok(())
//! }
//! ```

use crate::config::SesConfig;
use crate::credentials::Credentials;
use crate::error::SesResult;
use crate::http::{RequestParameters, SesHttpClient};
use crate::parser;
use crate::types::{
    Action, SendEmailRequest, SendEmailResult, SendQuota, SendStatistics, SimpleResult,
    VerifiedEmails,
};

/// Client for the SES Query API.
///
/// Construct once with credentials and reuse across calls. Every method
/// performs exactly one blocking network round trip and returns either a
/// typed result or a single error from the taxonomy in
/// [`SesError`](crate::SesError).
#[derive(Debug)]
pub struct SesClient {
    http: SesHttpClient,
}

impl SesClient {
    /// Create a client with the default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(credentials: Credentials) -> SesResult<Self> {
        Self::with_config(credentials, SesConfig::default())
    }

    /// Create a client with a custom configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SesError::Configuration`](crate::SesError::Configuration)
    /// for an invalid endpoint, or a transport error if the HTTP client
    /// cannot be built.
    pub fn with_config(credentials: Credentials, config: SesConfig) -> SesResult<Self> {
        Ok(Self {
            http: SesHttpClient::new(&config, credentials)?,
        })
    }

    /// Request a verification email for the given address.
    pub fn verify_email_address(&self, email_address: &str) -> SesResult<SimpleResult> {
        let params = email_address_params(email_address);
        let response = self.http.perform_action(Action::VerifyEmailAddress, params)?;
        parser::parse_simple_response(Action::VerifyEmailAddress, &response)
    }

    /// Remove the given address from the verified list.
    pub fn delete_verified_email_address(&self, email_address: &str) -> SesResult<SimpleResult> {
        let params = email_address_params(email_address);
        let response = self
            .http
            .perform_action(Action::DeleteVerifiedEmailAddress, params)?;
        parser::parse_simple_response(Action::DeleteVerifiedEmailAddress, &response)
    }

    /// Fetch the account's sending quota.
    pub fn get_send_quota(&self) -> SesResult<SendQuota> {
        let response = self
            .http
            .perform_action(Action::GetSendQuota, RequestParameters::new())?;
        parser::parse_send_quota_response(&response)
    }

    /// Fetch the account's sending statistics.
    ///
    /// An account with no sending history yields an empty data point list.
    pub fn get_send_statistics(&self) -> SesResult<SendStatistics> {
        let response = self
            .http
            .perform_action(Action::GetSendStatistics, RequestParameters::new())?;
        parser::parse_send_statistics_response(&response)
    }

    /// List the account's verified email addresses.
    pub fn list_verified_email_addresses(&self) -> SesResult<VerifiedEmails> {
        let response = self
            .http
            .perform_action(Action::ListVerifiedEmailAddresses, RequestParameters::new())?;
        parser::parse_verified_emails_response(&response)
    }

    /// Send an email.
    ///
    /// See [`SendEmailRequest::to_parameters`] for how the request is
    /// flattened onto the wire.
    pub fn send_email(&self, request: SendEmailRequest) -> SesResult<SendEmailResult> {
        let params = request.to_parameters();
        let response = self.http.perform_action(Action::SendEmail, params)?;
        parser::parse_send_email_response(&response)
    }
}

fn email_address_params(email_address: &str) -> RequestParameters {
    let mut params = RequestParameters::new();
    params.insert("EmailAddress", email_address);
    params
}
