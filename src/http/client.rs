//! HTTP transport for the Query API.
//!
//! One call, one signed POST, one connection. The transport owns the
//! blocking HTTP client and the request signer; it never retries and never
//! interprets the response beyond reading it.

use crate::config::SesConfig;
use crate::credentials::Credentials;
use crate::error::{SesError, SesResult};
use crate::http::{RawResponse, RequestParameters};
use crate::signing::RequestSigner;
use crate::types::Action;
use chrono::Utc;
use reqwest::header;
use tracing::debug;
use url::Url;

/// Blocking HTTP client issuing signed Query API requests.
#[derive(Debug)]
pub struct SesHttpClient {
    http: reqwest::blocking::Client,
    endpoint: Url,
    signer: RequestSigner,
}

impl SesHttpClient {
    /// Create a new transport from a configuration and credentials.
    ///
    /// # Errors
    ///
    /// Returns [`SesError::Configuration`] if the endpoint URL is invalid,
    /// or [`SesError::Transport`] if the underlying HTTP client cannot be
    /// built.
    pub fn new(config: &SesConfig, credentials: Credentials) -> SesResult<Self> {
        let endpoint =
            Url::parse(&config.endpoint_url()).map_err(|e| SesError::Configuration {
                message: format!("invalid endpoint URL {:?}: {}", config.endpoint_url(), e),
            })?;

        // Idle connections are not kept: every call opens and closes its own.
        let http = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .pool_max_idle_per_host(0)
            .build()?;

        Ok(Self {
            http,
            endpoint,
            signer: RequestSigner::new(credentials),
        })
    }

    /// Issue one signed POST for the given action and parameters.
    ///
    /// Adds `Action=<name>` to the parameter set, signs the request, and
    /// performs a single blocking round trip. Network and TLS failures
    /// propagate unmodified as [`SesError::Transport`].
    pub fn perform_action(
        &self,
        action: Action,
        mut params: RequestParameters,
    ) -> SesResult<RawResponse> {
        params.insert("Action", action.name());

        // Captured once; both the Date header and the signature derive from it.
        let timestamp = Utc::now();
        let signed = self.signer.sign(&timestamp);

        debug!(action = action.name(), endpoint = %self.endpoint, "issuing request");

        let response = self
            .http
            .post(self.endpoint.clone())
            .header(header::DATE, &signed.date)
            .header("X-Amzn-Authorization", &signed.authorization)
            .form(params.pairs())
            .send()?;

        RawResponse::from_reqwest(response)
    }
}
