//! Error types for the SES Query API client.
//!
//! The error taxonomy keeps the three failure sources distinct so callers can
//! tell "the network broke" from "the service rejected this" from "our
//! parser assumptions broke":
//!
//! - [`SesError::Transport`]: a network or TLS failure below the HTTP layer.
//!   The underlying [`reqwest::Error`] is carried unmodified.
//! - [`SesError::Service`]: the remote call reported a non-success status
//!   with a well-formed `ErrorResponse` body. Carries the type, code, and
//!   message extracted from that body.
//! - [`SesError::Protocol`]: the response body did not have the shape the
//!   requested action expects (malformed XML, root tag mismatch, missing
//!   node, unsupported action name).
//!
//! Nothing here is retried. Every failure is raised to the immediate caller
//! of the facade method that triggered it.
//!
//! # Examples
//!
//! ```rust
//! use integrations_aws_ses_query::SesError;
//!
//! fn describe(error: &SesError) -> &'static str {
//!     if error.is_service() {
//!         "rejected by the service"
//!     } else if error.is_protocol() {
//!         "unexpected response shape"
//!     } else {
//!         "local or network failure"
//!     }
//! }
//! ```

use thiserror::Error;

/// Top-level error type for SES Query API operations.
#[derive(Debug, Error)]
pub enum SesError {
    /// Network or TLS failure below the HTTP layer.
    ///
    /// The original [`reqwest::Error`] is the source and is not translated;
    /// inspect it for timeout/connect details.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service rejected the request and returned an `ErrorResponse`.
    ///
    /// All three fields are extracted verbatim from the response body.
    #[error("service error {code} ({error_type}): {message}")]
    Service {
        /// Error type reported by the service (e.g. `Sender`).
        error_type: String,
        /// Error code reported by the service (e.g. `ValidationError`).
        code: String,
        /// Human-readable message reported by the service.
        message: String,
    },

    /// The response did not match the shape the requested action expects.
    ///
    /// This indicates a contract violation between client and service, or a
    /// caller passing an unrecognized action name. It is never a remote
    /// fault and never worth retrying.
    #[error("protocol error: {message}")]
    Protocol {
        /// Description of the violated expectation.
        message: String,
    },

    /// The client was constructed with an invalid configuration.
    ///
    /// Raised at construction time only, never on the call path.
    #[error("configuration error: {message}")]
    Configuration {
        /// Description of the configuration problem.
        message: String,
    },
}

impl SesError {
    /// Shorthand for a [`SesError::Protocol`] with the given message.
    pub(crate) fn protocol(message: impl Into<String>) -> Self {
        SesError::Protocol {
            message: message.into(),
        }
    }

    /// Returns true if the service rejected the request.
    pub fn is_service(&self) -> bool {
        matches!(self, SesError::Service { .. })
    }

    /// Returns true if the response shape violated the client's expectations.
    pub fn is_protocol(&self) -> bool {
        matches!(self, SesError::Protocol { .. })
    }

    /// Returns the service error code, if this is a service error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use integrations_aws_ses_query::SesError;
    ///
    /// let error = SesError::Service {
    ///     error_type: "Sender".to_string(),
    ///     code: "ValidationError".to_string(),
    ///     message: "Bad email".to_string(),
    /// };
    /// assert_eq!(error.error_code(), Some("ValidationError"));
    /// ```
    pub fn error_code(&self) -> Option<&str> {
        match self {
            SesError::Service { code, .. } => Some(code.as_str()),
            _ => None,
        }
    }
}

/// Result type alias for SES Query API operations.
pub type SesResult<T> = std::result::Result<T, SesError>;
