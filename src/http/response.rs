//! Raw HTTP responses from the Query API.
//!
//! The transport hands the parser exactly three things: the status code, the
//! reason phrase, and the raw body. Everything else about the response is
//! irrelevant to this protocol.

use crate::error::SesResult;
use reqwest::StatusCode;

/// A raw response as returned by the transport, before any parsing.
#[derive(Debug, Clone)]
pub struct RawResponse {
    /// HTTP status code.
    status: StatusCode,

    /// Reason phrase for the status.
    reason: String,

    /// Raw response body.
    body: String,
}

impl RawResponse {
    /// Create a raw response from its parts.
    pub fn new(status: StatusCode, reason: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            status,
            reason: reason.into(),
            body: body.into(),
        }
    }

    /// Consume a blocking reqwest response into a raw response.
    ///
    /// Reading the body is the last point at which the transport can fail;
    /// that failure propagates as a transport error.
    pub(crate) fn from_reqwest(response: reqwest::blocking::Response) -> SesResult<Self> {
        let status = response.status();
        let reason = status.canonical_reason().unwrap_or_default().to_string();
        let body = response.text()?;
        Ok(Self {
            status,
            reason,
            body,
        })
    }

    /// HTTP status code.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Reason phrase for the status.
    pub fn reason(&self) -> &str {
        &self.reason
    }

    /// Raw response body.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// True if the status code is 200 OK.
    pub fn is_success(&self) -> bool {
        self.status == StatusCode::OK
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_is_exactly_200() {
        let ok = RawResponse::new(StatusCode::OK, "OK", "<xml/>");
        assert!(ok.is_success());

        let created = RawResponse::new(StatusCode::CREATED, "Created", "<xml/>");
        assert!(!created.is_success());

        let bad = RawResponse::new(StatusCode::BAD_REQUEST, "Bad Request", "<xml/>");
        assert!(!bad.is_success());
    }

    #[test]
    fn test_accessors() {
        let response = RawResponse::new(StatusCode::BAD_REQUEST, "Bad Request", "body");
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(response.reason(), "Bad Request");
        assert_eq!(response.body(), "body");
    }
}
