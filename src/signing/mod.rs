//! AWS3-HTTPS request signing for the SES Query API.
//!
//! The Query API uses the AWS3-HTTPS scheme: the request carries a `Date`
//! header in RFC-1123 GMT form, and an `X-Amzn-Authorization` header whose
//! signature is the base64-encoded HMAC-SHA256 of that exact date string,
//! keyed by the secret access key.
//!
//! The signing process:
//! 1. Capture the current UTC time once
//! 2. Format it as an RFC-1123 GMT date string
//! 3. Compute HMAC-SHA256 over the date string, keyed by the secret key
//! 4. Base64-encode the digest and assemble the authorization header
//!
//! The timestamp must be captured exactly once per request and reused for
//! both the `Date` header and the signature; a skew between the two
//! invalidates the request server-side. [`RequestSigner::sign`] takes the
//! already-captured timestamp to make that property hold by construction.

use crate::credentials::Credentials;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Authorization scheme identifier for the Query API.
pub const AUTH_SCHEME: &str = "AWS3-HTTPS";

/// Signing algorithm identifier carried in the authorization header.
pub const AUTH_ALGORITHM: &str = "HMACSHA256";

/// Format a timestamp as the RFC-1123 GMT date string the API signs.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use integrations_aws_ses_query::signing::format_date;
///
/// let timestamp = Utc.with_ymd_and_hms(2006, 1, 2, 15, 4, 5).unwrap();
/// assert_eq!(format_date(&timestamp), "Mon, 02 Jan 2006 15:04:05 GMT");
/// ```
pub fn format_date(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}

/// Compute the base64-encoded HMAC-SHA256 signature over a date string.
///
/// Identical `(secret_key, date_value)` inputs always yield the identical
/// signature.
///
/// # Arguments
///
/// * `secret_key` - The AWS secret access key
/// * `date_value` - The exact date string sent in the `Date` header
pub fn sign_date(secret_key: &str, date_value: &str) -> String {
    let mut mac =
        HmacSha256::new_from_slice(secret_key.as_bytes()).expect("HMAC can take key of any size");
    mac.update(date_value.as_bytes());
    BASE64.encode(mac.finalize().into_bytes())
}

/// The two signed header values attached to every request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedHeaders {
    /// Value for the `Date` header.
    pub date: String,
    /// Value for the `X-Amzn-Authorization` header.
    pub authorization: String,
}

/// Signs requests with the AWS3-HTTPS scheme.
///
/// # Examples
///
/// ```
/// use chrono::Utc;
/// use integrations_aws_ses_query::signing::RequestSigner;
/// use integrations_aws_ses_query::Credentials;
///
/// let signer = RequestSigner::new(Credentials::new("AKID", "SECRET"));
/// let timestamp = Utc::now();
/// let headers = signer.sign(&timestamp);
///
/// assert!(headers.authorization.starts_with("AWS3-HTTPS AWSAccessKeyId=AKID"));
/// ```
#[derive(Debug, Clone)]
pub struct RequestSigner {
    credentials: Credentials,
}

impl RequestSigner {
    /// Create a new signer over the given credentials.
    pub fn new(credentials: Credentials) -> Self {
        Self { credentials }
    }

    /// Produce the `Date` and `X-Amzn-Authorization` header values for one
    /// request.
    ///
    /// The caller captures the timestamp once and passes it in; both header
    /// values are derived from that single capture.
    pub fn sign(&self, timestamp: &DateTime<Utc>) -> SignedHeaders {
        let date = format_date(timestamp);
        let signature = sign_date(self.credentials.secret_access_key(), &date);
        let authorization = format!(
            "{} AWSAccessKeyId={}, Algorithm={}, Signature={}",
            AUTH_SCHEME,
            self.credentials.access_key_id(),
            AUTH_ALGORITHM,
            signature
        );
        SignedHeaders {
            date,
            authorization,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rstest::rstest;

    #[test]
    fn test_format_date_reference_timestamp() {
        let timestamp = Utc.with_ymd_and_hms(2006, 1, 2, 15, 4, 5).unwrap();
        assert_eq!(format_date(&timestamp), "Mon, 02 Jan 2006 15:04:05 GMT");

        let timestamp = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(format_date(&timestamp), "Mon, 01 Jan 2024 00:00:00 GMT");
    }

    #[test]
    fn test_sign_date_is_deterministic() {
        let first = sign_date("SECRET", "Mon, 02 Jan 2006 15:04:05 GMT");
        let second = sign_date("SECRET", "Mon, 02 Jan 2006 15:04:05 GMT");
        assert_eq!(first, second);
    }

    #[test]
    fn test_sign_date_output_is_base64_of_digest() {
        let signature = sign_date("SECRET", "Mon, 02 Jan 2006 15:04:05 GMT");
        let decoded = BASE64.decode(&signature).unwrap();
        assert_eq!(decoded.len(), 32);
    }

    #[rstest]
    #[case("SECREU", "Mon, 02 Jan 2006 15:04:05 GMT")]
    #[case("SECRET", "Mon, 02 Jan 2006 15:04:06 GMT")]
    #[case("SECRET ", "Mon, 02 Jan 2006 15:04:05 GMT")]
    fn test_sign_date_is_sensitive_to_inputs(#[case] secret: &str, #[case] date: &str) {
        let reference = sign_date("SECRET", "Mon, 02 Jan 2006 15:04:05 GMT");
        assert_ne!(reference, sign_date(secret, date));
    }

    #[test]
    fn test_signed_headers_share_one_timestamp() {
        let signer = RequestSigner::new(Credentials::new("AKID", "SECRET"));
        let timestamp = Utc.with_ymd_and_hms(2011, 8, 18, 12, 0, 0).unwrap();

        let headers = signer.sign(&timestamp);
        assert_eq!(headers.date, "Thu, 18 Aug 2011 12:00:00 GMT");

        let expected_signature = sign_date("SECRET", &headers.date);
        assert_eq!(
            headers.authorization,
            format!(
                "AWS3-HTTPS AWSAccessKeyId=AKID, Algorithm=HMACSHA256, Signature={}",
                expected_signature
            )
        );
    }

    #[test]
    fn test_signing_same_timestamp_twice_is_stable() {
        let signer = RequestSigner::new(Credentials::new("AKID", "SECRET"));
        let timestamp = Utc.with_ymd_and_hms(2011, 8, 18, 12, 0, 0).unwrap();
        assert_eq!(signer.sign(&timestamp), signer.sign(&timestamp));
    }
}
