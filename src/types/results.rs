//! Typed results parsed from Query API responses.
//!
//! Every successful response carries a request ID under
//! `ResponseMetadata/RequestId`; the action-specific payload varies. One
//! struct per payload shape, plus [`SesResponse`] tagging them for the
//! generic parse entry point.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Result of an action that returns only a request ID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimpleResult {
    /// Request ID echoed by the service.
    pub request_id: String,
}

/// Result of a `SendEmail` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendEmailResult {
    /// Request ID echoed by the service.
    pub request_id: String,
    /// Message ID assigned to the accepted email.
    pub message_id: String,
}

/// Result of a `GetSendQuota` call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SendQuota {
    /// Request ID echoed by the service.
    pub request_id: String,
    /// Maximum number of emails allowed in a 24-hour window.
    pub max_24_hour_send: f64,
    /// Maximum sending rate, in emails per second.
    pub max_send_rate: f64,
    /// Emails sent during the last 24 hours.
    pub sent_last_24_hours: f64,
}

/// One time-bucketed sending-statistics record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendDataPoint {
    /// Start of the bucket.
    pub timestamp: DateTime<Utc>,
    /// Delivery attempts in the bucket.
    pub delivery_attempts: u64,
    /// Bounces in the bucket.
    pub bounces: u64,
    /// Complaints in the bucket.
    pub complaints: u64,
    /// Rejected sends in the bucket.
    pub rejects: u64,
}

/// Result of a `GetSendStatistics` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendStatistics {
    /// Request ID echoed by the service.
    pub request_id: String,
    /// Data points in document order. May be empty.
    pub data_points: Vec<SendDataPoint>,
}

/// Result of a `ListVerifiedEmailAddresses` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifiedEmails {
    /// Request ID echoed by the service.
    pub request_id: String,
    /// Verified addresses in document order.
    pub addresses: Vec<String>,
}

/// A parsed response, tagged by the action that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SesResponse {
    /// Request ID only.
    Simple(SimpleResult),
    /// Send confirmation with message ID.
    SendEmail(SendEmailResult),
    /// Sending quota.
    SendQuota(SendQuota),
    /// Sending statistics.
    SendStatistics(SendStatistics),
    /// Verified address list.
    VerifiedEmails(VerifiedEmails),
}

impl SesResponse {
    /// The request ID carried by every variant.
    pub fn request_id(&self) -> &str {
        match self {
            SesResponse::Simple(result) => &result.request_id,
            SesResponse::SendEmail(result) => &result.request_id,
            SesResponse::SendQuota(result) => &result.request_id,
            SesResponse::SendStatistics(result) => &result.request_id,
            SesResponse::VerifiedEmails(result) => &result.request_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_request_id_accessor_covers_all_variants() {
        let simple = SesResponse::Simple(SimpleResult {
            request_id: "id-1".to_string(),
        });
        assert_eq!(simple.request_id(), "id-1");

        let send = SesResponse::SendEmail(SendEmailResult {
            request_id: "id-2".to_string(),
            message_id: "msg".to_string(),
        });
        assert_eq!(send.request_id(), "id-2");

        let quota = SesResponse::SendQuota(SendQuota {
            request_id: "id-3".to_string(),
            max_24_hour_send: 200.0,
            max_send_rate: 1.0,
            sent_last_24_hours: 0.0,
        });
        assert_eq!(quota.request_id(), "id-3");

        let statistics = SesResponse::SendStatistics(SendStatistics {
            request_id: "id-4".to_string(),
            data_points: Vec::new(),
        });
        assert_eq!(statistics.request_id(), "id-4");

        let verified = SesResponse::VerifiedEmails(VerifiedEmails {
            request_id: "id-5".to_string(),
            addresses: Vec::new(),
        });
        assert_eq!(verified.request_id(), "id-5");
    }

    #[test]
    fn test_data_point_equality() {
        let timestamp = Utc.with_ymd_and_hms(2011, 8, 1, 12, 0, 0).unwrap();
        let point = SendDataPoint {
            timestamp,
            delivery_attempts: 7,
            bounces: 1,
            complaints: 0,
            rejects: 0,
        };
        assert_eq!(point.clone(), point);
    }
}
