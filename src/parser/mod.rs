//! Response parsing for the Query API.
//!
//! The parser is a state-free dispatcher keyed by [`Action`]. Every entry
//! point follows the same pipeline:
//!
//! 1. Build the [`XmlResponse`] model from the raw body (malformed XML is a
//!    protocol error).
//! 2. Log the status and reason at info level and the raw body at debug
//!    level. Logging never alters control flow.
//! 3. On a non-success status, parse the body as an `ErrorResponse` and
//!    return the service error. This takes priority over action dispatch.
//! 4. Otherwise check that the root tag matches `<Action>Response` and
//!    extract the request ID plus the action-specific fields.
//!
//! The typed entry points (`parse_send_email_response` and friends) let the
//! facade return concrete result types; [`parse_response`] dispatches over
//! the action for generic callers.

use crate::error::{SesError, SesResult};
use crate::http::RawResponse;
use crate::types::{
    Action, SendDataPoint, SendEmailResult, SendQuota, SendStatistics, SesResponse, SimpleResult,
    VerifiedEmails,
};
use crate::xml::{XmlElement, XmlResponse};
use chrono::NaiveDateTime;
use std::str::FromStr;
use tracing::{debug, info};

/// Timestamp format used by send-statistics data points.
const DATA_POINT_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Parse a raw response for the given action into a tagged result.
///
/// # Errors
///
/// - [`SesError::Service`] for a non-success status with a well-formed
///   `ErrorResponse` body.
/// - [`SesError::Protocol`] for malformed XML, a root tag that does not
///   match the action, or missing/invalid fields.
pub fn parse_response(action: Action, response: &RawResponse) -> SesResult<SesResponse> {
    let document = open_document(response)?;
    match action {
        Action::VerifyEmailAddress | Action::DeleteVerifiedEmailAddress => {
            simple_result(action, &document).map(SesResponse::Simple)
        }
        Action::SendEmail => send_email_result(&document).map(SesResponse::SendEmail),
        Action::GetSendQuota => send_quota(&document).map(SesResponse::SendQuota),
        Action::GetSendStatistics => send_statistics(&document).map(SesResponse::SendStatistics),
        Action::ListVerifiedEmailAddresses => {
            verified_emails(&document).map(SesResponse::VerifiedEmails)
        }
    }
}

/// Parse a response for an action that returns only a request ID.
pub fn parse_simple_response(action: Action, response: &RawResponse) -> SesResult<SimpleResult> {
    let document = open_document(response)?;
    simple_result(action, &document)
}

/// Parse a `SendEmail` response.
pub fn parse_send_email_response(response: &RawResponse) -> SesResult<SendEmailResult> {
    let document = open_document(response)?;
    send_email_result(&document)
}

/// Parse a `GetSendQuota` response.
pub fn parse_send_quota_response(response: &RawResponse) -> SesResult<SendQuota> {
    let document = open_document(response)?;
    send_quota(&document)
}

/// Parse a `GetSendStatistics` response.
pub fn parse_send_statistics_response(response: &RawResponse) -> SesResult<SendStatistics> {
    let document = open_document(response)?;
    send_statistics(&document)
}

/// Parse a `ListVerifiedEmailAddresses` response.
pub fn parse_verified_emails_response(response: &RawResponse) -> SesResult<VerifiedEmails> {
    let document = open_document(response)?;
    verified_emails(&document)
}

/// Build the document model, log the response, and reject error statuses.
fn open_document(response: &RawResponse) -> SesResult<XmlResponse> {
    let document = XmlResponse::parse(response.body())?;
    info!(
        status = response.status().as_u16(),
        reason = response.reason(),
        "response received"
    );
    debug!(body = response.body(), "response body");

    if response.is_success() {
        Ok(document)
    } else {
        Err(remote_error(&document))
    }
}

/// Extract the service error from an `ErrorResponse` document.
///
/// A malformed error document yields the protocol error from the failed
/// lookup instead.
fn remote_error(document: &XmlResponse) -> SesError {
    let extracted = document
        .check_response_name("ErrorResponse")
        .and_then(|_| {
            Ok(SesError::Service {
                error_type: document.child_text(&["Error", "Type"])?.to_string(),
                code: document.child_text(&["Error", "Code"])?.to_string(),
                message: document.child_text(&["Error", "Message"])?.to_string(),
            })
        });
    extracted.unwrap_or_else(|protocol| protocol)
}

fn request_id(document: &XmlResponse) -> SesResult<String> {
    Ok(document
        .child_text(&["ResponseMetadata", "RequestId"])?
        .to_string())
}

fn simple_result(action: Action, document: &XmlResponse) -> SesResult<SimpleResult> {
    document.check_action_name(action.name())?;
    Ok(SimpleResult {
        request_id: request_id(document)?,
    })
}

fn send_email_result(document: &XmlResponse) -> SesResult<SendEmailResult> {
    document.check_action_name(Action::SendEmail.name())?;
    Ok(SendEmailResult {
        request_id: request_id(document)?,
        message_id: document
            .child_text(&["SendEmailResult", "MessageId"])?
            .to_string(),
    })
}

fn send_quota(document: &XmlResponse) -> SesResult<SendQuota> {
    document.check_action_name(Action::GetSendQuota.name())?;
    Ok(SendQuota {
        request_id: request_id(document)?,
        max_24_hour_send: numeric_field(
            document.child_text(&["GetSendQuotaResult", "Max24HourSend"])?,
            "Max24HourSend",
        )?,
        max_send_rate: numeric_field(
            document.child_text(&["GetSendQuotaResult", "MaxSendRate"])?,
            "MaxSendRate",
        )?,
        sent_last_24_hours: numeric_field(
            document.child_text(&["GetSendQuotaResult", "SentLast24Hours"])?,
            "SentLast24Hours",
        )?,
    })
}

fn send_statistics(document: &XmlResponse) -> SesResult<SendStatistics> {
    document.check_action_name(Action::GetSendStatistics.name())?;
    let request_id = request_id(document)?;
    let members = document.child(&["GetSendStatisticsResult", "SendDataPoints"])?;

    let mut data_points = Vec::with_capacity(members.children().len());
    for member in members.children() {
        data_points.push(data_point(document, member)?);
    }

    Ok(SendStatistics {
        request_id,
        data_points,
    })
}

fn data_point(document: &XmlResponse, member: &XmlElement) -> SesResult<SendDataPoint> {
    let raw_timestamp = document.child_text_from(member, &["Timestamp"])?;
    let timestamp = NaiveDateTime::parse_from_str(raw_timestamp, DATA_POINT_TIME_FORMAT)
        .map_err(|_| {
            SesError::protocol(format!("data point timestamp is invalid: {}", raw_timestamp))
        })?
        .and_utc();

    Ok(SendDataPoint {
        timestamp,
        delivery_attempts: numeric_field(
            document.child_text_from(member, &["DeliveryAttempts"])?,
            "DeliveryAttempts",
        )?,
        bounces: numeric_field(
            document.child_text_from(member, &["Bounces"])?,
            "Bounces",
        )?,
        complaints: numeric_field(
            document.child_text_from(member, &["Complaints"])?,
            "Complaints",
        )?,
        rejects: numeric_field(
            document.child_text_from(member, &["Rejects"])?,
            "Rejects",
        )?,
    })
}

fn verified_emails(document: &XmlResponse) -> SesResult<VerifiedEmails> {
    document.check_action_name(Action::ListVerifiedEmailAddresses.name())?;
    let request_id = request_id(document)?;
    let node = document.child(&["ListVerifiedEmailAddressesResult", "VerifiedEmailAddresses"])?;
    let addresses = node
        .children()
        .iter()
        .map(|child| child.text().to_string())
        .collect();

    Ok(VerifiedEmails {
        request_id,
        addresses,
    })
}

fn numeric_field<T: FromStr>(text: &str, field: &str) -> SesResult<T> {
    text.parse().map_err(|_| {
        SesError::protocol(format!("field {} is not a valid number: {:?}", field, text))
    })
}
