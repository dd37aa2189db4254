//! Actions supported by the Query API.

use crate::error::{SesError, SesResult};
use std::fmt;
use std::str::FromStr;

/// A remote operation, identifying both the request shape and the expected
/// response root tag (`<Action>Response`).
///
/// The set is closed: every supported action appears here, and request
/// building and response parsing are matched exhaustively against it. The
/// string boundary lives in [`Action::from_name`], which rejects unknown
/// names as protocol errors so caller mistakes stay distinguishable from
/// remote faults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Request a verification mail for an address.
    VerifyEmailAddress,
    /// Remove an address from the verified list.
    DeleteVerifiedEmailAddress,
    /// Fetch the sending quota.
    GetSendQuota,
    /// Fetch time-bucketed sending statistics.
    GetSendStatistics,
    /// List the verified addresses.
    ListVerifiedEmailAddresses,
    /// Send an email.
    SendEmail,
}

impl Action {
    /// The wire name of the action, as sent in the `Action` parameter.
    pub fn name(&self) -> &'static str {
        match self {
            Action::VerifyEmailAddress => "VerifyEmailAddress",
            Action::DeleteVerifiedEmailAddress => "DeleteVerifiedEmailAddress",
            Action::GetSendQuota => "GetSendQuota",
            Action::GetSendStatistics => "GetSendStatistics",
            Action::ListVerifiedEmailAddresses => "ListVerifiedEmailAddresses",
            Action::SendEmail => "SendEmail",
        }
    }

    /// Resolve a wire name to an action.
    ///
    /// # Errors
    ///
    /// Returns [`SesError::Protocol`] naming the action if it is not in the
    /// supported set.
    ///
    /// # Examples
    ///
    /// ```
    /// use integrations_aws_ses_query::Action;
    ///
    /// assert_eq!(Action::from_name("SendEmail").unwrap(), Action::SendEmail);
    /// assert!(Action::from_name("SendPigeon").is_err());
    /// ```
    pub fn from_name(name: &str) -> SesResult<Self> {
        match name {
            "VerifyEmailAddress" => Ok(Action::VerifyEmailAddress),
            "DeleteVerifiedEmailAddress" => Ok(Action::DeleteVerifiedEmailAddress),
            "GetSendQuota" => Ok(Action::GetSendQuota),
            "GetSendStatistics" => Ok(Action::GetSendStatistics),
            "ListVerifiedEmailAddresses" => Ok(Action::ListVerifiedEmailAddresses),
            "SendEmail" => Ok(Action::SendEmail),
            _ => Err(SesError::protocol(format!(
                "action {} is not supported",
                name
            ))),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Action {
    type Err = SesError;

    fn from_str(s: &str) -> SesResult<Self> {
        Action::from_name(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Action::VerifyEmailAddress, "VerifyEmailAddress")]
    #[case(Action::DeleteVerifiedEmailAddress, "DeleteVerifiedEmailAddress")]
    #[case(Action::GetSendQuota, "GetSendQuota")]
    #[case(Action::GetSendStatistics, "GetSendStatistics")]
    #[case(Action::ListVerifiedEmailAddresses, "ListVerifiedEmailAddresses")]
    #[case(Action::SendEmail, "SendEmail")]
    fn test_name_round_trips(#[case] action: Action, #[case] name: &str) {
        assert_eq!(action.name(), name);
        assert_eq!(Action::from_name(name).unwrap(), action);
        assert_eq!(name.parse::<Action>().unwrap(), action);
    }

    #[test]
    fn test_unknown_name_is_a_protocol_error() {
        let error = Action::from_name("Frobnicate").unwrap_err();
        assert!(error.is_protocol());
        assert_eq!(
            error.to_string(),
            "protocol error: action Frobnicate is not supported"
        );
    }

    #[test]
    fn test_display_uses_wire_name() {
        assert_eq!(Action::SendEmail.to_string(), "SendEmail");
    }
}
