//! Request and result types for the Query API.

pub mod action;
pub mod email;
pub mod results;

pub use action::Action;
pub use email::{AddressList, EmailMessage, SendEmailRequest};
pub use results::{
    SendDataPoint, SendEmailResult, SendQuota, SendStatistics, SesResponse, SimpleResult,
    VerifiedEmails,
};
