//! HTTP layer for the Query API.
//!
//! This module owns everything between the facade and the wire: the ordered
//! request parameters, the signed blocking transport, and the raw response
//! handed to the parser.

pub mod client;
pub mod request;
pub mod response;

pub use client::SesHttpClient;
pub use request::RequestParameters;
pub use response::RawResponse;
