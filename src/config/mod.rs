//! Configuration for the SES Query API client.
//!
//! The configuration covers the region (which determines the endpoint), an
//! optional endpoint override for testing against local mock servers or
//! private deployments, and the HTTP timeouts handed to the underlying
//! client. Credentials are not part of the configuration; they are passed to
//! the client constructor directly.

use std::time::Duration;

/// Default AWS region for the SES Query API endpoint.
pub const DEFAULT_REGION: &str = "us-east-1";

/// Configuration for the SES Query API client.
///
/// # Example
///
/// ```
/// use integrations_aws_ses_query::SesConfig;
///
/// let config = SesConfig::builder()
///     .region("us-west-2")
///     .build();
///
/// assert_eq!(config.endpoint_url(), "https://email.us-west-2.amazonaws.com");
/// ```
#[derive(Debug, Clone)]
pub struct SesConfig {
    /// AWS region (e.g. "us-east-1").
    pub region: String,

    /// Custom endpoint URL, overriding the region-derived one.
    pub endpoint: Option<String>,

    /// Timeout for the entire request.
    pub timeout: Duration,

    /// Timeout for establishing connections.
    pub connect_timeout: Duration,
}

impl Default for SesConfig {
    fn default() -> Self {
        Self {
            region: DEFAULT_REGION.to_string(),
            endpoint: None,
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

impl SesConfig {
    /// Create a new configuration builder.
    pub fn builder() -> SesConfigBuilder {
        SesConfigBuilder::default()
    }

    /// The endpoint URL for this configuration.
    ///
    /// Returns the custom endpoint if one is set, otherwise the standard
    /// SES Query API endpoint for the configured region.
    pub fn endpoint_url(&self) -> String {
        self.endpoint
            .clone()
            .unwrap_or_else(|| format!("https://email.{}.amazonaws.com", self.region))
    }
}

/// Builder for [`SesConfig`].
#[derive(Debug, Default)]
pub struct SesConfigBuilder {
    region: Option<String>,
    endpoint: Option<String>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl SesConfigBuilder {
    /// Set the AWS region.
    ///
    /// # Example
    ///
    /// ```
    /// use integrations_aws_ses_query::SesConfig;
    ///
    /// let config = SesConfig::builder().region("eu-west-1").build();
    /// assert_eq!(config.region, "eu-west-1");
    /// ```
    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Set a custom endpoint URL.
    ///
    /// Useful for pointing the client at a local mock server in tests.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the connection timeout.
    pub fn connect_timeout(mut self, connect_timeout: Duration) -> Self {
        self.connect_timeout = Some(connect_timeout);
        self
    }

    /// Build the configuration, filling unset fields with defaults.
    pub fn build(self) -> SesConfig {
        let defaults = SesConfig::default();
        SesConfig {
            region: self.region.unwrap_or(defaults.region),
            endpoint: self.endpoint,
            timeout: self.timeout.unwrap_or(defaults.timeout),
            connect_timeout: self.connect_timeout.unwrap_or(defaults.connect_timeout),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoint() {
        let config = SesConfig::default();
        assert_eq!(config.region, "us-east-1");
        assert_eq!(config.endpoint_url(), "https://email.us-east-1.amazonaws.com");
    }

    #[test]
    fn test_region_derived_endpoint() {
        let config = SesConfig::builder().region("us-west-2").build();
        assert_eq!(config.endpoint_url(), "https://email.us-west-2.amazonaws.com");
    }

    #[test]
    fn test_endpoint_override() {
        let config = SesConfig::builder()
            .endpoint("http://127.0.0.1:9999")
            .build();
        assert_eq!(config.endpoint_url(), "http://127.0.0.1:9999");
    }

    #[test]
    fn test_builder_timeouts() {
        let config = SesConfig::builder()
            .timeout(Duration::from_secs(5))
            .connect_timeout(Duration::from_secs(2))
            .build();
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.connect_timeout, Duration::from_secs(2));
    }
}
