//! Request parameters for Query API calls.
//!
//! The Query API flattens every request into an ordered set of
//! `(name, value)` string pairs sent as a URL-encoded form body. Insertion
//! order is preserved; indexed keys like `Destination.ToAddresses.member.1`
//! rely on it.

/// Ordered request parameters, flattened to a form body on send.
///
/// # Examples
///
/// ```
/// use integrations_aws_ses_query::RequestParameters;
///
/// let mut params = RequestParameters::new();
/// params.insert("EmailAddress", "user@example.com");
///
/// assert_eq!(params.get("EmailAddress"), Some("user@example.com"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestParameters {
    pairs: Vec<(String, String)>,
}

impl RequestParameters {
    /// Create an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a parameter, preserving insertion order.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.pairs.push((name.into(), value.into()));
    }

    /// The value of the first parameter with the given name, if any.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// The parameters as ordered pairs, ready for form encoding.
    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// Number of parameters.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// True if no parameters have been added.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_order_is_preserved() {
        let mut params = RequestParameters::new();
        params.insert("Source", "a@x.com");
        params.insert("Destination.ToAddresses.member.1", "b@x.com");
        params.insert("Destination.ToAddresses.member.2", "c@x.com");

        let names: Vec<&str> = params.pairs().iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Source",
                "Destination.ToAddresses.member.1",
                "Destination.ToAddresses.member.2",
            ]
        );
    }

    #[test]
    fn test_get_returns_first_match() {
        let mut params = RequestParameters::new();
        params.insert("Action", "SendEmail");
        assert_eq!(params.get("Action"), Some("SendEmail"));
        assert_eq!(params.get("Missing"), None);
    }

    #[test]
    fn test_len_and_is_empty() {
        let mut params = RequestParameters::new();
        assert!(params.is_empty());
        params.insert("EmailAddress", "user@example.com");
        assert_eq!(params.len(), 1);
        assert!(!params.is_empty());
    }
}
