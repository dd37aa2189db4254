//! XML response model for the Query API.
//!
//! Every Query API response is a single XML document carrying one default
//! namespace on its root element. This module parses such a document into a
//! small element tree and exposes the namespace-aware lookups the response
//! parser needs: root-tag checks and path-based child resolution.
//!
//! Lookups never return an absent value silently. A missing node, a root tag
//! that does not match the expected name, and a namespaced lookup against a
//! document that carries no namespace are all protocol errors. An element
//! with empty text is not an error; empty text and "node absent" are
//! distinct conditions.

use crate::error::{SesError, SesResult};
use quick_xml::events::Event;
use quick_xml::name::{Namespace, ResolveResult};
use quick_xml::NsReader;

/// One element in a parsed response document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlElement {
    name: String,
    namespace: Option<String>,
    text: String,
    children: Vec<XmlElement>,
}

impl XmlElement {
    /// Local (unqualified) element name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Resolved namespace URI of this element, if any.
    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    /// Direct text content of this element. May be empty.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Immediate child elements, in document order.
    pub fn children(&self) -> &[XmlElement] {
        &self.children
    }

    fn matches(&self, namespace: &str, name: &str) -> bool {
        self.namespace.as_deref() == Some(namespace) && self.name == name
    }
}

/// A parsed response document with its root-derived default namespace.
///
/// # Examples
///
/// ```
/// use integrations_aws_ses_query::xml::XmlResponse;
///
/// let body = r#"<GetSendQuotaResponse xmlns="http://ses.amazonaws.com/doc/2010-12-01/">
///   <GetSendQuotaResult><MaxSendRate>1.0</MaxSendRate></GetSendQuotaResult>
/// </GetSendQuotaResponse>"#;
///
/// let document = XmlResponse::parse(body)?;
/// assert_eq!(document.child_text(&["GetSendQuotaResult", "MaxSendRate"])?, "1.0");
/// # Ok::<(), integrations_aws_ses_query::SesError>(())
/// ```
#[derive(Debug, Clone)]
pub struct XmlResponse {
    root: XmlElement,
    namespace: Option<String>,
}

impl XmlResponse {
    /// Parse a raw response body into a document model.
    ///
    /// The default namespace is resolved from the root element. A document
    /// without a namespace still parses; only namespaced lookups against it
    /// fail later.
    ///
    /// # Errors
    ///
    /// Returns [`SesError::Protocol`] if the body is not well-formed XML or
    /// contains no root element.
    pub fn parse(body: &str) -> SesResult<Self> {
        let mut reader = NsReader::from_str(body);
        reader.config_mut().trim_text(true);

        let mut stack: Vec<XmlElement> = Vec::new();
        let mut root: Option<XmlElement> = None;

        loop {
            match reader.read_resolved_event() {
                Ok((resolution, Event::Start(start))) => {
                    stack.push(XmlElement {
                        name: String::from_utf8_lossy(start.local_name().as_ref()).into_owned(),
                        namespace: resolved_namespace(&resolution),
                        text: String::new(),
                        children: Vec::new(),
                    });
                }
                Ok((resolution, Event::Empty(start))) => {
                    let element = XmlElement {
                        name: String::from_utf8_lossy(start.local_name().as_ref()).into_owned(),
                        namespace: resolved_namespace(&resolution),
                        text: String::new(),
                        children: Vec::new(),
                    };
                    attach(&mut stack, &mut root, element);
                }
                Ok((_, Event::Text(text))) => {
                    let text = text.unescape().map_err(|e| {
                        SesError::protocol(format!("malformed XML response: {}", e))
                    })?;
                    if let Some(current) = stack.last_mut() {
                        current.text.push_str(&text);
                    }
                }
                Ok((_, Event::CData(data))) => {
                    if let Some(current) = stack.last_mut() {
                        current
                            .text
                            .push_str(&String::from_utf8_lossy(&data.into_inner()));
                    }
                }
                Ok((_, Event::End(_))) => {
                    if let Some(element) = stack.pop() {
                        attach(&mut stack, &mut root, element);
                    }
                }
                Ok((_, Event::Eof)) => break,
                Ok(_) => {}
                Err(e) => {
                    return Err(SesError::protocol(format!("malformed XML response: {}", e)));
                }
            }
        }

        if !stack.is_empty() {
            return Err(SesError::protocol("unexpected end of XML response"));
        }
        let root = root.ok_or_else(|| SesError::protocol("response has no root element"))?;
        let namespace = root.namespace.clone();

        Ok(Self { root, namespace })
    }

    /// The document's default namespace, resolved from the root element.
    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    /// The root element.
    pub fn root(&self) -> &XmlElement {
        &self.root
    }

    /// Check that the root tag is the document namespace qualified with
    /// `name`.
    ///
    /// # Errors
    ///
    /// Returns [`SesError::Protocol`] if the root tag does not match, or if
    /// the document carries no namespace to qualify with.
    pub fn check_response_name(&self, name: &str) -> SesResult<()> {
        let namespace = self.require_namespace()?;
        if self.root.matches(namespace, name) {
            Ok(())
        } else {
            Err(SesError::protocol(format!("{} is invalid", name)))
        }
    }

    /// Check that the root tag is the document namespace qualified with
    /// `<action>Response`.
    ///
    /// # Errors
    ///
    /// Returns [`SesError::Protocol`] naming the action if the root tag does
    /// not match.
    pub fn check_action_name(&self, action: &str) -> SesResult<()> {
        let expected = format!("{}Response", action);
        let namespace = self.require_namespace()?;
        if self.root.matches(namespace, &expected) {
            Ok(())
        } else {
            Err(SesError::protocol(format!(
                "response for action {:?} is invalid",
                action
            )))
        }
    }

    /// Resolve a path of namespace-qualified tag names from the root.
    ///
    /// Each path segment matches the first child (depth-first, with
    /// backtracking across siblings) whose namespace-qualified name matches.
    ///
    /// # Errors
    ///
    /// Returns [`SesError::Protocol`] if no node matches the path.
    pub fn child(&self, path: &[&str]) -> SesResult<&XmlElement> {
        self.child_from(&self.root, path)
    }

    /// Resolve a path of namespace-qualified tag names from a given node.
    pub fn child_from<'a>(
        &'a self,
        node: &'a XmlElement,
        path: &[&str],
    ) -> SesResult<&'a XmlElement> {
        let namespace = self.require_namespace()?;
        find_path(node, namespace, path)
            .ok_or_else(|| SesError::protocol("node with the specified path was not found"))
    }

    /// Direct text content of the node at the given path from the root.
    ///
    /// The text may be empty; only an absent node is an error.
    pub fn child_text(&self, path: &[&str]) -> SesResult<&str> {
        Ok(self.child(path)?.text())
    }

    /// Direct text content of the node at the given path from a given node.
    pub fn child_text_from<'a>(
        &'a self,
        node: &'a XmlElement,
        path: &[&str],
    ) -> SesResult<&'a str> {
        Ok(self.child_from(node, path)?.text())
    }

    fn require_namespace(&self) -> SesResult<&str> {
        self.namespace
            .as_deref()
            .ok_or_else(|| SesError::protocol("response document has no default namespace"))
    }
}

fn resolved_namespace(resolution: &ResolveResult) -> Option<String> {
    match resolution {
        ResolveResult::Bound(Namespace(namespace)) => {
            Some(String::from_utf8_lossy(namespace).into_owned())
        }
        _ => None,
    }
}

fn attach(stack: &mut Vec<XmlElement>, root: &mut Option<XmlElement>, element: XmlElement) {
    match stack.last_mut() {
        Some(parent) => parent.children.push(element),
        None => {
            if root.is_none() {
                *root = Some(element);
            }
        }
    }
}

fn find_path<'a>(
    node: &'a XmlElement,
    namespace: &str,
    path: &[&str],
) -> Option<&'a XmlElement> {
    let (head, rest) = path.split_first()?;
    for child in node.children.iter().filter(|c| c.matches(namespace, head)) {
        if rest.is_empty() {
            return Some(child);
        }
        if let Some(found) = find_path(child, namespace, rest) {
            return Some(found);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    const NS: &str = "http://ses.amazonaws.com/doc/2010-12-01/";

    fn quota_body() -> String {
        format!(
            r#"<GetSendQuotaResponse xmlns="{}">
  <GetSendQuotaResult>
    <SentLast24Hours>127.0</SentLast24Hours>
    <Max24HourSend>200.0</Max24HourSend>
    <MaxSendRate>1.0</MaxSendRate>
  </GetSendQuotaResult>
  <ResponseMetadata>
    <RequestId>273021c6-c866-11e0-b926-4198001eb1b2</RequestId>
  </ResponseMetadata>
</GetSendQuotaResponse>"#,
            NS
        )
    }

    #[test]
    fn test_parse_resolves_namespace_from_root() {
        let document = XmlResponse::parse(&quota_body()).unwrap();
        assert_eq!(document.namespace(), Some(NS));
        assert_eq!(document.root().name(), "GetSendQuotaResponse");
    }

    #[test]
    fn test_check_response_name() {
        let document = XmlResponse::parse(&quota_body()).unwrap();
        assert!(document.check_response_name("GetSendQuotaResponse").is_ok());

        let error = document.check_response_name("ErrorResponse").unwrap_err();
        assert!(error.to_string().contains("ErrorResponse is invalid"));
    }

    #[test]
    fn test_check_action_name() {
        let document = XmlResponse::parse(&quota_body()).unwrap();
        assert!(document.check_action_name("GetSendQuota").is_ok());

        let error = document.check_action_name("SendEmail").unwrap_err();
        assert!(error.to_string().contains("SendEmail"));
        assert!(error.is_protocol());
    }

    #[test]
    fn test_child_path_lookup() {
        let document = XmlResponse::parse(&quota_body()).unwrap();
        assert_eq!(
            document
                .child_text(&["ResponseMetadata", "RequestId"])
                .unwrap(),
            "273021c6-c866-11e0-b926-4198001eb1b2"
        );
        assert_eq!(
            document
                .child_text(&["GetSendQuotaResult", "MaxSendRate"])
                .unwrap(),
            "1.0"
        );
    }

    #[test]
    fn test_missing_node_is_an_error() {
        let document = XmlResponse::parse(&quota_body()).unwrap();
        let error = document
            .child(&["GetSendQuotaResult", "NoSuchField"])
            .unwrap_err();
        assert!(error.is_protocol());
        assert!(error.to_string().contains("not found"));
    }

    #[test]
    fn test_empty_text_is_not_absent() {
        let body = format!(
            r#"<SendEmailResponse xmlns="{}"><SendEmailResult><MessageId></MessageId></SendEmailResult></SendEmailResponse>"#,
            NS
        );
        let document = XmlResponse::parse(&body).unwrap();
        assert_eq!(
            document
                .child_text(&["SendEmailResult", "MessageId"])
                .unwrap(),
            ""
        );
    }

    #[test]
    fn test_children_preserve_document_order() {
        let body = format!(
            r#"<ListVerifiedEmailAddressesResponse xmlns="{}">
  <ListVerifiedEmailAddressesResult>
    <VerifiedEmailAddresses>
      <member>first@example.com</member>
      <member>second@example.com</member>
      <member>third@example.com</member>
    </VerifiedEmailAddresses>
  </ListVerifiedEmailAddressesResult>
</ListVerifiedEmailAddressesResponse>"#,
            NS
        );
        let document = XmlResponse::parse(&body).unwrap();
        let node = document
            .child(&["ListVerifiedEmailAddressesResult", "VerifiedEmailAddresses"])
            .unwrap();
        let texts: Vec<&str> = node.children().iter().map(|c| c.text()).collect();
        assert_eq!(
            texts,
            vec!["first@example.com", "second@example.com", "third@example.com"]
        );
    }

    #[test]
    fn test_namespaceless_document_parses_but_fails_lookup() {
        let body = "<GetSendQuotaResponse><ResponseMetadata><RequestId>x</RequestId></ResponseMetadata></GetSendQuotaResponse>";
        let document = XmlResponse::parse(body).unwrap();
        assert_eq!(document.namespace(), None);

        let error = document
            .child(&["ResponseMetadata", "RequestId"])
            .unwrap_err();
        assert!(error.is_protocol());

        let error = document.check_action_name("GetSendQuota").unwrap_err();
        assert!(error.is_protocol());
    }

    #[test]
    fn test_lookup_ignores_foreign_namespace() {
        let body = r#"<Outer xmlns="urn:one"><Inner xmlns="urn:two"><Value>v</Value></Inner></Outer>"#;
        let document = XmlResponse::parse(body).unwrap();
        // Inner is bound to urn:two, so it is invisible to urn:one lookups.
        assert!(document.child(&["Inner"]).is_err());
    }

    #[test]
    fn test_malformed_document_is_a_protocol_error() {
        let error = XmlResponse::parse("<Unclosed xmlns=\"urn:x\"><Child>").unwrap_err();
        assert!(error.is_protocol());

        let error = XmlResponse::parse("").unwrap_err();
        assert!(error.is_protocol());
    }
}
