use std::fmt::Display;

use serde::Serialize;

use crate::error::Error;
use crate::types::{ContentKind, Method};

/// Description of a single API call.
///
/// The endpoint is a URL template appended to the client's base URL. Any
/// `{...}` placeholders in it are filled from the URI parameters, in order,
/// when the request is executed.
///
/// ```ignore
/// use minapi_http::{ApiRequest, ContentKind, Method};
///
/// let mut request = ApiRequest::new("/users/{id}/posts", Method::POST, ContentKind::Json);
/// request.set_uri_parameters([7]);
/// request.add_header("X-Trace", "abc")?;
/// request.set_body(r#"{"title":"hello"}"#)?;
/// ```
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ApiRequest {
    endpoint: String,
    method: Method,
    content_kind: ContentKind,
    headers: Vec<(String, String)>,
    body: Option<String>,
    parameters: Vec<String>,
}

impl ApiRequest {
    pub fn new(endpoint: impl Into<String>, method: Method, content_kind: ContentKind) -> Self {
        Self {
            endpoint: endpoint.into(),
            method,
            content_kind,
            headers: Vec::new(),
            body: None,
            parameters: Vec::new(),
        }
    }

    pub fn get(endpoint: impl Into<String>, content_kind: ContentKind) -> Self {
        Self::new(endpoint, Method::GET, content_kind)
    }

    pub fn post(endpoint: impl Into<String>, content_kind: ContentKind) -> Self {
        Self::new(endpoint, Method::POST, content_kind)
    }

    pub fn put(endpoint: impl Into<String>, content_kind: ContentKind) -> Self {
        Self::new(endpoint, Method::PUT, content_kind)
    }

    pub fn delete(endpoint: impl Into<String>, content_kind: ContentKind) -> Self {
        Self::new(endpoint, Method::DELETE, content_kind)
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn content_kind(&self) -> ContentKind {
        self.content_kind
    }

    /// Headers in insertion order.
    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    pub fn parameters(&self) -> &[String] {
        &self.parameters
    }

    /// Add a header. Names are unique per request.
    ///
    /// Names are compared case-insensitively, as HTTP does, so `X-Id` and
    /// `x-id` count as the same header here even though an exact-match map
    /// would accept both.
    pub fn add_header(
        &mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<(), Error> {
        let name = name.into();
        if self
            .headers
            .iter()
            .any(|(existing, _)| existing.eq_ignore_ascii_case(&name))
        {
            return Err(Error::DuplicateHeader { name });
        }
        self.headers.push((name, value.into()));
        Ok(())
    }

    /// Builder form of [`ApiRequest::add_header`].
    pub fn with_header(
        mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<Self, Error> {
        self.add_header(name, value)?;
        Ok(self)
    }

    /// Set the positional values for the endpoint's placeholders.
    ///
    /// The count is checked against the placeholders only when the request
    /// is executed.
    pub fn set_uri_parameters<I>(&mut self, parameters: I)
    where
        I: IntoIterator,
        I::Item: Display,
    {
        self.parameters = parameters.into_iter().map(|p| p.to_string()).collect();
    }

    pub fn with_uri_parameters<I>(mut self, parameters: I) -> Self
    where
        I: IntoIterator,
        I::Item: Display,
    {
        self.set_uri_parameters(parameters);
        self
    }

    /// Set a plain string body. Only POST, PUT and PATCH requests carry one.
    pub fn set_body(&mut self, body: impl Into<String>) -> Result<(), Error> {
        if !self.method.allows_body() {
            return Err(Error::BodyNotAllowed {
                method: self.method,
            });
        }
        self.body = Some(body.into());
        Ok(())
    }

    /// Set the body from a JSON value, pretty-printed.
    pub fn set_json_body(&mut self, body: &serde_json::Value) -> Result<(), Error> {
        if !self.method.allows_body() {
            return Err(Error::BodyNotAllowed {
                method: self.method,
            });
        }
        self.body = Some(serde_json::to_string_pretty(body)?);
        Ok(())
    }

    /// Serialize `body` to JSON and set it.
    pub fn with_body(mut self, body: &impl Serialize) -> Result<Self, Error> {
        let value = serde_json::to_value(body)?;
        self.set_json_body(&value)?;
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_request_is_empty() {
        let request = ApiRequest::new("/users", Method::GET, ContentKind::Json);
        assert_eq!(request.endpoint(), "/users");
        assert_eq!(request.method(), Method::GET);
        assert_eq!(request.content_kind(), ContentKind::Json);
        assert!(request.headers().is_empty());
        assert!(request.body().is_none());
        assert!(request.parameters().is_empty());
    }

    #[test]
    fn body_rejected_for_bodyless_methods() {
        for method in [Method::GET, Method::DELETE, Method::HEAD, Method::OPTIONS] {
            let mut request = ApiRequest::new("/x", method, ContentKind::PlainText);
            let err = request.set_body("data").unwrap_err();
            assert!(matches!(err, Error::BodyNotAllowed { method: m } if m == method));
            assert!(request.body().is_none());

            let err = request
                .set_json_body(&serde_json::json!({"a": 1}))
                .unwrap_err();
            assert!(matches!(err, Error::BodyNotAllowed { .. }));
        }
    }

    #[test]
    fn body_accepted_for_post_put_patch() {
        for method in [Method::POST, Method::PUT, Method::PATCH] {
            let mut request = ApiRequest::new("/x", method, ContentKind::PlainText);
            request.set_body("some text").unwrap();
            assert_eq!(request.body(), Some("some text"));
        }
    }

    #[test]
    fn body_not_allowed_message_names_method() {
        let mut request = ApiRequest::get("/x", ContentKind::Json);
        let err = request.set_body("{}").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Setting a body for a request with method GET is not supported"
        );
    }

    #[test]
    fn json_body_round_trips() {
        let mut request = ApiRequest::post("/x", ContentKind::Json);
        let value = serde_json::json!({"id": 1, "name": "x"});
        request.set_json_body(&value).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(request.body().unwrap()).unwrap();
        assert_eq!(parsed, value);
    }

    #[test]
    fn with_body_serializes() {
        #[derive(Serialize)]
        struct Post {
            title: &'static str,
        }

        let request = ApiRequest::put("/posts/1", ContentKind::Json)
            .with_body(&Post { title: "hi" })
            .unwrap();
        let parsed: serde_json::Value = serde_json::from_str(request.body().unwrap()).unwrap();
        assert_eq!(parsed["title"], "hi");
    }

    #[test]
    fn headers_keep_order_and_reject_duplicates() {
        let mut request = ApiRequest::get("/x", ContentKind::Json);
        request.add_header("X-First", "1").unwrap();
        request.add_header("X-Second", "2").unwrap();

        let err = request.add_header("x-first", "again").unwrap_err();
        assert!(matches!(err, Error::DuplicateHeader { ref name } if name == "x-first"));

        assert_eq!(
            request.headers(),
            &[
                ("X-First".to_string(), "1".to_string()),
                ("X-Second".to_string(), "2".to_string()),
            ]
        );
    }

    #[test]
    fn uri_parameters_accept_mixed_display_values() {
        let mut request = ApiRequest::get("/users/{}/posts/{}", ContentKind::Json);
        let params: [&dyn Display; 2] = [&7, &"draft"];
        request.set_uri_parameters(params);
        assert_eq!(request.parameters(), &["7".to_string(), "draft".to_string()]);

        let request = request.with_uri_parameters([1, 2, 3]);
        assert_eq!(request.parameters().len(), 3);
    }
}
