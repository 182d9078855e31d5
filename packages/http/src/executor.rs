//! HTTP execution abstraction.
//!
//! The client builds a [`WireRequest`] and hands it to a [`Transport`]. The
//! production transport uses reqwest; tests swap in a mock that never
//! touches the network.

use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::Client;
use url::Url;

use crate::config::ClientConfig;
use crate::error::Error;

/// A fully resolved request, ready for the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WireRequest {
    pub method: http::Method,
    pub url: Url,
    /// Validated headers in the order they are sent. Names may repeat.
    pub headers: Vec<(HeaderName, HeaderValue)>,
    pub body: Option<WireBody>,
}

/// An encoded request payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WireBody {
    pub content_type: &'static str,
    pub bytes: Bytes,
}

/// The raw reply to a [`WireRequest`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WireReply {
    pub status: u16,
    pub body: Bytes,
}

impl WireReply {
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Trait for executing HTTP requests.
///
/// Implementations must tolerate concurrent calls through a shared
/// reference.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: WireRequest) -> Result<WireReply, Error>;
}

/// Production transport using reqwest.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Create a new transport with the given timeout.
    pub fn new(timeout: Duration) -> Result<Self, Error> {
        Self::from_config(&ClientConfig::default().with_timeout(timeout))
    }

    /// Create with default timeout of 30 seconds.
    pub fn with_default_timeout() -> Result<Self, Error> {
        Self::from_config(&ClientConfig::default())
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self, Error> {
        let mut builder = Client::builder().timeout(config.timeout);
        if let Some(user_agent) = &config.user_agent {
            builder = builder.user_agent(user_agent.as_str());
        }
        Ok(Self {
            client: builder.build()?,
        })
    }

    /// Wrap an existing reqwest client.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: WireRequest) -> Result<WireReply, Error> {
        let mut headers = HeaderMap::with_capacity(request.headers.len() + 1);
        for (name, value) in request.headers {
            headers.append(name, value);
        }

        let mut req_builder = self.client.request(request.method, request.url);
        if let Some(body) = request.body {
            // The body's type wins over any caller-supplied Content-Type.
            let content_type = format!("{}; charset=utf-8", body.content_type);
            headers.insert(CONTENT_TYPE, HeaderValue::try_from(content_type)?);
            req_builder = req_builder.body(body.bytes);
        }

        let response = req_builder.headers(headers).send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?;

        Ok(WireReply { status, body })
    }
}


#[cfg(test)]
mod tests {
    use super::mock::MockTransport;
    use super::*;

    fn get(url: &str) -> WireRequest {
        WireRequest {
            method: http::Method::GET,
            url: Url::parse(url).unwrap(),
            headers: Vec::new(),
            body: None,
        }
    }

    #[tokio::test]
    async fn mock_returns_configured_reply() {
        let transport = MockTransport::new().with_reply("/test", WireReply::new(200, "ok"));
        let reply = transport.send(get("http://localhost/test")).await.unwrap();
        assert_eq!(reply.status, 200);
        assert_eq!(reply.body, Bytes::from_static(b"ok"));
    }

    #[tokio::test]
    async fn mock_returns_default_then_404() {
        let transport = MockTransport::new();
        let reply = transport.send(get("http://localhost/any")).await.unwrap();
        assert_eq!(reply.status, 404);

        let transport = transport.with_default_reply(WireReply::new(204, Bytes::new()));
        let reply = transport.send(get("http://localhost/any")).await.unwrap();
        assert_eq!(reply.status, 204);
    }

    #[tokio::test]
    async fn mock_fails_when_configured() {
        let transport = MockTransport::new().fail_with("Network error");
        let err = transport.send(get("http://localhost/any")).await.unwrap_err();
        assert_eq!(err.to_string(), "Transport failure: Network error");
    }

    #[tokio::test]
    async fn mock_records_requests() {
        let transport = MockTransport::new();
        transport.send(get("http://localhost/first")).await.unwrap();
        transport.send(get("http://localhost/second")).await.unwrap();

        let recorded = transport.recorded_requests();
        assert_eq!(recorded.len(), 2);
        assert_eq!(recorded[0].url.path(), "/first");
        assert_eq!(recorded[1].url.path(), "/second");

        transport.clear_recorded();
        assert!(transport.recorded_requests().is_empty());
    }

    #[test]
    fn reqwest_transport_creation() {
        assert!(ReqwestTransport::with_default_timeout().is_ok());
        assert!(ReqwestTransport::new(Duration::from_secs(10)).is_ok());
        let config = ClientConfig::default().with_user_agent("minapi/0.1");
        assert!(ReqwestTransport::from_config(&config).is_ok());
    }
}
