//! The request dispatcher.
//!
//! `ApiClient` resolves an [`ApiRequest`] against its base URL, attaches
//! authentication and caller headers, hands the result to its transport and
//! wraps the reply in the response type the caller asked for.
//!
//! ```ignore
//! use minapi_http::{ApiClient, ApiRequest, Authentication, ContentKind, JsonResponse, Method};
//!
//! let client = ApiClient::with_authentication("https://api.example.com", Authentication::bearer("t0k3n"))?;
//!
//! let request = ApiRequest::new("/users/{}", Method::GET, ContentKind::Json)
//!     .with_uri_parameters([42]);
//!
//! let mut response: JsonResponse = client.try_execute(&request).await?;
//! let user: User = response.read_body_as_json()?;
//! ```

use std::sync::Arc;

use bytes::Bytes;
use http::header::{HeaderName, HeaderValue};
use log::{debug, warn};
use url::Url;

use crate::auth::Authentication;
use crate::config::ClientConfig;
use crate::error::Error;
use crate::events::{Listeners, RequestSent, ResponseReceived};
use crate::executor::{ReqwestTransport, Transport, WireBody, WireRequest};
use crate::request::ApiRequest;
use crate::response::{Response, ResponseParts};
use crate::template;
use crate::types::StatusCode;

pub struct ApiClient {
    base_url: String,
    transport: Option<Arc<dyn Transport>>,
    authentication: Option<Arc<Authentication>>,
    listeners: Listeners,
}

impl ApiClient {
    /// Create a client using a reqwest transport with the default timeout.
    pub fn new(base_url: &str) -> Result<Self, Error> {
        Self::from_config(base_url, &ClientConfig::default())
    }

    pub fn from_config(base_url: &str, config: &ClientConfig) -> Result<Self, Error> {
        let transport = ReqwestTransport::from_config(config)?;
        Self::with_transport(base_url, Arc::new(transport))
    }

    /// Create a client that authenticates every request.
    pub fn with_authentication(base_url: &str, authentication: Authentication) -> Result<Self, Error> {
        let mut client = Self::new(base_url)?;
        client.enable_authentication(authentication);
        Ok(client)
    }

    /// Create a client over a custom transport.
    pub fn with_transport(base_url: &str, transport: Arc<dyn Transport>) -> Result<Self, Error> {
        Url::parse(base_url)?;
        Ok(Self {
            base_url: base_url.to_string(),
            transport: Some(transport),
            authentication: None,
            listeners: Listeners::default(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn set_base_url(&mut self, base_url: &str) -> Result<(), Error> {
        Url::parse(base_url)?;
        self.base_url = base_url.to_string();
        Ok(())
    }

    /// Attach `authentication` to every request sent from now on.
    pub fn enable_authentication(&mut self, authentication: Authentication) {
        self.authentication = Some(Arc::new(authentication));
    }

    pub fn disable_authentication(&mut self) {
        self.authentication = None;
    }

    pub fn authentication(&self) -> Option<&Authentication> {
        self.authentication.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.authentication.is_some()
    }

    /// Register a listener called just before each request is sent.
    pub fn on_request_sent<F>(&mut self, listener: F)
    where
        F: Fn(&RequestSent<'_>) + Send + Sync + 'static,
    {
        self.listeners.on_request_sent(Box::new(listener));
    }

    /// Register a listener called with each wrapped reply.
    pub fn on_response_received<F>(&mut self, listener: F)
    where
        F: Fn(&ResponseReceived<'_>) + Send + Sync + 'static,
    {
        self.listeners.on_response_received(Box::new(listener));
    }

    /// Release the transport. Later calls fail with [`Error::Disposed`].
    pub fn dispose(&mut self) {
        if self.transport.take().is_some() {
            debug!("Disposed client for {}", self.base_url);
        }
    }

    pub fn is_disposed(&self) -> bool {
        self.transport.is_none()
    }

    /// Execute `request`, discarding the reason for any failure.
    ///
    /// Every error `try_execute` can return is logged and becomes `None`.
    pub async fn execute<R: Response>(&self, request: &ApiRequest) -> Option<R> {
        match self.try_execute(request).await {
            Ok(response) => Some(response),
            Err(e) => {
                warn!(
                    "{} {} failed: {}",
                    request.method(),
                    request.endpoint(),
                    e
                );
                None
            }
        }
    }

    /// Execute `request` and wrap the reply as `R`.
    ///
    /// The active authentication is captured when the call starts. A reply
    /// with any status is a success here; inspect [`Response::status`].
    pub async fn try_execute<R: Response>(&self, request: &ApiRequest) -> Result<R, Error> {
        let transport = self.transport.clone().ok_or(Error::Disposed)?;
        let authentication = self.authentication.clone();

        let url = self.resolve_url(request)?;

        let mut headers = Vec::with_capacity(request.headers().len() + 1);
        if let Some(authentication) = &authentication {
            let (name, value) = authentication.header();
            headers.push(wire_header(name, value)?);
        }
        for (name, value) in request.headers() {
            headers.push(wire_header(name, value)?);
        }

        let wire = WireRequest {
            method: request.method().into(),
            url: url.clone(),
            headers,
            body: encode_body(request),
        };

        self.listeners.emit_request_sent(&RequestSent {
            request,
            url: &url,
        });

        debug!("Sending {} {}", request.method(), url);
        let reply = transport.send(wire).await?;
        debug!("Received {} from {}", reply.status, url);

        let response = R::from_reply(ResponseParts {
            status: StatusCode::from_wire(reply.status),
            raw_status: reply.status,
            url,
            body: reply.body,
        });

        self.listeners.emit_response_received(&ResponseReceived {
            response: &response,
        });

        Ok(response)
    }

    /// Join the base URL and endpoint, then fill the placeholders.
    pub fn resolve_url(&self, request: &ApiRequest) -> Result<Url, Error> {
        let joined = format!("{}{}", self.base_url, request.endpoint());
        let resolved = template::substitute(&joined, request.parameters())?;
        Ok(Url::parse(&resolved)?)
    }
}

fn wire_header(name: &str, value: &str) -> Result<(HeaderName, HeaderValue), Error> {
    Ok((HeaderName::try_from(name)?, HeaderValue::try_from(value)?))
}

/// Encode the body for the wire. Only text kinds are sent; empty bodies never are.
fn encode_body(request: &ApiRequest) -> Option<WireBody> {
    let body = request.body().filter(|body| !body.is_empty())?;
    let kind = request.content_kind();
    if !kind.encodes_text_body() {
        debug!(
            "Dropping body of {} {}: {:?} bodies are not encoded",
            request.method(),
            request.endpoint(),
            kind
        );
        return None;
    }
    Some(WireBody {
        content_type: kind.mime_type(),
        bytes: Bytes::copy_from_slice(body.as_bytes()),
    })
}
