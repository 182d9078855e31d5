//! Synchronous notifications fired by the client around each call.

use url::Url;

use crate::request::ApiRequest;
use crate::response::Response;

/// Fired just before a request goes to the transport.
#[derive(Debug, Clone, Copy)]
pub struct RequestSent<'a> {
    pub request: &'a ApiRequest,
    /// The endpoint with placeholders filled, joined to the base URL.
    pub url: &'a Url,
}

/// Fired once the reply has been wrapped, before it is returned.
#[derive(Clone, Copy)]
pub struct ResponseReceived<'a> {
    pub response: &'a dyn Response,
}

pub type RequestSentListener = Box<dyn Fn(&RequestSent<'_>) + Send + Sync>;
pub type ResponseReceivedListener = Box<dyn Fn(&ResponseReceived<'_>) + Send + Sync>;

#[derive(Default)]
pub(crate) struct Listeners {
    request_sent: Vec<RequestSentListener>,
    response_received: Vec<ResponseReceivedListener>,
}

impl Listeners {
    pub(crate) fn on_request_sent(&mut self, listener: RequestSentListener) {
        self.request_sent.push(listener);
    }

    pub(crate) fn on_response_received(&mut self, listener: ResponseReceivedListener) {
        self.response_received.push(listener);
    }

    pub(crate) fn emit_request_sent(&self, event: &RequestSent<'_>) {
        for listener in &self.request_sent {
            listener(event);
        }
    }

    pub(crate) fn emit_response_received(&self, event: &ResponseReceived<'_>) {
        for listener in &self.response_received {
            listener(event);
        }
    }
}
