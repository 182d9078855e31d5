use crate::types::Method;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    /// For [`Transport`](crate::Transport) implementations that fail without a reqwest error.
    #[error("Transport failure: {message}")]
    TransportFailure { message: String },

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Setting a body for a request with method {method} is not supported")]
    BodyNotAllowed { method: Method },

    #[error("Header '{name}' has already been added to this request")]
    DuplicateHeader { name: String },

    #[error("Parameter count does not match placeholder count: {placeholders} placeholders, {parameters} parameters")]
    ParameterCountMismatch {
        placeholders: usize,
        parameters: usize,
    },

    #[error("Invalid header name: {0}")]
    InvalidHeaderName(#[from] http::header::InvalidHeaderName),

    #[error("Invalid header value: {0}")]
    InvalidHeaderValue(#[from] http::header::InvalidHeaderValue),

    #[error("Client has been disposed")]
    Disposed,

    #[error("Response body has already been consumed")]
    BodyConsumed,

    #[error("Could not deserialize response content to object of type {type_name}: {body}")]
    Deserialize {
        type_name: &'static str,
        body: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Image decode error: {0}")]
    Image(#[from] image::ImageError),
}
