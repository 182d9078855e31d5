//! # minapi-http
//!
//! A thin client for REST-style APIs.
//!
//! Describe a call with an [`ApiRequest`], send it through an [`ApiClient`]
//! and read the reply through the wrapper type you ask for:
//!
//! ```ignore
//! use minapi_http::{ApiClient, ApiRequest, Authentication, ContentKind, JsonResponse, Method, StatusCode};
//!
//! let client = ApiClient::with_authentication(
//!     "https://api.example.com",
//!     Authentication::bearer("t0k3n"),
//! )?;
//!
//! let mut request = ApiRequest::new("/users/{}/posts", Method::POST, ContentKind::Json);
//! request.set_uri_parameters([7]);
//! request.set_body(r#"{"title":"hello"}"#)?;
//!
//! let mut response: JsonResponse = client.try_execute(&request).await?;
//! if response.status() == StatusCode::Created {
//!     let post: Post = response.read_body_as_json()?;
//! }
//! ```
//!
//! ## Response wrappers
//!
//! - [`ApiResponse`]: raw bytes or UTF-8 text
//! - [`JsonResponse`]: deserializes into any `serde` type
//! - [`ImageResponse`]: decodes PNG or JPEG through the `image` crate
//!
//! Each body can be read once.
//!
//! ## Failures
//!
//! [`ApiClient::try_execute`] reports why a call failed. [`ApiClient::execute`]
//! logs the reason and returns `None` instead.

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod events;
pub mod executor;
pub mod request;
pub mod response;
pub mod template;
pub mod types;

// Re-export main types
pub use auth::{AuthScheme, Authentication};
pub use client::ApiClient;
pub use config::ClientConfig;
pub use error::Error;
pub use events::{RequestSent, ResponseReceived};
pub use executor::{ReqwestTransport, Transport, WireBody, WireReply, WireRequest};
pub use request::ApiRequest;
pub use response::{ApiResponse, ImageResponse, JsonResponse, Response, ResponseParts};
pub use types::{ContentKind, Method, StatusCode};
