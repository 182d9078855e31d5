//! Typed wrappers around a wire reply.
//!
//! Every wrapper pairs the logical status with a body that can be read
//! exactly once. Reading a consumed body fails with [`Error::BodyConsumed`].

use std::any::type_name;
use std::ops::{Deref, DerefMut};

use bytes::Bytes;
use serde::de::DeserializeOwned;
use url::Url;

use crate::error::Error;
use crate::types::StatusCode;

/// Everything the client knows about a reply when it builds a wrapper.
#[derive(Debug, Clone)]
pub struct ResponseParts {
    pub status: StatusCode,
    pub raw_status: u16,
    pub url: Url,
    pub body: Bytes,
}

/// A wrapper the client can produce from a reply.
///
/// `ApiClient::try_execute::<R>` builds `R` through `from_reply`.
pub trait Response: Send + 'static {
    fn from_reply(parts: ResponseParts) -> Self
    where
        Self: Sized;

    fn status(&self) -> StatusCode;

    /// Numeric status as received, before translation.
    fn raw_status(&self) -> u16;

    /// The resolved URL the request was sent to.
    fn url(&self) -> &Url;
}

/// Base wrapper: status plus a single-read body.
#[derive(Debug)]
pub struct ApiResponse {
    status: StatusCode,
    raw_status: u16,
    url: Url,
    body: Option<Bytes>,
}

impl ApiResponse {
    pub fn new(status: StatusCode, url: Url, body: Bytes) -> Self {
        Self {
            status,
            raw_status: status.as_u16(),
            url,
            body: Some(body),
        }
    }

    /// Whether the body is still available.
    pub fn has_body(&self) -> bool {
        self.body.is_some()
    }

    /// Take the raw body bytes.
    pub fn read_body_as_bytes(&mut self) -> Result<Bytes, Error> {
        self.body.take().ok_or(Error::BodyConsumed)
    }

    /// Take the body decoded as UTF-8. Invalid sequences are replaced.
    pub fn read_body_as_string(&mut self) -> Result<String, Error> {
        let bytes = self.read_body_as_bytes()?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

impl Response for ApiResponse {
    fn from_reply(parts: ResponseParts) -> Self {
        Self {
            status: parts.status,
            raw_status: parts.raw_status,
            url: parts.url,
            body: Some(parts.body),
        }
    }

    fn status(&self) -> StatusCode {
        self.status
    }

    fn raw_status(&self) -> u16 {
        self.raw_status
    }

    fn url(&self) -> &Url {
        &self.url
    }
}

macro_rules! wrapper_response {
    ($name:ident) => {
        impl Response for $name {
            fn from_reply(parts: ResponseParts) -> Self {
                Self(ApiResponse::from_reply(parts))
            }

            fn status(&self) -> StatusCode {
                self.0.status
            }

            fn raw_status(&self) -> u16 {
                self.0.raw_status
            }

            fn url(&self) -> &Url {
                &self.0.url
            }
        }

        impl Deref for $name {
            type Target = ApiResponse;

            fn deref(&self) -> &ApiResponse {
                &self.0
            }
        }

        impl DerefMut for $name {
            fn deref_mut(&mut self) -> &mut ApiResponse {
                &mut self.0
            }
        }

        impl From<ApiResponse> for $name {
            fn from(inner: ApiResponse) -> Self {
                Self(inner)
            }
        }

        impl $name {
            pub fn into_inner(self) -> ApiResponse {
                self.0
            }
        }
    };
}

/// A reply whose body is JSON.
#[derive(Debug)]
pub struct JsonResponse(ApiResponse);

wrapper_response!(JsonResponse);

impl JsonResponse {
    /// Take the body and deserialize it into `T`.
    ///
    /// On failure the error names `T` and carries the text that failed to
    /// parse.
    pub fn read_body_as_json<T: DeserializeOwned>(&mut self) -> Result<T, Error> {
        let body = self.0.read_body_as_string()?;
        serde_json::from_str(&body).map_err(|source| Error::Deserialize {
            type_name: type_name::<T>(),
            body,
            source,
        })
    }
}

/// A reply whose body is an encoded image.
#[derive(Debug)]
pub struct ImageResponse(ApiResponse);

wrapper_response!(ImageResponse);

impl ImageResponse {
    /// Take the body and decode it, guessing the format from its contents.
    pub fn read_body_as_image(&mut self) -> Result<image::DynamicImage, Error> {
        let bytes = self.0.read_body_as_bytes()?;
        Ok(image::load_from_memory(&bytes)?)
    }
}
