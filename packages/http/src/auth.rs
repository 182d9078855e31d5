//! `Authorization` header construction.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::template;

pub const AUTHORIZATION: &str = "Authorization";

/// Supported authentication schemes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum AuthScheme {
    Basic,
    Bearer,
}

impl AuthScheme {
    /// Header value format for this scheme.
    pub const fn template(self) -> &'static str {
        match self {
            AuthScheme::Basic => "Basic {credentials}",
            AuthScheme::Bearer => "Bearer {token}",
        }
    }
}

/// An authentication scheme paired with its credential.
///
/// The header is built once at construction. The credential is inserted
/// verbatim; Basic credentials must already be base64-encoded unless built
/// through [`Authentication::basic_from_credentials`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Authentication {
    scheme: AuthScheme,
    credential: String,
    header_value: String,
}

impl Authentication {
    pub fn new(scheme: AuthScheme, credential: impl Into<String>) -> Self {
        let credential = credential.into();
        let header_value = template::fill_all(scheme.template(), &credential).into_owned();
        Self {
            scheme,
            credential,
            header_value,
        }
    }

    pub fn bearer(token: impl Into<String>) -> Self {
        Self::new(AuthScheme::Bearer, token)
    }

    /// Basic authentication from a user name and password, encoded as
    /// `base64(user:password)`.
    pub fn basic_from_credentials(user: &str, password: &str) -> Self {
        let encoded = STANDARD.encode(format!("{}:{}", user, password));
        Self::new(AuthScheme::Basic, encoded)
    }

    pub fn scheme(&self) -> AuthScheme {
        self.scheme
    }

    pub fn credential(&self) -> &str {
        &self.credential
    }

    /// The `(name, value)` header pair.
    pub fn header(&self) -> (&'static str, &str) {
        (AUTHORIZATION, &self.header_value)
    }
}
