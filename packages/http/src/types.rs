use std::fmt;

use serde::{Deserialize, Serialize};

/// HTTP method for requests
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    #[default]
    GET,
    POST,
    PUT,
    PATCH,
    DELETE,
    OPTIONS,
    HEAD,
}

impl Method {
    /// Whether a request with this method may carry a body.
    pub fn allows_body(self) -> bool {
        matches!(self, Method::POST | Method::PUT | Method::PATCH)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Method::GET => "GET",
            Method::POST => "POST",
            Method::PUT => "PUT",
            Method::PATCH => "PATCH",
            Method::DELETE => "DELETE",
            Method::OPTIONS => "OPTIONS",
            Method::HEAD => "HEAD",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Method> for http::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::GET => http::Method::GET,
            Method::POST => http::Method::POST,
            Method::PUT => http::Method::PUT,
            Method::PATCH => http::Method::PATCH,
            Method::DELETE => http::Method::DELETE,
            Method::OPTIONS => http::Method::OPTIONS,
            Method::HEAD => http::Method::HEAD,
        }
    }
}

/// Logical body format of a request.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ContentKind {
    PlainText,
    Json,
    Xml,
    FormData,
    MultiPartFormData,
    Binary,
    ImagePng,
    ImageJpeg,
    Html,
}

impl ContentKind {
    pub const ALL: [ContentKind; 9] = [
        ContentKind::PlainText,
        ContentKind::Json,
        ContentKind::Xml,
        ContentKind::FormData,
        ContentKind::MultiPartFormData,
        ContentKind::Binary,
        ContentKind::ImagePng,
        ContentKind::ImageJpeg,
        ContentKind::Html,
    ];

    /// MIME type sent as `Content-Type` for a body of this kind.
    pub const fn mime_type(self) -> &'static str {
        match self {
            ContentKind::PlainText => "text/plain",
            ContentKind::Html => "text/html",
            ContentKind::Json => "application/json",
            ContentKind::Xml => "application/xml",
            ContentKind::Binary => "application/octet-stream",
            ContentKind::FormData => "application/x-www-form-urlencoded",
            ContentKind::MultiPartFormData => "multipart/form-data",
            ContentKind::ImageJpeg => "image/jpeg",
            ContentKind::ImagePng => "image/png",
        }
    }

    /// Kinds whose string body is attached to the outgoing request.
    ///
    /// Bodies of every other kind are dropped at dispatch.
    pub fn encodes_text_body(self) -> bool {
        matches!(
            self,
            ContentKind::PlainText | ContentKind::Json | ContentKind::Xml
        )
    }
}

/// Logical classification of a wire status code.
///
/// Discriminants are the numeric codes they stand for.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum StatusCode {
    Ok = 200,
    Created = 201,
    Accepted = 202,
    NoContent = 204,
    BadRequest = 400,
    Unauthorized = 401,
    Forbidden = 403,
    NotFound = 404,
    MethodNotAllowed = 405,
    RequestTimeout = 408,
    TooManyRequests = 429,
    InternalServerError = 500,
    NotImplemented = 501,
    BadGateway = 502,
    ServiceUnavailable = 503,
    GatewayTimeout = 504,
    HttpVersionNotSupported = 505,
    UnknownOrUnsupported = 999,
}

impl StatusCode {
    /// Translate a numeric wire status.
    ///
    /// 429 is not translated even though `TooManyRequests` exists; it lands
    /// on `UnknownOrUnsupported` like every other unlisted code.
    pub fn from_wire(status: u16) -> Self {
        match status {
            200 => StatusCode::Ok,
            201 => StatusCode::Created,
            202 => StatusCode::Accepted,
            204 => StatusCode::NoContent,
            400 => StatusCode::BadRequest,
            401 => StatusCode::Unauthorized,
            403 => StatusCode::Forbidden,
            404 => StatusCode::NotFound,
            405 => StatusCode::MethodNotAllowed,
            408 => StatusCode::RequestTimeout,
            500 => StatusCode::InternalServerError,
            501 => StatusCode::NotImplemented,
            502 => StatusCode::BadGateway,
            503 => StatusCode::ServiceUnavailable,
            504 => StatusCode::GatewayTimeout,
            505 => StatusCode::HttpVersionNotSupported,
            _ => StatusCode::UnknownOrUnsupported,
        }
    }

    pub fn as_u16(self) -> u16 {
        self as u16
    }

    /// Check if the status indicates success (2xx)
    pub fn is_success(self) -> bool {
        (200..300).contains(&self.as_u16())
    }

    /// Check if the status indicates a client error (4xx)
    pub fn is_client_error(self) -> bool {
        (400..500).contains(&self.as_u16())
    }

    /// Check if the status indicates a server error (5xx)
    pub fn is_server_error(self) -> bool {
        (500..600).contains(&self.as_u16())
    }
}

impl From<u16> for StatusCode {
    fn from(status: u16) -> Self {
        StatusCode::from_wire(status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_allowed_only_for_post_put_patch() {
        assert!(Method::POST.allows_body());
        assert!(Method::PUT.allows_body());
        assert!(Method::PATCH.allows_body());
        assert!(!Method::GET.allows_body());
        assert!(!Method::DELETE.allows_body());
        assert!(!Method::HEAD.allows_body());
        assert!(!Method::OPTIONS.allows_body());
    }

    #[test]
    fn method_converts_to_http_method() {
        assert_eq!(http::Method::from(Method::PATCH), http::Method::PATCH);
        assert_eq!(http::Method::from(Method::OPTIONS), http::Method::OPTIONS);
        assert_eq!(Method::HEAD.to_string(), "HEAD");
    }

    #[test]
    fn mime_types_match_registry() {
        assert_eq!(ContentKind::PlainText.mime_type(), "text/plain");
        assert_eq!(ContentKind::Html.mime_type(), "text/html");
        assert_eq!(ContentKind::Json.mime_type(), "application/json");
        assert_eq!(ContentKind::Xml.mime_type(), "application/xml");
        assert_eq!(ContentKind::Binary.mime_type(), "application/octet-stream");
        assert_eq!(
            ContentKind::FormData.mime_type(),
            "application/x-www-form-urlencoded"
        );
        assert_eq!(
            ContentKind::MultiPartFormData.mime_type(),
            "multipart/form-data"
        );
        assert_eq!(ContentKind::ImageJpeg.mime_type(), "image/jpeg");
        assert_eq!(ContentKind::ImagePng.mime_type(), "image/png");
    }

    #[test]
    fn only_text_kinds_encode_bodies() {
        let encoded: Vec<_> = ContentKind::ALL
            .into_iter()
            .filter(|kind| kind.encodes_text_body())
            .collect();
        assert_eq!(
            encoded,
            vec![ContentKind::PlainText, ContentKind::Json, ContentKind::Xml]
        );
    }

    #[test]
    fn listed_statuses_translate() {
        let listed = [
            (200, StatusCode::Ok),
            (201, StatusCode::Created),
            (202, StatusCode::Accepted),
            (204, StatusCode::NoContent),
            (400, StatusCode::BadRequest),
            (401, StatusCode::Unauthorized),
            (403, StatusCode::Forbidden),
            (404, StatusCode::NotFound),
            (405, StatusCode::MethodNotAllowed),
            (408, StatusCode::RequestTimeout),
            (500, StatusCode::InternalServerError),
            (501, StatusCode::NotImplemented),
            (502, StatusCode::BadGateway),
            (503, StatusCode::ServiceUnavailable),
            (504, StatusCode::GatewayTimeout),
            (505, StatusCode::HttpVersionNotSupported),
        ];
        for (wire, logical) in listed {
            assert_eq!(StatusCode::from_wire(wire), logical);
            assert_eq!(logical.as_u16(), wire);
        }
    }

    #[test]
    fn unlisted_statuses_are_unknown() {
        assert_eq!(StatusCode::from_wire(429), StatusCode::UnknownOrUnsupported);
        assert_eq!(StatusCode::from_wire(418), StatusCode::UnknownOrUnsupported);
        assert_eq!(StatusCode::from_wire(301), StatusCode::UnknownOrUnsupported);
        assert_eq!(StatusCode::UnknownOrUnsupported.as_u16(), 999);
        assert_eq!(StatusCode::TooManyRequests.as_u16(), 429);
    }

    #[test]
    fn status_classes() {
        assert!(StatusCode::NoContent.is_success());
        assert!(StatusCode::NotFound.is_client_error());
        assert!(StatusCode::BadGateway.is_server_error());
        assert!(!StatusCode::UnknownOrUnsupported.is_success());
    }
}
