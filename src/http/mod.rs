//! HTTP transport layer: the request/response shapes the SDK exchanges with
//! a transport, and the `reqwest` implementation.

#[cfg(feature = "http")]
pub mod client;

#[cfg(feature = "http")]
pub use client::ReqwestTransport;

use async_trait::async_trait;

use crate::error::HttpError;

/// HTTP methods used by the delegation endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully built request. Parameters are already encoded into `url`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    /// `Some("")` for POST, `None` otherwise.
    pub body: Option<String>,
}

impl HttpRequest {
    /// Value of the first header named `name` (case-insensitive).
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Raw transport response; the body is decoded by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends exactly one request per call. Implementations must not retry.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, HttpError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_range() {
        let ok = |status| HttpResponse { status, body: String::new() }.is_success();
        assert!(ok(200));
        assert!(ok(204));
        assert!(ok(299));
        assert!(!ok(199));
        assert!(!ok(300));
        assert!(!ok(400));
    }

    #[test]
    fn test_header_lookup_ignores_case() {
        let request = HttpRequest {
            method: Method::Get,
            url: "https://example.invalid".to_string(),
            headers: vec![("User-Agent".to_string(), "AsterKit/1.0".to_string())],
            body: None,
        };
        assert_eq!(request.header("user-agent"), Some("AsterKit/1.0"));
        assert_eq!(request.header("content-type"), None);
    }
}
