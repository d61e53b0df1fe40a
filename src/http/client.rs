//! `reqwest`-backed transport.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Client;

use crate::error::HttpError;
use crate::http::{HttpRequest, HttpResponse, HttpTransport, Method};

/// Default [`HttpTransport`] over a shared `reqwest::Client`.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build with a per-request timeout. The SDK itself imposes none.
    pub fn with_timeout(timeout: Duration) -> Result<Self, HttpError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }

    /// Wrap an existing client (custom TLS, proxies, pools).
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

fn to_reqwest_method(method: Method) -> reqwest::Method {
    match method {
        Method::Get => reqwest::Method::GET,
        Method::Post => reqwest::Method::POST,
        Method::Delete => reqwest::Method::DELETE,
    }
}

fn to_header_map(headers: &[(String, String)]) -> Result<HeaderMap, HttpError> {
    let mut map = HeaderMap::new();
    for (name, value) in headers {
        let header_name =
            HeaderName::try_from(name.as_str()).map_err(|e| HttpError::InvalidHeader {
                name: name.clone(),
                reason: e.to_string(),
            })?;
        let header_value = HeaderValue::from_str(value).map_err(|e| HttpError::InvalidHeader {
            name: name.clone(),
            reason: e.to_string(),
        })?;
        map.insert(header_name, header_value);
    }
    Ok(map)
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        let headers = to_header_map(&request.headers)?;
        let mut req = self
            .client
            .request(to_reqwest_method(request.method), &request.url)
            .headers(headers);

        if let Some(body) = request.body {
            req = req.body(body);
        }

        let resp = req.send().await?;
        let status = resp.status().as_u16();
        let body = resp.text().await?;

        Ok(HttpResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_mapping() {
        assert_eq!(to_reqwest_method(Method::Get), reqwest::Method::GET);
        assert_eq!(to_reqwest_method(Method::Post), reqwest::Method::POST);
        assert_eq!(to_reqwest_method(Method::Delete), reqwest::Method::DELETE);
    }

    #[test]
    fn test_header_map_rejects_invalid_names() {
        let err = to_header_map(&[("bad header".to_string(), "x".to_string())]).unwrap_err();
        assert!(matches!(err, HttpError::InvalidHeader { ref name, .. } if name == "bad header"));
    }

    #[test]
    fn test_header_map_keeps_values() {
        let map = to_header_map(&[(
            "Content-Type".to_string(),
            "application/x-www-form-urlencoded".to_string(),
        )])
        .unwrap();
        assert_eq!(
            map.get("content-type").unwrap(),
            "application/x-www-form-urlencoded"
        );
    }
}
