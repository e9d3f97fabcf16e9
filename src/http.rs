/// Minimal HTTP seam over the browser's fetch API
use gloo_net::http::Request;
use thiserror::Error;
use web_sys::{RequestCredentials, RequestMode};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Put,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    pub fn new(method: Method, url: impl Into<String>) -> HttpRequest {
        HttpRequest {
            method,
            url: url.into(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    pub fn json_body(mut self, body: String) -> Self {
        self.body = Some(body);
        self
    }

    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The request never produced a response (network, CORS, aborted fetch)
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{0}")]
pub struct TransportError(pub String);

#[allow(async_fn_in_trait)]
pub trait HttpClient {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// Cross-origin fetch without cookies or other credentials
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchClient;

impl HttpClient for FetchClient {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let prepared = build_request(&request)?;

        let response = prepared
            .send()
            .await
            .map_err(|e| TransportError(format!("Network error: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError(format!("Failed to read response: {}", e)))?;

        Ok(HttpResponse { status, body })
    }
}

/// Translate a request into a fetch request: CORS mode, no credentials
fn build_request(request: &HttpRequest) -> Result<Request, TransportError> {
    let mut builder = match request.method {
        Method::Get => Request::get(&request.url),
        Method::Put => Request::put(&request.url),
    }
    .mode(RequestMode::Cors)
    .credentials(RequestCredentials::Omit);

    for (name, value) in &request.headers {
        builder = builder.header(name, value);
    }

    match &request.body {
        Some(body) => builder.body(body.as_str()),
        None => builder.build(),
    }
    .map_err(|e| TransportError(format!("Failed to build request: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_builder() {
        let request = HttpRequest::new(Method::Put, "https://example.com/api")
            .header("Content-Type", "application/json")
            .json_body("{}".to_string());

        assert_eq!(request.method, Method::Put);
        assert_eq!(request.header_value("content-type"), Some("application/json"));
        assert_eq!(request.header_value("Accept"), None);
        assert_eq!(request.body.as_deref(), Some("{}"));
    }

    #[test]
    fn test_response_ok_range() {
        let response = |status| HttpResponse { status, body: String::new() };

        assert!(response(200).ok());
        assert!(response(204).ok());
        assert!(!response(199).ok());
        assert!(!response(404).ok());
        assert!(!response(500).ok());
    }
}
