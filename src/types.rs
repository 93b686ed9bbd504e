//! Request and response values exchanged with the transport.

use reqwest::header::HeaderMap;
use reqwest::{Method, StatusCode};
use std::fmt;
use url::Url;

/// A fully built request, ready to be signed and sent.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    /// HTTP method.
    pub method: Method,
    /// Absolute URL, including any query string.
    pub url: Url,
    /// Request headers (`Date`, `Content-Type`, `paycorapi`, ...).
    pub headers: HeaderMap,
    /// JSON body for write requests.
    pub body: Option<String>,
}

impl ApiRequest {
    /// Create a request with no headers and no body.
    pub fn new(method: Method, url: Url) -> Self {
        Self {
            method,
            url,
            headers: HeaderMap::new(),
            body: None,
        }
    }

    /// Returns a header value as a string, if present and valid UTF-8.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

impl fmt::Display for ApiRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} HTTP/1.1\r\n", self.method, self.url)?;
        write_headers(f, &self.headers)?;
        f.write_str("\r\n")?;
        if let Some(body) = &self.body {
            f.write_str(body)?;
        }
        Ok(())
    }
}

/// A raw response as returned by the transport.
///
/// Once the client stores it as the last response, `request` holds the
/// request that produced it.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    /// HTTP status.
    pub status: StatusCode,
    /// Response headers.
    pub headers: HeaderMap,
    /// Undecoded response body.
    pub body: String,
    /// The originating request.
    pub request: Option<ApiRequest>,
}

impl ApiResponse {
    /// Create a response that is not yet tied to a request.
    pub fn new(status: StatusCode, headers: HeaderMap, body: impl Into<String>) -> Self {
        Self {
            status,
            headers,
            body: body.into(),
            request: None,
        }
    }

    /// Attach the originating request.
    pub fn with_request(mut self, request: ApiRequest) -> Self {
        self.request = Some(request);
        self
    }
}

impl fmt::Display for ApiResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "HTTP/1.1 {} {}\r\n",
            self.status.as_u16(),
            self.status.canonical_reason().unwrap_or("")
        )?;
        write_headers(f, &self.headers)?;
        f.write_str("\r\n")?;
        f.write_str(&self.body)
    }
}

fn write_headers(f: &mut fmt::Formatter<'_>, headers: &HeaderMap) -> fmt::Result {
    for (name, value) in headers {
        write!(
            f,
            "{}: {}\r\n",
            name,
            String::from_utf8_lossy(value.as_bytes())
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::{CONTENT_TYPE, HeaderValue};

    #[test]
    fn test_response_display() {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let response = ApiResponse::new(StatusCode::NOT_FOUND, headers, "\"Not Found\"");

        assert_eq!(
            response.to_string(),
            "HTTP/1.1 404 Not Found\r\ncontent-type: application/json\r\n\r\n\"Not Found\""
        );
    }

    #[test]
    fn test_request_display() {
        let url = Url::parse("https://secure.paycor.com/employees?page=2").unwrap();
        let mut request = ApiRequest::new(Method::POST, url);
        request
            .headers
            .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        request.body = Some("{\"a\":1}".to_string());

        assert_eq!(
            request.to_string(),
            "POST https://secure.paycor.com/employees?page=2 HTTP/1.1\r\n\
             content-type: application/json\r\n\r\n{\"a\":1}"
        );
        assert_eq!(request.header("Content-Type"), Some("application/json"));
        assert_eq!(request.header("Date"), None);
    }

    #[test]
    fn test_with_request() {
        let url = Url::parse("https://secure.paycor.com/ping").unwrap();
        let response = ApiResponse::new(StatusCode::OK, HeaderMap::new(), "{}")
            .with_request(ApiRequest::new(Method::GET, url));

        let request = response.request.unwrap();
        assert_eq!(request.method, Method::GET);
        assert_eq!(request.url.as_str(), "https://secure.paycor.com/ping");
    }
}
