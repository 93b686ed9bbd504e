//! HTTP transport.
//!
//! The client never talks to the network directly. It hands a signed
//! [`ApiRequest`] to a [`Transport`] and gets an [`ApiResponse`] back, which
//! lets callers inject their own implementation (for tests, proxies, ...).

use crate::error::Result;
use crate::types::{ApiRequest, ApiResponse};
use async_trait::async_trait;
use reqwest::Client as HttpClient;
use reqwest::cookie::Jar;
use std::sync::Arc;
use std::time::Duration;

/// Default request timeout for [`ReqwestTransport`].
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Something that can send a request and return the raw response.
///
/// Implementations report network failures as errors; any response that
/// arrives, whatever its status, is returned as `Ok`.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send `request` and wait for the complete response.
    async fn send(&self, request: &ApiRequest) -> Result<ApiResponse>;
}

/// Options for building a [`ReqwestTransport`].
#[derive(Debug, Clone, Default)]
pub struct TransportOptions {
    /// Request timeout (default: 30 seconds).
    pub timeout: Option<Duration>,
    /// User-Agent header value.
    pub user_agent: Option<String>,
}

/// Default transport backed by reqwest, with an in-memory cookie jar that
/// persists session cookies across requests.
#[derive(Clone)]
pub struct ReqwestTransport {
    http: HttpClient,
    cookies: Arc<Jar>,
}

impl ReqwestTransport {
    /// Build a transport with default options.
    pub fn new() -> Result<Self> {
        Self::with_options(TransportOptions::default())
    }

    /// Build a transport with custom options.
    pub fn with_options(options: TransportOptions) -> Result<Self> {
        let timeout = options
            .timeout
            .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        let user_agent = options
            .user_agent
            .unwrap_or_else(|| format!("paycor-rust/{}", env!("CARGO_PKG_VERSION")));
        let cookies = Arc::new(Jar::default());

        let http = HttpClient::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .cookie_provider(Arc::clone(&cookies))
            .build()?;

        Ok(Self { http, cookies })
    }

    /// The cookie jar shared by every request sent through this transport.
    pub fn cookie_jar(&self) -> &Arc<Jar> {
        &self.cookies
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: &ApiRequest) -> Result<ApiResponse> {
        let mut builder = self
            .http
            .request(request.method.clone(), request.url.clone())
            .headers(request.headers.clone());
        if let Some(body) = &request.body {
            builder = builder.body(body.clone());
        }

        let response = builder.send().await?;
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.text().await?;

        Ok(ApiResponse::new(status, headers, body))
    }
}
