//! Paycor API client.
//!
//! The main entry point: four verbs that build, sign, send and decode a
//! request against the Paycor REST API.

use crate::error::Result;
use crate::request::RequestBuilder;
use crate::response;
use crate::sign::Authenticator;
use crate::transport::{ReqwestTransport, Transport, TransportOptions};
use crate::types::ApiResponse;
use chrono::Utc;
use log::debug;
use reqwest::Method;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "https://secure.paycor.com/";

/// Paycor API client.
///
/// Holds the key pair, the transport and the last response received. The
/// verbs take `&mut self` because every call overwrites the last response;
/// wrap the client in a lock to share it between tasks.
///
/// # Example
///
/// ```rust,no_run
/// use paycor::Client;
/// use serde_json::json;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let mut client = Client::new("public_key", "private_key");
///
///     let employees = client
///         .get("api/v1/employees", &json!({"page": 1}))
///         .await?;
///     println!("{employees}");
///     Ok(())
/// }
/// ```
pub struct Client {
    base_url: String,
    auth: Authenticator,
    debug: bool,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    transport: Option<Box<dyn Transport>>,
    last_response: Option<ApiResponse>,
}

/// Configuration options for the client.
#[derive(Debug, Clone, Default)]
pub struct ClientConfig {
    /// Base URL for the API (default: https://secure.paycor.com/).
    pub base_url: Option<String>,
    /// Request timeout of the default transport (default: 30 seconds).
    pub timeout: Option<Duration>,
    /// User-Agent header value of the default transport.
    pub user_agent: Option<String>,
    /// Log full requests and responses.
    pub debug: bool,
}

impl Client {
    /// Create a new client with default configuration.
    ///
    /// # Arguments
    ///
    /// * `public_key` - Identifies the caller; sent with every request
    /// * `private_key` - HMAC secret; never sent
    pub fn new(public_key: impl Into<String>, private_key: impl Into<String>) -> Self {
        Self::with_config(public_key, private_key, ClientConfig::default())
    }

    /// Create a new client with custom configuration.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use paycor::{Client, ClientConfig};
    /// use std::time::Duration;
    ///
    /// let client = Client::with_config("public_key", "private_key", ClientConfig {
    ///     base_url: Some("https://secure.paycor.com/api/v1/".to_string()),
    ///     timeout: Some(Duration::from_secs(60)),
    ///     debug: true,
    ///     ..Default::default()
    /// });
    /// ```
    pub fn with_config(
        public_key: impl Into<String>,
        private_key: impl Into<String>,
        config: ClientConfig,
    ) -> Self {
        Self {
            base_url: config
                .base_url
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            auth: Authenticator::new(public_key, private_key),
            debug: config.debug,
            timeout: config.timeout,
            user_agent: config.user_agent,
            transport: None,
            last_response: None,
        }
    }

    /// Replace the default transport.
    pub fn with_transport(mut self, transport: impl Transport + 'static) -> Self {
        self.transport = Some(Box::new(transport));
        self
    }

    /// Get the base URL for the API.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the public key.
    pub fn public_key(&self) -> &str {
        self.auth.public_key()
    }

    /// Whether full requests and responses are logged.
    pub fn debug(&self) -> bool {
        self.debug
    }

    /// Turn request/response logging on or off. Takes effect on the next
    /// request.
    pub fn set_debug(&mut self, debug: bool) {
        self.debug = debug;
    }

    /// The most recent response, with the request that produced it.
    pub fn last_response(&self) -> Option<&ApiResponse> {
        self.last_response.as_ref()
    }

    /// Take the most recent response out of the client.
    pub fn take_last_response(&mut self) -> Option<ApiResponse> {
        self.last_response.take()
    }

    /// Send a GET request with `params` as the query string.
    pub async fn get<P: Serialize + ?Sized>(&mut self, path: &str, params: &P) -> Result<Value> {
        self.request(Method::GET, path, params).await
    }

    /// Send a PUT request with `params` as the JSON body.
    pub async fn put<P: Serialize + ?Sized>(&mut self, path: &str, params: &P) -> Result<Value> {
        self.request(Method::PUT, path, params).await
    }

    /// Send a POST request with `params` as the JSON body.
    pub async fn post<P: Serialize + ?Sized>(&mut self, path: &str, params: &P) -> Result<Value> {
        self.request(Method::POST, path, params).await
    }

    /// Send a DELETE request with `params` as the query string.
    pub async fn delete<P: Serialize + ?Sized>(
        &mut self,
        path: &str,
        params: &P,
    ) -> Result<Value> {
        self.request(Method::DELETE, path, params).await
    }

    async fn request<P: Serialize + ?Sized>(
        &mut self,
        method: Method,
        path: &str,
        params: &P,
    ) -> Result<Value> {
        let mut request =
            RequestBuilder::parse(&self.base_url)?.build(method, path, params, Utc::now())?;
        self.auth.authenticate(&mut request)?;

        if self.debug {
            debug!("Paycor request:\n{request}");
        }

        let raw = self.transport()?.send(&request).await?;

        debug!("{} {} -> {}", request.method, request.url, raw.status);
        if self.debug {
            debug!("Paycor response:\n{raw}");
        }

        let last = self.last_response.insert(raw.with_request(request));
        response::process(last)
    }

    fn transport(&mut self) -> Result<&dyn Transport> {
        let transport: Box<dyn Transport> = match self.transport.take() {
            Some(transport) => transport,
            None => Box::new(ReqwestTransport::with_options(TransportOptions {
                timeout: self.timeout,
                user_agent: self.user_agent.clone(),
            })?),
        };
        Ok(&**self.transport.insert(transport))
    }
}
