//! Request signing.
//!
//! Paycor authenticates every request with an HMAC-SHA1 signature over
//!
//! ```text
//! METHOD\n\n\nDATE\nURL
//! ```
//!
//! keyed with the private key. The signature is sent together with the public
//! key in the `paycorapi` header as `"<public_key> <base64_signature>"`.

use crate::error::{PaycorError, Result};
use crate::types::ApiRequest;
use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use hmac::{Hmac, Mac};
use reqwest::Method;
use reqwest::header::{DATE, HeaderName, HeaderValue};
use sha1::Sha1;

type HmacSha1 = Hmac<Sha1>;

/// Name of the authentication header.
pub const AUTH_HEADER: &str = "paycorapi";

/// Computes request signatures from the private key.
#[derive(Clone)]
pub struct Signer {
    private_key: String,
}

impl Signer {
    /// Create a signer for the given private key.
    pub fn new(private_key: impl Into<String>) -> Self {
        Self {
            private_key: private_key.into(),
        }
    }

    /// Build the message that gets signed.
    ///
    /// Fields two and three are always empty.
    pub fn message(method: &Method, date: &str, url: &str) -> String {
        format!("{}\n\n\n{}\n{}", method.as_str(), date, url)
    }

    /// Sign a request description and return the base64 signature.
    pub fn sign(&self, method: &Method, date: &str, url: &str) -> Result<String> {
        let mut mac = HmacSha1::new_from_slice(self.private_key.as_bytes())
            .map_err(|e| PaycorError::Signing(format!("Failed to create HMAC: {e}")))?;

        mac.update(Self::message(method, date, url).as_bytes());
        Ok(BASE64.encode(mac.finalize().into_bytes()))
    }
}

impl std::fmt::Debug for Signer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Signer")
            .field("private_key", &"<redacted>")
            .finish()
    }
}

/// Attaches the `paycorapi` header to outgoing requests.
#[derive(Debug, Clone)]
pub struct Authenticator {
    public_key: String,
    signer: Signer,
}

impl Authenticator {
    /// Create an authenticator from a key pair.
    pub fn new(public_key: impl Into<String>, private_key: impl Into<String>) -> Self {
        Self {
            public_key: public_key.into(),
            signer: Signer::new(private_key),
        }
    }

    /// The public key sent with every request.
    pub fn public_key(&self) -> &str {
        &self.public_key
    }

    /// Compute the header value for a request.
    ///
    /// A missing `Date` header is signed as an empty field; the server will
    /// then reject the signature.
    pub fn header_value(&self, request: &ApiRequest) -> Result<String> {
        let date = request.header(DATE.as_str()).unwrap_or("");
        let signature = self
            .signer
            .sign(&request.method, date, request.url.as_str())?;
        Ok(format!("{} {}", self.public_key, signature))
    }

    /// Sign `request` and set its `paycorapi` header, replacing any previous one.
    pub fn authenticate(&self, request: &mut ApiRequest) -> Result<()> {
        let value = HeaderValue::from_str(&self.header_value(request)?)
            .map_err(|e| PaycorError::Signing(format!("Invalid public key: {e}")))?;
        request
            .headers
            .insert(HeaderName::from_static(AUTH_HEADER), value);
        Ok(())
    }
}
