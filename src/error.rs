//! Error types for the Paycor client.
//!
//! Every call either returns a decoded value or exactly one of these errors.
//! The two API-level kinds are [`PaycorError::Transport`] (the server answered
//! with something that is not JSON) and [`PaycorError::Application`] (the
//! server answered with a non-success status).

use thiserror::Error;

/// Status code reported for responses whose body could not be decoded.
pub const UNPARSABLE_STATUS: u16 = 500;

/// Result type for Paycor operations.
pub type Result<T> = std::result::Result<T, PaycorError>;

/// Errors that can occur when talking to the Paycor API.
#[derive(Error, Debug)]
pub enum PaycorError {
    /// The response body could not be parsed as JSON.
    #[error("Transport error ({code}): {message}")]
    Transport {
        /// Always [`UNPARSABLE_STATUS`], whatever the actual HTTP status was.
        code: u16,
        /// Parser error detail.
        message: String,
        /// Raw response body.
        body: String,
    },

    /// The server answered with a non-success status.
    #[error("Application error ({status_code}): {message}")]
    Application {
        /// HTTP status code returned by the server.
        status_code: u16,
        /// Full response text: status line, headers and body.
        message: String,
    },

    /// The HTTP call itself failed before a response was received.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The request URL could not be built.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// Request parameters could not be turned into a query string.
    #[error("Invalid request parameters: {0}")]
    InvalidParams(String),

    /// Request body encoding failed.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The request could not be signed.
    #[error("Signing error: {0}")]
    Signing(String),
}

/// Coarse classification of a [`PaycorError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Unparsable response content.
    Transport,
    /// Non-success HTTP status.
    Application,
    /// Failure on the client side: building, signing or sending the request.
    Client,
}

impl PaycorError {
    /// Returns the coarse kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            PaycorError::Transport { .. } => ErrorKind::Transport,
            PaycorError::Application { .. } => ErrorKind::Application,
            _ => ErrorKind::Client,
        }
    }

    /// Returns the status code carried by API-level errors.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            PaycorError::Transport { code, .. } => Some(*code),
            PaycorError::Application { status_code, .. } => Some(*status_code),
            PaycorError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Returns the raw response body of an unparsable response.
    pub fn body(&self) -> Option<&str> {
        match self {
            PaycorError::Transport { body, .. } => Some(body),
            _ => None,
        }
    }

    /// Returns true if the server rejected the credentials.
    pub fn is_auth_error(&self) -> bool {
        matches!(
            self,
            PaycorError::Application {
                status_code: 401 | 403,
                ..
            }
        )
    }

    /// Returns true if repeating the call could plausibly succeed.
    ///
    /// The client never retries on its own; this only helps callers decide.
    pub fn is_retryable(&self) -> bool {
        match self {
            PaycorError::Http(_) => true,
            PaycorError::Application { status_code, .. } => *status_code >= 500,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PaycorError::Application {
            status_code: 404,
            message: "HTTP/1.1 404 Not Found".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Application error (404): HTTP/1.1 404 Not Found"
        );

        let err = PaycorError::Transport {
            code: UNPARSABLE_STATUS,
            message: "Unparsable content".to_string(),
            body: "<html>".to_string(),
        };
        assert_eq!(err.to_string(), "Transport error (500): Unparsable content");
    }

    #[test]
    fn test_kind() {
        let transport = PaycorError::Transport {
            code: UNPARSABLE_STATUS,
            message: String::new(),
            body: String::new(),
        };
        assert_eq!(transport.kind(), ErrorKind::Transport);
        assert_eq!(transport.status_code(), Some(500));
        assert_eq!(transport.body(), Some(""));

        let params = PaycorError::InvalidParams("not a mapping".to_string());
        assert_eq!(params.kind(), ErrorKind::Client);
        assert_eq!(params.status_code(), None);
        assert_eq!(params.body(), None);
    }

    #[test]
    fn test_is_retryable() {
        let server_error = PaycorError::Application {
            status_code: 503,
            message: "Service Unavailable".to_string(),
        };
        assert!(server_error.is_retryable());

        let not_found = PaycorError::Application {
            status_code: 404,
            message: "Not Found".to_string(),
        };
        assert!(!not_found.is_retryable());

        let unparsable = PaycorError::Transport {
            code: UNPARSABLE_STATUS,
            message: String::new(),
            body: String::new(),
        };
        assert!(!unparsable.is_retryable());
    }

    #[test]
    fn test_is_auth_error() {
        let forbidden = PaycorError::Application {
            status_code: 403,
            message: "Forbidden".to_string(),
        };
        assert!(forbidden.is_auth_error());

        let signing = PaycorError::Signing("bad header".to_string());
        assert!(!signing.is_auth_error());
    }
}
