//! Response classification.

use crate::error::{PaycorError, Result, UNPARSABLE_STATUS};
use crate::types::ApiResponse;
use serde_json::Value;

/// Decode a response body, or turn it into an error.
///
/// The body is parsed first: content that is not JSON is a
/// [`PaycorError::Transport`] error with code 500 even if the HTTP status was
/// a success. Parsed content with a non-2xx status is a
/// [`PaycorError::Application`] error carrying the full response text.
/// An empty body is not JSON and counts as unparsable.
pub fn process(response: &ApiResponse) -> Result<Value> {
    let data = decode(&response.body)?;

    if response.status.is_success() {
        Ok(data)
    } else {
        Err(PaycorError::Application {
            status_code: response.status.as_u16(),
            message: response.to_string(),
        })
    }
}

fn decode(body: &str) -> Result<Value> {
    serde_json::from_str(body).map_err(|e| PaycorError::Transport {
        code: UNPARSABLE_STATUS,
        message: format!("Unparsable content: {e}"),
        body: body.to_string(),
    })
}
