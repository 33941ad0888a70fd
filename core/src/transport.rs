//! Blocking HTTP executor for `HttpRequest` values.
//!
//! # Design
//! The one place in the crate that touches the network. ureq's automatic
//! status-code-as-error behavior is disabled so 4xx/5xx responses come back
//! as data and status interpretation stays with the client's parse methods;
//! only failures of the call itself (connect, read) become
//! `ApiError::Transport`. No timeout or retry is configured — a request
//! either settles or fails once.

use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};

/// Execute a GET request and return the raw status and body text.
pub fn execute(request: &HttpRequest) -> Result<HttpResponse, ApiError> {
    let agent = ureq::Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent();

    let mut response = agent
        .get(&request.url)
        .call()
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    let status = response.status().as_u16();
    let body = response
        .body_mut()
        .read_to_string()
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    Ok(HttpResponse { status, body })
}
