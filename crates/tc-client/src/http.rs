//! Shared HTTP response helpers.
//!
//! Centralizes status-code checks (429 with `Retry-After`, non-success →
//! [`ApiError::Api`] with the server's structured error message) so the
//! endpoint methods stay focused on request construction.

use crate::error::ApiError;

/// Check an HTTP response for error conditions.
///
/// Returns the response unchanged on success.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = resp.status();
    if status == 429 {
        return Err(ApiError::RateLimited {
            retry_after_secs: parse_retry_after(&resp),
        });
    }
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        let message = extract_error_message(&body);
        tracing::debug!(status = status.as_u16(), ?message, "API request failed");
        return Err(ApiError::Api {
            status: status.as_u16(),
            message,
        });
    }
    Ok(resp)
}

/// Pull a human-readable message out of an error body.
///
/// Accepts a bare JSON string, or an object carrying `detail`, `message`, or
/// `error` (checked in that order). A non-JSON body is used as-is unless it
/// is empty or looks like an HTML error page.
#[must_use]
pub fn extract_error_message(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }

    match serde_json::from_str::<serde_json::Value>(trimmed) {
        Ok(serde_json::Value::String(text)) => non_empty(text),
        Ok(serde_json::Value::Object(map)) => ["detail", "message", "error"]
            .iter()
            .find_map(|key| map.get(*key).and_then(serde_json::Value::as_str))
            .and_then(|text| non_empty(text.to_string())),
        Ok(_) => None,
        Err(_) if trimmed.starts_with('<') => None,
        Err(_) => Some(trimmed.to_string()),
    }
}

/// Generic text for a status when the server sent no message.
#[must_use]
pub const fn status_fallback(status: u16) -> &'static str {
    match status {
        403 => "You do not have permission to perform this action.",
        404 => "Resource not found.",
        500.. => "Server error. Please try again later.",
        _ => "Request failed.",
    }
}

fn non_empty(text: String) -> Option<String> {
    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}

/// Parse the `Retry-After` header as seconds, falling back to 60 s.
fn parse_retry_after(resp: &reqwest::Response) -> u64 {
    resp.headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(60)
}
