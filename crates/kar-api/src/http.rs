//! Shared HTTP response helpers.
//!
//! Every response passes through [`check_response`], the one place where
//! statuses become [`ApiError`]s, so resource code only builds requests and
//! maps bodies.

use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// Check an HTTP response for error statuses.
///
/// Returns the response unchanged on success. Otherwise:
/// - **401 / 403** → [`ApiError::Unauthorized`].
/// - **Any other non-success** → [`ApiError::Api`] carrying the server's
///   `message` (or `error`) field, falling back to
///   `Request failed with status code N`.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let code = status.as_u16();
    if code == 401 || code == 403 {
        tracing::debug!(status = code, "request rejected as unauthorized");
        return Err(ApiError::Unauthorized { status: code });
    }
    let body = resp.text().await.unwrap_or_default();
    let message = server_message(&body)
        .unwrap_or_else(|| format!("Request failed with status code {code}"));
    tracing::debug!(status = code, %message, "request failed");
    Err(ApiError::Api {
        status: code,
        message,
    })
}

/// Pull a human message out of an error body.
fn server_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    ["message", "error"]
        .iter()
        .find_map(|key| value.get(key).and_then(serde_json::Value::as_str))
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map(ToString::to_string)
}

/// Check the response and decode its JSON body.
pub async fn read_json<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ApiError> {
    let resp = check_response(resp).await?;
    let bytes = resp.bytes().await?;
    if bytes.is_empty() {
        return serde_json::from_slice(b"null").map_err(|e| ApiError::Parse(e.to_string()));
    }
    serde_json::from_slice(&bytes).map_err(|e| ApiError::Parse(e.to_string()))
}
