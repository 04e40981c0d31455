//! API utilities for frontend-backend communication
//!
//! Every resource module builds its path and goes through the helpers below,
//! so the base URL and error reporting live in one place.

use super::config::app_config;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Get the base URL for API requests
///
/// Uses the configured origin when there is one, otherwise the current
/// window location with the configured API port.
///
/// # Example
/// ```ignore
/// let url = format!("{}/api/fabrics/{}", api_base(), id);
/// ```
pub fn api_base() -> String {
    let config = app_config();
    let window = match web_sys::window() {
        Some(w) => w,
        None => return config.api.origin.clone(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    config.api_base(&protocol, &hostname)
}

/// Build a full API URL from a path starting with "/api/"
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Human readable error for a failed response. Prefers the server's
/// `message` field, falls back to the status line.
pub fn error_message(status: u16, status_text: &str, body: &str) -> String {
    let message = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(String::from))
        .filter(|m| !m.trim().is_empty());
    match message {
        Some(m) => format!("HTTP {}: {}", status, m),
        None if status_text.is_empty() => format!("HTTP {}", status),
        None => format!("HTTP {} {}", status, status_text),
    }
}

async fn check(response: Response) -> Result<Response, String> {
    if response.ok() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(error_message(
        response.status(),
        &response.status_text(),
        &body,
    ))
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, String> {
    check(response)
        .await?
        .json::<T>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    let response = Request::get(&api_url(path))
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    read_json(response).await
}

pub async fn post_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, String> {
    let response = Request::post(&api_url(path))
        .json(body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    read_json(response).await
}

pub async fn put_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, String> {
    let response = Request::put(&api_url(path))
        .json(body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    read_json(response).await
}

/// PUT whose response body is not needed
pub async fn put(path: &str, body: &impl Serialize) -> Result<(), String> {
    let response = Request::put(&api_url(path))
        .json(body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    check(response).await.map(|_| ())
}

pub async fn delete(path: &str) -> Result<(), String> {
    let response = Request::delete(&api_url(path))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    check(response).await.map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_prefers_server_message() {
        assert_eq!(
            error_message(400, "Bad Request", r#"{"message":"Name is required"}"#),
            "HTTP 400: Name is required"
        );
        assert_eq!(error_message(500, "Internal Server Error", "oops"), "HTTP 500 Internal Server Error");
        assert_eq!(error_message(404, "", ""), "HTTP 404");
    }
}
