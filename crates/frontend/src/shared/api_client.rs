//! Request dispatcher for the memory service.

use contracts::api::ApiError;
use gloo_net::http::Request;
use serde::Serialize;
use serde_json::Value;

/// POST `body` as JSON to `base + path` and parse the JSON response.
///
/// The caller supplies the base URL; the dispatcher never touches
/// storage or configuration itself. One network call per invocation,
/// no retry and no timeout.
pub async fn post_json<T: Serialize>(base: &str, path: &str, body: &T) -> Result<Value, String> {
    let url = format!("{}{}", base, path);
    log::debug!("POST {}", url);

    let response = Request::post(&url)
        .json(body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        let status = response.status();
        // The service reports failures as {"error": "..."} bodies.
        if let Ok(err) = response.json::<ApiError>().await {
            return Err(format!("{} (status {})", err.error, status));
        }
        return Err(format!("Request failed: {}", status));
    }

    response
        .json::<Value>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
