use contracts::api::SessionRequest;
use serde_json::Value;

use crate::shared::api_client::post_json;

/// `POST /session` — run a thinking session over a topic, optionally
/// bounded to a time range.
pub async fn session(base: &str, request: &SessionRequest) -> Result<Value, String> {
    post_json(base, "/session", request).await
}
