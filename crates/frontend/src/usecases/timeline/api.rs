use contracts::api::TimelineRequest;
use serde_json::Value;

use crate::shared::api_client::post_json;

/// `POST /timeline` — fetch memories in chronological order, optionally
/// filtered by topic.
pub async fn timeline(base: &str, request: &TimelineRequest) -> Result<Value, String> {
    post_json(base, "/timeline", request).await
}
