use contracts::api::AnswerRequest;
use serde_json::Value;

use crate::shared::api_client::post_json;

/// `POST /answer` — ask a one-shot question over the store.
pub async fn answer(base: &str, request: &AnswerRequest) -> Result<Value, String> {
    post_json(base, "/answer", request).await
}
