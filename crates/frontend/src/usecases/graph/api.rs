use contracts::api::GraphRequest;
use serde_json::Value;

use crate::shared::api_client::post_json;

/// `POST /graph` — fetch the belief graph (nodes and edges) for a store.
pub async fn graph(base: &str, request: &GraphRequest) -> Result<Value, String> {
    post_json(base, "/graph", request).await
}
