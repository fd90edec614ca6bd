use contracts::api::IngestRequest;
use serde_json::Value;

use crate::shared::api_client::post_json;

/// `POST /ingest` — run raw text through the service's memory pipeline.
/// The response is the service's ingest summary.
pub async fn ingest(base: &str, request: &IngestRequest) -> Result<Value, String> {
    post_json(base, "/ingest", request).await
}
