use serde::{Deserialize, Serialize};

use crate::enums::{IngestProfile, MemorySource};

/// Body of `POST /ingest`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngestRequest {
    /// Raw text to run through the memory pipeline.
    pub text: String,

    pub source: MemorySource,

    /// Store file path, opaque to the client.
    pub store: String,

    pub profile: IngestProfile,

    /// ISO 8601 moment; the service stamps the current time when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn blank_timestamp_is_omitted_from_the_wire() {
        let request = IngestRequest {
            text: "Met Ada at the library".to_string(),
            source: MemorySource::Note,
            store: crate::api::DEFAULT_STORE.to_string(),
            profile: IngestProfile::Default,
            timestamp: None,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({
                "text": "Met Ada at the library",
                "source": "note",
                "store": "data/memories.json",
                "profile": "default",
            })
        );
    }

    #[test]
    fn supplied_timestamp_is_kept_verbatim() {
        let request = IngestRequest {
            text: "Draft finished".to_string(),
            source: MemorySource::Chat,
            store: "data/work.json".to_string(),
            profile: IngestProfile::Journal,
            timestamp: Some("2026-08-07T09:30:00".to_string()),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["timestamp"], json!("2026-08-07T09:30:00"));
        assert_eq!(value["source"], json!("chat"));
        assert_eq!(value["profile"], json!("journal"));
    }
}
