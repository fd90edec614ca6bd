use serde::{Deserialize, Serialize};

/// Body of `POST /session`.
///
/// A session is a multi-turn reasoning pass over one topic; the optional
/// bounds restrict it to a time range.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionRequest {
    pub topic: String,

    /// Store file path, opaque to the client.
    pub store: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn topic_only_session_omits_the_range_keys() {
        let request = SessionRequest {
            topic: "career".to_string(),
            store: crate::api::DEFAULT_STORE.to_string(),
            start: None,
            end: None,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({"topic": "career", "store": "data/memories.json"})
        );
    }

    #[test]
    fn range_bounds_are_kept_when_supplied() {
        let request = SessionRequest {
            topic: "health".to_string(),
            store: "data/journal.json".to_string(),
            start: Some("2026-01-01T00:00:00".to_string()),
            end: None,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["start"], json!("2026-01-01T00:00:00"));
        assert!(value.get("end").is_none());
    }
}
