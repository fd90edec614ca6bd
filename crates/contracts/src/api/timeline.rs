use serde::{Deserialize, Serialize};

/// Body of `POST /timeline`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineRequest {
    /// Store file path, opaque to the client.
    pub store: String,

    /// Restricts the timeline to memories tagged with this topic.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn blank_topic_is_omitted_from_the_wire() {
        let request = TimelineRequest {
            store: crate::api::DEFAULT_STORE.to_string(),
            topic: None,
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"store": "data/memories.json"})
        );
    }

    #[test]
    fn topic_filter_is_kept_when_supplied() {
        let request = TimelineRequest {
            store: crate::api::DEFAULT_STORE.to_string(),
            topic: Some("travel".to_string()),
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"store": "data/memories.json", "topic": "travel"})
        );
    }
}
