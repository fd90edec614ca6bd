use serde::{Deserialize, Serialize};

/// Body of `POST /graph`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphRequest {
    /// Store file path, opaque to the client.
    pub store: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn payload_is_just_the_store() {
        let request = GraphRequest {
            store: crate::api::DEFAULT_STORE.to_string(),
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"store": "data/memories.json"})
        );
    }
}
