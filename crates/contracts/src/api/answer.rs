use serde::{Deserialize, Serialize};

/// Body of `POST /answer`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerRequest {
    pub question: String,

    /// Store file path, opaque to the client.
    pub store: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_matches_the_service_contract() {
        let request = AnswerRequest {
            question: "What did I do today?".to_string(),
            store: crate::api::DEFAULT_STORE.to_string(),
        };
        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"question":"What did I do today?","store":"data/memories.json"}"#
        );
    }
}
