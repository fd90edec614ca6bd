//! Request bodies for the memory service's POST endpoints.

use serde::{Deserialize, Serialize};

pub mod answer;
pub mod graph;
pub mod ingest;
pub mod session;
pub mod timeline;

pub use answer::AnswerRequest;
pub use graph::GraphRequest;
pub use ingest::IngestRequest;
pub use session::SessionRequest;
pub use timeline::TimelineRequest;

/// Store file the service falls back to when a form leaves it blank.
pub const DEFAULT_STORE: &str = "data/memories.json";

/// Error body the service returns alongside non-2xx statuses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
}
