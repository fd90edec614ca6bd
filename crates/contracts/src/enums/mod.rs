//! Wire enums shared between the console forms and the memory service.

use serde::{Deserialize, Serialize};

/// Origin channel of an ingested memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MemorySource {
    #[default]
    Note,
    Pdf,
    Tweet,
    Chat,
    Voice,
}

impl MemorySource {
    /// Wire form of the source (lowercase, matches the serde rename).
    pub fn as_str(&self) -> &'static str {
        match self {
            MemorySource::Note => "note",
            MemorySource::Pdf => "pdf",
            MemorySource::Tweet => "tweet",
            MemorySource::Chat => "chat",
            MemorySource::Voice => "voice",
        }
    }

    /// Display name for the UI.
    pub fn label(&self) -> &'static str {
        match self {
            MemorySource::Note => "Note",
            MemorySource::Pdf => "PDF",
            MemorySource::Tweet => "Tweet",
            MemorySource::Chat => "Chat",
            MemorySource::Voice => "Voice",
        }
    }

    /// Parse the wire form; unknown strings fall back to the default.
    pub fn from_str(s: &str) -> Self {
        match s {
            "pdf" => MemorySource::Pdf,
            "tweet" => MemorySource::Tweet,
            "chat" => MemorySource::Chat,
            "voice" => MemorySource::Voice,
            _ => MemorySource::Note,
        }
    }

    /// All sources the service accepts.
    pub fn all() -> [MemorySource; 5] {
        [
            MemorySource::Note,
            MemorySource::Pdf,
            MemorySource::Tweet,
            MemorySource::Chat,
            MemorySource::Voice,
        ]
    }
}

/// Ingestion processing mode; semantics are owned by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum IngestProfile {
    #[default]
    Default,
    Journal,
    Research,
}

impl IngestProfile {
    /// Wire form of the profile (lowercase, matches the serde rename).
    pub fn as_str(&self) -> &'static str {
        match self {
            IngestProfile::Default => "default",
            IngestProfile::Journal => "journal",
            IngestProfile::Research => "research",
        }
    }

    /// Display name for the UI.
    pub fn label(&self) -> &'static str {
        match self {
            IngestProfile::Default => "Default",
            IngestProfile::Journal => "Journal",
            IngestProfile::Research => "Research",
        }
    }

    /// Parse the wire form; unknown strings fall back to the default.
    pub fn from_str(s: &str) -> Self {
        match s {
            "journal" => IngestProfile::Journal,
            "research" => IngestProfile::Research,
            _ => IngestProfile::Default,
        }
    }

    /// All profiles the service accepts.
    pub fn all() -> [IngestProfile; 3] {
        [
            IngestProfile::Default,
            IngestProfile::Journal,
            IngestProfile::Research,
        ]
    }
}
