use serde::Deserialize;
use thiserror::Error;

/// Number of characters kept when abbreviating a revision
pub const REVISION_ABBREV_LEN: usize = 7;

/// A ref change as published on the event feed.
///
/// Field names on the wire are capitalized (`User`, `RefName`, `CheckedOut`).
/// Unknown fields are ignored so newer publishers stay compatible.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ChangeEvent {
    pub user: String,
    pub ref_name: String,
    pub checked_out: bool,
    /// Name of the repository directory on the publishing host
    #[serde(default)]
    pub repo_name: Option<String>,
    #[serde(default)]
    pub prev: Option<String>,
    #[serde(default)]
    pub current: Option<String>,
}

/// Why a frame could not be turned into a [`ChangeEvent`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("malformed change event: {0}")]
    Malformed(String),

    #[error("binary frame is not valid UTF-8")]
    NotUtf8,
}

impl ChangeEvent {
    /// Decode one text frame.
    ///
    /// Fails on invalid JSON, non-object payloads, missing required fields
    /// and wrongly typed fields.
    pub fn decode(raw: &str) -> Result<Self, DecodeError> {
        serde_json::from_str(raw).map_err(|e| DecodeError::Malformed(e.to_string()))
    }

    /// Decode a binary frame, which must carry UTF-8 JSON
    pub fn decode_bytes(raw: &[u8]) -> Result<Self, DecodeError> {
        let text = std::str::from_utf8(raw).map_err(|_| DecodeError::NotUtf8)?;
        Self::decode(text)
    }

    /// Repository name, if the publisher sent a non-empty one
    pub fn repo(&self) -> Option<&str> {
        self.repo_name.as_deref().filter(|s| !s.is_empty())
    }

    /// Abbreviated `prev..current` range, when both revisions are known
    pub fn revision_range(&self) -> Option<String> {
        let prev = self.prev.as_deref().filter(|s| !s.is_empty())?;
        let current = self.current.as_deref().filter(|s| !s.is_empty())?;
        Some(format!("{}..{}", abbreviate(prev), abbreviate(current)))
    }
}

fn abbreviate(revision: &str) -> &str {
    match revision.char_indices().nth(REVISION_ABBREV_LEN) {
        Some((idx, _)) => &revision[..idx],
        None => revision,
    }
}

#[cfg(test)]
#[path = "change_event_tests.rs"]
mod change_event_tests;
