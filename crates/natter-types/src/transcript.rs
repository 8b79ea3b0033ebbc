//! Transcript entry types for Natter.
//!
//! A transcript is the append-only sequence of rendered conversation
//! paragraphs. Each entry carries the sender label shown on screen, the
//! speaker role, and its text split into plain and link segments.

use serde::{Deserialize, Serialize};

/// Speaker role of a transcript entry.
///
/// System notices render under a dedicated sender label but still carry
/// [`Role::Assistant`] so they count as assistant output downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One span of a transcript paragraph: plain text or a bare URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum Segment {
    Text(String),
    Link(String),
}

impl Segment {
    /// The raw text of this span, link or not.
    pub fn as_str(&self) -> &str {
        match self {
            Segment::Text(text) | Segment::Link(text) => text,
        }
    }
}

/// A single rendered paragraph of the conversation.
///
/// One reply containing blank-line-separated paragraphs becomes several
/// consecutive entries sharing the same sender and role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptEntry {
    /// Label shown next to the paragraph (user name, assistant label,
    /// or the system notice label).
    pub sender: String,
    pub role: Role,
    pub segments: Vec<Segment>,
}

impl TranscriptEntry {
    /// The full paragraph text with link spans flattened back in place.
    pub fn text(&self) -> String {
        self.segments.iter().map(Segment::as_str).collect()
    }
}
