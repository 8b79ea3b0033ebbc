//! Transcript assembly.
//!
//! Replies arrive as plain text with blank-line paragraph breaks and
//! the occasional bare URL. Appending a message splits it into one
//! entry per paragraph and one segment per text or link span, so the
//! renderer never re-parses anything. The first assistant paragraph to
//! land also unlocks the export action for the rest of the session.

pub mod export;

use once_cell::sync::Lazy;
use regex::Regex;

use natter_types::transcript::{Role, Segment, TranscriptEntry};

/// Runs of two or more newlines separate paragraphs. A single newline
/// stays inside its paragraph.
static PARAGRAPH_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{2,}").unwrap());

/// A bare URL span: an http(s) scheme followed by everything up to the
/// next whitespace. Trailing punctuation rides along on purpose; it is
/// what the product has always linked.
static BARE_URL: Lazy<Regex> = Lazy::new(|| Regex::new(r"https?://\S+").unwrap());

/// Append-only conversation transcript for one session.
#[derive(Debug, Default)]
pub struct Transcript {
    entries: Vec<TranscriptEntry>,
    export_available: bool,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one message, split into per-paragraph entries, and return
    /// the slice of entries this call added.
    ///
    /// Empty or whitespace-only text appends nothing. An assistant-role
    /// call that appends at least one entry makes the export action
    /// available; the flag never reverts for the rest of the session.
    pub fn append(&mut self, sender: &str, role: Role, text: &str) -> &[TranscriptEntry] {
        let start = self.entries.len();
        for paragraph in split_paragraphs(text) {
            self.entries.push(TranscriptEntry {
                sender: sender.to_string(),
                role,
                segments: linkify(paragraph),
            });
        }
        if role == Role::Assistant && self.entries.len() > start {
            self.export_available = true;
        }
        &self.entries[start..]
    }

    /// All entries in render order.
    pub fn entries(&self) -> &[TranscriptEntry] {
        &self.entries
    }

    /// Whether any assistant content has been rendered this session.
    pub fn export_available(&self) -> bool {
        self.export_available
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Split on blank lines, trim each paragraph, and drop empty ones.
fn split_paragraphs(text: &str) -> impl Iterator<Item = &str> {
    PARAGRAPH_BREAK
        .split(text)
        .map(str::trim)
        .filter(|paragraph| !paragraph.is_empty())
}

/// Split a paragraph into plain text and bare-URL link segments.
pub fn linkify(paragraph: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut last = 0;
    for found in BARE_URL.find_iter(paragraph) {
        if found.start() > last {
            segments.push(Segment::Text(paragraph[last..found.start()].to_string()));
        }
        segments.push(Segment::Link(found.as_str().to_string()));
        last = found.end();
    }
    if last < paragraph.len() {
        segments.push(Segment::Text(paragraph[last..].to_string()));
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(entries: &[TranscriptEntry]) -> Vec<String> {
        entries.iter().map(TranscriptEntry::text).collect()
    }

    #[test]
    fn test_append_splits_on_blank_lines() {
        let mut transcript = Transcript::new();

        let added = transcript.append("Assistant", Role::Assistant, "A\n\nB\n\n\nC");
        assert_eq!(texts(added), ["A", "B", "C"]);
        assert_eq!(transcript.len(), 3);
    }

    #[test]
    fn test_single_newline_stays_in_paragraph() {
        let mut transcript = Transcript::new();

        let added = transcript.append("You", Role::User, "line one\nline two");
        assert_eq!(texts(added), ["line one\nline two"]);
    }

    #[test]
    fn test_paragraphs_are_trimmed() {
        let mut transcript = Transcript::new();

        let added = transcript.append("Assistant", Role::Assistant, "  A  \n\n\t B \t");
        assert_eq!(texts(added), ["A", "B"]);
    }

    #[test]
    fn test_blank_text_appends_nothing() {
        let mut transcript = Transcript::new();

        assert!(transcript.append("Assistant", Role::Assistant, "").is_empty());
        assert!(transcript.append("Assistant", Role::Assistant, "  \n\n  ").is_empty());
        assert!(transcript.is_empty());
    }

    #[test]
    fn test_entries_carry_sender_and_role() {
        let mut transcript = Transcript::new();
        transcript.append("Ada", Role::User, "hello");

        let entry = &transcript.entries()[0];
        assert_eq!(entry.sender, "Ada");
        assert_eq!(entry.role, Role::User);
    }

    #[test]
    fn test_export_unlocks_on_assistant_content() {
        let mut transcript = Transcript::new();
        assert!(!transcript.export_available());

        transcript.append("You", Role::User, "hello");
        assert!(!transcript.export_available());

        transcript.append("Assistant", Role::Assistant, "hi");
        assert!(transcript.export_available());
    }

    #[test]
    fn test_export_flag_never_reverts() {
        let mut transcript = Transcript::new();
        transcript.append("Assistant", Role::Assistant, "hi");

        transcript.append("You", Role::User, "more");
        transcript.append("Assistant", Role::Assistant, "   ");
        assert!(transcript.export_available());
    }

    #[test]
    fn test_blank_assistant_text_does_not_unlock_export() {
        let mut transcript = Transcript::new();

        transcript.append("Assistant", Role::Assistant, "\n\n");
        assert!(!transcript.export_available());
    }

    #[test]
    fn test_system_notice_counts_as_assistant_content() {
        let mut transcript = Transcript::new();

        transcript.append("System", Role::Assistant, "Something went wrong.");
        assert!(transcript.export_available());
    }

    #[test]
    fn test_linkify_plain_text() {
        assert_eq!(
            linkify("no links here"),
            [Segment::Text("no links here".to_string())]
        );
    }

    #[test]
    fn test_linkify_splits_around_url() {
        assert_eq!(
            linkify("Visit https://example.com today"),
            [
                Segment::Text("Visit ".to_string()),
                Segment::Link("https://example.com".to_string()),
                Segment::Text(" today".to_string()),
            ]
        );
    }

    #[test]
    fn test_linkify_url_at_edges() {
        assert_eq!(
            linkify("https://a.example http://b.example"),
            [
                Segment::Link("https://a.example".to_string()),
                Segment::Text(" ".to_string()),
                Segment::Link("http://b.example".to_string()),
            ]
        );
    }

    #[test]
    fn test_linkify_keeps_trailing_punctuation_in_link() {
        let segments = linkify("see https://example.com/docs.");

        assert_eq!(
            segments[1],
            Segment::Link("https://example.com/docs.".to_string())
        );
    }

    #[test]
    fn test_linkify_ignores_other_schemes() {
        assert_eq!(
            linkify("ftp://example.com is not linked"),
            [Segment::Text("ftp://example.com is not linked".to_string())]
        );
    }

    #[test]
    fn test_linked_entry_text_is_verbatim() {
        let mut transcript = Transcript::new();

        let added = transcript.append(
            "Assistant",
            Role::Assistant,
            "Book at https://example.com/rooms today",
        );
        assert_eq!(added[0].text(), "Book at https://example.com/rooms today");
    }
}
