//! Markdown rendering of a transcript.
//!
//! The export reads the way the conversation did on screen: a small
//! metadata header, then one bold-sender paragraph per entry. Link
//! segments become autolinks so they stay clickable in the document.

use chrono::{DateTime, Utc};

use natter_types::transcript::{Segment, TranscriptEntry};

use super::Transcript;

/// Render a transcript as a Markdown document.
pub fn render_markdown(
    transcript: &Transcript,
    assistant_label: &str,
    started_at: DateTime<Utc>,
) -> String {
    let mut doc = String::new();

    doc.push_str(&format!("# Conversation with {assistant_label}\n"));
    doc.push('\n');
    doc.push_str(&format!(
        "- **Started:** {}\n",
        started_at.format("%Y-%m-%d %H:%M UTC")
    ));
    doc.push_str(&format!("- **Entries:** {}\n", transcript.len()));
    doc.push('\n');
    doc.push_str("---\n");
    doc.push('\n');

    for entry in transcript.entries() {
        doc.push_str(&format!("**{}:** {}\n", entry.sender, entry_markdown(entry)));
        doc.push('\n');
    }

    doc
}

/// Entry text with link segments rendered as autolinks.
fn entry_markdown(entry: &TranscriptEntry) -> String {
    entry
        .segments
        .iter()
        .map(|segment| match segment {
            Segment::Text(text) => text.clone(),
            Segment::Link(url) => format!("<{url}>"),
        })
        .collect()
}
