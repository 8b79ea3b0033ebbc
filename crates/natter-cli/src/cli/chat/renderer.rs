//! Terminal rendering of transcript entries.
//!
//! Each entry prints as a two-space indented `Sender > text` line. The
//! sender color follows the role (green for the user, cyan for the
//! assistant, yellow for client-side notices) and bare URL segments are
//! underlined so they stand out as links.

use console::style;

use natter_types::transcript::{Role, Segment, TranscriptEntry};

/// Sender label on client-side notices (startup and send failures).
pub const SYSTEM_SENDER: &str = "System";

/// Render one transcript entry as a styled terminal line.
pub fn render_entry(entry: &TranscriptEntry) -> String {
    let sender = format!("{} >", entry.sender);
    let styled = match entry.role {
        Role::User => style(sender).green().bold(),
        Role::Assistant if entry.sender == SYSTEM_SENDER => style(sender).yellow().bold(),
        Role::Assistant => style(sender).cyan().bold(),
    };
    format!("  {} {}", styled, render_segments(&entry.segments))
}

/// Flatten segments into one line, underlining link spans.
fn render_segments(segments: &[Segment]) -> String {
    segments
        .iter()
        .map(|segment| match segment {
            Segment::Text(text) => text.clone(),
            Segment::Link(url) => style(url).blue().underlined().to_string(),
        })
        .collect()
}
