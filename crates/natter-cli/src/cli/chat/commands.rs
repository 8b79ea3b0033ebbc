//! Slash command parsing for the chat loop.
//!
//! Commands start with `/` and provide in-chat controls for transcript
//! export, remote history reset, and session management.

use console::style;

/// Available slash commands in the chat loop.
#[derive(Debug, PartialEq)]
pub enum ChatCommand {
    /// Show available commands.
    Help,
    /// Write the transcript to a Markdown file (optional path).
    Export(Option<String>),
    /// Ask the endpoint to drop the stored conversation history.
    Forget,
    /// Clear the terminal screen.
    Clear,
    /// Exit the chat session.
    Exit,
    /// Unknown command.
    Unknown(String),
}

/// Command names and descriptions, in help order.
const HELP_ROWS: [(&str, &str); 5] = [
    ("/help", "Show this help message"),
    ("/export [path]", "Save the transcript as Markdown"),
    ("/forget", "Ask the assistant to forget this conversation"),
    ("/clear", "Clear the screen"),
    ("/exit", "End the chat session"),
];

/// Parse user input as a slash command.
///
/// Returns `None` if the input doesn't start with `/`. The argument, if
/// any, is whatever follows the first space, trimmed; a present-but-blank
/// argument counts as absent.
pub fn parse(input: &str) -> Option<ChatCommand> {
    let trimmed = input.trim();
    if !trimmed.starts_with('/') {
        return None;
    }

    let (name, rest) = trimmed.split_once(' ').unwrap_or((trimmed, ""));
    let arg = Some(rest.trim().to_string()).filter(|a| !a.is_empty());

    match name.to_lowercase().as_str() {
        "/help" | "/h" | "/?" => Some(ChatCommand::Help),
        "/export" => Some(ChatCommand::Export(arg)),
        "/forget" => Some(ChatCommand::Forget),
        "/clear" | "/cls" => Some(ChatCommand::Clear),
        "/exit" | "/quit" | "/q" => Some(ChatCommand::Exit),
        other => Some(ChatCommand::Unknown(other.to_string())),
    }
}

/// Print the help text listing all available commands.
pub fn print_help() {
    let width = HELP_ROWS
        .iter()
        .map(|(name, _)| name.len())
        .max()
        .unwrap_or(0);

    println!();
    println!("  {}", style("Available commands:").bold());
    println!();
    for (name, description) in HELP_ROWS {
        println!("  {}  {description}", style(format!("{name:width$}")).cyan());
    }
    println!();
    println!(
        "  {}",
        style("Ctrl+D to exit, Ctrl+C safe (no message loss)").dim()
    );
    println!();
}
