//! Welcome banner for chat sessions.

use console::style;

/// Print the styled banner at the start of a chat session.
///
/// Shows the assistant label, the endpoint it answers from, the session
/// identity, and a hint about slash commands.
pub fn print_welcome_banner(label: &str, endpoint: &str, user_id: &str) {
    println!();
    println!("  {}", style(label).cyan().bold());
    println!("  {}", style(endpoint).dim());
    println!();
    println!("  {}  {}", style("Session:").bold(), style(user_id).dim());
    println!();
    println!(
        "  {}",
        style("Type /help for commands, Ctrl+D to exit").dim()
    );
    println!("  {}", style("---").dim());
    println!();
}
