//! Main chat loop orchestration.
//!
//! Coordinates the conversation lifecycle: profile resolution, session
//! preference seeding, the startup greeting with its fallback notice,
//! the input loop with slash commands, and transcript export.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use chrono::{DateTime, Utc};
use console::style;
use tracing::{info, warn};

use natter_core::conversation::{ConversationClient, ConversationService};
use natter_core::session::{SessionStore, keys, prefs};
use natter_core::transcript::{Transcript, export};
use natter_infra::http::HttpConversationClient;
use natter_infra::session::InMemorySessionStore;
use natter_types::config::NatterConfig;
use natter_types::error::ConversationError;
use natter_types::transcript::Role;

use super::banner::print_welcome_banner;
use super::commands::{self, ChatCommand};
use super::input::{ChatInput, InputEvent, chat_prompt};
use super::renderer::{self, SYSTEM_SENDER};

/// Notice rendered when the startup greeting cannot be fetched.
const STARTUP_NOTICE: &str = "Failed to start the assistant.";

/// Notice rendered when a send fails mid-conversation.
const SEND_NOTICE: &str = "Unable to connect to the assistant. Please try again.";

/// The concrete service the chat loop drives.
type CliService = ConversationService<HttpConversationClient, InMemorySessionStore>;

/// Command-line overrides applied on top of the selected profile.
#[derive(Debug, Default)]
pub struct SessionOverrides {
    pub endpoint: Option<String>,
    pub label: Option<String>,
    pub tone: Option<String>,
    pub name: Option<String>,
}

/// Run the interactive chat session.
pub async fn run_chat_loop(
    config: &NatterConfig,
    profile_name: Option<&str>,
    overrides: SessionOverrides,
) -> anyhow::Result<()> {
    // Resolve the assistant profile, then let flags win over the file
    let profile = config
        .select_profile(profile_name)
        .with_context(|| match profile_name {
            Some(name) => format!("Profile '{name}' not found. Run: natter profiles"),
            None => "No assistant profiles configured".to_string(),
        })?;
    let profile_slug = profile.name.clone();
    let mut assistant = profile.assistant_config();
    if let Some(endpoint) = overrides.endpoint {
        assistant.endpoint = endpoint;
    }
    if let Some(label) = overrides.label {
        assistant.label = label;
    }

    // Seed session preferences before the first exchange
    let store = InMemorySessionStore::new();
    if let Some(name) = overrides.name.or_else(|| config.user.name.clone()) {
        store.set(keys::USER_NAME, name);
    }
    if let Some(tone) = overrides.tone.or_else(|| config.user.tone.clone()) {
        store.set(keys::USER_TONE, tone);
    }

    let client = HttpConversationClient::new(assistant.endpoint.clone());
    let service = CliService::new(client, store.clone());
    let mut transcript = Transcript::new();
    let started_at = Utc::now();

    let user_id = service.identity();
    info!(user_id = %user_id, endpoint = %assistant.endpoint, "chat session starting");
    print_welcome_banner(&assistant.label, &assistant.endpoint, &user_id);

    // Startup greeting; a failure becomes a notice, never an exit
    open_conversation(&mut transcript, &service, &assistant.label).await;

    // Input loop
    let display_name = prefs::display_name(&store);
    let (mut chat_input, _writer) = ChatInput::new(chat_prompt(&display_name))
        .map_err(|e| anyhow::anyhow!("Failed to initialize input: {e}"))?;

    loop {
        let event = chat_input.read_line().await;
        match event {
            InputEvent::Eof => {
                println!("\n  {}", style("Session ended.").dim());
                break;
            }
            InputEvent::Interrupted => {
                println!(
                    "\n  {}",
                    style("Press Ctrl+D to exit, or keep chatting.").dim()
                );
                continue;
            }
            InputEvent::Message(text) => {
                if let Some(cmd) = commands::parse(&text) {
                    match cmd {
                        ChatCommand::Help => {
                            commands::print_help();
                            continue;
                        }
                        ChatCommand::Clear => {
                            chat_input.clear();
                            continue;
                        }
                        ChatCommand::Exit => {
                            println!("\n  {}", style("Session ended.").dim());
                            break;
                        }
                        ChatCommand::Export(path) => {
                            export_transcript(
                                &transcript,
                                &assistant.label,
                                &profile_slug,
                                started_at,
                                path,
                            )
                            .await;
                            continue;
                        }
                        ChatCommand::Forget => {
                            forget_history(&service).await;
                            continue;
                        }
                        ChatCommand::Unknown(cmd_name) => {
                            println!(
                                "\n  {} Unknown command: {}. Type /help for available commands.\n",
                                style("?").yellow().bold(),
                                style(cmd_name).dim()
                            );
                            continue;
                        }
                    }
                }

                exchange_message(&mut transcript, &service, &display_name, &assistant.label, &text)
                    .await;
            }
        }
    }

    Ok(())
}

/// Fetch the startup greeting and render it, or the startup notice on
/// failure. The session continues either way.
async fn open_conversation<C, S>(
    transcript: &mut Transcript,
    service: &ConversationService<C, S>,
    assistant_label: &str,
) where
    C: ConversationClient,
    S: SessionStore + Clone,
{
    let spinner = thinking_spinner("connecting...");
    let result = service.greet().await;
    spinner.finish_and_clear();

    match result {
        Ok(greeting) => print_entries(transcript, assistant_label, Role::Assistant, &greeting),
        Err(e) => {
            warn!(error = %e, "startup greeting failed");
            print_entries(transcript, SYSTEM_SENDER, Role::Assistant, failure_notice(&e));
        }
    }
    println!();
}

/// Run one submitted chat line through the conversation.
///
/// Empty or whitespace-only input is dropped without a transcript entry
/// or a request. Anything else is recorded as the user's entry (the
/// readline echo already shows the line, so it is not re-printed), sent,
/// and answered with the rendered reply or the send notice.
async fn exchange_message<C, S>(
    transcript: &mut Transcript,
    service: &ConversationService<C, S>,
    display_name: &str,
    assistant_label: &str,
    text: &str,
) where
    C: ConversationClient,
    S: SessionStore + Clone,
{
    let text = text.trim();
    if text.is_empty() {
        return;
    }

    transcript.append(display_name, Role::User, text);

    let spinner = thinking_spinner("thinking...");
    let result = service.send(text).await;
    spinner.finish_and_clear();

    println!();
    match result {
        Ok(reply) => print_entries(transcript, assistant_label, Role::Assistant, &reply),
        Err(e) => {
            warn!(error = %e, "send failed");
            print_entries(transcript, SYSTEM_SENDER, Role::Assistant, failure_notice(&e));
        }
    }
    println!();
}

/// Notice text shown in place of a reply, by failure kind.
fn failure_notice(error: &ConversationError) -> &'static str {
    match error {
        ConversationError::Startup(_) => STARTUP_NOTICE,
        ConversationError::Send(_) => SEND_NOTICE,
    }
}

/// Spawn a steady-tick spinner with the shared chat styling.
fn thinking_spinner(message: &'static str) -> indicatif::ProgressBar {
    let spinner = indicatif::ProgressBar::new_spinner();
    spinner.set_style(
        indicatif::ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap(),
    );
    spinner.set_message(message);
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}

/// Append a message to the transcript and print the new entries.
fn print_entries(transcript: &mut Transcript, sender: &str, role: Role, text: &str) {
    for entry in transcript.append(sender, role, text) {
        println!("{}", renderer::render_entry(entry));
    }
}

/// Write the transcript to disk as Markdown.
async fn export_transcript(
    transcript: &Transcript,
    label: &str,
    profile_slug: &str,
    started_at: DateTime<Utc>,
    path: Option<String>,
) {
    if !transcript.export_available() {
        println!(
            "\n  {} Nothing to export yet. Wait for the assistant to reply.\n",
            style("!").yellow().bold()
        );
        return;
    }

    let path = path.map(PathBuf::from).unwrap_or_else(|| {
        PathBuf::from(format!(
            "natter-{profile_slug}-{}.md",
            chrono::Local::now().format("%Y%m%d-%H%M%S")
        ))
    });

    let document = export::render_markdown(transcript, label, started_at);
    match tokio::fs::write(&path, document).await {
        Ok(()) => {
            info!(path = %path.display(), "transcript exported");
            println!(
                "\n  {} Exported {} entr{} to {}\n",
                style("*").cyan().bold(),
                style(transcript.len()).bold(),
                if transcript.len() == 1 { "y" } else { "ies" },
                style(path.display()).yellow()
            );
        }
        Err(e) => {
            println!(
                "\n  {} Failed to write {}: {e}\n",
                style("!").red().bold(),
                path.display()
            );
        }
    }
}

/// Ask the endpoint to drop the stored conversation history.
async fn forget_history(service: &CliService) {
    match service.forget().await {
        Ok(ack) => {
            let text = ack
                .message
                .unwrap_or_else(|| format!("History reset ({}).", ack.status));
            println!("\n  {} {}\n", style("*").cyan().bold(), text);
        }
        Err(e) => {
            warn!(error = %e, "history reset failed");
            println!(
                "\n  {} Unable to reset history. Please try again.\n",
                style("!").red().bold()
            );
        }
    }
}
