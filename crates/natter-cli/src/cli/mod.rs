//! CLI command definitions for the `natter` binary.
//!
//! Uses clap derive macros for argument parsing. The default workflow is
//! `natter chat` against the configured default profile; everything else
//! is supporting machinery.

pub mod chat;
pub mod profiles;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Chat with a conversational assistant from your terminal.
#[derive(Parser)]
#[command(name = "natter", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start an interactive chat session.
    Chat {
        /// Assistant profile to chat with (defaults to the configured default).
        profile: Option<String>,

        /// Override the profile's chat endpoint URL.
        #[arg(long)]
        endpoint: Option<String>,

        /// Override the assistant's transcript label.
        #[arg(long)]
        label: Option<String>,

        /// Tone preference attached to every message.
        #[arg(long)]
        tone: Option<String>,

        /// Your display name in the transcript.
        #[arg(long)]
        name: Option<String>,
    },

    /// List configured assistant profiles.
    #[command(alias = "ls")]
    Profiles,

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}
