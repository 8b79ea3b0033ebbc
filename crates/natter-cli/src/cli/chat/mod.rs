//! Interactive terminal chat session for Natter.
//!
//! This module implements the full chat experience: the welcome banner,
//! the startup greeting with its fallback notice, the input loop with
//! slash commands, paragraph rendering with link highlighting, and
//! transcript export. Entry point: `loop_runner::run_chat_loop`.

pub mod banner;
pub mod commands;
pub mod input;
pub mod loop_runner;
pub mod renderer;

pub use loop_runner::{SessionOverrides, run_chat_loop};
