//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::Command`] and exposes the
//! [`CommandSource`] the input listener polls.

pub mod map;
pub mod source;

pub use blockfall_types as types;

pub use map::{handle_key_event, should_quit};
pub use source::{CommandSource, ScriptedCommands, TerminalCommands};
