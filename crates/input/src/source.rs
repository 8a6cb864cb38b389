//! Command sources polled by the input listener.

use std::collections::VecDeque;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use crate::map::handle_key_event;
use crate::types::Command;

/// Something the input listener can poll for commands.
///
/// `poll_command` waits at most `timeout` so the listener can notice when the
/// game has ended. `Ok(None)` means nothing arrived in time.
pub trait CommandSource: Send {
    fn poll_command(&mut self, timeout: Duration) -> Result<Option<Command>>;
}

/// Reads key presses from the terminal.
#[derive(Debug, Default)]
pub struct TerminalCommands;

impl TerminalCommands {
    pub fn new() -> Self {
        Self
    }
}

impl CommandSource for TerminalCommands {
    fn poll_command(&mut self, timeout: Duration) -> Result<Option<Command>> {
        if !event::poll(timeout)? {
            return Ok(None);
        }

        match event::read()? {
            // Release and auto-repeat reports are dropped; only presses count.
            Event::Key(key) if key.kind == KeyEventKind::Press => Ok(handle_key_event(key)),
            _ => Ok(None),
        }
    }
}

/// Replays a fixed list of commands, then reports nothing.
#[derive(Debug, Clone, Default)]
pub struct ScriptedCommands {
    queue: VecDeque<Command>,
}

impl ScriptedCommands {
    pub fn new(commands: impl IntoIterator<Item = Command>) -> Self {
        Self {
            queue: commands.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

impl CommandSource for ScriptedCommands {
    fn poll_command(&mut self, timeout: Duration) -> Result<Option<Command>> {
        match self.queue.pop_front() {
            Some(command) => Ok(Some(command)),
            None => {
                std::thread::sleep(timeout);
                Ok(None)
            }
        }
    }
}
