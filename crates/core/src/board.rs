//! Board module - the shared, lock-guarded game
//!
//! `Board` is the aggregate every external caller talks to. It is a cheap,
//! cloneable handle around one mutex; each command holds the lock for its
//! whole effect chain (validate -> mutate -> freeze -> clear -> spawn), and
//! snapshots are taken under the same lock, so a renderer never observes a
//! half-applied command.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::error::BoardError;
use crate::game_state::GameState;
use crate::shape::ShapeCatalog;
use crate::snapshot::BoardSnapshot;
use crate::source::ShapeSource;
use crate::types::{Command, CommandOutcome};

#[derive(Debug, Clone)]
pub struct Board {
    inner: Arc<Mutex<GameState>>,
}

impl Board {
    /// Create a board on an empty `width x height` grid
    pub fn new(
        width: u16,
        height: u16,
        catalog: ShapeCatalog,
        source: impl ShapeSource + 'static,
    ) -> Result<Self, BoardError> {
        GameState::new(width, height, catalog, source).map(Self::from_state)
    }

    /// Standard 10x20 board with the seven tetrominoes
    pub fn standard(seed: Option<u64>) -> Self {
        Self::from_state(GameState::standard(seed))
    }

    pub fn from_state(state: GameState) -> Self {
        Self {
            inner: Arc::new(Mutex::new(state)),
        }
    }

    // A panic while holding the lock cannot leave the state half-updated in a
    // way later commands care about, so poisoning is ignored.
    fn lock(&self) -> MutexGuard<'_, GameState> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Apply one command atomically
    pub fn apply_command(&self, command: Command) -> CommandOutcome {
        self.lock().apply(command)
    }

    /// Apply a command given by name; unknown names are ignored
    pub fn apply_named(&self, name: &str) -> Option<CommandOutcome> {
        Command::from_str(name).map(|command| self.apply_command(command))
    }

    /// Run line clearing on its own (normally part of a freeze)
    pub fn clear_lines(&self) -> u32 {
        self.lock().clear_lines()
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        self.lock().snapshot()
    }

    pub fn snapshot_into(&self, out: &mut BoardSnapshot) {
        self.lock().snapshot_into(out);
    }

    pub fn is_over(&self) -> bool {
        self.lock().game_over()
    }

    pub fn score(&self) -> u32 {
        self.lock().score()
    }

    /// Run `f` with exclusive access to the state
    pub fn with_state<R>(&self, f: impl FnOnce(&mut GameState) -> R) -> R {
        f(&mut self.lock())
    }
}
