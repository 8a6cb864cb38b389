//! Game state module - the board state machine
//!
//! Ties together the grid, the active piece, the shape catalog and scoring.
//! Every command resolves into either a repositioned piece or the
//! freeze -> clear -> spawn cascade. `GameState` itself is unsynchronized;
//! [`crate::Board`] wraps it in the lock shared by the gravity ticker, the
//! input listener and the renderer.

use crate::error::BoardError;
use crate::grid::Grid;
use crate::piece::{self, ActivePiece, Anchor};
use crate::scoring::line_clear_score;
use crate::shape::{Shape, ShapeCatalog};
use crate::snapshot::{ActiveSnapshot, BoardSnapshot};
use crate::source::{RandomShapes, ShapeSource};
use crate::types::{Command, CommandOutcome, DEFAULT_HEIGHT, DEFAULT_WIDTH, MAX_BOARD_DIM};

/// Complete game state
pub struct GameState {
    grid: Grid,
    active: Option<ActivePiece>,
    catalog: ShapeCatalog,
    source: Box<dyn ShapeSource>,
    score: u32,
    lines: u32,
    game_over: bool,
    /// Number of pieces spawned so far (including the current one).
    pieces: u32,
    /// Monotonic change counter, exported in snapshots.
    revision: u64,
}

impl std::fmt::Debug for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameState")
            .field("grid", &self.grid)
            .field("active", &self.active)
            .field("score", &self.score)
            .field("lines", &self.lines)
            .field("game_over", &self.game_over)
            .field("pieces", &self.pieces)
            .field("revision", &self.revision)
            .finish_non_exhaustive()
    }
}

impl GameState {
    /// Create a game on an empty `width x height` grid and spawn the first piece
    pub fn new(
        width: u16,
        height: u16,
        catalog: ShapeCatalog,
        source: impl ShapeSource + 'static,
    ) -> Result<Self, BoardError> {
        if width == 0 || height == 0 {
            return Err(BoardError::ZeroDimension { width, height });
        }
        if width > MAX_BOARD_DIM || height > MAX_BOARD_DIM {
            return Err(BoardError::TooLarge { width, height });
        }
        if let Some((index, shape)) = catalog
            .iter()
            .enumerate()
            .find(|(_, s)| s.cols() > width as usize || s.rows() > height as usize)
        {
            return Err(BoardError::ShapeDoesNotFit {
                index,
                rows: shape.rows(),
                cols: shape.cols(),
            });
        }

        Ok(Self::from_parts(
            Grid::new(width, height),
            catalog,
            Box::new(source),
        ))
    }

    /// Standard 10x20 game with the seven tetrominoes
    pub fn standard(seed: Option<u64>) -> Self {
        Self::from_parts(
            Grid::new(DEFAULT_WIDTH, DEFAULT_HEIGHT),
            ShapeCatalog::standard(),
            Box::new(RandomShapes::new(seed)),
        )
    }

    fn from_parts(grid: Grid, catalog: ShapeCatalog, source: Box<dyn ShapeSource>) -> Self {
        let mut state = Self {
            grid,
            active: None,
            catalog,
            source,
            score: 0,
            lines: 0,
            game_over: false,
            pieces: 0,
            revision: 0,
        };
        state.spawn_piece();
        state
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Direct grid access for setting up positions (tests, puzzles).
    ///
    /// Callers are responsible for not overlapping the active piece.
    pub fn grid_mut(&mut self) -> &mut Grid {
        self.revision = self.revision.wrapping_add(1);
        &mut self.grid
    }

    pub fn active(&self) -> Option<ActivePiece> {
        self.active
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn pieces(&self) -> u32 {
        self.pieces
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn width(&self) -> u16 {
        self.grid.width()
    }

    pub fn height(&self) -> u16 {
        self.grid.height()
    }

    /// Can `shape` legally sit at `anchor`?
    pub fn is_valid(&self, shape: &Shape, anchor: Anchor) -> bool {
        piece::is_valid(&self.grid, shape, anchor)
    }

    /// Apply one command
    pub fn apply(&mut self, command: Command) -> CommandOutcome {
        if self.game_over {
            return CommandOutcome::Ignored;
        }

        match command {
            Command::Left => self.shift(-1),
            Command::Right => self.shift(1),
            Command::Down => self.step_down(),
            Command::Rotate => self.rotate(),
            Command::Terminate => {
                self.game_over = true;
                self.touch();
                CommandOutcome::Terminated
            }
        }
    }

    /// Horizontal move; a blocked shift turns into a downward step.
    fn shift(&mut self, d_col: i16) -> CommandOutcome {
        let Some(active) = self.active else {
            return CommandOutcome::Ignored;
        };

        let candidate = active.anchor.offset(0, d_col);
        if self.is_valid(&active.shape, candidate) {
            self.active = Some(ActivePiece {
                anchor: candidate,
                ..active
            });
            self.touch();
            return CommandOutcome::Moved;
        }

        match self.step_down() {
            CommandOutcome::Moved => CommandOutcome::ShiftBlockedDropped,
            other => other,
        }
    }

    /// Downward step; the only path that freezes a piece.
    fn step_down(&mut self) -> CommandOutcome {
        let Some(active) = self.active else {
            return CommandOutcome::Ignored;
        };

        let candidate = active.anchor.offset(1, 0);
        if self.is_valid(&active.shape, candidate) {
            self.active = Some(ActivePiece {
                anchor: candidate,
                ..active
            });
            self.touch();
            return CommandOutcome::Moved;
        }

        self.freeze()
    }

    /// Clockwise rotation in place, no kicks.
    fn rotate(&mut self) -> CommandOutcome {
        let Some(active) = self.active else {
            return CommandOutcome::Ignored;
        };

        let rotated = active.shape.rotated_cw();
        if !self.is_valid(&rotated, active.anchor) {
            return CommandOutcome::RotationRejected;
        }

        self.active = Some(ActivePiece {
            shape: rotated,
            ..active
        });
        self.touch();
        CommandOutcome::Rotated
    }

    /// Copy the active piece into the grid, clear full rows, spawn the next piece
    pub fn freeze(&mut self) -> CommandOutcome {
        if self.game_over {
            return CommandOutcome::Ignored;
        }
        let Some(active) = self.active.take() else {
            return CommandOutcome::Ignored;
        };

        for (row, col) in active.cells() {
            self.grid.set(row, col, true);
        }
        self.touch();

        let lines_cleared = self.clear_lines();
        if self.spawn_piece() {
            CommandOutcome::Locked { lines_cleared }
        } else {
            CommandOutcome::GameOver { lines_cleared }
        }
    }

    /// Remove full rows and credit the score. Returns the number of rows removed.
    pub fn clear_lines(&mut self) -> u32 {
        let cleared = self.grid.clear_full_rows();
        if cleared > 0 {
            self.lines = self.lines.saturating_add(cleared);
            self.score = self.score.saturating_add(line_clear_score(cleared));
            self.touch();
        }
        cleared
    }

    /// Spawn a new piece from the catalog.
    ///
    /// When the spawn position is already blocked the game ends and no active
    /// piece is left on the board.
    pub fn spawn_piece(&mut self) -> bool {
        let index = self.source.next_index(self.catalog.len());
        let Some(shape) = self.catalog.get(index).or_else(|| self.catalog.get(0)).copied() else {
            self.active = None;
            self.game_over = true;
            self.touch();
            return false;
        };

        let piece = ActivePiece::spawn(shape, self.grid.width());
        self.touch();
        if !piece.is_valid(&self.grid) {
            self.active = None;
            self.game_over = true;
            return false;
        }

        self.active = Some(piece);
        self.pieces = self.pieces.wrapping_add(1);
        true
    }

    fn touch(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }

    /// Refill `out` without reallocating its grid buffer
    pub fn snapshot_into(&self, out: &mut BoardSnapshot) {
        out.width = self.grid.width();
        out.height = self.grid.height();
        out.grid.clear();
        out.grid.extend_from_slice(self.grid.cells());
        out.active = self.active.map(ActiveSnapshot::from);
        out.score = self.score;
        out.lines = self.lines;
        out.game_over = self.game_over;
        out.revision = self.revision;
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        let mut s = BoardSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::standard(None)
    }
}
