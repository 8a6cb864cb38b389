//! Core types module - shared commands, outcomes and constants
//!
//! This module defines the vocabulary shared by the engine, the input layer,
//! the renderer and the driver loop. Everything here is plain data with no
//! external dependencies.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9, left to right)
//! - **Height**: 20 rows (indexed 0-19, top to bottom)
//! - **Spawn position**: row 0, column `width / 2 - shape_width / 2`
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `GRAVITY_MS` | 500 | Interval between gravity "down" commands |
//! | `FRAME_MS` | 33 | Render loop interval (~30 FPS) |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{Command, DEFAULT_HEIGHT, DEFAULT_WIDTH};
//!
//! assert_eq!(Command::from_str("left"), Some(Command::Left));
//! assert_eq!(Command::from_str("w"), Some(Command::Rotate));
//! assert_eq!(Command::from_str("jump"), None);
//!
//! assert_eq!(DEFAULT_WIDTH, 10);
//! assert_eq!(DEFAULT_HEIGHT, 20);
//! ```

/// Default board width in cells
pub const DEFAULT_WIDTH: u16 = 10;

/// Default board height in cells
pub const DEFAULT_HEIGHT: u16 = 20;

/// Gravity interval in milliseconds (one "down" command per tick)
pub const GRAVITY_MS: u64 = 500;

/// Render loop interval in milliseconds
pub const FRAME_MS: u64 = 33;

/// Points credited per cleared row.
///
/// Flat rate: clearing N rows at once scores `N * LINE_CLEAR_SCORE`.
pub const LINE_CLEAR_SCORE: u32 = 100;

/// Largest supported board width or height.
///
/// Anchors and cell coordinates are `i16`, so every cell must be addressable
/// as one.
pub const MAX_BOARD_DIM: u16 = i16::MAX as u16;

/// Largest supported shape matrix side (rows and columns)
pub const MAX_SHAPE_DIM: usize = 4;

/// Commands accepted by the board
///
/// Both the gravity ticker and the input listener speak this vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Shift one column left (falls back to a downward step when blocked)
    Left,
    /// Shift one column right (falls back to a downward step when blocked)
    Right,
    /// Step one row down (freezes the piece when blocked)
    Down,
    /// Rotate 90° clockwise, no wall kicks
    Rotate,
    /// End the game
    Terminate,
}

impl Command {
    /// All commands, in declaration order
    pub const ALL: [Command; 5] = [
        Command::Left,
        Command::Right,
        Command::Down,
        Command::Rotate,
        Command::Terminate,
    ];

    /// Parse a command name (case-insensitive)
    ///
    /// Accepts full names and the classic single-letter keys
    /// (`a` left, `d` right, `s` down, `w` rotate, `q` terminate).
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::Command;
    ///
    /// assert_eq!(Command::from_str("RIGHT"), Some(Command::Right));
    /// assert_eq!(Command::from_str("s"), Some(Command::Down));
    /// assert_eq!(Command::from_str("quit"), Some(Command::Terminate));
    /// assert_eq!(Command::from_str(""), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "left" | "a" => Some(Command::Left),
            "right" | "d" => Some(Command::Right),
            "down" | "s" => Some(Command::Down),
            "rotate" | "w" => Some(Command::Rotate),
            "terminate" | "quit" | "q" => Some(Command::Terminate),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::Left => "left",
            Command::Right => "right",
            Command::Down => "down",
            Command::Rotate => "rotate",
            Command::Terminate => "terminate",
        }
    }
}

/// What a single command did to the board
///
/// Callers (gravity ticker, input listener) only need "processed"; the
/// outcome exists for logging and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    /// The anchor moved one cell
    Moved,
    /// The shape was replaced by its rotation
    Rotated,
    /// The rotated shape did not fit; nothing changed
    RotationRejected,
    /// A sideways move was blocked and the piece stepped down instead
    ShiftBlockedDropped,
    /// The piece froze into the grid and a new piece spawned
    Locked { lines_cleared: u32 },
    /// The piece froze but the next piece could not spawn
    GameOver { lines_cleared: u32 },
    /// A terminate command ended the game
    Terminated,
    /// The command had no effect (game already over)
    Ignored,
}

impl CommandOutcome {
    /// Convert to snake_case string for logs
    pub fn as_str(&self) -> &'static str {
        match self {
            CommandOutcome::Moved => "moved",
            CommandOutcome::Rotated => "rotated",
            CommandOutcome::RotationRejected => "rotation_rejected",
            CommandOutcome::ShiftBlockedDropped => "shift_blocked_dropped",
            CommandOutcome::Locked { .. } => "locked",
            CommandOutcome::GameOver { .. } => "game_over",
            CommandOutcome::Terminated => "terminated",
            CommandOutcome::Ignored => "ignored",
        }
    }

    /// Rows cleared by this command (zero unless the piece froze)
    pub fn lines_cleared(&self) -> u32 {
        match *self {
            CommandOutcome::Locked { lines_cleared }
            | CommandOutcome::GameOver { lines_cleared } => lines_cleared,
            _ => 0,
        }
    }

    /// Whether the game ended as a result of this command
    pub fn ends_game(&self) -> bool {
        matches!(
            self,
            CommandOutcome::GameOver { .. } | CommandOutcome::Terminated
        )
    }
}
