//! Core game logic module - the falling-block board state machine
//!
//! This module contains the grid, the shape catalog, collision checking,
//! command processing, freezing, line clearing and scoring. It has **zero
//! dependencies** on terminals or I/O: the gravity ticker, the input listener
//! and the renderer all live outside and talk to a [`Board`].
//!
//! # Module Structure
//!
//! - [`grid`]: fixed-size settled-cell matrix with atomic line compaction
//! - [`shape`]: binary shape matrices, clockwise rotation, shape catalogs
//! - [`piece`]: the active piece, its anchor and the placement check
//! - [`source`]: uniform random and deterministic shape sources
//! - [`scoring`]: flat 100 points per cleared row
//! - [`game_state`]: the unsynchronized state machine
//! - [`board`]: the lock-guarded aggregate shared by all callers
//! - [`snapshot`]: read-only copies for rendering
//!
//! # Game Rules
//!
//! - **Left / Right**: shift one column; when blocked, step down instead
//! - **Down**: step one row; when blocked, freeze the piece
//! - **Rotate**: clockwise, rejected outright when it does not fit (no kicks)
//! - **Freeze**: copy cells into the grid, clear full rows, spawn the next
//!   piece at row 0, horizontally centred
//! - **Game over**: a terminate command, or a spawn position that is already
//!   blocked
//!
//! # Example
//!
//! ```
//! use blockfall_core::{Board, SequenceShapes, ShapeCatalog};
//! use blockfall_types::{Command, CommandOutcome};
//!
//! // Always spawn the I piece.
//! let board = Board::new(10, 20, ShapeCatalog::standard(), SequenceShapes::repeat(0)).unwrap();
//! assert_eq!(board.snapshot().active.unwrap().col, 3);
//!
//! for _ in 0..19 {
//!     assert_eq!(board.apply_command(Command::Down), CommandOutcome::Moved);
//! }
//! assert_eq!(
//!     board.apply_command(Command::Down),
//!     CommandOutcome::Locked { lines_cleared: 0 }
//! );
//! assert_eq!(board.score(), 0);
//! ```

pub mod board;
pub mod error;
pub mod game_state;
pub mod grid;
pub mod piece;
pub mod scoring;
pub mod shape;
pub mod snapshot;
pub mod source;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use error::{BoardError, ShapeError};
pub use game_state::GameState;
pub use grid::Grid;
pub use piece::{is_valid, ActivePiece, Anchor};
pub use scoring::line_clear_score;
pub use shape::{Shape, ShapeCatalog};
pub use snapshot::{ActiveSnapshot, BoardSnapshot};
pub use source::{RandomShapes, SequenceShapes, ShapeSource};
