//! Snapshot module - read-only board copies handed to renderers

use crate::piece::ActivePiece;
use crate::shape::Shape;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub shape: Shape,
    pub row: i16,
    pub col: i16,
}

impl From<ActivePiece> for ActiveSnapshot {
    fn from(value: ActivePiece) -> Self {
        Self {
            shape: value.shape,
            row: value.anchor.row,
            col: value.anchor.col,
        }
    }
}

impl ActiveSnapshot {
    /// Whether the piece covers grid cell (row, col)
    pub fn covers(&self, row: i16, col: i16) -> bool {
        let r = row - self.row;
        let c = col - self.col;
        r >= 0 && c >= 0 && self.shape.get(r as usize, c as usize)
    }
}

/// Read-only copy of the board taken under the board lock
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct BoardSnapshot {
    pub width: u16,
    pub height: u16,
    /// Settled cells, row-major
    pub grid: Vec<bool>,
    pub active: Option<ActiveSnapshot>,
    pub score: u32,
    pub lines: u32,
    pub game_over: bool,
    /// Bumped on every state change
    pub revision: u64,
}

impl BoardSnapshot {
    /// Settled (frozen) cell at (row, col); false when out of bounds
    pub fn is_settled(&self, row: i16, col: i16) -> bool {
        if row < 0 || col < 0 || row as u16 >= self.height || col as u16 >= self.width {
            return false;
        }
        self.grid[row as usize * self.width as usize + col as usize]
    }

    /// Active piece cell at (row, col)
    pub fn is_active(&self, row: i16, col: i16) -> bool {
        self.active.map(|a| a.covers(row, col)).unwrap_or(false)
    }
}
