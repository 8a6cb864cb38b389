//! Board layout: what each cell of the bordered board shows.
//!
//! The bordered board is `height + 2` rows by `width + 2` columns. The outer
//! ring is border; interior cells are filled when the grid or the active piece
//! occupies them. Both the plain text renderer and [`crate::GameView`] are
//! built on top of this.

use crate::core::BoardSnapshot;

/// Content of one bordered-board cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Border,
    /// Frozen into the grid
    Settled,
    /// Covered by the falling piece
    Active,
    Empty,
}

/// Bordered-board dimensions as (rows, cols)
pub fn bordered_size(snap: &BoardSnapshot) -> (usize, usize) {
    (snap.height as usize + 2, snap.width as usize + 2)
}

/// Marker at bordered-board position (row, col)
pub fn marker_at(snap: &BoardSnapshot, row: usize, col: usize) -> Marker {
    let (rows, cols) = bordered_size(snap);
    if row == 0 || col == 0 || row + 1 >= rows || col + 1 >= cols {
        return Marker::Border;
    }

    let (r, c) = (row as i16 - 1, col as i16 - 1);
    if snap.is_settled(r, c) {
        Marker::Settled
    } else if snap.is_active(r, c) {
        Marker::Active
    } else {
        Marker::Empty
    }
}

/// Markers for the full bordered board, row by row
pub fn layout(snap: &BoardSnapshot) -> Vec<Vec<Marker>> {
    let (rows, cols) = bordered_size(snap);
    (0..rows)
        .map(|row| (0..cols).map(|col| marker_at(snap, row, col)).collect())
        .collect()
}

/// Strings used by the plain text renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextMarkers {
    pub border: &'static str,
    pub filled: &'static str,
    pub empty: &'static str,
}

impl Default for TextMarkers {
    fn default() -> Self {
        Self {
            border: "##",
            filled: "[]",
            empty: "  ",
        }
    }
}

impl TextMarkers {
    pub fn get(&self, marker: Marker) -> &'static str {
        match marker {
            Marker::Border => self.border,
            Marker::Settled | Marker::Active => self.filled,
            Marker::Empty => self.empty,
        }
    }
}

/// Bordered grid as text, one line per row, no trailing newline
pub fn render_grid_text(snap: &BoardSnapshot, markers: &TextMarkers) -> String {
    layout(snap)
        .iter()
        .map(|row| row.iter().map(|&m| markers.get(m)).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Bordered grid followed by the score (and a game-over line when finished)
pub fn render_text(snap: &BoardSnapshot, markers: &TextMarkers) -> String {
    let mut out = render_grid_text(snap, markers);
    out.push_str(&format!("\nScore: {}", snap.score));
    if snap.game_over {
        out.push_str("\nGAME OVER");
    }
    out
}
