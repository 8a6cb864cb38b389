//! Grid module - the settled-cell matrix
//!
//! The grid is a fixed `height x width` matrix where each cell is either
//! occupied or empty. Uses a flat row-major vector for cache locality.
//! Coordinates: (row, col) where row grows downwards from 0 and col grows
//! rightwards from 0.

/// The settled-cell grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: u16,
    height: u16,
    /// Flat array of cells, row-major order (row * width + col)
    cells: Vec<bool>,
}

impl Grid {
    /// Create a new empty grid
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![false; width as usize * height as usize],
        }
    }

    /// Calculate flat index from (row, col) coordinates
    #[inline(always)]
    fn index(&self, row: i16, col: i16) -> Option<usize> {
        if row < 0 || col < 0 || row as u16 >= self.height || col as u16 >= self.width {
            return None;
        }
        Some(row as usize * self.width as usize + col as usize)
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Get cell at (row, col)
    /// Returns None if out of bounds
    pub fn get(&self, row: i16, col: i16) -> Option<bool> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    /// Set cell at (row, col)
    /// Returns false if out of bounds
    pub fn set(&mut self, row: i16, col: i16, occupied: bool) -> bool {
        match self.index(row, col) {
            Some(idx) => {
                self.cells[idx] = occupied;
                true
            }
            None => false,
        }
    }

    /// Check if position is within bounds and empty
    pub fn is_free(&self, row: i16, col: i16) -> bool {
        matches!(self.get(row, col), Some(false))
    }

    /// Check if position is within bounds and occupied
    pub fn is_occupied(&self, row: i16, col: i16) -> bool {
        matches!(self.get(row, col), Some(true))
    }

    /// Borrow one row of cells
    pub fn row(&self, row: usize) -> Option<&[bool]> {
        if row >= self.height as usize {
            return None;
        }
        let start = row * self.width as usize;
        Some(&self.cells[start..start + self.width as usize])
    }

    /// Iterate rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> + '_ {
        // chunks_exact panics on a zero chunk size.
        self.cells.chunks_exact(self.width.max(1) as usize)
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, row: usize) -> bool {
        self.row(row)
            .map(|cells| cells.iter().all(|&c| c))
            .unwrap_or(false)
    }

    /// Remove every full row and compact the rest downwards.
    ///
    /// The new grid is rebuilt in one pass: empty rows on top (one per removed
    /// row), followed by the surviving rows in their original order. Returns
    /// the number of rows removed.
    pub fn clear_full_rows(&mut self) -> u32 {
        let width = self.width as usize;
        if width == 0 {
            return 0;
        }

        let height = self.height as usize;
        let full = (0..height).filter(|&row| self.is_row_full(row)).count();
        if full == 0 {
            return 0;
        }

        let mut compacted = vec![false; full * width];
        compacted.reserve(self.cells.len() - compacted.len());
        for (row, cells) in self.rows().enumerate() {
            if !self.is_row_full(row) {
                compacted.extend_from_slice(cells);
            }
        }

        self.cells = compacted;
        full as u32
    }

    /// Number of occupied cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// Create from rows of 0/1 values for testing
    #[cfg(test)]
    pub fn from_rows(rows: &[&[u8]]) -> Self {
        let height = rows.len() as u16;
        let width = rows.first().map(|r| r.len()).unwrap_or(0) as u16;
        assert!(rows.iter().all(|r| r.len() == width as usize));

        let mut grid = Self::new(width, height);
        for (row, cells) in rows.iter().enumerate() {
            for (col, &v) in cells.iter().enumerate() {
                grid.set(row as i16, col as i16, v != 0);
            }
        }
        grid
    }
}
