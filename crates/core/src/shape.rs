//! Shape module - piece matrices, rotation and the shape catalog
//!
//! A shape is a small rectangular 0/1 matrix. There is no rotation state:
//! rotating a shape produces a brand new matrix (clockwise, i.e. the transpose
//! of the row-reversed matrix), and repeated rotation of a non-square shape is
//! just repeated geometry.

use arrayvec::ArrayVec;

use crate::error::ShapeError;
use crate::types::MAX_SHAPE_DIM;

/// Offset of a single occupied cell relative to the shape's top-left corner
pub type CellOffset = (u8, u8);

/// Occupied cells of a shape, stack-only
pub type ShapeCells = ArrayVec<CellOffset, { MAX_SHAPE_DIM * MAX_SHAPE_DIM }>;

/// A rectangular binary shape matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    rows: u8,
    cols: u8,
    mask: [[bool; MAX_SHAPE_DIM]; MAX_SHAPE_DIM],
}

impl Shape {
    /// Build a shape from rows of 0/1 values
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_core::Shape;
    ///
    /// let t = Shape::from_rows(&[&[1, 1, 1], &[0, 1, 0]]).unwrap();
    /// assert_eq!((t.rows(), t.cols()), (2, 3));
    /// assert!(Shape::from_rows(&[&[1, 1], &[1]]).is_err());
    /// ```
    pub fn from_rows(rows: &[&[u8]]) -> Result<Self, ShapeError> {
        let cols = rows.first().map(|r| r.len()).unwrap_or(0);
        if rows.is_empty() || cols == 0 {
            return Err(ShapeError::Empty);
        }
        if let Some(row) = rows.iter().position(|r| r.len() != cols) {
            return Err(ShapeError::Ragged { row });
        }
        if rows.len() > MAX_SHAPE_DIM || cols > MAX_SHAPE_DIM {
            return Err(ShapeError::TooLarge {
                rows: rows.len(),
                cols,
            });
        }
        if let Some(&value) = rows.iter().flat_map(|r| r.iter()).find(|&&v| v > 1) {
            return Err(ShapeError::NotBinary { value });
        }
        if rows.iter().all(|r| r.iter().all(|&v| v == 0)) {
            return Err(ShapeError::NoCells);
        }
        Ok(Self::build(rows))
    }

    /// Build without validation. Only for the static catalogs below.
    fn build(rows: &[&[u8]]) -> Self {
        let mut mask = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        for (r, cells) in rows.iter().enumerate().take(MAX_SHAPE_DIM) {
            for (c, &v) in cells.iter().enumerate().take(MAX_SHAPE_DIM) {
                mask[r][c] = v != 0;
            }
        }
        Self {
            rows: rows.len().min(MAX_SHAPE_DIM) as u8,
            cols: rows.first().map(|r| r.len()).unwrap_or(0).min(MAX_SHAPE_DIM) as u8,
            mask,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows as usize
    }

    pub fn cols(&self) -> usize {
        self.cols as usize
    }

    /// Whether cell (row, col) of the matrix is occupied
    pub fn get(&self, row: usize, col: usize) -> bool {
        row < self.rows() && col < self.cols() && self.mask[row][col]
    }

    /// Occupied cells in row-major order
    pub fn cells(&self) -> ShapeCells {
        let mut out = ShapeCells::new();
        for r in 0..self.rows {
            for c in 0..self.cols {
                if self.mask[r as usize][c as usize] {
                    out.push((r, c));
                }
            }
        }
        out
    }

    /// Rotate 90° clockwise.
    ///
    /// Cell (r, c) of the result is cell (rows - 1 - c, r) of the original, so
    /// an `R x C` shape becomes `C x R`.
    pub fn rotated_cw(&self) -> Self {
        let mut mask = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        for (r, row) in mask.iter_mut().enumerate().take(self.cols()) {
            for (c, cell) in row.iter_mut().enumerate().take(self.rows()) {
                *cell = self.mask[self.rows() - 1 - c][r];
            }
        }
        Self {
            rows: self.cols,
            cols: self.rows,
            mask,
        }
    }

    /// Render as rows of '#' and '.' (debugging aid)
    pub fn to_rows_string(&self) -> String {
        let mut out = String::with_capacity(self.rows() * (self.cols() + 1));
        for r in 0..self.rows() {
            for c in 0..self.cols() {
                out.push(if self.mask[r][c] { '#' } else { '.' });
            }
            if r + 1 < self.rows() {
                out.push('\n');
            }
        }
        out
    }
}

const I_ROWS: &[&[u8]] = &[&[1, 1, 1, 1]];
const O_ROWS: &[&[u8]] = &[&[1, 1], &[1, 1]];
const T_ROWS: &[&[u8]] = &[&[1, 1, 1], &[0, 1, 0]];
const S_ROWS: &[&[u8]] = &[&[0, 1, 1], &[1, 1, 0]];
const Z_ROWS: &[&[u8]] = &[&[1, 1, 0], &[0, 1, 1]];
const J_ROWS: &[&[u8]] = &[&[1, 1, 1], &[0, 0, 1]];
const L_ROWS: &[&[u8]] = &[&[1, 1, 1], &[1, 0, 0]];

/// Immutable list of shapes new pieces are drawn from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapeCatalog {
    shapes: Vec<Shape>,
}

impl ShapeCatalog {
    /// Build a catalog from caller-supplied shapes (must be non-empty)
    pub fn new(shapes: Vec<Shape>) -> Result<Self, ShapeError> {
        if shapes.is_empty() {
            return Err(ShapeError::EmptyCatalog);
        }
        Ok(Self { shapes })
    }

    /// The seven tetrominoes: I, O, T, S, Z, J, L
    pub fn standard() -> Self {
        Self::from_static(&[I_ROWS, O_ROWS, T_ROWS, S_ROWS, Z_ROWS, J_ROWS, L_ROWS])
    }

    /// The five shapes of the classic terminal game: I, T, J, L, Z
    pub fn classic() -> Self {
        Self::from_static(&[I_ROWS, T_ROWS, J_ROWS, L_ROWS, Z_ROWS])
    }

    /// Look up a catalog by name ("standard" or "classic", case-insensitive)
    pub fn by_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "standard" => Some(Self::standard()),
            "classic" => Some(Self::classic()),
            _ => None,
        }
    }

    fn from_static(table: &[&[&[u8]]]) -> Self {
        Self {
            shapes: table.iter().map(|rows| Shape::build(rows)).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Shape> {
        self.shapes.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Shape> {
        self.shapes.iter()
    }
}

impl Default for ShapeCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
