//! Construction-time errors
//!
//! Gameplay itself never fails: an invalid placement is just `false` from the
//! collision check. These errors only come from building shapes, catalogs and
//! boards out of caller-supplied data.

use std::fmt;

/// Why a shape matrix or shape catalog was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShapeError {
    /// The matrix has no rows or no columns
    Empty,
    /// Row `row` has a different length from row 0
    Ragged { row: usize },
    /// The matrix is larger than the supported maximum
    TooLarge { rows: usize, cols: usize },
    /// A cell holds something other than 0 or 1
    NotBinary { value: u8 },
    /// Every cell is 0
    NoCells,
    /// A catalog needs at least one shape
    EmptyCatalog,
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeError::Empty => write!(f, "shape matrix is empty"),
            ShapeError::Ragged { row } => {
                write!(f, "shape row {} has a different length from row 0", row)
            }
            ShapeError::TooLarge { rows, cols } => write!(
                f,
                "shape is {}x{}, larger than {}x{}",
                rows,
                cols,
                crate::types::MAX_SHAPE_DIM,
                crate::types::MAX_SHAPE_DIM
            ),
            ShapeError::NotBinary { value } => {
                write!(f, "shape cell value {} is not 0 or 1", value)
            }
            ShapeError::NoCells => write!(f, "shape has no occupied cells"),
            ShapeError::EmptyCatalog => write!(f, "shape catalog is empty"),
        }
    }
}

impl std::error::Error for ShapeError {}

/// Why a board could not be constructed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Width or height is zero
    ZeroDimension { width: u16, height: u16 },
    /// Width or height exceeds `MAX_BOARD_DIM`
    TooLarge { width: u16, height: u16 },
    /// Catalog shape `index` does not fit inside the grid at all
    ShapeDoesNotFit {
        index: usize,
        rows: usize,
        cols: usize,
    },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::ZeroDimension { width, height } => {
                write!(f, "board dimensions {}x{} must be non-zero", width, height)
            }
            BoardError::TooLarge { width, height } => write!(
                f,
                "board dimensions {}x{} exceed the {} cell limit",
                width,
                height,
                crate::types::MAX_BOARD_DIM
            ),
            BoardError::ShapeDoesNotFit { index, rows, cols } => write!(
                f,
                "catalog shape {} ({}x{}) does not fit inside the board",
                index, rows, cols
            ),
        }
    }
}

impl std::error::Error for BoardError {}
