//! Active piece and the collision check every placement goes through

use crate::grid::Grid;
use crate::shape::Shape;

/// Top-left offset of a shape in grid coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Anchor {
    pub row: i16,
    pub col: i16,
}

impl Anchor {
    pub const fn new(row: i16, col: i16) -> Self {
        Self { row, col }
    }

    /// The anchor moved by (d_row, d_col)
    pub const fn offset(self, d_row: i16, d_col: i16) -> Self {
        Self {
            row: self.row + d_row,
            col: self.col + d_col,
        }
    }
}

/// Whether `shape` can sit at `anchor`.
///
/// Every occupied shape cell must land inside the grid on an empty cell.
/// Stops at the first violation. This is the only placement authority:
/// moves, rotations and spawns all go through it.
pub fn is_valid(grid: &Grid, shape: &Shape, anchor: Anchor) -> bool {
    shape
        .cells()
        .iter()
        .all(|&(r, c)| grid.is_free(anchor.row + r as i16, anchor.col + c as i16))
}

/// The currently falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub shape: Shape,
    pub anchor: Anchor,
}

impl ActivePiece {
    /// Place `shape` at the spawn position for a grid `grid_width` wide:
    /// row 0, horizontally centred (floor-biased).
    pub fn spawn(shape: Shape, grid_width: u16) -> Self {
        let col = (grid_width / 2) as i16 - (shape.cols() / 2) as i16;
        Self {
            shape,
            anchor: Anchor::new(0, col),
        }
    }

    /// Absolute grid coordinates of every occupied cell
    pub fn cells(&self) -> impl Iterator<Item = (i16, i16)> + '_ {
        self.shape
            .cells()
            .into_iter()
            .map(move |(r, c)| (self.anchor.row + r as i16, self.anchor.col + c as i16))
    }

    /// Whether the piece covers grid cell (row, col)
    pub fn covers(&self, row: i16, col: i16) -> bool {
        let r = row - self.anchor.row;
        let c = col - self.anchor.col;
        r >= 0 && c >= 0 && self.shape.get(r as usize, c as usize)
    }

    /// Check the piece against the grid
    pub fn is_valid(&self, grid: &Grid) -> bool {
        is_valid(grid, &self.shape, self.anchor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::ShapeCatalog;

    fn i_shape() -> Shape {
        Shape::from_rows(&[&[1, 1, 1, 1]]).unwrap()
    }

    #[test]
    fn test_spawn_centres_shape() {
        let piece = ActivePiece::spawn(i_shape(), 10);
        assert_eq!(piece.anchor, Anchor::new(0, 3));

        let t = Shape::from_rows(&[&[1, 1, 1], &[0, 1, 0]]).unwrap();
        assert_eq!(ActivePiece::spawn(t, 10).anchor, Anchor::new(0, 4));

        // Odd widths are floor-biased.
        assert_eq!(ActivePiece::spawn(i_shape(), 9).anchor, Anchor::new(0, 2));
    }

    #[test]
    fn test_is_valid_bounds() {
        let grid = Grid::new(10, 20);
        let shape = i_shape();
        assert!(is_valid(&grid, &shape, Anchor::new(0, 0)));
        assert!(is_valid(&grid, &shape, Anchor::new(19, 6)));
        assert!(!is_valid(&grid, &shape, Anchor::new(0, -1)));
        assert!(!is_valid(&grid, &shape, Anchor::new(0, 7)));
        assert!(!is_valid(&grid, &shape, Anchor::new(20, 0)));
        assert!(!is_valid(&grid, &shape, Anchor::new(-1, 0)));
    }

    #[test]
    fn test_is_valid_ignores_empty_shape_cells() {
        // The T's bottom corners are empty and may hang over the edge.
        let t = Shape::from_rows(&[&[0, 1, 0], &[1, 1, 1]]).unwrap();
        let mut grid = Grid::new(3, 2);
        assert!(is_valid(&grid, &t, Anchor::new(0, 0)));
        grid.set(0, 0, true);
        assert!(is_valid(&grid, &t, Anchor::new(0, 0)));
        grid.set(0, 1, true);
        assert!(!is_valid(&grid, &t, Anchor::new(0, 0)));
    }

    #[test]
    fn test_is_valid_collision() {
        let mut grid = Grid::new(10, 20);
        grid.set(5, 4, true);
        let shape = i_shape();
        assert!(!is_valid(&grid, &shape, Anchor::new(5, 3)));
        assert!(is_valid(&grid, &shape, Anchor::new(4, 3)));
        assert!(is_valid(&grid, &shape, Anchor::new(5, 5)));
    }

    #[test]
    fn test_cells_and_covers_agree() {
        for shape in ShapeCatalog::standard().iter() {
            let piece = ActivePiece {
                shape: *shape,
                anchor: Anchor::new(3, 2),
            };
            let cells: Vec<_> = piece.cells().collect();
            assert_eq!(cells.len(), 4);
            for row in 0..8 {
                for col in 0..8 {
                    assert_eq!(piece.covers(row, col), cells.contains(&(row, col)));
                }
            }
        }
    }
}
