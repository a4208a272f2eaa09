//! Field module - settled cells of the stage
//!
//! The field is the unordered set of cells left behind by landed pieces. It
//! answers the two questions the stage asks before every move (side walls,
//! floor/overlap), absorbs landed pieces and clears full rows.
//!
//! Coordinates: `x` in `0..width` (left to right), `y` in `0..height` (top to
//! bottom). Rotation can leave cells above the top edge (`y < 0`); they are
//! kept and fall into view as rows below them are cleared.

use crate::scoring::row_clear_points;
use crate::types::Coordinate;

/// Result of one [`Field::clear_filled_rows`] call.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RowClear {
    /// Row index cleared by each pass, in pass order.
    pub rows: Vec<i32>,
    /// Points earned: pass `n` (1-based) is worth `n * ROW_CLEAR_POINTS`.
    pub points: u32,
}

impl RowClear {
    pub fn rows_cleared(&self) -> u32 {
        self.rows.len() as u32
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Settled cells of a `width` x `height` stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    width: i32,
    height: i32,
    cells: Vec<Coordinate>,
}

impl Field {
    /// Create an empty field
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            cells: Vec::new(),
        }
    }

    /// Create a field holding `cells`, in the given order.
    pub fn from_cells(width: i32, height: i32, cells: impl IntoIterator<Item = Coordinate>) -> Self {
        let mut field = Self::new(width, height);
        field.fuse(cells);
        field
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn cells(&self) -> &[Coordinate] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, cell: Coordinate) -> bool {
        self.cells.contains(&cell)
    }

    /// True if any cell is left of column 0 or right of the last column.
    ///
    /// Only the side walls are checked here; the floor is a collision.
    pub fn is_out_of_bounds(&self, cells: &[Coordinate]) -> bool {
        cells.iter().any(|c| c.x < 0 || c.x >= self.width)
    }

    /// True if any cell is on or below the floor, or overlaps a settled cell.
    pub fn collides(&self, cells: &[Coordinate]) -> bool {
        cells
            .iter()
            .any(|&c| c.y >= self.height || self.contains(c))
    }

    /// Add cells to the settled set unconditionally.
    pub fn fuse(&mut self, cells: impl IntoIterator<Item = Coordinate>) {
        self.cells.extend(cells);
    }

    /// Clear full rows until none is left.
    ///
    /// Each pass clears only the first (topmost) full row, drops every cell
    /// above it by one row and then rescans, so the n-th pass scores
    /// `n * ROW_CLEAR_POINTS`. After any clear the cells are stored in
    /// row-major order. With no full row the field is left untouched.
    pub fn clear_filled_rows(&mut self) -> RowClear {
        let mut result = RowClear::default();

        while let Some(row) = self.first_full_row() {
            result.rows.push(row);
            result.points += row_clear_points(result.rows_cleared());

            self.cells.retain(|c| c.y != row);
            for cell in self.cells.iter_mut().filter(|c| c.y < row) {
                cell.y += 1;
            }
        }

        if !result.is_empty() {
            self.cells.sort_by_key(|c| (c.y, c.x));
            self.cells.dedup();
        }
        result
    }

    /// Topmost visible row with every column occupied.
    fn first_full_row(&self) -> Option<i32> {
        if self.width <= 0 || self.height <= 0 {
            return None;
        }
        let width = self.width as usize;
        let mut grid = vec![false; width * self.height as usize];
        for c in &self.cells {
            if (0..self.width).contains(&c.x) && (0..self.height).contains(&c.y) {
                grid[c.y as usize * width + c.x as usize] = true;
            }
        }
        grid.chunks_exact(width)
            .position(|row| row.iter().all(|&filled| filled))
            .map(|y| y as i32)
    }
}
