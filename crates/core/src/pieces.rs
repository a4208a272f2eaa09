//! Pieces module - shape tables and the active piece
//!
//! A piece is stored as `(shape, anchor, rotation count)` and its four cells are
//! derived on demand: each origin offset of the shape is turned
//! `rotation % 4` times with [`Coordinate::rotate`] and then translated by the
//! anchor. Nothing absolute is cached, so a piece can never drift.
//!
//! Pieces do no bounds or collision checking; the stage validates a move with
//! [`Piece::next_cells`] before calling [`Piece::apply`].

use crate::types::{Coordinate, Intent, Shape};

/// The four cells of a piece.
pub type PieceCells = [Coordinate; 4];

const fn c(x: i32, y: i32) -> Coordinate {
    Coordinate::new(x, y)
}

const I_CELLS: PieceCells = [c(0, 0), c(0, 1), c(0, 2), c(0, 3)];
const O_CELLS: PieceCells = [c(1, 0), c(0, 0), c(1, 1), c(0, 1)];
const S_CELLS: PieceCells = [c(-1, 1), c(0, 1), c(0, 0), c(1, 0)];
const Z_CELLS: PieceCells = [c(-1, 0), c(0, 1), c(0, 0), c(1, 1)];
const J_CELLS: PieceCells = [c(-1, 0), c(-1, 1), c(0, 1), c(1, 1)];
const L_CELLS: PieceCells = [c(-1, 1), c(0, 1), c(1, 1), c(1, 0)];
const T_CELLS: PieceCells = [c(-1, 1), c(0, 1), c(1, 1), c(0, 0)];

/// Anchor-relative cells of a shape at rotation count 0.
pub fn origin_cells(shape: Shape) -> PieceCells {
    match shape {
        Shape::I => I_CELLS,
        Shape::O => O_CELLS,
        Shape::S => S_CELLS,
        Shape::Z => Z_CELLS,
        Shape::J => J_CELLS,
        Shape::L => L_CELLS,
        Shape::T => T_CELLS,
    }
}

/// Cells of `shape` at `anchor` after `rotation` quarter turns.
pub fn cells_at(shape: Shape, anchor: Coordinate, rotation: u32) -> PieceCells {
    origin_cells(shape).map(|origin| anchor + origin.rotate_n(rotation))
}

/// The falling piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    shape: Shape,
    anchor: Coordinate,
    rotation: u32,
}

impl Piece {
    /// Create a piece at `anchor` with rotation count 0.
    pub fn new(shape: Shape, anchor: Coordinate) -> Self {
        Self {
            shape,
            anchor,
            rotation: 0,
        }
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    pub fn anchor(&self) -> Coordinate {
        self.anchor
    }

    pub fn rotation_count(&self) -> u32 {
        self.rotation
    }

    /// Cells occupied right now.
    pub fn current_cells(&self) -> PieceCells {
        cells_at(self.shape, self.anchor, self.rotation)
    }

    /// Cells the piece would occupy after `intent`, without moving it.
    pub fn next_cells(&self, intent: Intent) -> PieceCells {
        let (anchor, rotation) = self.next_state(intent);
        cells_at(self.shape, anchor, rotation)
    }

    /// Move the piece. The caller has already validated the move.
    pub fn apply(&mut self, intent: Intent) {
        let (anchor, rotation) = self.next_state(intent);
        self.anchor = anchor;
        self.rotation = rotation;
    }

    fn next_state(&self, intent: Intent) -> (Coordinate, u32) {
        let (dx, dy) = intent.delta();
        let rotation = match intent {
            // The count only matters modulo 4 and 2^32 is a multiple of 4.
            Intent::Rotate => self.rotation.wrapping_add(1),
            Intent::Down | Intent::Left | Intent::Right => self.rotation,
        };
        (self.anchor.offset(dx, dy), rotation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_anchor_follows_intent() {
        let piece = Piece::new(Shape::T, Coordinate::new(3, 3));
        assert_eq!(piece.next_state(Intent::Left).0, Coordinate::new(2, 3));
        assert_eq!(piece.next_state(Intent::Down).0, Coordinate::new(3, 4));
        assert_eq!(piece.next_state(Intent::Right).0, Coordinate::new(4, 3));
        assert_eq!(piece.next_state(Intent::Rotate), (Coordinate::new(3, 3), 1));
    }

    #[test]
    fn next_cells_does_not_move_piece() {
        let piece = Piece::new(Shape::L, Coordinate::new(5, 0));
        let before = piece;
        let _ = piece.next_cells(Intent::Rotate);
        let _ = piece.next_cells(Intent::Down);
        assert_eq!(piece, before);
    }

    #[test]
    fn apply_matches_next_cells() {
        for intent in Intent::ALL {
            let mut piece = Piece::new(Shape::S, Coordinate::new(4, 4));
            let expected = piece.next_cells(intent);
            piece.apply(intent);
            assert_eq!(piece.current_cells(), expected);
        }
    }

    #[test]
    fn rotation_count_wraps_without_changing_cells() {
        let mut piece = Piece {
            shape: Shape::J,
            anchor: Coordinate::new(5, 5),
            rotation: u32::MAX,
        };
        let expected = cells_at(Shape::J, Coordinate::new(5, 5), 0);
        piece.apply(Intent::Rotate);
        assert_eq!(piece.rotation_count(), 0);
        assert_eq!(piece.current_cells(), expected);
    }
}
