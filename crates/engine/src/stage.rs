//! Stage module - the game state machine
//!
//! Owns the falling piece, the settled field, the score and the finished flag.
//! [`Stage::update`] is the only mutating entry point; the game loop calls it
//! once per key intent and once per gravity tick.
//!
//! One update:
//!
//! 1. finished stage: nothing happens
//! 2. the move would cross a side wall: rejected, nothing happens
//! 3. the move would hit the floor or a settled cell: the piece lands where it
//!    is now, full rows are cleared and scored, then either the game is over
//!    (the spawn coordinate is occupied) or a new piece spawns
//! 4. otherwise the piece moves
//!
//! The spawn check runs after row clearing, so a clear that empties the spawn
//! coordinate keeps the game going.

use crate::core::{Field, Piece, PieceCells, ShapeSource, UniformShapes};
use crate::snapshot::StageSnapshot;
use crate::types::{Coordinate, Intent};

/// Spawn anchor for a stage `width` columns wide: top row, middle column.
pub fn spawn_point(width: i32) -> Coordinate {
    Coordinate::new(width / 2, 0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StageStatus {
    Running,
    Finished,
}

/// What a single [`Stage::update`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UpdateOutcome {
    /// The stage was already finished.
    Ignored,
    /// The move would leave the stage sideways.
    Rejected,
    Moved,
    /// The piece landed and a new one spawned.
    Landed { rows_cleared: u32, points: u32 },
    /// The piece landed and the spawn coordinate is now occupied.
    Finished { rows_cleared: u32, points: u32 },
}

impl UpdateOutcome {
    /// True when the update changed the stage.
    pub fn changed(&self) -> bool {
        !matches!(self, UpdateOutcome::Ignored | UpdateOutcome::Rejected)
    }
}

/// Complete stage state
#[derive(Debug, Clone)]
pub struct Stage<R = UniformShapes> {
    width: i32,
    height: i32,
    spawn: Coordinate,
    piece: Piece,
    field: Field,
    score: u32,
    status: StageStatus,
    shapes: R,
    /// Pieces spawned so far, including the first one.
    pieces_spawned: u32,
    rows_cleared: u32,
}

impl Stage<UniformShapes> {
    /// Create a stage whose shapes come from a seeded uniform source
    pub fn with_seed(width: i32, height: i32, seed: u32) -> Self {
        Self::with_shapes(width, height, UniformShapes::new(seed))
    }
}

impl<R: ShapeSource> Stage<R> {
    pub fn with_shapes(width: i32, height: i32, shapes: R) -> Self {
        Self::with_field(Field::new(width, height), shapes)
    }

    /// Start from an existing field. Stage size is taken from the field.
    pub fn with_field(field: Field, mut shapes: R) -> Self {
        let spawn = spawn_point(field.width());
        let piece = Piece::new(shapes.next_shape(), spawn);
        Self {
            width: field.width(),
            height: field.height(),
            spawn,
            piece,
            field,
            score: 0,
            status: StageStatus::Running,
            shapes,
            pieces_spawned: 1,
            rows_cleared: 0,
        }
    }

    /// Apply one intent.
    pub fn update(&mut self, intent: Intent) -> UpdateOutcome {
        if self.is_finished() {
            return UpdateOutcome::Ignored;
        }

        let current = self.piece.current_cells();
        let next = self.piece.next_cells(intent);

        if self.field.is_out_of_bounds(&next) {
            UpdateOutcome::Rejected
        } else if self.field.collides(&next) {
            self.land(current)
        } else {
            self.piece.apply(intent);
            UpdateOutcome::Moved
        }
    }

    /// Fuse the piece at its last valid position and settle the consequences.
    fn land(&mut self, cells: PieceCells) -> UpdateOutcome {
        self.field.fuse(cells);
        let cleared = self.field.clear_filled_rows();
        let rows_cleared = cleared.rows_cleared();
        self.score = self.score.saturating_add(cleared.points);
        self.rows_cleared = self.rows_cleared.saturating_add(rows_cleared);

        if self.field.contains(self.spawn) {
            self.status = StageStatus::Finished;
            return UpdateOutcome::Finished {
                rows_cleared,
                points: cleared.points,
            };
        }

        self.piece = Piece::new(self.shapes.next_shape(), self.spawn);
        self.pieces_spawned = self.pieces_spawned.saturating_add(1);
        UpdateOutcome::Landed {
            rows_cleared,
            points: cleared.points,
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn spawn_point(&self) -> Coordinate {
        self.spawn
    }

    pub fn piece(&self) -> &Piece {
        &self.piece
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn status(&self) -> StageStatus {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        self.status == StageStatus::Finished
    }

    pub fn pieces_spawned(&self) -> u32 {
        self.pieces_spawned
    }

    pub fn rows_cleared(&self) -> u32 {
        self.rows_cleared
    }

    pub fn snapshot(&self) -> StageSnapshot {
        let mut snap = StageSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }

    /// Fill an existing snapshot, reusing its allocation.
    pub fn snapshot_into(&self, snap: &mut StageSnapshot) {
        snap.width = self.width;
        snap.height = self.height;
        snap.active = (!self.is_finished()).then(|| self.piece.current_cells());
        snap.settled.clear();
        snap.settled.extend_from_slice(self.field.cells());
        snap.score = self.score;
        snap.finished = self.is_finished();
        snap.pieces_spawned = self.pieces_spawned;
        snap.rows_cleared = self.rows_cleared;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ScriptedShapes;
    use crate::types::Shape;

    fn stage(shape: Shape) -> Stage<ScriptedShapes> {
        Stage::with_shapes(10, 20, ScriptedShapes::repeat(shape))
    }

    #[test]
    fn spawn_point_is_top_middle() {
        assert_eq!(spawn_point(10), Coordinate::new(5, 0));
        assert_eq!(spawn_point(7), Coordinate::new(3, 0));
    }

    #[test]
    fn new_stage_is_running_with_piece_at_spawn() {
        let s = stage(Shape::T);
        assert_eq!(s.status(), StageStatus::Running);
        assert_eq!(s.piece().anchor(), Coordinate::new(5, 0));
        assert_eq!(s.piece().rotation_count(), 0);
        assert_eq!(s.piece().shape(), Shape::T);
        assert_eq!(s.score(), 0);
        assert!(s.field().is_empty());
        assert_eq!(s.pieces_spawned(), 1);
    }

    #[test]
    fn side_wall_rejects_without_change() {
        let mut s = stage(Shape::I);
        for _ in 0..5 {
            assert_eq!(s.update(Intent::Left), UpdateOutcome::Moved);
        }
        let before = s.piece().current_cells();
        assert_eq!(s.update(Intent::Left), UpdateOutcome::Rejected);
        assert_eq!(s.piece().current_cells(), before);
    }

    #[test]
    fn floor_lands_piece_at_last_valid_position() {
        let mut s = stage(Shape::I);
        // Vertical I spans rows 0..=3, so it can drop 16 rows.
        for _ in 0..16 {
            assert_eq!(s.update(Intent::Down), UpdateOutcome::Moved);
        }
        let resting = s.piece().current_cells();
        assert_eq!(
            s.update(Intent::Down),
            UpdateOutcome::Landed {
                rows_cleared: 0,
                points: 0
            }
        );
        assert_eq!(s.field().cells(), &resting[..]);
        assert_eq!(s.piece().anchor(), s.spawn_point());
        assert_eq!(s.pieces_spawned(), 2);
    }

    #[test]
    fn snapshot_drops_active_piece_once_finished() {
        let mut s = stage(Shape::O);
        assert_eq!(s.snapshot().occupied().count(), 4);
        while !s.is_finished() {
            s.update(Intent::Down);
        }
        let snap = s.snapshot();
        assert!(snap.active.is_none());
        assert_eq!(snap.occupied().collect::<Vec<_>>(), s.field().cells().to_vec());
    }

    #[test]
    fn outcome_changed_flag() {
        assert!(!UpdateOutcome::Ignored.changed());
        assert!(!UpdateOutcome::Rejected.changed());
        assert!(UpdateOutcome::Moved.changed());
        assert!(UpdateOutcome::Finished {
            rows_cleared: 0,
            points: 0
        }
        .changed());
    }
}
