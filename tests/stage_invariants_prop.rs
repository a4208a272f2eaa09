//! Property tests for geometry, field checks and the stage update cycle.
//!
//! Invariants covered:
//! - rotation has period 4
//! - translation intents move every cell by exactly the intent delta
//! - the side-wall check depends only on `x`; the collision check matches its definition
//! - row clearing leaves no full visible row, is idempotent and scores triangularly
//! - over random intent sequences: settled cells stay inside the side walls,
//!   score never decreases and a finished stage stays frozen

use std::collections::HashSet;

use proptest::prelude::*;

use blockfall::core::{landing_points, Field, Piece};
use blockfall::engine::{Stage, UpdateOutcome};
use blockfall::types::{Coordinate, Intent, Shape};

fn coordinate() -> impl Strategy<Value = Coordinate> {
    (-50i32..50, -50i32..50).prop_map(Coordinate::from)
}

fn shape() -> impl Strategy<Value = Shape> {
    prop::sample::select(Shape::ALL.to_vec())
}

fn intent() -> impl Strategy<Value = Intent> {
    prop::sample::select(Intent::ALL.to_vec())
}

fn has_full_row(field: &Field) -> bool {
    let cells: HashSet<Coordinate> = field.cells().iter().copied().collect();
    (0..field.height()).any(|y| (0..field.width()).all(|x| cells.contains(&Coordinate::new(x, y))))
}

proptest! {
    #[test]
    fn rotation_has_period_four(p in coordinate()) {
        prop_assert_eq!(p.rotate().rotate().rotate().rotate(), p);
        prop_assert_eq!(p.rotate_n(4), p);
    }

    #[test]
    fn translation_moves_every_cell_by_delta(
        shape in shape(),
        x in -5i32..15,
        y in -5i32..25,
        turns in 0u32..8,
        intent in prop::sample::select(vec![Intent::Down, Intent::Left, Intent::Right]),
    ) {
        let mut piece = Piece::new(shape, Coordinate::new(x, y));
        for _ in 0..turns {
            piece.apply(Intent::Rotate);
        }
        let (dx, dy) = intent.delta();
        let current = piece.current_cells();
        let next = piece.next_cells(intent);
        for (a, b) in current.iter().zip(next.iter()) {
            prop_assert_eq!(*b, a.offset(dx, dy));
        }
        prop_assert_eq!(piece.rotation_count(), turns);
    }

    #[test]
    fn side_wall_check_ignores_y(
        cells in prop::collection::vec(coordinate(), 1..6),
        width in 4i32..20,
    ) {
        let field = Field::new(width, 20);
        let expected = cells.iter().any(|c| c.x < 0 || c.x >= width);
        prop_assert_eq!(field.is_out_of_bounds(&cells), expected);
    }

    #[test]
    fn collision_matches_definition(
        settled in prop::collection::vec(coordinate(), 0..20),
        probe in prop::collection::vec(coordinate(), 1..6),
    ) {
        let field = Field::from_cells(10, 20, settled.iter().copied());
        let expected = probe.iter().any(|c| c.y >= 20 || settled.contains(c));
        prop_assert_eq!(field.collides(&probe), expected);
    }

    #[test]
    fn clearing_leaves_no_full_row(
        cells in prop::collection::hash_set((0i32..4, -2i32..6).prop_map(Coordinate::from), 0..30),
    ) {
        let mut field = Field::from_cells(4, 6, cells.iter().copied());
        let cleared = field.clear_filled_rows();
        prop_assert!(!has_full_row(&field));
        prop_assert_eq!(cleared.points, landing_points(cleared.rows_cleared()));
        prop_assert_eq!(field.len() + 4 * cleared.rows.len(), cells.len());

        let settled = field.clone();
        prop_assert!(field.clear_filled_rows().is_empty());
        prop_assert_eq!(field, settled);
    }

    #[test]
    fn random_play_respects_stage_invariants(
        seed in any::<u32>(),
        intents in prop::collection::vec(intent(), 1..400),
    ) {
        let mut stage = Stage::with_seed(10, 20, seed);
        let mut last_score = 0;

        for intent in intents {
            let was_finished = stage.is_finished();
            let before = stage.field().clone();
            let outcome = stage.update(intent);

            if was_finished {
                prop_assert_eq!(outcome, UpdateOutcome::Ignored);
                prop_assert_eq!(stage.field(), &before);
                continue;
            }

            prop_assert!(stage.score() >= last_score);
            last_score = stage.score();

            for cell in stage.field().cells() {
                prop_assert!((0..stage.width()).contains(&cell.x));
            }
            prop_assert!(!has_full_row(stage.field()));

            if let UpdateOutcome::Finished { .. } = outcome {
                prop_assert!(stage.field().contains(stage.spawn_point()));
            }
        }
    }
}
