//! Core game logic - pieces and the settled field
//!
//! Pure geometry and rules with no UI, timing or I/O:
//!
//! - [`pieces`]: shape tables and the falling [`Piece`]
//! - [`field`]: settled cells with bounds/collision checks, fusion and row clearing
//! - [`scoring`]: row-clear points
//! - [`rng`]: seeded shape selection for new pieces
//!
//! The stage state machine that drives these lives in `blockfall-engine`.
//!
//! # Example
//!
//! ```
//! use blockfall_core::{Field, Piece};
//! use blockfall_types::{Coordinate, Intent, Shape};
//!
//! let field = Field::new(10, 20);
//! let piece = Piece::new(Shape::I, Coordinate::new(5, 0));
//!
//! let next = piece.next_cells(Intent::Down);
//! assert!(!field.is_out_of_bounds(&next));
//! assert!(!field.collides(&next));
//! ```

pub mod field;
pub mod pieces;
pub mod rng;
pub mod scoring;

pub use blockfall_types as types;

pub use field::{Field, RowClear};
pub use pieces::{cells_at, origin_cells, Piece, PieceCells};
pub use rng::{ScriptedShapes, ShapeSource, SimpleRng, UniformShapes};
pub use scoring::{landing_points, row_clear_points};
