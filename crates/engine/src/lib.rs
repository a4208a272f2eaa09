//! Stage engine - turns intents into game progress
//!
//! [`Stage`] ties the core pieces together: it validates each intent against
//! the side walls and the settled field, moves or lands the piece, clears rows,
//! keeps score and detects the end of the game.
//!
//! # Example
//!
//! ```
//! use blockfall_core::ScriptedShapes;
//! use blockfall_engine::{Stage, UpdateOutcome};
//! use blockfall_types::{Intent, Shape};
//!
//! let mut stage = Stage::with_shapes(10, 20, ScriptedShapes::repeat(Shape::T));
//! assert_eq!(stage.update(Intent::Left), UpdateOutcome::Moved);
//! assert_eq!(stage.piece().anchor().x, 4);
//! ```

pub mod snapshot;
pub mod stage;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use snapshot::StageSnapshot;
pub use stage::{spawn_point, Stage, StageStatus, UpdateOutcome};
