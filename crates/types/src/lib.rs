//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the game.
//! All types are plain values with no I/O, so they can be used by the
//! engine, the renderer and the input layer alike.
//!
//! # Stage Dimensions
//!
//! - **Width**: 10 columns by default (indexed 0-9, left to right)
//! - **Height**: 20 rows by default (indexed 0-19, `y` grows downward)
//! - **Spawn coordinate**: `(width / 2, 0)`, which is `(5, 0)` on the default stage
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `GRAVITY_INTERVAL_MS` | 500 | One forced DOWN per interval |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{Coordinate, Intent, Shape};
//!
//! // A quarter turn maps (x, y) to (y, -x).
//! let p = Coordinate::new(2, 1);
//! assert_eq!(p.rotate(), Coordinate::new(1, -2));
//!
//! // Four quarter turns bring a coordinate back.
//! assert_eq!(p.rotate().rotate().rotate().rotate(), p);
//!
//! // Intents move the piece anchor; rotation keeps it in place.
//! assert_eq!(Intent::Down.delta(), (0, 1));
//! assert_eq!(Intent::Rotate.delta(), (0, 0));
//! assert_eq!(Shape::ALL.len(), 7);
//! ```

use std::ops::Add;

/// Default stage width in cells.
pub const DEFAULT_STAGE_WIDTH: i32 = 10;

/// Default stage height in cells.
pub const DEFAULT_STAGE_HEIGHT: i32 = 20;

/// Smallest stage edge that still fits every shape at spawn.
pub const MIN_STAGE_EDGE: i32 = 4;

/// Gravity interval in milliseconds.
pub const GRAVITY_INTERVAL_MS: u64 = 500;

/// Points for the first row cleared in one landing; the n-th row is worth n times this.
pub const ROW_CLEAR_POINTS: u32 = 10;

/// Integer grid position. `x` grows to the right, `y` grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

impl Coordinate {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Quarter turn: `(x, y) -> (y, -x)`.
    ///
    /// Every piece rotation is built from this transform. It has period 4.
    pub const fn rotate(self) -> Self {
        Self {
            x: self.y,
            y: -self.x,
        }
    }

    /// Apply [`Coordinate::rotate`] `times % 4` times.
    pub fn rotate_n(self, times: u32) -> Self {
        (0..times % 4).fold(self, |p, _| p.rotate())
    }

    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl Add for Coordinate {
    type Output = Coordinate;

    fn add(self, rhs: Coordinate) -> Coordinate {
        self.offset(rhs.x, rhs.y)
    }
}

impl From<(i32, i32)> for Coordinate {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// The seven piece shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    I,
    O,
    S,
    Z,
    J,
    L,
    T,
}

impl Shape {
    /// All shapes, in table order.
    pub const ALL: [Shape; 7] = [
        Shape::I,
        Shape::O,
        Shape::S,
        Shape::Z,
        Shape::J,
        Shape::L,
        Shape::T,
    ];

    /// Lowercase letter used in event log records.
    pub fn as_str(&self) -> &'static str {
        match self {
            Shape::I => "i",
            Shape::O => "o",
            Shape::S => "s",
            Shape::Z => "z",
            Shape::J => "j",
            Shape::L => "l",
            Shape::T => "t",
        }
    }
}

/// A discrete command consumed by one engine update.
///
/// Player keys and the gravity timer both produce intents; the timer only
/// ever produces [`Intent::Down`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    Down,
    Left,
    Right,
    Rotate,
}

impl Intent {
    pub const ALL: [Intent; 4] = [Intent::Down, Intent::Left, Intent::Right, Intent::Rotate];

    /// Anchor translation for this intent. Rotation keeps the anchor.
    pub const fn delta(&self) -> (i32, i32) {
        match self {
            Intent::Down => (0, 1),
            Intent::Left => (-1, 0),
            Intent::Right => (1, 0),
            Intent::Rotate => (0, 0),
        }
    }
}

/// What the input layer hands to the game loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Play(Intent),
    /// The terminal changed size; draw the current state again.
    Redraw,
    Quit,
}
