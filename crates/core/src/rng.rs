//! RNG module - shape selection for new pieces
//!
//! Every spawn picks one of the seven shapes uniformly at random. The stage
//! draws from a [`ShapeSource`], so a game can run on the seeded
//! [`UniformShapes`] or on a fixed script ([`ScriptedShapes`]) in tests.
//!
//! Also provides a simple LCG so games are reproducible from a seed.

use crate::types::Shape;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // (a * state + c) mod 2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Uses the high half of the state; the low bits of a power-of-two LCG
    /// have short periods.
    pub fn next_range(&mut self, max: u32) -> u32 {
        (self.next_u32() >> 16) % max
    }
}

/// Supplies the shape of each newly spawned piece.
pub trait ShapeSource {
    fn next_shape(&mut self) -> Shape;
}

/// Uniform choice over [`Shape::ALL`], driven by [`SimpleRng`].
#[derive(Debug, Clone)]
pub struct UniformShapes {
    rng: SimpleRng,
}

impl UniformShapes {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }
}

impl Default for UniformShapes {
    fn default() -> Self {
        Self::new(1)
    }
}

impl ShapeSource for UniformShapes {
    fn next_shape(&mut self) -> Shape {
        let idx = self.rng.next_range(Shape::ALL.len() as u32) as usize;
        Shape::ALL[idx]
    }
}

/// Replays a fixed list of shapes, wrapping around at the end.
#[derive(Debug, Clone)]
pub struct ScriptedShapes {
    script: Vec<Shape>,
    next: usize,
}

impl ScriptedShapes {
    /// Panics if `script` is empty.
    pub fn new(script: impl Into<Vec<Shape>>) -> Self {
        let script = script.into();
        assert!(!script.is_empty(), "shape script must not be empty");
        Self { script, next: 0 }
    }

    /// Always the same shape.
    pub fn repeat(shape: Shape) -> Self {
        Self::new(vec![shape])
    }
}

impl ShapeSource for ScriptedShapes {
    fn next_shape(&mut self) -> Shape {
        let shape = self.script[self.next];
        self.next = (self.next + 1) % self.script.len();
        shape
    }
}
