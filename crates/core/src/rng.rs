//! RNG module - uniform random shape generation
//!
//! Shapes are drawn independently and uniformly from the 7-entry catalog.
//! A simple LCG keeps every session reproducible from its seed.

use std::collections::VecDeque;

use crate::shapes::random_shape;
use crate::types::ShapeKind;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Uses the high bits; the low bits of a power-of-two LCG cycle quickly.
    pub fn next_range(&mut self, max: u32) -> u32 {
        (((self.next_u32() >> 16) as u64 * max as u64) >> 16) as u32
    }
}

/// Source of the shapes spawned into a session.
///
/// Holds one shape of lookahead so the next piece can be previewed. A scripted
/// prefix (used by tests and benches) is drained before the RNG is consulted.
#[derive(Debug, Clone)]
pub struct ShapeQueue {
    seed: u32,
    rng: SimpleRng,
    scripted: VecDeque<ShapeKind>,
    next: ShapeKind,
}

impl ShapeQueue {
    /// Create a new shape queue with the given seed
    pub fn new(seed: u32) -> Self {
        Self::scripted(seed, &[])
    }

    /// Create a queue that yields `kinds` first, then falls back to the seeded RNG.
    pub fn scripted(seed: u32, kinds: &[ShapeKind]) -> Self {
        let mut queue = Self {
            seed,
            rng: SimpleRng::new(seed),
            scripted: kinds.iter().copied().collect(),
            next: ShapeKind::I,
        };
        queue.next = queue.generate();
        queue
    }

    fn generate(&mut self) -> ShapeKind {
        match self.scripted.pop_front() {
            Some(kind) => kind,
            None => {
                let (_, _, id) = random_shape(&mut self.rng);
                ShapeKind::from_id(id).unwrap_or(ShapeKind::I)
            }
        }
    }

    /// Peek at the next shape without removing it
    pub fn peek(&self) -> ShapeKind {
        self.next
    }

    /// Take the next shape and generate a new lookahead
    pub fn draw(&mut self) -> ShapeKind {
        let kind = self.next;
        self.next = self.generate();
        kind
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }
}
