//! RNG module - seeded tile generation
//!
//! Tiles are drawn uniformly from the active difficulty's value domain.
//! Changing the difficulty only affects later draws; tiles already sitting in
//! the queue keep their values.
//!
//! Uses a simple LCG so a seed fully determines the draw stream, which keeps
//! replays and tests deterministic.

use std::collections::VecDeque;

use crate::types::{Difficulty, TileValue};

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone, PartialEq, Eq)]
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
        // a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Uses the high bits, which have a much longer period than the low bits
    /// of a power-of-two LCG.
    pub fn next_range(&mut self, max: u32) -> u32 {
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    pub fn state(&self) -> u32 {
        self.state
    }
}

/// Difficulty-driven tile generator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileSource {
    rng: SimpleRng,
    difficulty: Difficulty,
}

impl TileSource {
    pub fn new(seed: u32, difficulty: Difficulty) -> Self {
        Self {
            rng: SimpleRng::new(seed),
            difficulty,
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Switch the domain used by future draws
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }

    /// Draw the next tile value
    pub fn draw(&mut self) -> TileValue {
        let values = self.difficulty.values();
        let idx = self.rng.next_range(values.len() as u32) as usize;
        values[idx]
    }

    /// Append draws until `queue` holds at least `min_len` tiles
    ///
    /// Returns the number of tiles appended.
    pub fn ensure_lookahead(&mut self, queue: &mut VecDeque<TileValue>, min_len: usize) -> usize {
        let mut added = 0;
        while queue.len() < min_len {
            queue.push_back(self.draw());
            added += 1;
        }
        added
    }

    /// Current RNG state; `TileSource::new(state, ..)` continues the stream
    pub fn rng_state(&self) -> u32 {
        self.rng.state()
    }
}

impl Default for TileSource {
    fn default() -> Self {
        Self::new(1, Difficulty::default())
    }
}
